use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the id is supplied by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookCommandRequest {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub note: String,
}

impl AddBookCommandRequest {
    pub fn new(id: i64, title: &str, publisher: &str, note: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            publisher: publisher.to_string(),
            note: note.to_string(),
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.id, self.title.as_str(), self.publisher.as_str(), self.note.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
