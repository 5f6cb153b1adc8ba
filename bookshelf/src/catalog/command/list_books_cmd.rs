use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// without a filter the whole catalog is returned
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {
    #[serde(rename = "filterTitle")]
    pub filter_title: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(filter_title: Option<&str>) -> Self {
        Self {
            filter_title: filter_title.map(str::to_string),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = match req.filter_title {
            Some(ref fragment) => self.catalog_service.find_books_by_title(fragment.as_str()).await,
            None => self.catalog_service.list_books().await,
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    fn seeded_service() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"))
    }

    #[tokio::test]
    async fn test_should_list_all_books() {
        let cmd = ListBooksCommand::new(seeded_service());
        let res = cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(5, res.books.len());
    }

    #[tokio::test]
    async fn test_should_list_books_by_title() {
        let cmd = ListBooksCommand::new(seeded_service());
        let res = cmd.execute(ListBooksCommandRequest::new(Some("JAVA"))).await.expect("should list books");
        let ids: Vec<i64> = res.books.iter().map(|b| b.id).collect();
        assert_eq!(vec![1, 4], ids);
    }

    #[tokio::test]
    async fn test_should_list_nothing_for_unknown_title() {
        let cmd = ListBooksCommand::new(seeded_service());
        let res = cmd.execute(ListBooksCommandRequest::new(Some("cobol"))).await.expect("should list books");
        assert!(res.books.is_empty());
    }
}
