use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMDS : AsyncOnce<(AddBookCommand, GetBookCommand)> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"));
                (AddBookCommand::new(svc.clone()), GetBookCommand::new(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let (add_cmd, get_cmd) = SUT_CMDS.get().await;

        let req = AddBookCommandRequest::new(211, "get cmd book", "P", "N");
        let res = add_cmd.execute(req).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.id)).await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let (_, get_cmd) = SUT_CMDS.get().await;

        let res = get_cmd.execute(GetBookCommandRequest::new(20)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
