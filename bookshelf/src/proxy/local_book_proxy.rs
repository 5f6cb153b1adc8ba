use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;
use crate::proxy::domain::{BookProxy, ProxyError, ProxyResult};

// LocalBookProxy serves the proxy contract from an in-process catalog, with the
// same outcomes the HTTP proxy derives from status codes.
pub struct LocalBookProxy {
    catalog_service: Arc<dyn CatalogService>,
}

impl LocalBookProxy {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

fn failure_for_id(err: LibraryError, id: i64) -> ProxyError {
    match err {
        LibraryError::NotFound { .. } => ProxyError::NotFound { id },
        LibraryError::DuplicateKey { .. } => ProxyError::Status { code: 400 },
        LibraryError::Runtime { .. } => ProxyError::Status { code: 500 },
    }
}

#[async_trait]
impl BookProxy for LocalBookProxy {
    async fn get_book(&self, id: i64) -> ProxyResult<BookDto> {
        self.catalog_service.find_book_by_id(id).await.map_err(|err| failure_for_id(err, id))
    }

    async fn add_book(&self, book: &BookDto) -> ProxyResult<BookDto> {
        self.catalog_service.add_book(book).await.map_err(|err| match err {
            LibraryError::DuplicateKey { .. } => ProxyError::Rejected { book: book.clone() },
            other => failure_for_id(other, book.id),
        })
    }

    async fn list_books(&self, filter_title: Option<&str>) -> ProxyResult<Vec<BookDto>> {
        let res = match filter_title {
            Some(fragment) => self.catalog_service.find_books_by_title(fragment).await,
            None => self.catalog_service.list_books().await,
        };
        res.map_err(|_| ProxyError::Status { code: 500 })
    }

    async fn update_book(&self, book: &BookDto) -> ProxyResult<()> {
        self.catalog_service.update_book(book).await.map(|_| ()).map_err(|err| failure_for_id(err, book.id))
    }

    async fn remove_book(&self, id: i64) -> ProxyResult<BookDto> {
        self.catalog_service.remove_book(id).await.map_err(|err| failure_for_id(err, id))
    }
}
