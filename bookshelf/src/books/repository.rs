pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // books whose title contains fragment ignoring case, in insertion order
    async fn find_by_title_contains(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>>;
}
