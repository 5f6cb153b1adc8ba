use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog as an insertion-ordered vector. Lookups
// always resolve by id value, never by position. Writers hold the write guard for
// the whole scan-then-mutate sequence.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<()> {
        let mut books = self.books.write();
        if books.iter().any(|b| b.title == entity.title) {
            debug!(book_id = entity.id, title = %entity.title, "rejected duplicate title");
            return Err(LibraryError::duplicate_key(
                format!("book with title {:?} already exists", entity.title).as_str()));
        }
        if books.iter().any(|b| b.same_identity(entity)) {
            debug!(book_id = entity.id, "rejected duplicate id");
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", entity.id).as_str()));
        }
        books.push(entity.clone());
        debug!(book_id = entity.id, size = books.len(), "added book");
        Ok(())
    }

    // title uniqueness is only enforced by create
    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write();
        match books.iter_mut().find(|b| b.same_identity(entity)) {
            Some(existing) => {
                existing.overwrite_from(entity);
                debug!(book_id = entity.id, "updated book");
                Ok(existing.clone())
            }
            None => {
                debug!(book_id = entity.id, "no book to update");
                Err(LibraryError::not_found(format!("book not found for {}", entity.id).as_str()))
            }
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.books.read()
            .iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<BookEntity> {
        let mut books = self.books.write();
        match books.iter().position(|b| b.id() == id) {
            Some(position) => {
                let removed = books.remove(position);
                debug!(book_id = id, size = books.len(), "deleted book");
                Ok(removed)
            }
            None => {
                debug!(book_id = id, "no book to delete");
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title_contains(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read()
            .iter()
            .filter(|b| b.title_contains(fragment))
            .cloned()
            .collect())
    }
}
