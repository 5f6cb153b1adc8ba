use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.create(&BookEntity::from(book)).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.delete(id).await.map(|b| BookDto::from(&b))
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.update(&BookEntity::from(book)).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_title(&self, fragment: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_title_contains(fragment).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            publisher: other.publisher.to_string(),
            note: other.note.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            publisher: other.publisher.to_string(),
            note: other.note.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"))
            });
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new(101, "service add book", "P", "N");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new(1, "service duplicate id", "P", "N");
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let mut book = BookDto::new(102, "service update book", "P", "N");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "service new title".to_string();
        book.note = "changed".to_string();
        let updated = catalog_svc.update_book(&book).await.expect("should update book");
        assert_eq!(book, updated);

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book.title, loaded.title);
        assert_eq!("changed", loaded.note.as_str());
    }

    #[tokio::test]
    async fn test_should_find_by_title() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new(103, "Service Unique Fragment", "P", "N");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.find_books_by_title("unique fragment").await.expect("should return book");
        assert_eq!(vec![book], res);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = SUT_SVC.get().await.clone();

        let book = BookDto::new(104, "service remove book", "P", "N");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let removed = catalog_svc.remove_book(book.id).await.expect("should remove book");
        assert_eq!(book, removed);

        let loaded = catalog_svc.find_book_by_id(book.id).await;
        assert!(loaded.is_err());
    }

    #[tokio::test]
    async fn test_should_list_empty_catalog() {
        let catalog_svc = factory::create_catalog_service(
            &Configuration::new("test").with_store(RepositoryStore::Memory));
        let res = catalog_svc.list_books().await.expect("should list books");
        assert!(res.is_empty());
    }
}
