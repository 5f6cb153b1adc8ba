use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    if store.seeded() {
        Box::new(MemoryBookRepository::new(seed_books()))
    } else {
        Box::new(MemoryBookRepository::default())
    }
}

// books loaded at startup, ids 1 to 5
pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "The Adventures of Java", "Coding House", "A classic in programming"),
        BookEntity::new(2, "Programming in the Rain", "Tech World", "An inspiring journey into coding"),
        BookEntity::new(3, "Code Chronicles", "Geeky Publications", "Unveiling the secrets of programming"),
        BookEntity::new(4, "The Java Saga", "Code Masters", "A thrilling tale of software development"),
        BookEntity::new(5, "Mastering SQL", "Database Wizards", "Unlocking the power of databases"),
    ]
}
