use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record held by the catalog store. Its id is assigned by the
// caller on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub note: String,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, publisher: &str, note: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            publisher: publisher.to_string(),
            note: note.to_string(),
        }
    }

    // copies the mutable fields of other, keeping the id
    pub fn overwrite_from(&mut self, other: &BookEntity) {
        self.title = other.title.to_string();
        self.publisher = other.publisher.to_string();
        self.note = other.note.to_string();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new(1, "title", "publisher", "note");
        assert_eq!(1, book.id());
        assert_eq!("title", book.title.as_str());
        assert_eq!("publisher", book.publisher.as_str());
        assert_eq!("note", book.note.as_str());
    }

    #[tokio::test]
    async fn test_should_overwrite_without_changing_id() {
        let mut book = BookEntity::new(2, "old", "old publisher", "old note");
        book.overwrite_from(&BookEntity::new(99, "new", "new publisher", "new note"));
        assert_eq!(BookEntity::new(2, "new", "new publisher", "new note"), book);
    }

    #[tokio::test]
    async fn test_should_match_title_ignoring_case() {
        let book = BookEntity::new(1, "The Adventures of Java", "Coding House", "A classic");
        assert!(book.title_contains("JAVA"));
        assert!(book.title_contains("the"));
        assert!(book.title_contains(""));
        assert!(!book.title_contains("rust"));
    }

    #[tokio::test]
    async fn test_should_share_identity_by_id() {
        let a = BookEntity::new(3, "a", "p", "n");
        let b = BookEntity::new(3, "b", "q", "m");
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&BookEntity::new(4, "a", "p", "n")));
    }
}
