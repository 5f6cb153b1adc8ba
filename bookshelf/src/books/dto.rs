use serde::{Deserialize, Serialize};

// BookDto is the JSON shape exchanged by the catalog controller and the remote proxy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub note: String,
}

impl BookDto {
    pub fn new(id: i64, title: &str, publisher: &str, note: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            publisher: publisher.to_string(),
            note: note.to_string(),
        }
    }
}

// BookFieldsDto is the body of an update; any id it carries is replaced by the path id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookFieldsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub publisher: String,
    pub note: String,
}

impl BookFieldsDto {
    pub fn new(title: &str, publisher: &str, note: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            publisher: publisher.to_string(),
            note: note.to_string(),
        }
    }

    pub fn with_id(&self, id: i64) -> BookDto {
        BookDto::new(id, self.title.as_str(), self.publisher.as_str(), self.note.as_str())
    }
}

impl From<&BookDto> for BookFieldsDto {
    fn from(other: &BookDto) -> Self {
        Self {
            id: Some(other.id),
            title: other.title.to_string(),
            publisher: other.publisher.to_string(),
            note: other.note.to_string(),
        }
    }
}
