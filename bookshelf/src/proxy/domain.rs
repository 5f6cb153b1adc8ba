use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use async_trait::async_trait;
use crate::books::dto::BookDto;

/// Outcome of a remote catalog call that did not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyError {
    /// The server answered 404 for the requested id.
    NotFound {
        id: i64,
    },
    /// The server refused to create the book because its id or title exists.
    Rejected {
        book: BookDto,
    },
    /// Any other non-success status.
    Status {
        code: u16,
    },
    /// Connection, timeout or other network level failure.
    Transport {
        message: String,
    },
    /// A success response whose body does not match the book schema.
    Decode {
        message: String,
    },
}

impl ProxyError {
    pub fn transport(message: &str) -> ProxyError {
        ProxyError::Transport { message: message.to_string() }
    }

    pub fn decode(message: &str) -> ProxyError {
        ProxyError::Decode { message: message.to_string() }
    }
}

impl Display for ProxyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::NotFound { id } => {
                write!(f, "no book with id {}", id)
            }
            ProxyError::Rejected { book } => {
                write!(f, "book {} not added, id or title already exists", book.id)
            }
            ProxyError::Status { code } => {
                write!(f, "unexpected response status {}", code)
            }
            ProxyError::Transport { message } => {
                write!(f, "transport failure {}", message)
            }
            ProxyError::Decode { message } => {
                write!(f, "invalid response body {}", message)
            }
        }
    }
}

impl std::error::Error for ProxyError {}

pub type ProxyResult<T> = Result<T, ProxyError>;

/// Connection settings of the remote proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// Base URL of the catalog server without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ProxyConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig::new("http://localhost:8080")
    }
}

// BookProxy mirrors the catalog resource as local calls. Every failure, including
// transport errors, comes back as a ProxyError value.
#[async_trait]
pub trait BookProxy: Sync + Send {
    async fn get_book(&self, id: i64) -> ProxyResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> ProxyResult<BookDto>;
    async fn list_books(&self, filter_title: Option<&str>) -> ProxyResult<Vec<BookDto>>;
    async fn update_book(&self, book: &BookDto) -> ProxyResult<()>;
    async fn remove_book(&self, id: i64) -> ProxyResult<BookDto>;
}
