use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use crate::books::dto::{BookDto, BookFieldsDto};
use crate::proxy::domain::{BookProxy, ProxyConfig, ProxyError, ProxyResult};

// HttpBookProxy talks to the catalog controller over HTTP. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpBookProxy {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookProxy {
    pub fn new(config: &ProxyConfig) -> ProxyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ProxyError::transport(
                format!("failed to create http client {}", err).as_str()))?;
        Ok(Self {
            client,
            base_url: config.base_url.to_string(),
        })
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

async fn send(request: RequestBuilder, operation: &str) -> ProxyResult<Response> {
    request.send().await.map_err(|err| {
        warn!(operation, "request failed: {}", err);
        ProxyError::transport(format!("{}", err).as_str())
    })
}

async fn decode<T: DeserializeOwned>(res: Response, operation: &str) -> ProxyResult<T> {
    res.json::<T>().await.map_err(|err| {
        warn!(operation, "response body rejected: {}", err);
        ProxyError::decode(format!("{}", err).as_str())
    })
}

// maps a non-success status for a call addressing a single id
fn failure_for_id(status: StatusCode, id: i64) -> ProxyError {
    if status == StatusCode::NOT_FOUND {
        ProxyError::NotFound { id }
    } else {
        ProxyError::Status { code: status.as_u16() }
    }
}

#[async_trait]
impl BookProxy for HttpBookProxy {
    async fn get_book(&self, id: i64) -> ProxyResult<BookDto> {
        let res = send(self.client.get(self.book_url(id)), "get").await?;
        let status = res.status();
        if status.is_success() {
            info!(book_id = id, status = status.as_u16(), "book received");
            decode(res, "get").await
        } else {
            warn!(book_id = id, status = status.as_u16(), "no book with this id");
            Err(failure_for_id(status, id))
        }
    }

    async fn add_book(&self, book: &BookDto) -> ProxyResult<BookDto> {
        let res = send(self.client.post(self.books_url()).json(book), "add").await?;
        let status = res.status();
        if status.is_success() {
            info!(book_id = book.id, status = status.as_u16(), "book added");
            decode(res, "add").await
        } else if status == StatusCode::BAD_REQUEST {
            warn!(book_id = book.id, status = status.as_u16(), "book not added, id or title already exists");
            let echoed = res.json::<BookDto>().await.unwrap_or_else(|_| book.clone());
            Err(ProxyError::Rejected { book: echoed })
        } else {
            warn!(book_id = book.id, status = status.as_u16(), "book not added");
            Err(ProxyError::Status { code: status.as_u16() })
        }
    }

    async fn list_books(&self, filter_title: Option<&str>) -> ProxyResult<Vec<BookDto>> {
        let mut request = self.client.get(self.books_url());
        if let Some(fragment) = filter_title {
            request = request.query(&[("filterTitle", fragment)]);
        }
        let res = send(request, "list").await?;
        let status = res.status();
        if status.is_success() {
            info!(status = status.as_u16(), "book list received");
            decode(res, "list").await
        } else {
            warn!(status = status.as_u16(), "failed to list books");
            Err(ProxyError::Status { code: status.as_u16() })
        }
    }

    async fn update_book(&self, book: &BookDto) -> ProxyResult<()> {
        let body = BookFieldsDto::from(book);
        let res = send(self.client.put(self.book_url(book.id)).json(&body), "update").await?;
        let status = res.status();
        if status.is_success() {
            info!(book_id = book.id, status = status.as_u16(), "book updated");
            Ok(())
        } else {
            warn!(book_id = book.id, status = status.as_u16(), "no book with this id");
            Err(failure_for_id(status, book.id))
        }
    }

    async fn remove_book(&self, id: i64) -> ProxyResult<BookDto> {
        let res = send(self.client.delete(self.book_url(id)), "remove").await?;
        let status = res.status();
        if status.is_success() {
            info!(book_id = id, status = status.as_u16(), "book removed");
            decode(res, "remove").await
        } else {
            warn!(book_id = id, status = status.as_u16(), "book not removed, id does not exist");
            Err(failure_for_id(status, id))
        }
    }
}
