use axum::{
    body::{Bytes, HttpBody},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    BoxError, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::books::dto::{BookDto, BookFieldsDto};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, ServerError};

/// Routes of the catalog resource, plus a liveness probe. The request body type is
/// left open so the same routes serve both hyper and Lambda events.
pub fn create_router<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError> {
    Router::new()
        .route("/health", get(health))
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "branch": state.config.branch_id }))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let rejected = req.build_book();
    match AddBookCommand::new(state.catalog).execute(req).await {
        Ok(res) => {
            info!(book_id = res.book.id, status = 201, "book added");
            Ok((StatusCode::CREATED, Json(res.book)).into_response())
        }
        // the rejected input is echoed back
        Err(CommandError::DuplicateKey { message }) => {
            info!(book_id = rejected.id, status = 400, reason = %message, "book with same id or title exists");
            Ok((StatusCode::BAD_REQUEST, Json(rejected)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    match GetBookCommand::new(state.catalog).execute(req).await {
        Ok(res) => {
            info!(book_id, status = 200, "book found");
            Ok(Json(res.book))
        }
        Err(err) => {
            info!(book_id, "book lookup failed: {:?}", err);
            Err(err.into())
        }
    }
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let filter = req.filter_title.clone();
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    match filter {
        Some(fragment) => {
            info!(filter = %fragment, matches = res.books.len(), status = 200, "books filtered by title");
        }
        None => {
            info!(size = res.books.len(), status = 200, "books listed");
        }
    }
    Ok(Json(res.books))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let fields: BookFieldsDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(book_id, fields);
    match UpdateBookCommand::new(state.catalog).execute(req).await {
        Ok(res) => {
            info!(book_id, title = %res.book.title, status = 200, "book updated");
            Ok(StatusCode::OK)
        }
        Err(err) => {
            info!(book_id, "book update failed: {:?}", err);
            Err(err.into())
        }
    }
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<BookDto>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    match RemoveBookCommand::new(state.catalog).execute(req).await {
        Ok(res) => {
            info!(book_id, status = 200, "book removed");
            Ok(Json(res.book))
        }
        Err(err) => {
            info!(book_id, "book removal failed: {:?}", err);
            Err(err.into())
        }
    }
}
