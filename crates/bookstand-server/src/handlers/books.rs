use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bookstand_catalog::{BookDraft, NewUploads};
use bookstand_types::RecordId;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::Intake;

fn draft_from(intake: &Intake) -> BookDraft {
    BookDraft {
        title: intake.field("title"),
        author: intake.field("author"),
        genre: intake.field("genre"),
        price: intake.field("price"),
        description: intake.field("description"),
        rating: intake.field("rating"),
        pages: intake.field("pages"),
        published_year: intake.field("publishedYear"),
    }
}

fn parse_book_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).map_err(|_| ApiError::bad_request("Invalid book ID"))
}

/// `POST /book-items` — multipart create with `cover` and `bookFile`.
pub async fn create_book(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let intake = Intake::read(multipart, state.assets.as_ref()).await?;
    let draft = draft_from(&intake);
    let uploads = NewUploads {
        cover: intake.cover.clone(),
        book_file: intake.book_file.clone(),
    };
    // The catalog owns the uploads from here: it links them on success
    // and discards them on any rejection.
    let book = state.catalog.create(&draft, uploads)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Book created successfully",
            "savedBook": book,
        })),
    ))
}

/// `GET /book-items`
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let books = state.catalog.list()?;
    Ok(Json(books))
}

/// `GET /book-items/:id`
pub async fn get_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_book_id(&raw_id)?;
    let book = state.catalog.get(&id)?;
    Ok(Json(book))
}

/// `PUT /book-items/:id` — multipart partial update; new files replace
/// and discard the superseded assets.
pub async fn update_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_book_id(&raw_id)?;
    let intake = Intake::read(multipart, state.assets.as_ref()).await?;
    let draft = draft_from(&intake);
    let uploads = NewUploads {
        cover: intake.cover.clone(),
        book_file: intake.book_file.clone(),
    };
    let book = state.catalog.update(&id, &draft, uploads)?;
    Ok(Json(json!({ "success": true, "book": book })))
}

/// `DELETE /book-items/:id`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_book_id(&raw_id)?;
    state.catalog.delete(&id)?;
    Ok(Json(json!({ "message": "Book deleted successfully" })))
}
