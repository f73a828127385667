use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub book_id: Option<String>,
    pub user_id: Option<String>,
    pub comment: Option<String>,
}

/// `POST /reviews`
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let review = state.reviews.create(
        body.book_id.as_deref(),
        body.user_id.as_deref(),
        body.comment.as_deref(),
    )?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// `GET /reviews/:id` — all reviews for a book (`:id` is the book id).
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(raw_book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = state.reviews.list_for_book(&raw_book_id)?;
    Ok(Json(reviews))
}
