use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::AppState;

/// `POST /favorites/star/:id` — star a book for the session's user.
pub async fn star(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(raw_book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let favorite = state.favorites.add(current.user.id, &raw_book_id)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Book added to favorites",
            "favorite": favorite,
        })),
    ))
}

/// `GET /favorites/stars` — the user's favorites, populated with books.
pub async fn stars(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let favorites = state.favorites.list(&current.user.id)?;
    Ok(Json(json!({ "success": true, "favorites": favorites })))
}

/// `DELETE /favorites/star/:id` — unstar; absent edges still succeed.
pub async fn unstar(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(raw_book_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.favorites.remove(&current.user.id, &raw_book_id)?;
    Ok(Json(json!({
        "success": true,
        "message": "Book removed from favorites",
    })))
}
