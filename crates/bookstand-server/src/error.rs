use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstand_catalog::CatalogError;
use bookstand_directory::DirectoryError;
use bookstand_types::FieldViolation;
use serde_json::{json, Value};

/// An HTTP-mapped error: status code plus the exact JSON body the client
/// receives.
///
/// Internal causes (store or I/O failures) are logged server-side at the
/// conversion point and never appear in the body — the client only ever
/// sees the generic "Server error".
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// 422 with the full violation batch.
    pub fn validation(errors: Vec<FieldViolation>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "success": false, "errors": errors }),
        )
    }

    /// 401 for requests that require an authenticated session.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, json!({ "message": "Unauthorized" }))
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, json!({ "message": message }))
    }

    pub fn conflict(message: &str) -> Self {
        Self::new(StatusCode::CONFLICT, json!({ "message": message }))
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, json!({ "message": message }))
    }

    /// Generic 500. The cause must already have been logged by the caller.
    pub fn server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "success": false, "message": "Server error" }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Validation(errors) => Self::validation(errors),
            DirectoryError::InvalidCredentials => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "errors": [{ "msg": "Invalid email or password." }],
                }),
            ),
            DirectoryError::NotFound => Self::new(
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": "User not found" }),
            ),
            DirectoryError::Hash(_) | DirectoryError::Store(_) => {
                tracing::error!(%err, "directory failure");
                Self::server_error()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => Self::validation(errors),
            CatalogError::MissingFiles => Self::new(
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "message": "Both cover and bookFile are required.",
                }),
            ),
            CatalogError::MissingFields => Self::bad_request("Missing required fields"),
            CatalogError::InvalidReference(_) => Self::bad_request("Invalid book ID"),
            CatalogError::NotFound => Self::not_found("Book not found"),
            CatalogError::AlreadyFavorited => Self::conflict("Book already in favorites"),
            CatalogError::AlreadyReviewed => Self::conflict("You have already reviewed this book."),
            CatalogError::Store(_) | CatalogError::Asset(_) => {
                tracing::error!(%err, "catalog failure");
                Self::server_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422_with_batch() {
        let err = ApiError::validation(vec![
            FieldViolation::new("price", "Price must be a positive number"),
            FieldViolation::new("title", "Title is required"),
        ]);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(err.body["success"], false);
    }

    #[test]
    fn invalid_credentials_never_names_a_field() {
        let err: ApiError = DirectoryError::InvalidCredentials.into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        let msg = &err.body["errors"][0];
        assert_eq!(msg["msg"], "Invalid email or password.");
        assert!(msg.get("param").is_none());
    }

    #[test]
    fn conflict_and_reference_mappings() {
        let err: ApiError = CatalogError::AlreadyFavorited.into();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err: ApiError = CatalogError::InvalidReference("xyz".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body["message"], "Invalid book ID");
    }

    #[test]
    fn internal_errors_stay_generic() {
        let err: ApiError =
            CatalogError::Store(bookstand_store::StoreError::Backend("pool exhausted".into()))
                .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body["message"], "Server error");
        assert!(!err.body.to_string().contains("pool exhausted"));
    }
}
