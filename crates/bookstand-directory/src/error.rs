use bookstand_types::FieldViolation;
use thiserror::Error;

/// Errors from user directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// One or more fields failed validation; the full batch is returned.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Wrong email or wrong password — deliberately undifferentiated so
    /// the response never discloses whether the email exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No account with the requested id.
    #[error("user not found")]
    NotFound,

    /// Password hashing or verification failed internally.
    #[error("password hashing error: {0}")]
    Hash(String),

    /// Store-level failure.
    #[error("store error: {0}")]
    Store(#[from] bookstand_store::StoreError),
}

/// Result alias for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
