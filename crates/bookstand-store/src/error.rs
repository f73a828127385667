use bookstand_types::RecordId;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unique-email constraint hit on user insert.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Unique-edge constraint hit on favorite insert.
    #[error("favorite already exists for user {user} and book {book}")]
    DuplicateFavorite { user: RecordId, book: RecordId },

    /// Unique-pair constraint hit on review insert.
    #[error("review already exists for user {user} and book {book}")]
    DuplicateReview { user: RecordId, book: RecordId },

    /// I/O error from a persistent backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend-specific failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether this error is a uniqueness-constraint conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEmail(_) | Self::DuplicateFavorite { .. } | Self::DuplicateReview { .. }
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
