use thiserror::Error;

/// Errors from asset store operations.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The payload was empty.
    #[error("refusing to store an empty asset")]
    Empty,

    /// The generated name kept colliding (clock stuck or adversarial input).
    #[error("could not allocate a unique name for {0}")]
    NameExhausted(String),

    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
