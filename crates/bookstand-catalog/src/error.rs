use bookstand_types::FieldViolation;
use thiserror::Error;

/// Errors from the catalog, favorites, and review services.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more fields failed validation; the full batch is returned.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// A create arrived without both required files.
    #[error("both cover and bookFile are required")]
    MissingFiles,

    /// A required body field was absent.
    #[error("missing required fields")]
    MissingFields,

    /// The referenced id is not well-formed.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// No record with the requested id.
    #[error("not found")]
    NotFound,

    /// The (user, book) favorite edge already exists.
    #[error("book already in favorites")]
    AlreadyFavorited,

    /// The (user, book) review already exists.
    #[error("already reviewed")]
    AlreadyReviewed,

    /// Store-level failure.
    #[error("store error: {0}")]
    Store(#[from] bookstand_store::StoreError),

    /// Asset-store failure on the primary (non-cleanup) path.
    #[error("asset error: {0}")]
    Asset(#[from] bookstand_assets::AssetError),
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
