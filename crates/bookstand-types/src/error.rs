use thiserror::Error;

/// Errors from parsing foundation types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// The string is not a well-formed record id.
    #[error("invalid record id: {0}")]
    InvalidId(String),

    /// The string is not a recognized account role.
    #[error("invalid role: {0}")]
    InvalidRole(String),
}
