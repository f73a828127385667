//! User directory for Bookstand.
//!
//! Owns account records end to end: registration with exhaustive field
//! validation, password hashing and verification, credential checks, and
//! profile updates. The HTTP layer above this crate only translates wire
//! shapes; every account rule lives here.

pub mod directory;
pub mod error;
pub mod password;
pub mod register;

pub use directory::{UserDirectory, UserPatch};
pub use error::{DirectoryError, DirectoryResult};
pub use register::{normalize_email, validate_registration, Registration, ValidRegistration};
