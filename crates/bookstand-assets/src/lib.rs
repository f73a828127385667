//! Binary asset storage for Bookstand.
//!
//! Covers, book PDFs, and profile pictures live outside the record store,
//! keyed by a generated collision-resistant file name (millisecond
//! timestamp + sanitized original name) under a per-category directory.
//!
//! # Design Rules
//!
//! 1. Every asset is exclusively owned by the single record field that
//!    references it; cardinality is always 0 or 1, so there is no
//!    reference counting.
//! 2. Records are written only after the asset write succeeded — a
//!    dangling reference is never produced. Orphaned files from a crash
//!    window are tolerated and cleaned up out of band.
//! 3. Cleanup deletion is best-effort via [`AssetStore::discard`]:
//!    a missing file is not an error, an I/O failure is logged and
//!    swallowed, and the caller's primary operation is never blocked.

pub mod category;
pub mod error;
pub mod fs;
pub mod memory;
pub mod name;
pub mod traits;

pub use category::AssetCategory;
pub use error::{AssetError, AssetResult};
pub use fs::FsAssetStore;
pub use memory::InMemoryAssetStore;
pub use name::generate_name;
pub use traits::AssetStore;
