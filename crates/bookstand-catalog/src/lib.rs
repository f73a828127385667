//! Domain services for Bookstand.
//!
//! This crate is the relational and lifecycle core of the marketplace:
//!
//! - [`BookCatalog`] — book CRUD with the asset lifecycle rules: a
//!   rejected create cleans up everything it uploaded, a replacement
//!   discards the superseded asset, a delete discards both assets, and
//!   every asset discard is best-effort and never blocks the record
//!   operation.
//! - [`FavoritesLedger`] — the starred-books relation, one edge per
//!   (user, book), with populate-on-read semantics.
//! - [`ReviewBoard`] — write-once reviews, one per (user, book), returned
//!   populated with their author and book.
//!
//! Uniqueness is owned by the store layer's atomic inserts; the existence
//! checks in here are advisory fast paths only.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod reviews;
pub mod validate;

pub use catalog::{BookCatalog, NewUploads};
pub use error::{CatalogError, CatalogResult};
pub use favorites::{FavoriteWithBook, FavoritesLedger};
pub use reviews::{PopulatedReview, ReviewBoard};
pub use validate::{validate_book_draft, BookDraft, BookFields};
