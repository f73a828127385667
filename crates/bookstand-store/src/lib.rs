//! Record stores for Bookstand.
//!
//! This crate is the persistence seam: one trait per collection
//! ([`UserStore`], [`BookStore`], [`FavoriteStore`], [`ReviewStore`]) and
//! `RwLock<HashMap>`-based in-memory backends for tests and embedding. A
//! document-database backend slots in behind the same traits without
//! touching domain code.
//!
//! # Design Rules
//!
//! 1. Uniqueness constraints live HERE and are enforced atomically under
//!    the backend's write lock: user email, one favorite per (user, book),
//!    one review per (user, book). Application-level existence checks are
//!    advisory fast paths only — the store is the source of truth.
//! 2. Reads of absent records return `Ok(None)`, never an error.
//! 3. Removals report presence via `bool`; removing an absent record is
//!    not an error.
//! 4. Backend I/O failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryBookStore, InMemoryFavoriteStore, InMemoryReviewStore, InMemoryUserStore};
pub use traits::{BookStore, FavoriteStore, ReviewStore, UserStore};
