//! Foundation types for Bookstand.
//!
//! This crate provides the identity, role, and record types used throughout
//! the Bookstand system. Every other Bookstand crate depends on
//! `bookstand-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — UUID v7 identifier for every stored record
//! - [`Role`] — Author / Reader account role
//! - [`User`], [`Book`], [`Favorite`], [`Review`] — the domain records
//! - [`FieldViolation`] / [`Violations`] — batched validation results

pub mod book;
pub mod error;
pub mod favorite;
pub mod id;
pub mod review;
pub mod role;
pub mod user;
pub mod validation;

pub use book::Book;
pub use error::TypeError;
pub use favorite::Favorite;
pub use id::RecordId;
pub use review::{Review, MAX_COMMENT_LEN};
pub use role::Role;
pub use user::{PublicUser, User};
pub use validation::{FieldViolation, Violations};
