//! Request handlers, one module per route group.
//!
//! Handlers translate wire shapes and status codes only; every domain
//! rule lives in the directory and catalog crates.

pub mod auth;
pub mod books;
pub mod favorites;
pub mod meta;
pub mod reviews;
