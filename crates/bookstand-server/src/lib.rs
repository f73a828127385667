//! HTTP server for Bookstand.
//!
//! Hosts the marketplace REST API: account registration and session
//! login, the book catalog with multipart uploads, favorites, reviews,
//! and static serving of uploaded assets.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod session;
pub mod state;
pub mod upload;

pub use config::ServerConfig;
pub use error::ApiError;
pub use extract::{CurrentUser, MaybeUser};
pub use server::BookstandServer;
pub use session::{SessionStore, SessionUser};
pub use state::AppState;
