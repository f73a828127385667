use std::sync::Arc;

use bookstand_assets::{AssetStore, FsAssetStore, InMemoryAssetStore};
use bookstand_catalog::{BookCatalog, FavoritesLedger, ReviewBoard};
use bookstand_directory::UserDirectory;
use bookstand_store::{
    InMemoryBookStore, InMemoryFavoriteStore, InMemoryReviewStore, InMemoryUserStore,
};

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub directory: Arc<UserDirectory>,
    pub catalog: Arc<BookCatalog>,
    pub favorites: Arc<FavoritesLedger>,
    pub reviews: Arc<ReviewBoard>,
    pub sessions: Arc<SessionStore>,
    pub assets: Arc<dyn AssetStore>,
}

impl AppState {
    /// Build state with a filesystem asset store rooted at the configured
    /// uploads directory.
    pub fn open(config: ServerConfig) -> anyhow::Result<Self> {
        let assets: Arc<dyn AssetStore> = Arc::new(FsAssetStore::open(&config.uploads_root)?);
        Ok(Self::with_assets(config, assets))
    }

    /// Build state with an in-memory asset store. For tests and demos.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self::with_assets(config, Arc::new(InMemoryAssetStore::new()))
    }

    pub(crate) fn with_assets(config: ServerConfig, assets: Arc<dyn AssetStore>) -> Self {
        let users = Arc::new(InMemoryUserStore::new());
        let books = Arc::new(InMemoryBookStore::new());
        let favorites = Arc::new(InMemoryFavoriteStore::new());
        let reviews = Arc::new(InMemoryReviewStore::new());

        let sessions = Arc::new(SessionStore::new(config.session_ttl));
        Self {
            directory: Arc::new(UserDirectory::new(users.clone())),
            catalog: Arc::new(BookCatalog::new(books.clone(), assets.clone())),
            favorites: Arc::new(FavoritesLedger::new(favorites, books.clone())),
            reviews: Arc::new(ReviewBoard::new(reviews, users, books)),
            sessions,
            assets,
            config: Arc::new(config),
        }
    }
}
