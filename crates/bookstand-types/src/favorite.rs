use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A starred-book edge between a user and a book.
///
/// The (`user_id`, `book_id`) pair is unique: at most one edge per reader
/// per book, enforced atomically by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: RecordId,
    pub user_id: RecordId,
    pub book_id: RecordId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Build a fresh edge for the pair.
    pub fn new(user_id: RecordId, book_id: RecordId) -> Self {
        Self {
            id: RecordId::new(),
            user_id,
            book_id,
            created_at: Utc::now(),
        }
    }
}
