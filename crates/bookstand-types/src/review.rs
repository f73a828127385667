use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Maximum accepted review comment length, in characters.
pub const MAX_COMMENT_LEN: usize = 1000;

/// One reader's review of one book.
///
/// The (`user_id`, `book_id`) pair is unique: a reader reviews a book at
/// most once, enforced atomically by the store. Reviews are write-once;
/// there is no edit or delete path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    pub book_id: RecordId,
    pub user_id: RecordId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Build a fresh review. The [`MAX_COMMENT_LEN`] rule is enforced by
    /// the review service before construction; the record stores the
    /// comment verbatim.
    pub fn new(book_id: RecordId, user_id: RecordId, comment: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            book_id,
            user_id,
            comment: comment.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_is_stored_verbatim() {
        let review = Review::new(RecordId::new(), RecordId::new(), "great read");
        assert_eq!(review.comment, "great read");
    }
}
