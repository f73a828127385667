use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A catalog entry for one book.
///
/// `cover` and `book_file` are generated asset file names; each asset is
/// exclusively owned by its field. Overwriting the field or deleting the
/// record implies deletion of the referenced asset.
///
/// The record intentionally carries no owning-user id: the source system
/// never stored one (per-author views were filtered client-side).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    /// Display author, free text. Not a user reference.
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub description: String,
    /// Defaults to 0 when not supplied at creation.
    pub rating: f64,
    pub pages: Option<u32>,
    pub published_year: Option<i32>,
    /// Generated asset file name of the cover image.
    pub cover: String,
    /// Generated asset file name of the book PDF.
    pub book_file: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_camel_case() {
        let now = Utc::now();
        let book = Book {
            id: RecordId::new(),
            title: "The Rust Book".into(),
            author: "Steve Klabnik".into(),
            genre: "Programming".into(),
            price: 29.99,
            description: "A thorough introduction to Rust.".into(),
            rating: 4.5,
            pages: Some(560),
            published_year: Some(2019),
            cover: "1700000000000-cover.png".into(),
            book_file: "1700000000000-book.pdf".into(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&book).unwrap();
        assert!(value.get("publishedYear").is_some());
        assert!(value.get("bookFile").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("published_year").is_none());
    }
}
