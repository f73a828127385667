use std::sync::Arc;

use bookstand_store::{BookStore, FavoriteStore, StoreError};
use bookstand_types::{Book, Favorite, RecordId};
use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};

/// A favorite edge expanded with the referenced book's current record.
///
/// Populate semantics: the book is looked up at read time, so it always
/// reflects the latest state — and is `None` if the book has been deleted
/// since the edge was created.
#[derive(Clone, Debug, Serialize)]
pub struct FavoriteWithBook {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub book: Option<Book>,
}

/// The starred-books relation between readers and books.
pub struct FavoritesLedger {
    favorites: Arc<dyn FavoriteStore>,
    books: Arc<dyn BookStore>,
}

impl FavoritesLedger {
    pub fn new(favorites: Arc<dyn FavoriteStore>, books: Arc<dyn BookStore>) -> Self {
        Self { favorites, books }
    }

    /// Star a book for a user.
    ///
    /// The raw book id is parsed here (a malformed id must never reach the
    /// store as a lookup). The store's atomic insert is the duplicate-edge
    /// authority; the result maps straight to the conflict error.
    pub fn add(&self, user_id: RecordId, raw_book_id: &str) -> CatalogResult<Favorite> {
        let book_id = RecordId::parse(raw_book_id)
            .map_err(|_| CatalogError::InvalidReference(raw_book_id.to_string()))?;
        match self.favorites.insert_unique(Favorite::new(user_id, book_id)) {
            Ok(favorite) => Ok(favorite),
            Err(StoreError::DuplicateFavorite { .. }) => Err(CatalogError::AlreadyFavorited),
            Err(err) => Err(err.into()),
        }
    }

    /// All of a user's favorites, each populated with its book.
    pub fn list(&self, user_id: &RecordId) -> CatalogResult<Vec<FavoriteWithBook>> {
        let edges = self.favorites.list_for_user(user_id)?;
        let mut populated = Vec::with_capacity(edges.len());
        for favorite in edges {
            let book = self.books.get(&favorite.book_id)?;
            populated.push(FavoriteWithBook { favorite, book });
        }
        Ok(populated)
    }

    /// Unstar a book. Removing an absent edge is success, not an error.
    pub fn remove(&self, user_id: &RecordId, raw_book_id: &str) -> CatalogResult<()> {
        let book_id = RecordId::parse(raw_book_id)
            .map_err(|_| CatalogError::InvalidReference(raw_book_id.to_string()))?;
        self.favorites.remove(user_id, &book_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstand_store::{InMemoryBookStore, InMemoryFavoriteStore};
    use chrono::Utc;

    struct Fixture {
        ledger: FavoritesLedger,
        books: Arc<InMemoryBookStore>,
    }

    fn fixture() -> Fixture {
        let books = Arc::new(InMemoryBookStore::new());
        let ledger = FavoritesLedger::new(
            Arc::new(InMemoryFavoriteStore::new()),
            Arc::clone(&books) as Arc<dyn BookStore>,
        );
        Fixture { ledger, books }
    }

    fn seed_book(books: &InMemoryBookStore, title: &str) -> Book {
        let now = Utc::now();
        let book = Book {
            id: RecordId::new(),
            title: title.into(),
            author: "A.".into(),
            genre: "G".into(),
            price: 1.0,
            description: "ten chars and then some".into(),
            rating: 0.0,
            pages: None,
            published_year: None,
            cover: "1-c.png".into(),
            book_file: "1-b.pdf".into(),
            created_at: now,
            updated_at: now,
        };
        books.insert(book.clone()).unwrap();
        book
    }

    #[test]
    fn add_twice_yields_one_edge_and_a_conflict() {
        let fx = fixture();
        let user = RecordId::new();
        let book = seed_book(&fx.books, "Starred");

        fx.ledger.add(user, &book.id.to_string()).unwrap();
        let err = fx.ledger.add(user, &book.id.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyFavorited));
        assert_eq!(fx.ledger.list(&user).unwrap().len(), 1);
    }

    #[test]
    fn malformed_book_id_is_an_invalid_reference() {
        let fx = fixture();
        let err = fx.ledger.add(RecordId::new(), "definitely-not-an-id").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReference(_)));
    }

    #[test]
    fn list_populates_current_book_state() {
        let fx = fixture();
        let user = RecordId::new();
        let mut book = seed_book(&fx.books, "Before");
        fx.ledger.add(user, &book.id.to_string()).unwrap();

        // Mutate the book after starring; the populated view must follow.
        book.title = "After".into();
        fx.books.update(book.clone()).unwrap();

        let favorites = fx.ledger.list(&user).unwrap();
        assert_eq!(favorites[0].book.as_ref().unwrap().title, "After");
    }

    #[test]
    fn deleted_book_populates_as_none() {
        let fx = fixture();
        let user = RecordId::new();
        let book = seed_book(&fx.books, "Doomed");
        fx.ledger.add(user, &book.id.to_string()).unwrap();
        fx.books.remove(&book.id).unwrap();

        let favorites = fx.ledger.list(&user).unwrap();
        assert_eq!(favorites.len(), 1);
        assert!(favorites[0].book.is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let fx = fixture();
        let user = RecordId::new();
        let book = seed_book(&fx.books, "Unstarred");
        fx.ledger.add(user, &book.id.to_string()).unwrap();

        fx.ledger.remove(&user, &book.id.to_string()).unwrap();
        // Second removal of a now-absent edge still succeeds.
        fx.ledger.remove(&user, &book.id.to_string()).unwrap();
        assert!(fx.ledger.list(&user).unwrap().is_empty());
    }

    #[test]
    fn populated_wire_shape_flattens_the_edge() {
        let fx = fixture();
        let user = RecordId::new();
        let book = seed_book(&fx.books, "Wire");
        fx.ledger.add(user, &book.id.to_string()).unwrap();

        let favorites = fx.ledger.list(&user).unwrap();
        let json = serde_json::to_value(&favorites[0]).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("bookId").is_some());
        assert_eq!(json["book"]["title"], "Wire");
    }
}
