use bookstand_types::{Book, Favorite, RecordId, Review, User};

use crate::error::StoreResult;

/// User account collection.
///
/// The normalized email is globally unique; `insert` enforces it
/// atomically and fails with [`crate::StoreError::DuplicateEmail`].
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails if the email is already registered.
    fn insert(&self, user: User) -> StoreResult<()>;

    /// Fetch by id. `Ok(None)` if absent.
    fn get(&self, id: &RecordId) -> StoreResult<Option<User>>;

    /// Fetch by normalized email. `Ok(None)` if absent.
    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Replace the stored record. Returns `false` if the id is absent.
    ///
    /// Replacing the email with one held by a different user fails with
    /// `DuplicateEmail`.
    fn update(&self, user: User) -> StoreResult<bool>;
}

/// Book catalog collection. Plain CRUD; no uniqueness beyond the id.
pub trait BookStore: Send + Sync {
    fn insert(&self, book: Book) -> StoreResult<()>;

    /// Fetch by id. `Ok(None)` if absent.
    fn get(&self, id: &RecordId) -> StoreResult<Option<Book>>;

    /// All books, oldest first.
    fn list(&self) -> StoreResult<Vec<Book>>;

    /// Replace the stored record. Returns `false` if the id is absent.
    fn update(&self, book: Book) -> StoreResult<bool>;

    /// Remove by id. Returns `true` if the record existed.
    fn remove(&self, id: &RecordId) -> StoreResult<bool>;
}

/// Starred-book edges.
///
/// The (user, book) pair is unique. `insert_unique` is the authority for
/// that constraint: the existence check and the insert happen under one
/// write lock, so two racing inserts for the same pair cannot both win.
pub trait FavoriteStore: Send + Sync {
    /// Insert an edge. Fails with `DuplicateFavorite` if the pair exists.
    fn insert_unique(&self, favorite: Favorite) -> StoreResult<Favorite>;

    /// All edges for a user, oldest first.
    fn list_for_user(&self, user_id: &RecordId) -> StoreResult<Vec<Favorite>>;

    /// Advisory existence probe for the pair.
    fn exists(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool>;

    /// Remove the edge for the pair. Returns `true` if it existed.
    fn remove(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool>;
}

/// Review records, one per (user, book) pair.
///
/// Same atomic-insert contract as [`FavoriteStore`].
pub trait ReviewStore: Send + Sync {
    /// Insert a review. Fails with `DuplicateReview` if the pair exists.
    fn insert_unique(&self, review: Review) -> StoreResult<Review>;

    /// All reviews for a book, oldest first.
    fn list_for_book(&self, book_id: &RecordId) -> StoreResult<Vec<Review>>;

    /// Advisory existence probe for the pair.
    fn exists(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool>;
}
