use std::collections::HashMap;
use std::sync::RwLock;

use bookstand_types::{Book, Favorite, RecordId, Review, User};

use crate::error::{StoreError, StoreResult};
use crate::traits::{BookStore, FavoriteStore, ReviewStore, UserStore};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// In-memory user store.
///
/// Keeps a secondary email index so the unique-email check and the insert
/// happen under a single write lock.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<UserMap>,
}

#[derive(Default)]
struct UserMap {
    by_id: HashMap<RecordId, User>,
    by_email: HashMap<String, RecordId>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: User) -> StoreResult<()> {
        let mut map = self.inner.write().expect("lock poisoned");
        if map.by_email.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        map.by_email.insert(user.email.clone(), user.id);
        map.by_id.insert(user.id, user);
        Ok(())
    }

    fn get(&self, id: &RecordId) -> StoreResult<Option<User>> {
        let map = self.inner.read().expect("lock poisoned");
        Ok(map.by_id.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let map = self.inner.read().expect("lock poisoned");
        Ok(map
            .by_email
            .get(email)
            .and_then(|id| map.by_id.get(id))
            .cloned())
    }

    fn update(&self, user: User) -> StoreResult<bool> {
        let mut map = self.inner.write().expect("lock poisoned");
        let Some(existing) = map.by_id.get(&user.id) else {
            return Ok(false);
        };
        if let Some(holder) = map.by_email.get(&user.email) {
            if *holder != user.id {
                return Err(StoreError::DuplicateEmail(user.email));
            }
        }
        let old_email = existing.email.clone();
        if old_email != user.email {
            map.by_email.remove(&old_email);
            map.by_email.insert(user.email.clone(), user.id);
        }
        map.by_id.insert(user.id, user);
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

/// In-memory book store.
#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<HashMap<RecordId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BookStore for InMemoryBookStore {
    fn insert(&self, book: Book) -> StoreResult<()> {
        let mut map = self.books.write().expect("lock poisoned");
        map.insert(book.id, book);
        Ok(())
    }

    fn get(&self, id: &RecordId) -> StoreResult<Option<Book>> {
        let map = self.books.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<Book>> {
        let map = self.books.read().expect("lock poisoned");
        let mut books: Vec<Book> = map.values().cloned().collect();
        books.sort_by_key(|b| b.id);
        Ok(books)
    }

    fn update(&self, book: Book) -> StoreResult<bool> {
        let mut map = self.books.write().expect("lock poisoned");
        if !map.contains_key(&book.id) {
            return Ok(false);
        }
        map.insert(book.id, book);
        Ok(true)
    }

    fn remove(&self, id: &RecordId) -> StoreResult<bool> {
        let mut map = self.books.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// In-memory favorite-edge store.
///
/// Edges are keyed by the (user, book) pair, so pair uniqueness is
/// structural: a racing second insert finds the key occupied under the
/// same write lock and fails.
#[derive(Default)]
pub struct InMemoryFavoriteStore {
    edges: RwLock<HashMap<(RecordId, RecordId), Favorite>>,
}

impl InMemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FavoriteStore for InMemoryFavoriteStore {
    fn insert_unique(&self, favorite: Favorite) -> StoreResult<Favorite> {
        let mut map = self.edges.write().expect("lock poisoned");
        let key = (favorite.user_id, favorite.book_id);
        if map.contains_key(&key) {
            return Err(StoreError::DuplicateFavorite {
                user: favorite.user_id,
                book: favorite.book_id,
            });
        }
        map.insert(key, favorite.clone());
        Ok(favorite)
    }

    fn list_for_user(&self, user_id: &RecordId) -> StoreResult<Vec<Favorite>> {
        let map = self.edges.read().expect("lock poisoned");
        let mut edges: Vec<Favorite> = map
            .values()
            .filter(|f| f.user_id == *user_id)
            .cloned()
            .collect();
        edges.sort_by_key(|f| f.id);
        Ok(edges)
    }

    fn exists(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool> {
        let map = self.edges.read().expect("lock poisoned");
        Ok(map.contains_key(&(*user_id, *book_id)))
    }

    fn remove(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool> {
        let mut map = self.edges.write().expect("lock poisoned");
        Ok(map.remove(&(*user_id, *book_id)).is_some())
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// In-memory review store. Same pair-keyed layout as favorites.
#[derive(Default)]
pub struct InMemoryReviewStore {
    reviews: RwLock<HashMap<(RecordId, RecordId), Review>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reviews.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReviewStore for InMemoryReviewStore {
    fn insert_unique(&self, review: Review) -> StoreResult<Review> {
        let mut map = self.reviews.write().expect("lock poisoned");
        let key = (review.user_id, review.book_id);
        if map.contains_key(&key) {
            return Err(StoreError::DuplicateReview {
                user: review.user_id,
                book: review.book_id,
            });
        }
        map.insert(key, review.clone());
        Ok(review)
    }

    fn list_for_book(&self, book_id: &RecordId) -> StoreResult<Vec<Review>> {
        let map = self.reviews.read().expect("lock poisoned");
        let mut reviews: Vec<Review> = map
            .values()
            .filter(|r| r.book_id == *book_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| r.id);
        Ok(reviews)
    }

    fn exists(&self, user_id: &RecordId, book_id: &RecordId) -> StoreResult<bool> {
        let map = self.reviews.read().expect("lock poisoned");
        Ok(map.contains_key(&(*user_id, *book_id)))
    }
}
