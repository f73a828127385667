use std::sync::Arc;

use bookstand_store::{BookStore, ReviewStore, StoreError, UserStore};
use bookstand_types::{Book, FieldViolation, PublicUser, RecordId, Review, MAX_COMMENT_LEN};
use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};

/// A review expanded with its author and the reviewed book, both looked up
/// at read time.
#[derive(Clone, Debug, Serialize)]
pub struct PopulatedReview {
    #[serde(flatten)]
    pub review: Review,
    pub user: Option<PublicUser>,
    pub book: Option<Book>,
}

/// Write-once reviews, one per (user, book) pair.
pub struct ReviewBoard {
    reviews: Arc<dyn ReviewStore>,
    users: Arc<dyn UserStore>,
    books: Arc<dyn BookStore>,
}

impl ReviewBoard {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
    ) -> Self {
        Self { reviews, users, books }
    }

    /// Create a review.
    ///
    /// All three fields are required and the comment is capped at
    /// [`MAX_COMMENT_LEN`] characters. The `exists` probe is a fast path
    /// for the common duplicate; the store's atomic insert is what
    /// actually guarantees one review per pair when two requests race.
    pub fn create(
        &self,
        raw_book_id: Option<&str>,
        raw_user_id: Option<&str>,
        comment: Option<&str>,
    ) -> CatalogResult<PopulatedReview> {
        let (Some(raw_book_id), Some(raw_user_id), Some(comment)) =
            (raw_book_id, raw_user_id, comment)
        else {
            return Err(CatalogError::MissingFields);
        };
        if comment.trim().is_empty() {
            return Err(CatalogError::MissingFields);
        }
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(CatalogError::Validation(vec![FieldViolation::new(
                "comment",
                "Comment must be at most 1000 characters",
            )]));
        }
        let book_id = RecordId::parse(raw_book_id)
            .map_err(|_| CatalogError::InvalidReference(raw_book_id.to_string()))?;
        let user_id = RecordId::parse(raw_user_id)
            .map_err(|_| CatalogError::InvalidReference(raw_user_id.to_string()))?;

        if self.reviews.exists(&user_id, &book_id)? {
            return Err(CatalogError::AlreadyReviewed);
        }
        let review = match self.reviews.insert_unique(Review::new(book_id, user_id, comment)) {
            Ok(review) => review,
            Err(StoreError::DuplicateReview { .. }) => return Err(CatalogError::AlreadyReviewed),
            Err(err) => return Err(err.into()),
        };
        self.populate(review)
    }

    /// All reviews for a book, oldest first, populated.
    pub fn list_for_book(&self, raw_book_id: &str) -> CatalogResult<Vec<PopulatedReview>> {
        let book_id = RecordId::parse(raw_book_id)
            .map_err(|_| CatalogError::InvalidReference(raw_book_id.to_string()))?;
        let reviews = self.reviews.list_for_book(&book_id)?;
        reviews.into_iter().map(|r| self.populate(r)).collect()
    }

    fn populate(&self, review: Review) -> CatalogResult<PopulatedReview> {
        let user = self.users.get(&review.user_id)?.map(|u| u.public());
        let book = self.books.get(&review.book_id)?;
        Ok(PopulatedReview { review, user, book })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstand_store::{InMemoryBookStore, InMemoryReviewStore, InMemoryUserStore};
    use bookstand_types::{Role, User};
    use chrono::Utc;

    struct Fixture {
        board: ReviewBoard,
        users: Arc<InMemoryUserStore>,
        books: Arc<InMemoryBookStore>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserStore::new());
        let books = Arc::new(InMemoryBookStore::new());
        let board = ReviewBoard::new(
            Arc::new(InMemoryReviewStore::new()),
            Arc::clone(&users) as Arc<dyn UserStore>,
            Arc::clone(&books) as Arc<dyn BookStore>,
        );
        Fixture { board, users, books }
    }

    fn seed_user(users: &InMemoryUserStore) -> User {
        let now = Utc::now();
        let user = User {
            id: RecordId::new(),
            email: format!("{}@example.com", RecordId::new()),
            password_hash: "$2b$12$hash".into(),
            full_name: "Reviewer".into(),
            role: Role::Reader,
            profile_picture: None,
            terms_accepted: true,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.clone()).unwrap();
        user
    }

    fn seed_book(books: &InMemoryBookStore) -> Book {
        let now = Utc::now();
        let book = Book {
            id: RecordId::new(),
            title: "Reviewed".into(),
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
    fn create_returns_populated_review() {
        let fx = fixture();
        let user = seed_user(&fx.users);
        let book = seed_book(&fx.books);

        let review = fx
            .board
            .create(
                Some(&book.id.to_string()),
                Some(&user.id.to_string()),
                Some("A thorough and fair review."),
            )
            .unwrap();
        assert_eq!(review.review.comment, "A thorough and fair review.");
        assert_eq!(review.user.as_ref().unwrap().id, user.id);
        assert_eq!(review.book.as_ref().unwrap().id, book.id);
    }

    #[test]
    fn populated_user_never_carries_the_hash() {
        let fx = fixture();
        let user = seed_user(&fx.users);
        let book = seed_book(&fx.books);
        let review = fx
            .board
            .create(
                Some(&book.id.to_string()),
                Some(&user.id.to_string()),
                Some("no secrets here"),
            )
            .unwrap();
        let json = serde_json::to_string(&review).unwrap();
        assert!(!json.contains("$2b$"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn second_review_for_same_pair_is_a_conflict() {
        let fx = fixture();
        let user = seed_user(&fx.users);
        let book = seed_book(&fx.books);
        let book_id = book.id.to_string();
        let user_id = user.id.to_string();

        fx.board
            .create(Some(&book_id), Some(&user_id), Some("first"))
            .unwrap();
        let err = fx
            .board
            .create(Some(&book_id), Some(&user_id), Some("second"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyReviewed));
        assert_eq!(fx.board.list_for_book(&book_id).unwrap().len(), 1);
    }

    #[test]
    fn same_user_can_review_different_books() {
        let fx = fixture();
        let user = seed_user(&fx.users);
        let (book_a, book_b) = (seed_book(&fx.books), seed_book(&fx.books));
        let user_id = user.id.to_string();

        fx.board
            .create(Some(&book_a.id.to_string()), Some(&user_id), Some("one"))
            .unwrap();
        fx.board
            .create(Some(&book_b.id.to_string()), Some(&user_id), Some("two"))
            .unwrap();
        assert_eq!(fx.board.list_for_book(&book_a.id.to_string()).unwrap().len(), 1);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let fx = fixture();
        let book = seed_book(&fx.books);
        let err = fx
            .board
            .create(Some(&book.id.to_string()), None, Some("text"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingFields));

        let err = fx
            .board
            .create(
                Some(&book.id.to_string()),
                Some(&RecordId::new().to_string()),
                Some("   "),
            )
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingFields));
    }

    #[test]
    fn over_limit_comment_is_rejected_not_truncated() {
        let fx = fixture();
        let user = seed_user(&fx.users);
        let book = seed_book(&fx.books);
        let long = "x".repeat(MAX_COMMENT_LEN + 1);

        let err = fx
            .board
            .create(Some(&book.id.to_string()), Some(&user.id.to_string()), Some(&long))
            .unwrap_err();
        let CatalogError::Validation(errs) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errs[0].param.as_deref(), Some("comment"));
        // Nothing was written.
        assert!(fx
            .board
            .list_for_book(&book.id.to_string())
            .unwrap()
            .is_empty());

        // A comment exactly at the limit is fine.
        let at_limit = "y".repeat(MAX_COMMENT_LEN);
        fx.board
            .create(
                Some(&book.id.to_string()),
                Some(&user.id.to_string()),
                Some(&at_limit),
            )
            .unwrap();
    }

    #[test]
    fn malformed_ids_are_invalid_references() {
        let fx = fixture();
        let err = fx
            .board
            .create(Some("nope"), Some(&RecordId::new().to_string()), Some("c"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReference(_)));

        let err = fx.board.list_for_book("also-nope").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReference(_)));
    }

    #[test]
    fn list_for_book_without_reviews_is_empty() {
        let fx = fixture();
        let book = seed_book(&fx.books);
        assert!(fx
            .board
            .list_for_book(&book.id.to_string())
            .unwrap()
            .is_empty());
    }
}
