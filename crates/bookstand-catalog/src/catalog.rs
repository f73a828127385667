use std::sync::Arc;

use bookstand_assets::{AssetCategory, AssetStore};
use bookstand_store::BookStore;
use bookstand_types::{Book, RecordId};
use chrono::Utc;

use crate::error::{CatalogError, CatalogResult};
use crate::validate::{validate_book_draft, BookDraft};

/// Generated names of the files a request uploaded before the record
/// operation ran. The catalog owns their fate: link them on success,
/// discard them on rejection.
#[derive(Clone, Debug, Default)]
pub struct NewUploads {
    pub cover: Option<String>,
    pub book_file: Option<String>,
}

impl NewUploads {
    fn discard_all(&self, assets: &dyn AssetStore) {
        if let Some(name) = &self.cover {
            assets.discard(AssetCategory::Cover, name);
        }
        if let Some(name) = &self.book_file {
            assets.discard(AssetCategory::BookFile, name);
        }
    }
}

/// The book catalog: CRUD over book records plus the asset lifecycle.
///
/// Lifecycle rules:
/// - A record is only ever written after its assets are already stored,
///   so a record can never reference a missing asset.
/// - A rejected create discards everything the request uploaded.
/// - Replacing an asset discards the superseded one; deleting a book
///   discards both. Discards are best-effort and never block the record
///   operation or fail the response.
pub struct BookCatalog {
    books: Arc<dyn BookStore>,
    assets: Arc<dyn AssetStore>,
}

impl BookCatalog {
    pub fn new(books: Arc<dyn BookStore>, assets: Arc<dyn AssetStore>) -> Self {
        Self { books, assets }
    }

    /// Create a book from already-uploaded files plus raw text fields.
    ///
    /// Validation is exhaustive; any failure (field rules or a missing
    /// file) discards the uploads before the error is returned, so a
    /// rejected create leaves no orphaned assets behind.
    pub fn create(&self, draft: &BookDraft, uploads: NewUploads) -> CatalogResult<Book> {
        let (fields, violations) = validate_book_draft(draft, true);
        if !violations.is_empty() {
            uploads.discard_all(self.assets.as_ref());
            return Err(CatalogError::Validation(violations.into_vec()));
        }
        let (Some(cover), Some(book_file)) = (uploads.cover.clone(), uploads.book_file.clone())
        else {
            uploads.discard_all(self.assets.as_ref());
            return Err(CatalogError::MissingFiles);
        };

        let now = Utc::now();
        let book = Book {
            id: RecordId::new(),
            // Core fields are guaranteed present by `require_core`.
            title: fields.title.unwrap_or_default(),
            author: fields.author.unwrap_or_default(),
            genre: fields.genre.unwrap_or_default(),
            price: fields.price.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            rating: fields.rating.unwrap_or(0.0),
            pages: fields.pages,
            published_year: fields.published_year,
            cover,
            book_file,
            created_at: now,
            updated_at: now,
        };
        self.books.insert(book.clone())?;
        tracing::info!(book = %book.id, title = %book.title, "created book");
        Ok(book)
    }

    /// Update a book: merge supplied fields, swap in any replacement
    /// files, and discard the superseded assets.
    pub fn update(
        &self,
        id: &RecordId,
        draft: &BookDraft,
        uploads: NewUploads,
    ) -> CatalogResult<Book> {
        let Some(mut book) = self.books.get(id)? else {
            // The request's uploads have no record to attach to.
            uploads.discard_all(self.assets.as_ref());
            return Err(CatalogError::NotFound);
        };

        let (fields, violations) = validate_book_draft(draft, false);
        if !violations.is_empty() {
            uploads.discard_all(self.assets.as_ref());
            return Err(CatalogError::Validation(violations.into_vec()));
        }

        if let Some(title) = fields.title {
            book.title = title;
        }
        if let Some(author) = fields.author {
            book.author = author;
        }
        if let Some(genre) = fields.genre {
            book.genre = genre;
        }
        if let Some(price) = fields.price {
            book.price = price;
        }
        if let Some(description) = fields.description {
            book.description = description;
        }
        if let Some(rating) = fields.rating {
            book.rating = rating;
        }
        if let Some(pages) = fields.pages {
            book.pages = Some(pages);
        }
        if let Some(year) = fields.published_year {
            book.published_year = Some(year);
        }

        if let Some(new_cover) = uploads.cover {
            self.assets.discard(AssetCategory::Cover, &book.cover);
            book.cover = new_cover;
        }
        if let Some(new_file) = uploads.book_file {
            self.assets.discard(AssetCategory::BookFile, &book.book_file);
            book.book_file = new_file;
        }
        book.updated_at = Utc::now();

        if !self.books.update(book.clone())? {
            return Err(CatalogError::NotFound);
        }
        Ok(book)
    }

    /// Delete a book and discard both of its assets.
    ///
    /// Assets already missing on disk are fine; the record removal always
    /// proceeds and the operation still succeeds.
    pub fn delete(&self, id: &RecordId) -> CatalogResult<()> {
        let Some(book) = self.books.get(id)? else {
            return Err(CatalogError::NotFound);
        };
        self.assets.discard(AssetCategory::Cover, &book.cover);
        self.assets.discard(AssetCategory::BookFile, &book.book_file);
        self.books.remove(id)?;
        tracing::info!(book = %id, "deleted book");
        Ok(())
    }

    /// Fetch one book.
    pub fn get(&self, id: &RecordId) -> CatalogResult<Book> {
        self.books.get(id)?.ok_or(CatalogError::NotFound)
    }

    /// All books, oldest first.
    pub fn list(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.books.list()?)
    }
}
