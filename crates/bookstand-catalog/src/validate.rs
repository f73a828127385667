use bookstand_types::Violations;
use chrono::{Datelike, Utc};

/// Raw book fields, exactly as they arrive off the wire (multipart text
/// parts are all strings).
#[derive(Clone, Debug, Default)]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub rating: Option<String>,
    pub pages: Option<String>,
    pub published_year: Option<String>,
}

/// Parsed and range-checked book fields. `None` means the field was not
/// supplied, which is only acceptable for the optional fields or in a
/// partial update.
#[derive(Clone, Debug, Default)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub pages: Option<u32>,
    pub published_year: Option<i32>,
}

/// Validate a draft, collecting every violation.
///
/// With `require_core` set (the create path), title/author/genre/price/
/// description must be present; a partial update validates only the
/// fields that were supplied. Rating, pages, and published year are
/// optional in both modes.
pub fn validate_book_draft(draft: &BookDraft, require_core: bool) -> (BookFields, Violations) {
    let mut violations = Violations::new();
    let mut fields = BookFields::default();

    match draft.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => {
            let len = title.chars().count();
            if (2..=40).contains(&len) {
                fields.title = Some(title.to_string());
            } else {
                violations.push("title", "Title must be between 2 and 40 characters");
            }
        }
        Some(_) | None if require_core => violations.push("title", "Title is required"),
        _ => {}
    }

    match draft.author.as_deref().map(str::trim) {
        Some(author) if !author.is_empty() => fields.author = Some(author.to_string()),
        Some(_) | None if require_core => violations.push("author", "Author is required"),
        _ => {}
    }

    match draft.genre.as_deref().map(str::trim) {
        Some(genre) if !genre.is_empty() => fields.genre = Some(genre.to_string()),
        Some(_) | None if require_core => violations.push("genre", "Genre is required"),
        _ => {}
    }

    match draft.price.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<f64>() {
            Ok(price) if price >= 0.0 && price.is_finite() => fields.price = Some(price),
            _ => violations.push("price", "Price must be a positive number"),
        },
        Some(_) | None if require_core => violations.push("price", "Price is required"),
        _ => {}
    }

    match draft.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => {
            if description.chars().count() >= 10 {
                fields.description = Some(description.to_string());
            } else {
                violations.push("description", "Description must be at least 10 characters");
            }
        }
        Some(_) | None if require_core => violations.push("description", "Description is required"),
        _ => {}
    }

    if let Some(raw) = draft.rating.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        match raw.parse::<f64>() {
            Ok(rating) if (0.0..=5.0).contains(&rating) => fields.rating = Some(rating),
            _ => violations.push("rating", "Rating must be between 0 and 5"),
        }
    }

    if let Some(raw) = draft.pages.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        match raw.parse::<u32>() {
            Ok(pages) if pages >= 1 => fields.pages = Some(pages),
            _ => violations.push("pages", "Pages must be a positive number"),
        }
    }

    if let Some(raw) = draft
        .published_year
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let current_year = Utc::now().year();
        match raw.parse::<i32>() {
            Ok(year) if (1500..=current_year).contains(&year) => {
                fields.published_year = Some(year);
            }
            _ => violations.push("publishedYear", "Published year must be valid"),
        }
    }

    (fields, violations)
}
