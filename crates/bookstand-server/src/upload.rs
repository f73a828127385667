use std::collections::HashMap;

use axum::extract::Multipart;
use bookstand_assets::{AssetCategory, AssetStore};

use crate::error::ApiError;

/// Everything a multipart request carried: plain text fields plus the
/// generated names of file parts already written to the asset store.
///
/// Files are stored as they stream in, before any field validation runs —
/// which is why rejection paths downstream must discard them. On an
/// intake-level failure this type cleans up after itself.
#[derive(Debug, Default)]
pub struct Intake {
    pub text: HashMap<String, String>,
    pub cover: Option<String>,
    pub book_file: Option<String>,
    pub profile_picture: Option<String>,
}

impl Intake {
    /// Drain a multipart stream, persisting known file fields.
    ///
    /// Unknown file fields are rejected (same contract as the original
    /// upload middleware); unknown text fields are kept and left to the
    /// handler to ignore.
    pub async fn read(mut multipart: Multipart, assets: &dyn AssetStore) -> Result<Self, ApiError> {
        let mut intake = Self::default();
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => {
                    tracing::debug!(%err, "malformed multipart body");
                    intake.discard_all(assets);
                    return Err(ApiError::bad_request("Malformed upload"));
                }
            };
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let Some(category) = AssetCategory::from_field_name(&name) else {
                    intake.discard_all(assets);
                    return Err(ApiError::bad_request("Invalid field name"));
                };
                let original = field.file_name().unwrap_or("file").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        tracing::debug!(%err, field = name, "failed reading upload");
                        intake.discard_all(assets);
                        return Err(ApiError::bad_request("Malformed upload"));
                    }
                };
                if bytes.is_empty() {
                    // Browsers send empty file parts for unfilled inputs.
                    continue;
                }
                let stored = match assets.store(category, &bytes, &original) {
                    Ok(stored) => stored,
                    Err(err) => {
                        tracing::error!(%err, field = name, "failed storing upload");
                        intake.discard_all(assets);
                        return Err(ApiError::server_error());
                    }
                };
                match category {
                    AssetCategory::Cover => intake.cover = Some(stored),
                    AssetCategory::BookFile => intake.book_file = Some(stored),
                    AssetCategory::ProfilePicture => intake.profile_picture = Some(stored),
                }
            } else {
                match field.text().await {
                    Ok(value) => {
                        intake.text.insert(name, value);
                    }
                    Err(err) => {
                        tracing::debug!(%err, field = name, "failed reading text field");
                        intake.discard_all(assets);
                        return Err(ApiError::bad_request("Malformed upload"));
                    }
                }
            }
        }
        Ok(intake)
    }

    /// A text field by name, if present.
    pub fn field(&self, name: &str) -> Option<String> {
        self.text.get(name).cloned()
    }

    /// Discard every file this intake stored. Used on paths that reject
    /// the request after the files already landed.
    pub fn discard_all(&self, assets: &dyn AssetStore) {
        if let Some(name) = &self.cover {
            assets.discard(AssetCategory::Cover, name);
        }
        if let Some(name) = &self.book_file {
            assets.discard(AssetCategory::BookFile, name);
        }
        if let Some(name) = &self.profile_picture {
            assets.discard(AssetCategory::ProfilePicture, name);
        }
    }
}
