use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::category::AssetCategory;
use crate::error::{AssetError, AssetResult};
use crate::name::{generate_name, sanitize};
use crate::traits::AssetStore;

/// Filesystem-backed asset store.
///
/// Layout under the uploads root mirrors the public URL space:
///
/// ```text
/// uploads/
///   books/covers/
///   books/bookFiles/
///   users/profilePictures/
/// ```
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Open a store rooted at `root`, creating the category directories.
    pub fn open(root: impl Into<PathBuf>) -> AssetResult<Self> {
        let root = root.into();
        for category in [
            AssetCategory::Cover,
            AssetCategory::BookFile,
            AssetCategory::ProfilePicture,
        ] {
            fs::create_dir_all(root.join(category.subdir()))?;
        }
        Ok(Self { root })
    }

    /// The uploads root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, category: AssetCategory, name: &str) -> PathBuf {
        // Names are generated by this store, but re-sanitize on the way in
        // so a stored path can never escape the category directory.
        self.root.join(category.subdir()).join(sanitize(name))
    }
}

impl AssetStore for FsAssetStore {
    fn store(
        &self,
        category: AssetCategory,
        bytes: &[u8],
        original_name: &str,
    ) -> AssetResult<String> {
        if bytes.is_empty() {
            return Err(AssetError::Empty);
        }
        // create_new closes the same-millisecond collision window: on a
        // taken name, retry with a numeric suffix.
        let base = generate_name(original_name);
        for attempt in 0..16 {
            let name = if attempt == 0 {
                base.clone()
            } else {
                format!("{attempt}-{base}")
            };
            let path = self.path_of(category, &name);
            match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    use std::io::Write;
                    file.write_all(bytes)?;
                    return Ok(name);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            }
        }
        Err(AssetError::NameExhausted(base))
    }

    fn delete(&self, category: AssetCategory, name: &str) -> AssetResult<bool> {
        match fs::remove_file(self.path_of(category, name)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn exists(&self, category: AssetCategory, name: &str) -> AssetResult<bool> {
        Ok(self.path_of(category, name).is_file())
    }

    fn read(&self, category: AssetCategory, name: &str) -> AssetResult<Option<Vec<u8>>> {
        match fs::read(self.path_of(category, name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
