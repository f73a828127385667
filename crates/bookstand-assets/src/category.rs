use std::fmt;

/// The kind of binary asset, which determines its storage directory and
/// its multipart field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Book cover image.
    Cover,
    /// Book content file (PDF).
    BookFile,
    /// Account profile picture.
    ProfilePicture,
}

impl AssetCategory {
    /// Directory for this category, relative to the uploads root.
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::Cover => "books/covers",
            Self::BookFile => "books/bookFiles",
            Self::ProfilePicture => "users/profilePictures",
        }
    }

    /// The multipart field name clients upload under.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::BookFile => "bookFile",
            Self::ProfilePicture => "profilePicture",
        }
    }

    /// Resolve a multipart field name to a category.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "cover" => Some(Self::Cover),
            "bookFile" => Some(Self::BookFile),
            "profilePicture" => Some(Self::ProfilePicture),
            _ => None,
        }
    }

    /// Public URL path for an asset in this category.
    pub fn url_path(&self, name: &str) -> String {
        format!("/uploads/{}/{}", self.subdir(), name)
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
