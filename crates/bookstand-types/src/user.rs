use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::role::Role;

/// A user account as persisted.
///
/// Carries the password hash and therefore never crosses the wire directly;
/// responses use [`PublicUser`] instead.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: RecordId,
    /// Normalized (lowercased, trimmed) address. Globally unique.
    pub email: String,
    /// bcrypt hash. Never serialized.
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    /// Generated asset file name of the profile picture, if one was uploaded.
    pub profile_picture: Option<String>,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The wire-safe projection of this account.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            profile_picture: self.profile_picture.clone(),
            terms_accepted: self.terms_accepted,
            created_at: self.created_at,
        }
    }
}

/// A user account with the password hash stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: RecordId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub profile_picture: Option<String>,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: RecordId::new(),
            email: "reader@example.com".into(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
            full_name: "Avid Reader".into(),
            role: Role::Reader,
            profile_picture: None,
            terms_accepted: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn public_projection_drops_hash() {
        let user = sample_user();
        let public = user.public();
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$"));
        assert!(json.contains("\"fullName\":\"Avid Reader\""));
    }

    #[test]
    fn public_wire_shape_is_camel_case() {
        let public = sample_user().public();
        let value = serde_json::to_value(&public).unwrap();
        assert!(value.get("fullName").is_some());
        assert!(value.get("profilePicture").is_some());
        assert!(value.get("termsAccepted").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("full_name").is_none());
    }
}
