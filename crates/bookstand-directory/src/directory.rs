use std::sync::Arc;

use bookstand_store::{StoreError, UserStore};
use bookstand_types::{FieldViolation, RecordId, Role, User};
use chrono::Utc;

use crate::error::{DirectoryError, DirectoryResult};
use crate::password::{hash_password, verify_password};
use crate::register::{normalize_email, validate_registration, Registration};

/// Partial profile update; `None` fields keep their stored values.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub profile_picture: Option<String>,
    pub terms_accepted: Option<bool>,
}

/// The user directory: account creation, credentials, and profile state.
pub struct UserDirectory {
    users: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a new account.
    ///
    /// All field rules are evaluated and the duplicate-email check is
    /// merged into the same batch, so the client sees every problem in one
    /// 422. The lookup here is advisory; the store's unique insert is the
    /// authority, and a race that slips past the lookup still fails with
    /// the same violation shape.
    pub fn register(
        &self,
        input: &Registration,
        profile_picture: Option<String>,
    ) -> DirectoryResult<User> {
        let (valid, mut violations) = validate_registration(input);

        let email = normalize_email(input.email.as_deref().unwrap_or(""));
        if !email.is_empty() && self.users.find_by_email(&email)?.is_some() {
            violations.push("email", "Email already registered");
        }
        let Some(valid) = valid else {
            return Err(DirectoryError::Validation(violations.into_vec()));
        };
        if !violations.is_empty() {
            return Err(DirectoryError::Validation(violations.into_vec()));
        }

        let now = Utc::now();
        let user = User {
            id: RecordId::new(),
            email: valid.email,
            password_hash: hash_password(&valid.password)?,
            full_name: valid.full_name,
            role: valid.role,
            profile_picture,
            terms_accepted: true,
            created_at: now,
            updated_at: now,
        };

        match self.users.insert(user.clone()) {
            Ok(()) => {
                tracing::info!(user = %user.id, "registered user");
                Ok(user)
            }
            Err(StoreError::DuplicateEmail(_)) => Err(DirectoryError::Validation(vec![
                FieldViolation::new("email", "Email already registered"),
            ])),
            Err(err) => Err(err.into()),
        }
    }

    /// Check credentials and return the account on success.
    ///
    /// Unknown email and wrong password both yield the same
    /// [`DirectoryError::InvalidCredentials`] so the response never
    /// discloses whether an address is registered.
    pub fn authenticate(&self, email: &str, password: &str) -> DirectoryResult<User> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email)? else {
            return Err(DirectoryError::InvalidCredentials);
        };
        if !verify_password(password, &user.password_hash) {
            return Err(DirectoryError::InvalidCredentials);
        }
        Ok(user)
    }

    /// Fetch the current persisted record for an account.
    pub fn get(&self, id: &RecordId) -> DirectoryResult<User> {
        self.users.get(id)?.ok_or(DirectoryError::NotFound)
    }

    /// Merge a patch into the stored record and return the result.
    ///
    /// The caller (the session layer) is responsible for refreshing any
    /// session snapshot it holds for this user.
    pub fn update_profile(&self, id: &RecordId, patch: UserPatch) -> DirectoryResult<User> {
        let mut user = self.get(id)?;
        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = patch.email {
            user.email = normalize_email(&email);
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(profile_picture) = patch.profile_picture {
            user.profile_picture = Some(profile_picture);
        }
        if let Some(terms_accepted) = patch.terms_accepted {
            user.terms_accepted = terms_accepted;
        }
        user.updated_at = Utc::now();

        match self.users.update(user.clone()) {
            Ok(true) => Ok(user),
            Ok(false) => Err(DirectoryError::NotFound),
            Err(StoreError::DuplicateEmail(_)) => Err(DirectoryError::Validation(vec![
                FieldViolation::new("email", "Email already registered"),
            ])),
            Err(err) => Err(err.into()),
        }
    }
}
