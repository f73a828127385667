use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use axum::http::header::{HeaderMap, COOKIE};
use bookstand_types::{RecordId, Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The identity snapshot held in a session.
///
/// A copy of select user fields taken at login, distinct from the
/// authoritative record. It is only refreshed when the profile-update
/// path explicitly patches it; other edits leave it stale for the
/// remainder of the session.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub profile_picture: Option<String>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
            terms_accepted: user.terms_accepted,
            created_at: user.created_at,
            profile_picture: user.profile_picture.clone(),
        }
    }
}

#[derive(Clone, Debug)]
struct Session {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// In-memory session store with absolute expiry.
///
/// The gate's state machine: a request is Anonymous until `create` (login)
/// issues a token, and falls back to Anonymous on `destroy` (logout) or
/// when the absolute TTL from creation elapses. The TTL does not slide.
pub struct SessionStore {
    ttl: chrono::Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::hours(24)),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a session for a freshly authenticated user, returning the
    /// opaque token that goes into the cookie.
    pub fn create(&self, user: &User) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user: SessionUser::from(user),
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions
            .write()
            .expect("lock poisoned")
            .insert(token.clone(), session);
        token
    }

    /// Resolve a token to its identity snapshot.
    ///
    /// An expired session is removed on the way out and resolves to
    /// `None`, same as a token that never existed.
    pub fn get(&self, token: &str) -> Option<SessionUser> {
        {
            let sessions = self.sessions.read().expect("lock poisoned");
            match sessions.get(token) {
                Some(session) if Utc::now() < session.expires_at => {
                    return Some(session.user.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Expired: drop it under the write lock.
        self.sessions.write().expect("lock poisoned").remove(token);
        None
    }

    /// Patch the snapshot after a profile update so the session stays
    /// consistent with the record for the rest of its lifetime.
    pub fn patch(&self, token: &str, user: &User) {
        let mut sessions = self.sessions.write().expect("lock poisoned");
        if let Some(session) = sessions.get_mut(token) {
            session.user.full_name = user.full_name.clone();
            session.user.email = user.email.clone();
            session.user.role = user.role;
            session.user.profile_picture = user.profile_picture.clone();
        }
    }

    /// Destroy a session. Destroying an unknown token is a no-op.
    pub fn destroy(&self, token: &str) {
        self.sessions.write().expect("lock poisoned").remove(token);
    }

    /// Number of live (possibly expired-but-unswept) sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the `Set-Cookie` value for a fresh session.
pub fn session_cookie(name: &str, token: &str, ttl: Duration) -> String {
    format!(
        "{name}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl.as_secs()
    )
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session token from a request's `Cookie` header(s).
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    for value in headers.get_all(COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((name, token)) = pair.trim().split_once('=') {
                if name == cookie_name && !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: RecordId::new(),
            email: "s@example.com".into(),
            password_hash: "$2b$12$hash".into(),
            full_name: "Session User".into(),
            role: Role::Reader,
            profile_picture: None,
            terms_accepted: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_then_get() {
        let store = SessionStore::new(Duration::from_secs(60));
        let user = sample_user();
        let token = store.create(&user);
        let snapshot = store.get(&token).unwrap();
        assert_eq!(snapshot.id, user.id);
        assert_eq!(snapshot.email, "s@example.com");
    }

    #[test]
    fn unknown_token_is_none() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn expiry_is_absolute_from_creation() {
        let store = SessionStore::new(Duration::ZERO);
        let token = store.create(&sample_user());
        // TTL of zero means the session is expired the moment it exists.
        assert!(store.get(&token).is_none());
        // And the expired entry was swept.
        assert!(store.is_empty());
    }

    #[test]
    fn destroy_is_idempotent() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create(&sample_user());
        store.destroy(&token);
        store.destroy(&token);
        assert!(store.get(&token).is_none());
    }

    #[test]
    fn patch_updates_snapshot_in_place() {
        let store = SessionStore::new(Duration::from_secs(60));
        let mut user = sample_user();
        let token = store.create(&user);

        user.full_name = "Renamed".into();
        user.role = Role::Author;
        store.patch(&token, &user);

        let snapshot = store.get(&token).unwrap();
        assert_eq!(snapshot.full_name, "Renamed");
        assert_eq!(snapshot.role, Role::Author);
    }

    #[test]
    fn cookie_round_trip_through_headers() {
        let cookie = session_cookie("bookstand.sid", "tok123", Duration::from_secs(86_400));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=86400"));

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("other=1; bookstand.sid=tok123; theme=dark"),
        );
        assert_eq!(
            token_from_headers(&headers, "bookstand.sid").as_deref(),
            Some("tok123")
        );
        assert!(token_from_headers(&headers, "missing").is_none());
    }

    #[test]
    fn clear_cookie_zeroes_max_age() {
        assert!(clear_cookie("bookstand.sid").contains("Max-Age=0"));
    }
}
