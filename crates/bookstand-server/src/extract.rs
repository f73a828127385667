use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::session::{token_from_headers, SessionUser};
use crate::state::AppState;

/// Per-request identity context.
///
/// Resolves the session cookie to the stored identity snapshot. Routes
/// that take this extractor are the protected ones: an anonymous or
/// expired session is rejected with 401 before the handler body runs.
pub struct CurrentUser {
    pub user: SessionUser,
    /// The session token, kept so handlers can patch or destroy the
    /// session they arrived on.
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers, &state.config.cookie_name)
            .ok_or_else(ApiError::unauthorized)?;
        let user = state.sessions.get(&token).ok_or_else(ApiError::unauthorized)?;
        Ok(Self { user, token })
    }
}

/// Like [`CurrentUser`] but never rejects; anonymous requests resolve to
/// `None`. Used by endpoints that report login state instead of
/// requiring it.
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(CurrentUser::from_request_parts(parts, state).await.ok()))
    }
}
