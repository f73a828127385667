use axum::extract::{Multipart, Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use bookstand_assets::AssetCategory;
use bookstand_directory::{Registration, UserPatch};
use bookstand_types::{RecordId, Role};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::extract::MaybeUser;
use crate::session::{clear_cookie, session_cookie, token_from_headers};
use crate::state::AppState;
use crate::upload::Intake;

/// `POST /auth/register` — multipart with an optional `profilePicture`.
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let intake = Intake::read(multipart, state.assets.as_ref()).await?;
    let registration = Registration {
        full_name: intake.field("fullName"),
        email: intake.field("email"),
        password: intake.field("password"),
        confirm_password: intake.field("confirmPassword"),
        role: intake.field("userType"),
        terms_accepted: intake.field("termsAccepted"),
    };

    match state
        .directory
        .register(&registration, intake.profile_picture.clone())
    {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": "User registered successfully",
            })),
        )),
        Err(err) => {
            // The picture landed before validation ran; a rejected
            // registration must not leave it orphaned.
            if let Some(name) = &intake.profile_picture {
                state.assets.discard(AssetCategory::ProfilePicture, name);
            }
            Err(err.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` — JSON credentials in, session cookie out.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.directory.authenticate(&body.email, &body.password)?;
    let token = state.sessions.create(&user);
    let snapshot = state
        .sessions
        .get(&token)
        .ok_or_else(ApiError::server_error)?;
    tracing::info!(user = %user.id, "login");

    let cookie = session_cookie(&state.config.cookie_name, &token, state.config.session_ttl);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({
            "success": true,
            "message": "Login successful",
            "isLoggedIn": true,
            "user": snapshot,
        })),
    ))
}

/// `GET /auth/me` — the current persisted record for the session's user.
pub async fn me(
    State(state): State<AppState>,
    MaybeUser(current): MaybeUser,
) -> Result<impl IntoResponse, ApiError> {
    let Some(current) = current else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "loggedIn": false, "user": null })),
        ));
    };
    // Fresh read: the session snapshot may be stale relative to the record.
    let user = state.directory.get(&current.user.id)?;
    Ok((
        StatusCode::OK,
        Json(json!({ "loggedIn": true, "user": user.public() })),
    ))
}

/// `POST /auth/logout` — destroy the session, clear the cookie.
/// Idempotent: logging out without a session still succeeds.
pub async fn logout(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> impl IntoResponse {
    if let Some(token) = token_from_headers(&headers, &state.config.cookie_name) {
        state.sessions.destroy(&token);
    }
    (
        AppendHeaders([(SET_COOKIE, clear_cookie(&state.config.cookie_name))]),
        Json(json!({
            "success": true,
            "message": "Logged out successfully",
        })),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub profile_picture: Option<String>,
    pub terms_accepted: Option<bool>,
}

/// `PUT /auth/user/:id` — merge profile fields, then patch the caller's
/// session snapshot so it stays consistent when editing their own record.
pub async fn update_user(
    State(state): State<AppState>,
    MaybeUser(current): MaybeUser,
    Path(raw_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = RecordId::parse(&raw_id).map_err(|_| ApiError::bad_request("Invalid user ID"))?;

    let role = match body.user_type.as_deref() {
        Some(raw) => Some(raw.parse::<Role>().map_err(|_| {
            ApiError::validation(vec![bookstand_types::FieldViolation::new(
                "userType",
                "Invalid user type selected.",
            )])
        })?),
        None => None,
    };

    let patch = UserPatch {
        full_name: body.full_name,
        email: body.email,
        role,
        profile_picture: body.profile_picture,
        terms_accepted: body.terms_accepted,
    };
    let user = state.directory.update_profile(&id, patch)?;

    if let Some(current) = current {
        if current.user.id == id {
            state.sessions.patch(&current.token, &user);
        }
    }

    Ok(Json(json!({
        "success": true,
        "message": "User updated successfully",
        "user": user.public(),
    })))
}
