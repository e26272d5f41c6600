//! Auth handlers
//!
//! Login is a mocked flow: any non-empty email/password pair succeeds
//! after the configured artificial delay. There is no credential
//! verification by design.

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain_session::{AuthState, Credentials};

use crate::dto::auth::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse};
use crate::error::ApiError;
use crate::i18n;
use crate::AppState;

/// Logs in, activating the single session after the simulated delay
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request
        .validate()
        .map_err(|_| ApiError::Validation(i18n::message("login-missing-fields")))?;

    let credentials = Credentials::new(request.email, request.password);
    let pending = state
        .login
        .spawn_login(credentials, state.sessions.clone())?;
    let auth = pending.finish().await?;

    info!("login succeeded");

    Ok(Json(LoginResponse {
        authenticated: auth.is_active(),
        redirect_to: "/dashboard".to_string(),
        notification: i18n::notification("login-success-title", "login-success"),
    }))
}

/// Logs out, clearing the session flag
pub async fn logout(State(state): State<AppState>) -> Result<Json<LogoutResponse>, ApiError> {
    state.sessions.clear().await?;

    info!("session closed");

    Ok(Json(LogoutResponse {
        authenticated: AuthState::inactive().is_active(),
        redirect_to: "/".to_string(),
        notification: i18n::notification("logout-title", "logout-success"),
    }))
}

/// Returns the current session flag
pub async fn session(State(state): State<AppState>) -> Result<Json<SessionResponse>, ApiError> {
    let auth = state.sessions.load().await?;
    Ok(Json(SessionResponse {
        authenticated: auth.is_active(),
    }))
}
