//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Session guard middleware
///
/// Reads the session flag before any protected handler runs. When the flag
/// is inactive the request is rejected with the login redirect and the
/// originally requested path.
pub async fn session_guard(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = state.sessions.load().await?;

    if !auth.is_active() {
        warn!(path = %request.uri().path(), "unauthenticated request, redirecting to login");
        return Err(ApiError::Unauthorized {
            from: Some(request.uri().path().to_string()),
        });
    }

    Ok(next.run(request).await)
}

/// Audit logging middleware
///
/// Logs every request to the protected tree with a correlation id for
/// debugging. Layered outside the session guard, so rejected requests
/// are logged with their 401 status as well.
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();

    let start = Utc::now();
    let response = next.run(request).await;
    let duration = Utc::now() - start;

    info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        status = %response.status().as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
