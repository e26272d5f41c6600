//! API error handling
//!
//! Validation failures carry the Spanish notification the client shows as
//! a toast; unauthenticated requests carry the login redirect plus the
//! originally requested path (bookkeeping only, never consumed).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_rating::RatingError;
use domain_session::SessionError;

use crate::dto::Notification;
use crate::i18n;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized { from: Option<String> },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "not_found".to_string(),
                    message: msg,
                    notification: None,
                    redirect_to: None,
                    from: None,
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "bad_request".to_string(),
                    message: msg,
                    notification: None,
                    redirect_to: None,
                    from: None,
                },
            ),
            ApiError::Unauthorized { from } => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "unauthorized".to_string(),
                    message: "Unauthorized".to_string(),
                    notification: None,
                    redirect_to: Some("/".to_string()),
                    from,
                },
            ),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "validation_error".to_string(),
                    message: msg.clone(),
                    notification: Some(Notification {
                        title: i18n::message("error-title"),
                        description: msg,
                    }),
                    redirect_to: None,
                    from: None,
                },
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "internal_error".to_string(),
                    message: msg,
                    notification: None,
                    redirect_to: None,
                    from: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MissingCredentials(_) => {
                ApiError::Validation(i18n::message("login-missing-fields"))
            }
            SessionError::Cancelled => ApiError::Internal(err.to_string()),
            SessionError::Storage(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<RatingError> for ApiError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::MissingField(_) => {
                ApiError::Validation(i18n::message("quote-missing-fields"))
            }
            RatingError::Money(_) => ApiError::Internal(err.to_string()),
        }
    }
}
