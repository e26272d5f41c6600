//! Auth DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::Notification;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    pub redirect_to: String,
    pub notification: Notification,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub authenticated: bool,
    pub redirect_to: String,
    pub notification: Notification,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}
