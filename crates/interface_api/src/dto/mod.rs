//! Request/Response data transfer objects

pub mod auth;
pub mod dashboard;
pub mod notification;
pub mod quote;

pub use notification::Notification;
