//! Toast-style user notification payload

use serde::{Deserialize, Serialize};

/// A transient user-facing notification with a title and description
///
/// The client renders these as toasts; the server only ever emits them as
/// part of a response, there is no notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}
