//! Dashboard DTOs

use serde::{Deserialize, Serialize};

use crate::dto::Notification;

/// A navigation shortcut card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Route the card navigates to; `None` means not yet implemented
    pub target: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub cards: Vec<DashboardCard>,
}

/// Result of opening a card: a navigation target or a coming-soon toast
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenCardResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComingSoonResponse {
    pub notification: Notification,
}
