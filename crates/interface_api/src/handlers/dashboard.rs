//! Dashboard handlers
//!
//! The dashboard is a fixed list of shortcut cards. Opening a card either
//! yields a navigation target or, for features that do not exist yet, the
//! coming-soon notification.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::dashboard::{
    ComingSoonResponse, DashboardCard, DashboardResponse, OpenCardResponse,
};
use crate::error::ApiError;
use crate::i18n;
use crate::AppState;

/// Route the new-quotes shortcut navigates to
const CALCULATOR_ROUTE: &str = "/calculator";

fn cards() -> Vec<DashboardCard> {
    vec![
        DashboardCard {
            id: "new-quotes".to_string(),
            title: i18n::message("dashboard-new-quotes-title"),
            description: i18n::message("dashboard-new-quotes"),
            target: Some(CALCULATOR_ROUTE.to_string()),
        },
        DashboardCard {
            id: "active-policies".to_string(),
            title: i18n::message("dashboard-active-policies-title"),
            description: i18n::message("dashboard-active-policies"),
            target: None,
        },
        DashboardCard {
            id: "reports".to_string(),
            title: i18n::message("dashboard-reports-title"),
            description: i18n::message("dashboard-reports"),
            target: None,
        },
    ]
}

/// Lists the dashboard shortcut cards
pub async fn list_cards(State(_state): State<AppState>) -> Json<DashboardResponse> {
    Json(DashboardResponse { cards: cards() })
}

/// Opens a card: a redirect for implemented targets, a toast otherwise
pub async fn open_card(
    State(_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OpenCardResponse>, ApiError> {
    let card = cards()
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown dashboard card: {}", id)))?;

    let response = match card.target {
        Some(target) => OpenCardResponse {
            redirect_to: Some(target),
            notification: None,
        },
        None => OpenCardResponse {
            redirect_to: None,
            notification: Some(i18n::notification("coming-soon-title", "coming-soon")),
        },
    };

    Ok(Json(response))
}

/// Settings is not implemented; always answers coming-soon
pub async fn settings(State(_state): State<AppState>) -> Json<ComingSoonResponse> {
    Json(ComingSoonResponse {
        notification: i18n::notification("coming-soon-title", "coming-soon"),
    })
}
