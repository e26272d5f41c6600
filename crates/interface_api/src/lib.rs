//! HTTP API Layer
//!
//! This crate provides the REST API for the quoting system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: auth, dashboard, quotes, health
//! - **Middleware**: session guard, audit logging
//! - **DTOs**: Request/Response objects carrying toast notifications
//! - **i18n**: the embedded Spanish message catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_session::{LoginService, SessionStore};

use crate::config::ApiConfig;
use crate::handlers::{auth, dashboard, health, quotes};
use crate::middleware::{audit_middleware, session_guard};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub login: LoginService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `sessions` - The session flag store
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(sessions: Arc<dyn SessionStore>, config: ApiConfig) -> Router {
    let login = LoginService::new(Duration::from_millis(config.login_delay_ms));
    let state = AppState {
        sessions,
        login,
        config,
    };

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Login is the unauthenticated entry point
    let auth_entry = Router::new().route("/auth/login", post(auth::login));

    // Everything else sits behind the session guard. The audit layer is
    // outermost so that guard-rejected requests are logged too.
    let protected_routes = Router::new()
        .route("/auth/session", get(auth::session))
        .route("/auth/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::list_cards))
        .route("/dashboard/cards/:id/open", post(dashboard::open_card))
        .route("/settings", post(dashboard::settings))
        .route("/quotes", post(quotes::calculate))
        .route("/quotes/defaults", get(quotes::defaults))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            session_guard,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", auth_entry.merge(protected_routes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
