//! Session Lifecycle Tests
//!
//! Verifies the simulated login flow against the store:
//!
//! - Any non-empty credentials eventually set the flag
//! - Empty credentials never schedule a call or touch the flag
//! - Cancelling a pending login leaves the store untouched

use std::sync::Arc;
use std::time::Duration;

use domain_session::{
    Credentials, InMemorySessionStore, LoginService, SessionError, SessionStore,
};

fn store() -> Arc<InMemorySessionStore> {
    Arc::new(InMemorySessionStore::new())
}

#[tokio::test]
async fn test_login_sets_flag_after_delay() {
    let store = store();
    let service = LoginService::new(Duration::from_millis(10));

    let pending = service
        .spawn_login(
            Credentials::new("usuario@empresa.com", "secreto"),
            store.clone(),
        )
        .expect("non-empty credentials must be accepted");

    let state = pending.finish().await.expect("login must complete");
    assert!(state.is_active());
    assert!(store.load().await.unwrap().is_active());
}

#[tokio::test]
async fn test_empty_credentials_never_set_flag() {
    let store = store();
    let service = LoginService::new(Duration::from_millis(10));

    let result = service.spawn_login(Credentials::new("", "secreto"), store.clone());
    assert!(matches!(result, Err(SessionError::MissingCredentials(_))));

    // Nothing was scheduled, so the flag stays inactive
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!store.load().await.unwrap().is_active());
}

#[tokio::test]
async fn test_cancelled_login_leaves_store_untouched() {
    let store = store();
    let service = LoginService::new(Duration::from_millis(50));

    let pending = service
        .spawn_login(
            Credentials::new("usuario@empresa.com", "secreto"),
            store.clone(),
        )
        .unwrap();
    pending.cancel();

    // Wait well past the simulated delay: the aborted task must not have
    // written the flag.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(!store.load().await.unwrap().is_active());
}

#[tokio::test]
async fn test_finish_after_abort_reports_cancelled() {
    let store = store();
    let service = LoginService::new(Duration::from_millis(50));

    let pending = service
        .spawn_login(
            Credentials::new("usuario@empresa.com", "secreto"),
            store.clone(),
        )
        .unwrap();

    pending.abort_handle().abort();
    let result = pending.finish().await;

    assert!(matches!(result, Err(SessionError::Cancelled)));
    assert!(!store.load().await.unwrap().is_active());
}
