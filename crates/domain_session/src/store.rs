//! Session store port
//!
//! The only persisted state in the whole system is one key-value pair. The
//! port keeps the domain free of any storage medium; adapters decide where
//! the flag lives (a file in production, memory in tests).

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::SessionError;
use crate::session::AuthState;

/// Storage key for the session flag
pub const SESSION_KEY: &str = "isAuthenticated";

/// Port for reading and writing the single session flag
///
/// One logical session per running instance; implementations must be safe
/// to share across handler tasks.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Reads the current auth state; an absent flag is the inactive state
    async fn load(&self) -> Result<AuthState, SessionError>;

    /// Persists the given auth state
    async fn save(&self, state: AuthState) -> Result<(), SessionError>;

    /// Removes the flag entirely, returning to the inactive state
    async fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory adapter for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: RwLock<AuthState>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<AuthState, SessionError> {
        let guard = self.state.read().unwrap_or_else(|e| e.into_inner());
        Ok(*guard)
    }

    async fn save(&self, state: AuthState) -> Result<(), SessionError> {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        *guard = state;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.save(AuthState::inactive()).await
    }
}
