//! Simulated login call
//!
//! Stands in for a remote authentication service: validates that both
//! fields are non-empty, waits a fixed artificial delay, then activates the
//! session. Any non-empty credential pair succeeds.
//!
//! The call runs as a spawned, abortable task (`PendingLogin`). Cancelling
//! before the delay elapses aborts the task ahead of the store write, so a
//! torn-down caller can never be mutated after disposal.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::SessionError;
use crate::session::AuthState;
use crate::store::SessionStore;

/// Login form input
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Fails when either field is empty; no other verification exists
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.email.trim().is_empty() {
            return Err(SessionError::MissingCredentials("email".to_string()));
        }
        if self.password.trim().is_empty() {
            return Err(SessionError::MissingCredentials("password".to_string()));
        }
        Ok(())
    }
}

/// Simulates the asynchronous remote login call
#[derive(Debug, Clone)]
pub struct LoginService {
    delay: Duration,
}

impl LoginService {
    /// Creates a service with the given artificial delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Spawns the simulated call as an abortable task
    ///
    /// On completion the task persists the active state through the store
    /// and resolves with it. Validation runs before spawning, so an empty
    /// field fails immediately and nothing is scheduled.
    pub fn spawn_login(
        &self,
        credentials: Credentials,
        store: Arc<dyn SessionStore>,
    ) -> Result<PendingLogin, SessionError> {
        credentials.validate()?;

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let state = AuthState::inactive().login();
            store.save(state).await?;
            tracing::info!(email = %credentials.email, "session activated");
            Ok(state)
        });

        Ok(PendingLogin { handle })
    }
}

/// A login call in flight
///
/// Dropping the handle detaches the task; call `cancel` to abort it so the
/// session flag is guaranteed untouched.
#[derive(Debug)]
pub struct PendingLogin {
    handle: JoinHandle<Result<AuthState, SessionError>>,
}

impl PendingLogin {
    /// Aborts the pending call before it can write the store
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Returns a handle that can abort the call remotely
    pub fn abort_handle(&self) -> tokio::task::AbortHandle {
        self.handle.abort_handle()
    }

    /// Waits for the simulated call to complete
    pub async fn finish(self) -> Result<AuthState, SessionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_cancelled() => Err(SessionError::Cancelled),
            Err(join_error) => Err(SessionError::storage(join_error.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_rejected() {
        assert!(Credentials::new("", "secret").validate().is_err());
        assert!(Credentials::new("ana@empresa.com", "").validate().is_err());
        assert!(Credentials::new("  ", "secret").validate().is_err());
        assert!(Credentials::new("ana@empresa.com", "secret")
            .validate()
            .is_ok());
    }
}
