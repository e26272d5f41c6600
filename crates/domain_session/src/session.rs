//! Auth state value object
//!
//! The session is a single boolean with no expiry, no token, and no server
//! validation. Modeled as an explicit value with a constructor-style
//! lifecycle instead of ambient storage, so the core stays testable.

use serde::{Deserialize, Serialize};

/// Whether a session is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthState {
    active: bool,
}

impl AuthState {
    /// No session; the unauthenticated starting state
    pub const fn inactive() -> Self {
        Self { active: false }
    }

    /// An active session
    pub const fn active() -> Self {
        Self { active: true }
    }

    /// Returns true while a session is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Transitions to the logged-in state
    pub fn login(self) -> Self {
        Self::active()
    }

    /// Transitions to the logged-out state
    pub fn logout(self) -> Self {
        Self::inactive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let state = AuthState::default();
        assert!(!state.is_active());

        let logged_in = state.login();
        assert!(logged_in.is_active());

        let logged_out = logged_in.logout();
        assert!(!logged_out.is_active());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        assert_eq!(AuthState::active().login(), AuthState::active());
        assert_eq!(AuthState::inactive().logout(), AuthState::inactive());
    }
}
