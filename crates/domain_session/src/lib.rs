//! Session Domain
//!
//! This crate models the application's single logical session: an explicit
//! `AuthState` value with a `login`/`logout` lifecycle, a `SessionStore`
//! port for the one persisted flag, and a simulated remote login call.
//!
//! There is deliberately no credential verification and no token: any
//! non-empty email/password pair is accepted after a fixed artificial
//! delay. The simulated call runs as an abortable task so that cancelling
//! it before the delay elapses can never write the store.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_session::{Credentials, InMemorySessionStore, LoginService};
//!
//! let store = Arc::new(InMemorySessionStore::new());
//! let service = LoginService::new(Duration::from_millis(1500));
//! let pending = service.spawn_login(credentials, store.clone());
//! let state = pending.finish().await?;
//! assert!(state.is_active());
//! ```

pub mod error;
pub mod login;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use login::{Credentials, LoginService, PendingLogin};
pub use session::AuthState;
pub use store::{InMemorySessionStore, SessionStore, SESSION_KEY};
