//! Storage Infrastructure
//!
//! Adapter implementations for the `domain_session` store port. The whole
//! system persists exactly one key-value pair, so the production adapter is
//! a flat file holding the string `true` while a session is active and
//! absent otherwise, mirroring the single `isAuthenticated` entry the
//! original client kept in local storage.

pub mod file_store;

pub use file_store::FileSessionStore;
