//! Core Kernel - Foundational types for the quoting system
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Money types with precise decimal arithmetic
//! - Locale-aware currency formatting
//! - Common error types

pub mod error;
pub mod money;

pub use error::CoreError;
pub use money::{Currency, Money, MoneyError};
