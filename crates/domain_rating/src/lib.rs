//! Tariff Rating Domain
//!
//! This crate implements the quote calculator: the transient form state an
//! agent fills in, and the deterministic premium formula applied to it.
//!
//! # Pricing rule
//!
//! ```text
//! base    = coverage * 0.01
//! age     < 25 -> x1.5    age > 60 -> x1.8    (25..=60: no adjustment)
//! life x1.2   health x1.5   auto x1.3   home x0.9
//! annual  = round_half_up(base, 2dp)
//! monthly = annual / 12
//! ```
//!
//! Factors compose multiplicatively, age factor first. The calculation is a
//! pure function of the form values; nothing is cached or persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{InsuranceType, QuoteForm};
//!
//! let mut form = QuoteForm::new();
//! form.customer_name = "María López".to_string();
//! form.age = Some(30);
//! form.insurance_type = Some(InsuranceType::Auto);
//!
//! let quote = form.calculate()?;
//! assert_eq!(quote.annual_premium.format_localized(), "1.300,00 €");
//! ```

pub mod error;
pub mod insurance_type;
pub mod quote;
pub mod rating;

pub use error::RatingError;
pub use insurance_type::InsuranceType;
pub use quote::{Quote, QuoteField, QuoteForm, DEFAULT_COVERAGE};
pub use rating::{age_factor, annual_premium};
