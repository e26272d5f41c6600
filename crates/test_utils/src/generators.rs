//! Property-Based Test Data Generators
//!
//! Proptest strategies over the tariff's input space, including the
//! permissive ranges the formula deliberately accepts.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_rating::{InsuranceType, QuoteForm};

/// Ages in the flat bracket (no age adjustment)
pub fn flat_band_age() -> impl Strategy<Value = i64> {
    25i64..=60
}

/// Ages in the under-25 bracket, including the permissive negatives
pub fn young_age() -> impl Strategy<Value = i64> {
    -50i64..25
}

/// Ages in the over-60 bracket
pub fn senior_age() -> impl Strategy<Value = i64> {
    61i64..=120
}

/// Any age the form accepts
pub fn any_age() -> impl Strategy<Value = i64> {
    -50i64..=120
}

/// Any of the four products
pub fn any_insurance_type() -> impl Strategy<Value = InsuranceType> {
    (0usize..4).prop_map(|i| InsuranceType::all()[i])
}

/// Positive coverage amounts with cent precision
pub fn positive_coverage() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Complete, valid quote forms
pub fn complete_form() -> impl Strategy<Value = QuoteForm> {
    (any_age(), any_insurance_type(), positive_coverage()).prop_map(
        |(age, insurance_type, coverage)| QuoteForm {
            customer_name: "Cliente Propiedad".to_string(),
            age: Some(age),
            insurance_type: Some(insurance_type),
            coverage_amount: Some(coverage),
        },
    )
}
