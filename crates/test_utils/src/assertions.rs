//! Custom Assertion Helpers
//!
//! Domain-specific assertions for premiums and JSON API payloads.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use core_kernel::{Currency, Money};
use domain_rating::{InsuranceType, Quote};

/// Canonical (age, type, coverage) -> annual premium table
///
/// Shared between unit and integration tests so both suites agree on the
/// expected tariff output for the reference scenarios.
pub static CANONICAL_PREMIUMS: Lazy<Vec<((i64, InsuranceType, Decimal), Decimal)>> =
    Lazy::new(|| {
        vec![
            ((30, InsuranceType::Auto, dec!(100000)), dec!(1300.00)),
            ((20, InsuranceType::Health, dec!(50000)), dec!(1125.00)),
            ((65, InsuranceType::Home, dec!(200000)), dec!(3240.00)),
        ]
    });

/// Asserts a quote's annual premium matches the expected EUR amount
pub fn assert_annual_premium(quote: &Quote, expected: Decimal) {
    assert_eq!(
        quote.annual_premium,
        Money::new(expected, Currency::EUR),
        "annual premium mismatch: got {}, expected {} EUR",
        quote.annual_premium,
        expected
    );
}

/// Asserts the monthly premium is exactly one twelfth of the annual
pub fn assert_monthly_is_annual_over_twelve(quote: &Quote) {
    let expected = quote.annual_premium.amount() / dec!(12);
    assert_eq!(
        quote.monthly_premium.amount(),
        expected,
        "monthly premium is not annual / 12"
    );
}

/// Asserts a JSON body carries a notification with the given title
pub fn assert_notification_title(body: &Value, expected_title: &str) {
    let title = body
        .get("notification")
        .and_then(|n| n.get("title"))
        .and_then(|t| t.as_str());
    assert_eq!(
        title,
        Some(expected_title),
        "notification title mismatch in body: {body}"
    );
}

/// Asserts a JSON field holds the given string value
pub fn assert_json_str(body: &Value, field: &str, expected: &str) {
    let actual = body.get(field).and_then(|v| v.as_str());
    assert_eq!(
        actual,
        Some(expected),
        "field `{field}` mismatch in body: {body}"
    );
}
