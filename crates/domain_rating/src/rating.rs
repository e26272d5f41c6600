//! The premium formula
//!
//! A pure function of age, product type, and coverage amount. Age and
//! coverage are deliberately not range-checked: the tariff accepts whatever
//! the form carries, so a negative age simply lands in the under-25 bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};

use crate::insurance_type::InsuranceType;

/// Coverage-to-base rate: one percent of the covered amount
const BASE_RATE: Decimal = dec!(0.01);

/// Returns the age multiplier
///
/// Under 25 pays a 1.5x surcharge, over 60 pays 1.8x; ages 25..=60
/// inclusive carry no adjustment.
pub fn age_factor(age: i64) -> Decimal {
    if age < 25 {
        dec!(1.5)
    } else if age > 60 {
        dec!(1.8)
    } else {
        dec!(1.0)
    }
}

/// Calculates the annual premium in EUR
///
/// Applies the base rate, then the age factor, then the product factor, in
/// that fixed order, and rounds the result half-up to two decimal places.
pub fn annual_premium(age: i64, insurance_type: InsuranceType, coverage: Decimal) -> Money {
    let base = coverage * BASE_RATE;
    let rated = base * age_factor(age) * insurance_type.factor();

    tracing::debug!(
        age,
        insurance_type = %insurance_type,
        %coverage,
        premium = %rated,
        "rated quote"
    );

    Money::new(rated, Currency::EUR).round_half_up()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_brackets() {
        assert_eq!(age_factor(24), dec!(1.5));
        assert_eq!(age_factor(25), dec!(1.0));
        assert_eq!(age_factor(60), dec!(1.0));
        assert_eq!(age_factor(61), dec!(1.8));
    }

    #[test]
    fn test_negative_age_takes_young_bracket() {
        // Permissive by design: no range validation on age
        assert_eq!(age_factor(-3), dec!(1.5));
    }

    #[test]
    fn test_factor_order_is_age_then_type() {
        // 50000 * 0.01 = 500, x1.5 (age 20) = 750, x1.5 (health) = 1125
        let premium = annual_premium(20, InsuranceType::Health, dec!(50000));
        assert_eq!(premium.amount(), dec!(1125.00));
    }
}
