//! Tariff Rating Tests
//!
//! Covers the premium formula, the quote form lifecycle, and the
//! validation behavior:
//!
//! - Concrete tariff scenarios with exact expected premiums
//! - Age bracket composition with the product factor
//! - Missing-field validation and the untouched-form guarantee
//! - Reset idempotence
//! - Property tests over the permissive input ranges

use core_kernel::Money;
use domain_rating::{
    annual_premium, InsuranceType, Quote, QuoteField, QuoteForm, RatingError, DEFAULT_COVERAGE,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn filled_form(age: i64, insurance_type: InsuranceType, coverage: Decimal) -> QuoteForm {
    QuoteForm {
        customer_name: "Cliente Demo".to_string(),
        age: Some(age),
        insurance_type: Some(insurance_type),
        coverage_amount: Some(coverage),
    }
}

// ============================================================================
// TARIFF SCENARIOS
// ============================================================================

mod scenario_tests {
    use super::*;

    /// age=30, auto, 100000: base 1000, no age adjustment, x1.3
    #[test]
    fn test_adult_auto_quote() {
        let quote = filled_form(30, InsuranceType::Auto, dec!(100000))
            .calculate()
            .expect("complete form must rate");

        assert_eq!(quote.annual_premium.amount(), dec!(1300.00));
        assert_eq!(quote.annual_premium.format_localized(), "1.300,00 €");
        assert_eq!(quote.monthly_premium.format_localized(), "108,33 €");
    }

    /// age=20, salud, 50000: base 500, x1.5 age, x1.5 type
    #[test]
    fn test_young_health_quote() {
        let quote = filled_form(20, InsuranceType::Health, dec!(50000))
            .calculate()
            .expect("complete form must rate");

        assert_eq!(quote.annual_premium.amount(), dec!(1125.00));
        assert_eq!(quote.monthly_premium.amount(), dec!(93.75));
    }

    /// age=65, hogar, 200000: base 2000, x1.8 age, x0.9 type
    #[test]
    fn test_senior_home_quote() {
        let quote = filled_form(65, InsuranceType::Home, dec!(200000))
            .calculate()
            .expect("complete form must rate");

        assert_eq!(quote.annual_premium.amount(), dec!(3240.00));
    }

    /// Negative coverage propagates through the formula unchanged
    #[test]
    fn test_negative_coverage_is_not_rejected() {
        let quote = filled_form(30, InsuranceType::Auto, dec!(-100000))
            .calculate()
            .expect("permissive inputs must still rate");

        assert_eq!(quote.annual_premium.amount(), dec!(-1300.00));
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

mod validation_tests {
    use super::*;

    /// Each required field, when cleared, fails with its own MissingField
    #[test]
    fn test_every_required_field_is_checked() {
        let base = filled_form(30, InsuranceType::Auto, dec!(100000));

        let mut form = base.clone();
        form.customer_name.clear();
        assert_eq!(
            form.calculate(),
            Err(RatingError::MissingField(QuoteField::CustomerName))
        );

        let mut form = base.clone();
        form.age = None;
        assert_eq!(
            form.calculate(),
            Err(RatingError::MissingField(QuoteField::Age))
        );

        let mut form = base.clone();
        form.insurance_type = None;
        assert_eq!(
            form.calculate(),
            Err(RatingError::MissingField(QuoteField::InsuranceType))
        );

        let mut form = base;
        form.coverage_amount = None;
        assert_eq!(
            form.calculate(),
            Err(RatingError::MissingField(QuoteField::CoverageAmount))
        );
    }

    /// A failed calculation leaves the form exactly as it was
    #[test]
    fn test_validation_failure_mutates_nothing() {
        let mut form = QuoteForm::new();
        form.age = Some(30);

        let before = form.clone();
        assert!(form.calculate().is_err());
        assert_eq!(form, before, "failed submit must not change form state");
    }
}

// ============================================================================
// FORM LIFECYCLE
// ============================================================================

mod lifecycle_tests {
    use super::*;

    /// Reset restores defaults (coverage back to 100000) and is idempotent
    #[test]
    fn test_reset_is_idempotent() {
        let mut form = filled_form(42, InsuranceType::Life, dec!(750000));

        form.reset();
        let once = form.clone();
        form.reset();

        assert_eq!(form, once, "second reset must be a no-op");
        assert_eq!(form, QuoteForm::default());
        assert_eq!(form.coverage_amount, Some(DEFAULT_COVERAGE));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// In the unadjusted age band, home premiums are exactly
        /// round(coverage * 0.01 * 0.9, 2)
        #[test]
        fn home_premium_in_flat_age_band(
            coverage_cents in 1i64..1_000_000_000i64,
            age in 25i64..=60i64
        ) {
            let coverage = Decimal::new(coverage_cents, 2);
            let premium = annual_premium(age, InsuranceType::Home, coverage);

            let expected = core_kernel::Money::new(
                coverage * dec!(0.01) * dec!(0.9),
                core_kernel::Currency::EUR,
            )
            .round_half_up();
            prop_assert_eq!(premium, expected);
        }

        /// Under-25 quotes are exactly 1.5x the flat-band quote of the
        /// same type and coverage, for every product
        #[test]
        fn young_factor_composes_before_type(
            coverage_cents in 1i64..1_000_000_000i64,
            age in -50i64..25i64,
            type_idx in 0usize..4
        ) {
            let coverage = Decimal::new(coverage_cents, 2);
            let insurance_type = InsuranceType::all()[type_idx];

            let young = annual_premium(age, insurance_type, coverage);
            let flat_raw = coverage * dec!(0.01) * insurance_type.factor();
            let expected = core_kernel::Money::new(
                flat_raw * dec!(1.5),
                core_kernel::Currency::EUR,
            )
            .round_half_up();

            prop_assert_eq!(young, expected);
        }

        /// Monthly premium is always the raw annual figure divided by 12
        #[test]
        fn monthly_is_annual_over_twelve(
            coverage_cents in 1i64..1_000_000_000i64,
            age in 18i64..=80i64,
            type_idx in 0usize..4
        ) {
            let form = filled_form(
                age,
                InsuranceType::all()[type_idx],
                Decimal::new(coverage_cents, 2),
            );
            let Quote { annual_premium, monthly_premium } = form.calculate().unwrap();

            let expected: Money = annual_premium.divide(dec!(12)).unwrap();
            prop_assert_eq!(monthly_premium, expected);
        }
    }
}
