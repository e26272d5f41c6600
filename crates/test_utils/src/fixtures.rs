//! Test Data Fixtures
//!
//! Pre-built data for the canonical tariff scenarios, so tests across
//! crates agree on the same inputs and expected premiums.

use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_rating::{InsuranceType, QuoteForm};
use domain_session::Credentials;

/// Money amounts used across tests
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The form's default coverage amount
    pub fn default_coverage() -> Decimal {
        dec!(100000)
    }

    /// EUR premium helper
    pub fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::EUR)
    }
}

/// Canonical quote scenarios with known expected premiums
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// age=30, auto, 100000 -> annual 1300.00
    pub fn adult_auto() -> QuoteForm {
        QuoteForm {
            customer_name: "Cliente Demo".to_string(),
            age: Some(30),
            insurance_type: Some(InsuranceType::Auto),
            coverage_amount: Some(dec!(100000)),
        }
    }

    /// age=20, salud, 50000 -> annual 1125.00, monthly 93.75
    pub fn young_health() -> QuoteForm {
        QuoteForm {
            customer_name: "Cliente Demo".to_string(),
            age: Some(20),
            insurance_type: Some(InsuranceType::Health),
            coverage_amount: Some(dec!(50000)),
        }
    }

    /// age=65, hogar, 200000 -> annual 3240.00
    pub fn senior_home() -> QuoteForm {
        QuoteForm {
            customer_name: "Cliente Demo".to_string(),
            age: Some(65),
            insurance_type: Some(InsuranceType::Home),
            coverage_amount: Some(dec!(200000)),
        }
    }

    /// A complete form with a generated customer name
    pub fn random_customer(age: i64, insurance_type: InsuranceType) -> QuoteForm {
        QuoteForm {
            customer_name: Name().fake(),
            age: Some(age),
            insurance_type: Some(insurance_type),
            coverage_amount: Some(Self::adult_auto().coverage_amount.unwrap_or_default()),
        }
    }
}

/// Credential fixtures for the mocked login flow
pub struct CredentialFixtures;

impl CredentialFixtures {
    /// Any non-empty pair is accepted by the mocked login
    pub fn demo_user() -> Credentials {
        Credentials::new("usuario@empresa.com", "secreto")
    }

    /// Empty email, blocked by validation
    pub fn missing_email() -> Credentials {
        Credentials::new("", "secreto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_fixtures_rate_to_known_premiums() {
        assert_eq!(
            QuoteFixtures::adult_auto().calculate().unwrap().annual_premium,
            MoneyFixtures::eur(dec!(1300.00))
        );
        assert_eq!(
            QuoteFixtures::young_health()
                .calculate()
                .unwrap()
                .annual_premium,
            MoneyFixtures::eur(dec!(1125.00))
        );
        assert_eq!(
            QuoteFixtures::senior_home().calculate().unwrap().annual_premium,
            MoneyFixtures::eur(dec!(3240.00))
        );
    }

    #[test]
    fn test_random_customer_is_complete() {
        let form = QuoteFixtures::random_customer(40, InsuranceType::Life);
        assert!(form.missing_field().is_none());
    }
}
