//! Quote form state and the derived quote result
//!
//! `QuoteForm` mirrors the calculator form exactly: free-text customer
//! name, optional numeric fields, and a coverage amount that defaults to
//! 100000 whenever the form is (re)initialized. A `Quote` exists only as
//! the return value of `calculate`; it is never stored.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

use crate::error::RatingError;
use crate::insurance_type::InsuranceType;
use crate::rating::annual_premium;

/// Coverage amount the form starts with, in currency units
pub const DEFAULT_COVERAGE: Decimal = dec!(100000);

/// The four required form fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    CustomerName,
    Age,
    InsuranceType,
    CoverageAmount,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteField::CustomerName => "customer_name",
            QuoteField::Age => "age",
            QuoteField::InsuranceType => "insurance_type",
            QuoteField::CoverageAmount => "coverage_amount",
        };
        write!(f, "{}", name)
    }
}

/// Transient calculator form state
///
/// Lifecycle: created with defaults, mutated field by field, consumed by
/// `calculate`, wiped back to defaults by `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    /// Customer label; required non-empty, not otherwise validated
    pub customer_name: String,
    /// Customer age; required, no range validation
    pub age: Option<i64>,
    /// Selected product; the enum closes the set
    pub insurance_type: Option<InsuranceType>,
    /// Covered amount; required, no range validation
    pub coverage_amount: Option<Decimal>,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            age: None,
            insurance_type: None,
            coverage_amount: Some(DEFAULT_COVERAGE),
        }
    }
}

impl QuoteForm {
    /// Creates a form in its default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the default state, clearing any previous input
    ///
    /// Idempotent: resetting twice yields the same state as once.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the first empty required field, if any, in form order
    pub fn missing_field(&self) -> Option<QuoteField> {
        if self.customer_name.trim().is_empty() {
            Some(QuoteField::CustomerName)
        } else if self.age.is_none() {
            Some(QuoteField::Age)
        } else if self.insurance_type.is_none() {
            Some(QuoteField::InsuranceType)
        } else if self.coverage_amount.is_none() {
            Some(QuoteField::CoverageAmount)
        } else {
            None
        }
    }

    /// Produces a quote from the current form values
    ///
    /// A pure recomputation: the form is not mutated and no result is
    /// cached. Fails with `RatingError::MissingField` when any of the four
    /// required fields is empty.
    pub fn calculate(&self) -> Result<Quote, RatingError> {
        if let Some(field) = self.missing_field() {
            return Err(RatingError::MissingField(field));
        }

        // Guarded by missing_field above
        let age = self.age.unwrap_or_default();
        let insurance_type = self.insurance_type.unwrap_or(InsuranceType::Life);
        let coverage = self.coverage_amount.unwrap_or(DEFAULT_COVERAGE);

        let annual = annual_premium(age, insurance_type, coverage);
        // Monthly is derived from the raw annual figure, never from its
        // formatted representation.
        let monthly = annual.divide(dec!(12))?;

        Ok(Quote {
            annual_premium: annual,
            monthly_premium: monthly,
        })
    }
}

/// A calculated quote
///
/// `annual_premium` is rounded half-up to two decimal places;
/// `monthly_premium` keeps its raw precision and rounds on display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub annual_premium: Money,
    pub monthly_premium: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = QuoteForm::new();
        assert!(form.customer_name.is_empty());
        assert_eq!(form.age, None);
        assert_eq!(form.insurance_type, None);
        assert_eq!(form.coverage_amount, Some(DEFAULT_COVERAGE));
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let mut form = QuoteForm::new();
        assert_eq!(form.missing_field(), Some(QuoteField::CustomerName));

        form.customer_name = "Ana Ruiz".to_string();
        assert_eq!(form.missing_field(), Some(QuoteField::Age));

        form.age = Some(30);
        assert_eq!(form.missing_field(), Some(QuoteField::InsuranceType));

        form.insurance_type = Some(InsuranceType::Auto);
        assert_eq!(form.missing_field(), None);
    }

    #[test]
    fn test_whitespace_name_counts_as_empty() {
        let mut form = QuoteForm::new();
        form.customer_name = "   ".to_string();
        form.age = Some(30);
        form.insurance_type = Some(InsuranceType::Auto);

        assert_eq!(
            form.calculate(),
            Err(RatingError::MissingField(QuoteField::CustomerName))
        );
    }

    #[test]
    fn test_calculate_does_not_mutate_form() {
        let mut form = QuoteForm::new();
        form.customer_name = "Ana Ruiz".to_string();
        form.age = Some(30);
        form.insurance_type = Some(InsuranceType::Auto);

        let before = form.clone();
        form.calculate().unwrap();
        assert_eq!(form, before);
    }
}
