//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_rating::{InsuranceType, QuoteForm};

/// Builder for quote forms
///
/// Starts from a complete, valid form (adult customer, auto product,
/// default coverage); individual fields can be overridden or cleared.
pub struct QuoteFormBuilder {
    customer_name: String,
    age: Option<i64>,
    insurance_type: Option<InsuranceType>,
    coverage_amount: Option<Decimal>,
}

impl Default for QuoteFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteFormBuilder {
    /// Creates a builder with a complete valid form
    pub fn new() -> Self {
        Self {
            customer_name: "Cliente Demo".to_string(),
            age: Some(30),
            insurance_type: Some(InsuranceType::Auto),
            coverage_amount: Some(dec!(100000)),
        }
    }

    /// Sets the customer name
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the insurance type
    pub fn with_insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.insurance_type = Some(insurance_type);
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage(mut self, coverage: Decimal) -> Self {
        self.coverage_amount = Some(coverage);
        self
    }

    /// Clears the named field so the form fails validation there
    pub fn without_customer_name(mut self) -> Self {
        self.customer_name = String::new();
        self
    }

    pub fn without_age(mut self) -> Self {
        self.age = None;
        self
    }

    pub fn without_insurance_type(mut self) -> Self {
        self.insurance_type = None;
        self
    }

    pub fn without_coverage(mut self) -> Self {
        self.coverage_amount = None;
        self
    }

    /// Builds the form
    pub fn build(self) -> QuoteForm {
        QuoteForm {
            customer_name: self.customer_name,
            age: self.age,
            insurance_type: self.insurance_type,
            coverage_amount: self.coverage_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_rating::QuoteField;

    #[test]
    fn test_default_builder_is_valid() {
        let form = QuoteFormBuilder::new().build();
        assert!(form.missing_field().is_none());
    }

    #[test]
    fn test_without_clears_single_field() {
        let form = QuoteFormBuilder::new().without_age().build();
        assert_eq!(form.missing_field(), Some(QuoteField::Age));
    }
}
