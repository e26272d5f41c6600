//! Rating domain errors

use thiserror::Error;

use core_kernel::MoneyError;

use crate::quote::QuoteField;

/// Errors that can occur while producing a quote
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// A required form field is empty or unset
    #[error("Missing required field: {0}")]
    MissingField(QuoteField),

    /// Financial calculation error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl RatingError {
    /// Returns true if the error is a missing-field validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, RatingError::MissingField(_))
    }
}
