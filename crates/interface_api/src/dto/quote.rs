//! Quote DTOs
//!
//! The request mirrors the calculator form: every field optional on the
//! wire so a missing field reaches the domain's validation (and produces
//! the toast) instead of a deserialization error. Malformed numbers are
//! still rejected at the JSON boundary by the typed fields.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_rating::{InsuranceType, QuoteForm};

use crate::dto::Notification;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub customer_name: Option<String>,
    pub age: Option<i64>,
    pub insurance_type: Option<InsuranceType>,
    pub coverage_amount: Option<Decimal>,
}

impl From<QuoteRequest> for QuoteForm {
    fn from(request: QuoteRequest) -> Self {
        QuoteForm {
            customer_name: request.customer_name.unwrap_or_default(),
            age: request.age,
            insurance_type: request.insurance_type,
            coverage_amount: request.coverage_amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub customer_name: String,
    pub insurance_type: InsuranceType,
    /// Annual premium, rounded half-up to two decimal places
    pub annual_premium: Decimal,
    /// Monthly premium, the raw annual figure divided by twelve and
    /// rounded for the wire
    pub monthly_premium: Decimal,
    pub annual_premium_formatted: String,
    pub monthly_premium_formatted: String,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
    pub notification: Notification,
}

/// The form's (re)initialization state, served for client-side reset
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteDefaultsResponse {
    pub customer_name: String,
    pub age: Option<i64>,
    pub insurance_type: Option<InsuranceType>,
    pub coverage_amount: Decimal,
}
