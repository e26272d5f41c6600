//! Quote calculator handlers

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use domain_rating::{QuoteForm, DEFAULT_COVERAGE};

use crate::dto::quote::{QuoteDefaultsResponse, QuoteRequest, QuoteResponse};
use crate::error::ApiError;
use crate::i18n;
use crate::AppState;

/// Calculates a quote from the submitted form values
///
/// A pure, stateless recomputation: nothing is cached or persisted, and a
/// validation failure leaves no trace beyond the error notification.
pub async fn calculate(
    State(_state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let form = QuoteForm::from(request);
    let quote = form.calculate()?;

    // Guarded by calculate: a successful quote implies a complete form
    let insurance_type = form.insurance_type.unwrap_or(domain_rating::InsuranceType::Life);

    info!(
        insurance_type = %insurance_type,
        annual = %quote.annual_premium.amount(),
        "quote generated"
    );

    let monthly_rounded = quote.monthly_premium.round_half_up();

    Ok(Json(QuoteResponse {
        customer_name: form.customer_name,
        insurance_type,
        annual_premium: quote.annual_premium.amount(),
        monthly_premium: monthly_rounded.amount(),
        annual_premium_formatted: quote.annual_premium.format_localized(),
        monthly_premium_formatted: quote.monthly_premium.format_localized(),
        currency: quote.annual_premium.currency().code().to_string(),
        generated_at: Utc::now(),
        notification: i18n::notification("quote-generated-title", "quote-generated"),
    }))
}

/// Serves the form's default values, used by the client-side reset
pub async fn defaults(State(_state): State<AppState>) -> Json<QuoteDefaultsResponse> {
    let form = QuoteForm::default();
    Json(QuoteDefaultsResponse {
        customer_name: form.customer_name,
        age: form.age,
        insurance_type: form.insurance_type,
        coverage_amount: form.coverage_amount.unwrap_or(DEFAULT_COVERAGE),
    })
}
