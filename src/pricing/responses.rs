//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::round_money;
use super::models::{Quote, QuoteState, RateBasis};

/// Places shown for every money amount in responses
const DISPLAY_PLACES: u32 = 2;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Money rounded for display
    pub fn rounded(amount: Decimal, currency: &str) -> Self {
        Self {
            amount: round_money(amount, DISPLAY_PLACES),
            currency: currency.to_string(),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub state: QuoteState,
    pub duration_days: u32,
    pub rate_basis: Option<RateBasis>,
    pub base_cost: MoneyResponse,
    pub service_fee: MoneyResponse,
    pub tax: MoneyResponse,
    pub deposit: MoneyResponse,
    pub grand_total: MoneyResponse,
}

impl QuoteResponse {
    pub fn from_quote(quote: &Quote, currency: &str) -> Self {
        Self {
            state: quote.state(),
            duration_days: quote.duration_days,
            rate_basis: quote.rate_basis,
            base_cost: MoneyResponse::rounded(quote.base_cost, currency),
            service_fee: MoneyResponse::rounded(quote.service_fee, currency),
            tax: MoneyResponse::rounded(quote.tax, currency),
            deposit: MoneyResponse::rounded(quote.deposit, currency),
            grand_total: MoneyResponse::rounded(quote.grand_total, currency),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
