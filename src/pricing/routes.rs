//! HTTP routes for the quote engine.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;
use super::services;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

/// Price a listing for the requested dates
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote = services::quote_listing(request)?;
    Ok(Json(QuoteResponse::from_quote(&quote, &state.config.currency)))
}
