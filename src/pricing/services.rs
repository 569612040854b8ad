//! Pricing service functions.
//!
//! Turn incoming quote requests into engine inputs and log the outcome. The
//! engine itself lives in [`super::calculators`] and never logs.

use tracing::{debug, warn};

use super::calculators::compute_quote;
use super::models::{Listing, ListingError, Quote};
use super::requests::QuoteRequest;

/// Pricing service error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid listing: {0}")]
    InvalidListing(#[from] ListingError),
}

/// Validate the requested listing and price it for the requested dates.
///
/// Missing dates are not an error; they produce the empty quote.
pub fn quote_listing(request: QuoteRequest) -> Result<Quote, PricingError> {
    let range = request.date_range();

    let listing = Listing::try_from(request.listing).map_err(|e| {
        warn!("Rejected listing: {}", e);
        e
    })?;

    let quote = compute_quote(&listing, range.as_ref());
    debug!(
        asset_kind = %listing.asset_kind(),
        duration_days = quote.duration_days,
        rate_basis = ?quote.rate_basis,
        grand_total = %quote.grand_total,
        "Computed quote"
    );

    Ok(quote)
}
