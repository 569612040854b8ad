//! Rental quote engine.
//!
//! Turns a listing's rate schedule and a requested date range into a priced
//! quote: duration, tier selection, then fees, tax and deposit. Everything in
//! here except `routes` and `services` is pure and synchronous.

pub mod calculators;
pub mod models;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{build_quote, compute_duration, compute_quote, round_money};
pub use models::{
    AssetKind, BookingQuote, DateRange, Listing, ListingError, Quote, QuoteState, RateBasis,
    RateSchedule, VehicleRates,
};
pub use rates::{select_rate, RateSelection};
pub use routes::router;
pub use services::{quote_listing, PricingError};
