//! Core quote calculation functions.
//!
//! Pure functions for pricing math, with no I/O and no shared state. The same
//! inputs always give the same [`Quote`].

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{DateRange, Listing, Quote};
use super::rates::{select_rate, RateSelection};

/// Platform service fee charged on the base cost (5%)
pub const SERVICE_FEE_RATE: Decimal = dec!(0.05);

/// Tax charged on the base cost (13%)
pub const TAX_RATE: Decimal = dec!(0.13);

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_quote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of whole days between two instants, rounded up.
///
/// Order does not matter. Equal instants give 0 and any partial day counts
/// as a full one, so 36 hours is 2 days.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use rental_quote::pricing::compute_duration;
///
/// let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
/// assert_eq!(compute_duration(start, end), 2);
/// assert_eq!(compute_duration(end, start), 2);
/// ```
pub fn compute_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let elapsed_ms = (end - start).num_milliseconds().unsigned_abs();
    let days = elapsed_ms.div_ceil(MILLIS_PER_DAY);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Apply fees, tax and the listing's deposit to a selected base cost.
pub fn build_quote(duration_days: u32, selection: RateSelection, listing: &Listing) -> Quote {
    let base_cost = selection.base_cost;
    let service_fee = base_cost * SERVICE_FEE_RATE;
    let tax = base_cost * TAX_RATE;
    let deposit = listing.security_deposit();

    Quote {
        duration_days,
        base_cost,
        service_fee,
        tax,
        deposit,
        grand_total: base_cost + service_fee + tax + deposit,
        rate_basis: Some(selection.basis),
    }
}

/// Price a listing for a date range.
///
/// A missing range, or one whose bounds fall on the same instant, gives the
/// empty quote.
pub fn compute_quote(listing: &Listing, range: Option<&DateRange>) -> Quote {
    let Some(range) = range else {
        return Quote::empty();
    };

    let duration_days = range.duration_days();
    match select_rate(listing, duration_days) {
        Some(selection) => build_quote(duration_days, selection, listing),
        None => Quote::empty(),
    }
}
