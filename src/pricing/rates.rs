//! Rate tier selection.
//!
//! Each asset kind has an ordered list of [`RateRule`]s. Rules are checked top
//! to bottom and the first one whose predicate holds prices the rental. The last
//! rule of every list always applies.

use rust_decimal::Decimal;

use super::models::{Listing, RateBasis, RateSchedule, VehicleRates};

/// Nominal month length used for monthly proration. Not calendar aware.
pub const DAYS_PER_MONTH: u32 = 30;

/// Nominal week length used for weekly proration.
pub const DAYS_PER_WEEK: u32 = 7;

/// Base cost and the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSelection {
    pub base_cost: Decimal,
    pub basis: RateBasis,
}

/// One pricing tier.
///
/// `tier_rate` is the predicate: it yields the period rate to bill when the
/// tier applies to the duration, and `None` otherwise. The base cost is that
/// rate prorated over `period_days`.
pub struct RateRule<R> {
    pub basis: RateBasis,
    pub tier_rate: fn(&R, u32) -> Option<Decimal>,
    pub period_days: u32,
}

impl<R> RateRule<R> {
    fn price(&self, rates: &R, days: u32) -> Option<RateSelection> {
        (self.tier_rate)(rates, days).map(|rate| RateSelection {
            base_cost: prorate(rate, days, self.period_days),
            basis: self.basis,
        })
    }
}

/// Properties always bill a prorated share of the monthly rent.
pub static PROPERTY_RULES: [RateRule<Decimal>; 1] = [RateRule {
    basis: RateBasis::MonthlyProrated,
    tier_rate: property_rent,
    period_days: DAYS_PER_MONTH,
}];

/// Vehicle tiers in priority order: monthly, weekly, then daily.
pub static VEHICLE_RULES: [RateRule<VehicleRates>; 3] = [
    RateRule {
        basis: RateBasis::Monthly,
        tier_rate: monthly_tier,
        period_days: DAYS_PER_MONTH,
    },
    RateRule {
        basis: RateBasis::Weekly,
        tier_rate: weekly_tier,
        period_days: DAYS_PER_WEEK,
    },
    RateRule {
        basis: RateBasis::Daily,
        tier_rate: daily_tier,
        period_days: 1,
    },
];

/// Pick the pricing tier for a listing and compute the base cost.
///
/// Returns `None` for a zero-day duration; there is nothing to price.
pub fn select_rate(listing: &Listing, duration_days: u32) -> Option<RateSelection> {
    if duration_days == 0 {
        return None;
    }

    match listing.schedule() {
        RateSchedule::Property { monthly_rent } => {
            evaluate(&PROPERTY_RULES, monthly_rent, duration_days)
        }
        RateSchedule::Vehicle(rates) => evaluate(&VEHICLE_RULES, rates, duration_days),
    }
}

/// First matching rule wins.
pub fn evaluate<R>(rules: &[RateRule<R>], rates: &R, duration_days: u32) -> Option<RateSelection> {
    rules
        .iter()
        .find_map(|rule| rule.price(rates, duration_days))
}

/// Spread a period rate evenly over its nominal length and bill `days` of it.
///
/// Multiplies before dividing so whole periods come out exact.
pub fn prorate(period_rate: Decimal, days: u32, period_days: u32) -> Decimal {
    period_rate * Decimal::from(days) / Decimal::from(period_days)
}

/// Zero-priced tiers are treated as missing.
fn usable(rate: Option<Decimal>) -> Option<Decimal> {
    rate.filter(|r| *r > Decimal::ZERO)
}

fn property_rent(rent: &Decimal, _: u32) -> Option<Decimal> {
    Some(*rent)
}

fn monthly_tier(rates: &VehicleRates, days: u32) -> Option<Decimal> {
    usable(rates.monthly_rate).filter(|_| days >= DAYS_PER_MONTH)
}

fn weekly_tier(rates: &VehicleRates, days: u32) -> Option<Decimal> {
    usable(rates.weekly_rate).filter(|_| days >= DAYS_PER_WEEK)
}

fn daily_tier(rates: &VehicleRates, _: u32) -> Option<Decimal> {
    Some(rates.daily_rate)
}
