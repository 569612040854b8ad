//! Domain models for rental quoting.
//!
//! A [`Listing`] can only be built through its validating constructors, so the
//! pricing functions never see a negative rate, a rate too large to price, or a
//! vehicle without a daily rate.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calculators::compute_duration;

/// Kind of asset a listing rents out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Property,
    Vehicle,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Property => write!(f, "property"),
            AssetKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// Rate card for a vehicle listing.
///
/// `weekly_rate` and `monthly_rate` are optional tiers. A tier set to zero is
/// kept as-is here; the rate selector treats it as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRates {
    pub daily_rate: Decimal,
    pub weekly_rate: Option<Decimal>,
    pub monthly_rate: Option<Decimal>,
}

impl VehicleRates {
    /// Daily-only rate card
    pub fn daily(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            weekly_rate: None,
            monthly_rate: None,
        }
    }

    pub fn with_weekly(mut self, weekly_rate: Decimal) -> Self {
        self.weekly_rate = Some(weekly_rate);
        self
    }

    pub fn with_monthly(mut self, monthly_rate: Decimal) -> Self {
        self.monthly_rate = Some(monthly_rate);
        self
    }
}

/// Rate schedule of a listing, one shape per asset kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateSchedule {
    Property { monthly_rent: Decimal },
    Vehicle(VehicleRates),
}

/// Largest rate or deposit a listing accepts.
///
/// Keeps `rate * u32::MAX` days plus fees, tax and deposit inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Errors raised while building a [`Listing`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} must not exceed {max} (got {value})")]
    AmountTooLarge {
        field: &'static str,
        value: Decimal,
        max: Decimal,
    },

    #[error("{kind} listing is missing required field {field}")]
    MissingField { kind: AssetKind, field: &'static str },

    #[error("{field} does not apply to a {kind} listing")]
    UnexpectedField { kind: AssetKind, field: &'static str },
}

/// A priceable listing: its rate schedule plus the security deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    schedule: RateSchedule,
    security_deposit: Decimal,
}

impl Listing {
    /// Build a property listing rented by the month.
    pub fn property(
        monthly_rent: Decimal,
        security_deposit: Decimal,
    ) -> Result<Self, ListingError> {
        check_amount("monthly_rent", monthly_rent)?;
        check_amount("security_deposit", security_deposit)?;

        Ok(Self {
            schedule: RateSchedule::Property { monthly_rent },
            security_deposit,
        })
    }

    /// Build a vehicle listing from its rate card.
    pub fn vehicle(rates: VehicleRates, security_deposit: Decimal) -> Result<Self, ListingError> {
        check_amount("daily_rate", rates.daily_rate)?;
        if let Some(weekly) = rates.weekly_rate {
            check_amount("weekly_rate", weekly)?;
        }
        if let Some(monthly) = rates.monthly_rate {
            check_amount("monthly_rate", monthly)?;
        }
        check_amount("security_deposit", security_deposit)?;

        Ok(Self {
            schedule: RateSchedule::Vehicle(rates),
            security_deposit,
        })
    }

    pub fn asset_kind(&self) -> AssetKind {
        match self.schedule {
            RateSchedule::Property { .. } => AssetKind::Property,
            RateSchedule::Vehicle(_) => AssetKind::Vehicle,
        }
    }

    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    pub fn security_deposit(&self) -> Decimal {
        self.security_deposit
    }
}

fn check_amount(field: &'static str, value: Decimal) -> Result<(), ListingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ListingError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(ListingError::AmountTooLarge {
            field,
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Requested rental period.
///
/// Bounds are instants so that partial days are visible to the duration
/// calculator; plain calendar dates land on midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Range between two calendar dates
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN).and_utc(),
            end: end.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Range from possibly-missing bounds. Returns `None` unless both are set.
    pub fn from_parts(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }

    /// Whole days covered by the range, rounded up
    pub fn duration_days(&self) -> u32 {
        compute_duration(self.start, self.end)
    }
}

/// Pricing tier that produced a quote's base cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    Monthly,
    Weekly,
    Daily,
    MonthlyProrated,
}

/// Whether a quote is backed by a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteState {
    Empty,
    Priced,
}

/// Priced breakdown for a listing and a date range.
///
/// Amounts are kept at full precision; rounding is left to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub duration_days: u32,
    pub base_cost: Decimal,
    pub service_fee: Decimal,
    pub tax: Decimal,
    pub deposit: Decimal,
    pub grand_total: Decimal,
    pub rate_basis: Option<RateBasis>,
}

impl Quote {
    /// The zeroed quote reported when there is nothing to price.
    ///
    /// The deposit is zero here as well, even if the listing carries one.
    pub fn empty() -> Self {
        Self {
            duration_days: 0,
            base_cost: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            tax: Decimal::ZERO,
            deposit: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            rate_basis: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.duration_days == 0
    }

    pub fn state(&self) -> QuoteState {
        if self.is_empty() {
            QuoteState::Empty
        } else {
            QuoteState::Priced
        }
    }

    /// Fields attached to a booking request
    pub fn booking_quote(&self) -> BookingQuote {
        BookingQuote {
            duration_days: self.duration_days,
            base_cost: self.base_cost,
            grand_total: self.grand_total,
        }
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::empty()
    }
}

/// Subset of a [`Quote`] forwarded with a booking submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub duration_days: u32,
    pub base_cost: Decimal,
    pub grand_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_property_listing_defaults() {
        let listing = Listing::property(dec!(30000), Decimal::ZERO).unwrap();
        assert_eq!(listing.asset_kind(), AssetKind::Property);
        assert_eq!(listing.security_deposit(), dec!(0));
        assert_eq!(
            listing.schedule(),
            &RateSchedule::Property {
                monthly_rent: dec!(30000)
            }
        );
    }

    #[test]
    fn test_negative_rent_rejected() {
        let err = Listing::property(dec!(-1), dec!(0)).unwrap_err();
        assert_eq!(
            err,
            ListingError::NegativeAmount {
                field: "monthly_rent",
                value: dec!(-1)
            }
        );
    }

    #[test]
    fn test_negative_vehicle_tiers_rejected() {
        let rates = VehicleRates::daily(dec!(500)).with_weekly(dec!(-3000));
        let err = Listing::vehicle(rates, dec!(0)).unwrap_err();
        assert!(matches!(
            err,
            ListingError::NegativeAmount {
                field: "weekly_rate",
                ..
            }
        ));

        let rates = VehicleRates::daily(dec!(500)).with_monthly(dec!(-0.01));
        assert!(Listing::vehicle(rates, dec!(0)).is_err());

        let err = Listing::vehicle(VehicleRates::daily(dec!(500)), dec!(-5)).unwrap_err();
        assert!(err.to_string().contains("security_deposit"));
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let err = Listing::vehicle(VehicleRates::daily(Decimal::MAX), dec!(0)).unwrap_err();
        assert_eq!(
            err,
            ListingError::AmountTooLarge {
                field: "daily_rate",
                value: Decimal::MAX,
                max: MAX_AMOUNT
            }
        );

        let rates = VehicleRates::daily(dec!(500)).with_monthly(MAX_AMOUNT + dec!(0.01));
        assert!(matches!(
            Listing::vehicle(rates, dec!(0)),
            Err(ListingError::AmountTooLarge {
                field: "monthly_rate",
                ..
            })
        ));

        let err = Listing::property(dec!(1000), MAX_AMOUNT * dec!(2)).unwrap_err();
        assert!(err.to_string().contains("security_deposit"));

        assert!(Listing::property(MAX_AMOUNT, MAX_AMOUNT).is_ok());
    }

    #[test]
    fn test_zero_tiers_are_accepted() {
        let rates = VehicleRates::daily(dec!(0))
            .with_weekly(dec!(0))
            .with_monthly(dec!(0));
        let listing = Listing::vehicle(rates, dec!(0)).unwrap();
        assert_eq!(listing.asset_kind(), AssetKind::Vehicle);
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let negative_zero = -Decimal::ZERO;
        assert!(Listing::property(negative_zero, dec!(0)).is_ok());
    }

    #[test]
    fn test_from_parts_requires_both_bounds() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 4, 0, 0, 0).unwrap();

        assert_eq!(DateRange::from_parts(None, None), None);
        assert_eq!(DateRange::from_parts(Some(start), None), None);
        assert_eq!(DateRange::from_parts(None, Some(end)), None);
        assert_eq!(
            DateRange::from_parts(Some(start), Some(end)),
            Some(DateRange::new(start, end))
        );
    }

    #[test]
    fn test_from_dates_uses_midnight() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        );
        assert_eq!(range.start, Utc.with_ymd_and_hms(2024, 2, 27, 0, 0, 0).unwrap());
        // 2024 is a leap year
        assert_eq!(range.duration_days(), 4);
    }

    #[test]
    fn test_empty_quote_state() {
        let quote = Quote::empty();
        assert!(quote.is_empty());
        assert_eq!(quote.state(), QuoteState::Empty);
        assert_eq!(quote.rate_basis, None);
        assert_eq!(quote, Quote::default());
    }

    #[test]
    fn test_booking_quote_fields() {
        let quote = Quote {
            duration_days: 10,
            base_cost: dec!(10000),
            service_fee: dec!(500),
            tax: dec!(1300),
            deposit: dec!(5000),
            grand_total: dec!(16800),
            rate_basis: Some(RateBasis::MonthlyProrated),
        };
        assert_eq!(quote.state(), QuoteState::Priced);

        let booking = quote.booking_quote();
        assert_eq!(booking.duration_days, 10);
        assert_eq!(booking.base_cost, dec!(10000));
        assert_eq!(booking.grand_total, dec!(16800));
    }

    #[test]
    fn test_rate_basis_serializes_snake_case() {
        let json = serde_json::to_string(&RateBasis::MonthlyProrated).unwrap();
        assert_eq!(json, "\"monthly_prorated\"");
        assert_eq!(AssetKind::Vehicle.to_string(), "vehicle");
    }
}
