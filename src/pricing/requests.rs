//! Request DTOs for pricing API endpoints.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{AssetKind, DateRange, Listing, ListingError, VehicleRates};

/// Request to quote a listing for a date range
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub listing: ListingRequest,
    #[serde(default)]
    pub start: Option<DateInput>,
    #[serde(default)]
    pub end: Option<DateInput>,
}

impl QuoteRequest {
    /// Requested range, or `None` while either date is still unset
    pub fn date_range(&self) -> Option<DateRange> {
        DateRange::from_parts(
            self.start.map(DateInput::to_utc),
            self.end.map(DateInput::to_utc),
        )
    }
}

/// Listing as supplied by the listing service
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRequest {
    pub asset_kind: AssetKind,
    #[serde(default)]
    pub monthly_rent: Option<Decimal>,
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
    #[serde(default)]
    pub security_deposit: Option<Decimal>,
}

impl TryFrom<ListingRequest> for Listing {
    type Error = ListingError;

    fn try_from(req: ListingRequest) -> Result<Self, Self::Error> {
        let kind = req.asset_kind;
        let deposit = req.security_deposit.unwrap_or(Decimal::ZERO);

        match kind {
            AssetKind::Property => {
                let vehicle_fields = [
                    ("daily_rate", req.daily_rate),
                    ("weekly_rate", req.weekly_rate),
                    ("monthly_rate", req.monthly_rate),
                ];
                if let Some(field) = vehicle_fields
                    .into_iter()
                    .find_map(|(field, value)| value.map(|_| field))
                {
                    return Err(ListingError::UnexpectedField { kind, field });
                }

                let monthly_rent = req.monthly_rent.ok_or(ListingError::MissingField {
                    kind,
                    field: "monthly_rent",
                })?;
                Listing::property(monthly_rent, deposit)
            }
            AssetKind::Vehicle => {
                if req.monthly_rent.is_some() {
                    return Err(ListingError::UnexpectedField {
                        kind,
                        field: "monthly_rent",
                    });
                }

                let daily_rate = req.daily_rate.ok_or(ListingError::MissingField {
                    kind,
                    field: "daily_rate",
                })?;
                let rates = VehicleRates {
                    daily_rate,
                    weekly_rate: req.weekly_rate,
                    monthly_rate: req.monthly_rate,
                };
                Listing::vehicle(rates, deposit)
            }
        }
    }
}

/// A range bound, either a calendar date or an RFC 3339 instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl DateInput {
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            DateInput::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
            DateInput::Instant(at) => at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing_json(value: serde_json::Value) -> ListingRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_vehicle_request_accepts_strings_and_numbers() {
        let req = listing_json(serde_json::json!({
            "asset_kind": "vehicle",
            "daily_rate": "500",
            "weekly_rate": 3000,
            "security_deposit": "250.50"
        }));

        let listing = Listing::try_from(req).unwrap();
        assert_eq!(listing.asset_kind(), AssetKind::Vehicle);
        assert_eq!(listing.security_deposit(), dec!(250.50));
    }

    #[test]
    fn test_deposit_defaults_to_zero() {
        let req = listing_json(serde_json::json!({
            "asset_kind": "property",
            "monthly_rent": "30000"
        }));
        let listing = Listing::try_from(req).unwrap();
        assert_eq!(listing.security_deposit(), dec!(0));
    }

    #[test]
    fn test_vehicle_without_daily_rate_rejected() {
        let req = listing_json(serde_json::json!({
            "asset_kind": "vehicle",
            "weekly_rate": "3000"
        }));
        assert_eq!(
            Listing::try_from(req).unwrap_err(),
            ListingError::MissingField {
                kind: AssetKind::Vehicle,
                field: "daily_rate"
            }
        );
    }

    #[test]
    fn test_property_without_rent_rejected() {
        let req = listing_json(serde_json::json!({ "asset_kind": "property" }));
        assert!(matches!(
            Listing::try_from(req),
            Err(ListingError::MissingField {
                field: "monthly_rent",
                ..
            })
        ));
    }

    #[test]
    fn test_mixed_rate_shapes_rejected() {
        let req = listing_json(serde_json::json!({
            "asset_kind": "property",
            "monthly_rent": "30000",
            "weekly_rate": "3000"
        }));
        assert_eq!(
            Listing::try_from(req).unwrap_err(),
            ListingError::UnexpectedField {
                kind: AssetKind::Property,
                field: "weekly_rate"
            }
        );

        let req = listing_json(serde_json::json!({
            "asset_kind": "vehicle",
            "daily_rate": "500",
            "monthly_rent": "30000"
        }));
        assert!(Listing::try_from(req).is_err());
    }

    #[test]
    fn test_date_input_formats() {
        let date: DateInput = serde_json::from_str("\"2024-05-01\"").unwrap();
        assert_eq!(date, DateInput::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));

        let instant: DateInput = serde_json::from_str("\"2024-05-02T12:00:00Z\"").unwrap();
        assert!(matches!(instant, DateInput::Instant(_)));

        assert_eq!(
            crate::pricing::compute_duration(date.to_utc(), instant.to_utc()),
            2
        );
    }

    #[test]
    fn test_partial_range_is_empty() {
        let req: QuoteRequest = serde_json::from_value(serde_json::json!({
            "listing": { "asset_kind": "property", "monthly_rent": "1000" },
            "start": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(req.date_range(), None);
    }
}
