//! CSV decoder for the raw per-trip dataset.

use serde::Deserialize;
use std::io::Read;
use tracing::debug;

use crate::error::{Result, WhiteBoxError};

/// One delivery from the raw dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub pickup_zone: String,
    pub total_fare: f64,
    pub incentive_bonus: f64,
    pub zone_demand_level: String,
}

impl TripRecord {
    pub fn new(zone: &str, total_fare: f64, incentive_bonus: f64, demand: &str) -> Self {
        Self {
            pickup_zone: zone.to_string(),
            total_fare,
            incentive_bonus,
            zone_demand_level: demand.to_string(),
        }
    }
}

/// A CSV row as read, before required-field checks.
///
/// Every column is optional here so that an absent column and an empty cell
/// both surface as [`WhiteBoxError::MissingField`] instead of a serde error.
#[derive(Debug, Deserialize)]
struct RawTripRow {
    #[serde(default)]
    pickup_zone: Option<String>,
    #[serde(default)]
    total_fare: Option<f64>,
    #[serde(default)]
    incentive_bonus: Option<f64>,
    #[serde(default)]
    zone_demand_level: Option<String>,
}

impl RawTripRow {
    fn into_record(self, record: usize) -> Result<TripRecord> {
        let missing = |field: &'static str| WhiteBoxError::MissingField { record, field };

        Ok(TripRecord {
            pickup_zone: non_empty(self.pickup_zone).ok_or_else(|| missing("pickup_zone"))?,
            total_fare: finite(self.total_fare).ok_or_else(|| missing("total_fare"))?,
            incentive_bonus: finite(self.incentive_bonus)
                .ok_or_else(|| missing("incentive_bonus"))?,
            zone_demand_level: non_empty(self.zone_demand_level)
                .ok_or_else(|| missing("zone_demand_level"))?,
        })
    }
}

/// `NaN` and infinite cells count as missing, like blanks.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Decodes every trip in a headered CSV stream.
///
/// # Errors
///
/// Fails on the first row with a missing required value, or on any CSV
/// decoding error (for example a non-numeric fare). No partial result is
/// returned.
pub fn read_trips<R: Read>(reader: R) -> Result<Vec<TripRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut trips = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTripRow>().enumerate() {
        trips.push(result?.into_record(idx + 1)?);
    }

    debug!(records = trips.len(), "Trips decoded");
    Ok(trips)
}
