use crate::aggregator::classify::{classify_assignment, classify_incentive};
use crate::aggregator::coordinates::ZoneCoordinates;
use crate::aggregator::explain::build_explanation;
use crate::aggregator::types::ZoneSummary;
use crate::aggregator::utility::{fraction, mean, min_max, mode};
use crate::error::Result;
use crate::parser::TripRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregates trips into one [`ZoneSummary`] per distinct pickup zone, using
/// the built-in coordinate table.
///
/// See [`aggregate_with`].
pub fn aggregate(records: &[TripRecord]) -> Result<Vec<ZoneSummary>> {
    aggregate_with(records, &ZoneCoordinates::builtin())
}

/// Aggregates trips into one [`ZoneSummary`] per distinct pickup zone.
///
/// Rows come back sorted by zone name. Each row carries the mean, min and max
/// fare, the share of trips with a positive incentive bonus, the most common
/// demand level and the classifications derived from them.
///
/// # Errors
///
/// Fails with [`WhiteBoxError::UnknownZone`](crate::WhiteBoxError::UnknownZone)
/// as soon as a zone has no coordinates; no partial table is returned.
pub fn aggregate_with(
    records: &[TripRecord],
    coordinates: &ZoneCoordinates,
) -> Result<Vec<ZoneSummary>> {
    let mut groups: BTreeMap<&str, Vec<&TripRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.pickup_zone.as_str())
            .or_default()
            .push(record);
    }

    let mut table = Vec::with_capacity(groups.len());

    for (zone, trips) in groups {
        let fares: Vec<f64> = trips.iter().map(|t| t.total_fare).collect();
        let demands: Vec<&str> = trips.iter().map(|t| t.zone_demand_level.as_str()).collect();

        // Groups are built from existing records, so neither is ever empty.
        let (min_fare, max_fare) = min_max(&fares).unwrap_or_default();
        let dominant_demand = mode(&demands).unwrap_or_default().to_string();

        let incentive_rate = fraction(&trips, |t| t.incentive_bonus > 0.0);
        let assignment_level = classify_assignment(&dominant_demand);
        let incentive_likelihood = classify_incentive(incentive_rate);
        let (lat, lng) = coordinates.lookup(zone)?;

        debug!(
            zone,
            trips = trips.len(),
            %dominant_demand,
            incentive_rate,
            "Zone aggregated"
        );

        table.push(ZoneSummary {
            zone: zone.to_string(),
            avg_fare: mean(&fares),
            min_fare,
            max_fare,
            incentive_rate,
            explanation: build_explanation(
                &dominant_demand,
                assignment_level,
                incentive_likelihood,
            ),
            dominant_demand,
            assignment_level,
            incentive_likelihood,
            lat,
            lng,
        });
    }

    Ok(table)
}
