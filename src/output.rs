//! Output formatting and persistence for the zone summary table.
//!
//! The table is always written whole: existing files are truncated.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::aggregator::ZoneSummary;
use crate::error::Result;

/// Logs one structured line per zone.
pub fn log_summary(table: &[ZoneSummary]) {
    for row in table {
        info!(
            zone = %row.zone,
            avg_fare = row.avg_fare,
            incentive_rate = row.incentive_rate,
            dominant_demand = %row.dominant_demand,
            assignment = %row.assignment_level,
            incentives = %row.incentive_likelihood,
            "Zone summary"
        );
    }
}

/// Column order of the CSV table. Matches the field order of [`ZoneSummary`].
pub const COLUMNS: [&str; 11] = [
    "zone",
    "avg_fare",
    "min_fare",
    "max_fare",
    "incentive_rate",
    "dominant_demand",
    "assignment_level",
    "incentive_likelihood",
    "lat",
    "lng",
    "explanation",
];

/// Encodes the table as CSV. The header row is present even with no rows.
pub fn render_table(table: &[ZoneSummary]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if table.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for row in table {
        writer.serialize(row)?;
    }
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// Encodes the table as a pretty-printed JSON array of records.
pub fn render_json(table: &[ZoneSummary]) -> Result<Vec<u8>> {
    let mut body = serde_json::to_vec_pretty(table)?;
    body.push(b'\n');
    Ok(body)
}

/// Writes the table as CSV, replacing any existing file.
pub fn write_table(path: impl AsRef<Path>, table: &[ZoneSummary]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = table.len(), "Writing CSV table");

    fs::write(path, render_table(table)?)?;
    Ok(())
}

/// Writes the table as JSON, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, table: &[ZoneSummary]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = table.len(), "Writing JSON table");

    fs::write(path, render_json(table)?)?;
    Ok(())
}

/// Writes the CSV table and, when `json` is set, the JSON copy.
///
/// Both bodies are encoded before anything touches disk, and the JSON copy
/// goes first, so a failed run never leaves a fresh CSV behind.
pub fn write_outputs(
    csv_path: impl AsRef<Path>,
    json_path: Option<&Path>,
    table: &[ZoneSummary],
) -> Result<()> {
    let csv_body = render_table(table)?;
    let json_body = json_path.map(|_| render_json(table)).transpose()?;

    if let (Some(path), Some(body)) = (json_path, json_body) {
        debug!(path = %path.display(), "Writing JSON table");
        fs::write(path, body)?;
    }

    let csv_path = csv_path.as_ref();
    debug!(path = %csv_path.display(), rows = table.len(), "Writing CSV table");
    fs::write(csv_path, csv_body)?;
    Ok(())
}
