//! Data types produced by the aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step ordinal used for assignment and incentive classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the zone summary table.
///
/// Field order is the column order of the written table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub avg_fare: f64,
    pub min_fare: f64,
    pub max_fare: f64,
    pub incentive_rate: f64,
    pub dominant_demand: String,
    pub assignment_level: Level,
    pub incentive_likelihood: Level,
    pub lat: f64,
    pub lng: f64,
    pub explanation: String,
}
