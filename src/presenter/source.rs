//! Where the presenter gets its zone rows from.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::aggregator::ZoneSummary;

/// Extra precomputed fields carried by the richer JSON input.
///
/// None of these are produced by the aggregator. Absent fields stay absent
/// when the row is served again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_state: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incentive_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_pay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairness_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_gap_vs_best: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_flag: Option<String>,
    #[serde(rename = "APAI", default, skip_serializing_if = "Option::is_none")]
    pub apai: Option<f64>,
}

/// A zone row as the presenter sees it: the summary columns plus whatever
/// profile fields the input carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneView {
    #[serde(flatten)]
    pub summary: ZoneSummary,
    #[serde(flatten)]
    pub profile: ZoneProfile,
}

impl From<ZoneSummary> for ZoneView {
    fn from(summary: ZoneSummary) -> Self {
        Self {
            summary,
            profile: ZoneProfile::default(),
        }
    }
}

/// Provider of zone rows for the dashboard.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    async fn load_zones(&self) -> Result<Vec<ZoneView>>;
}

/// Reads the aggregator's CSV table.
pub struct CsvZoneSource {
    pub path: PathBuf,
}

#[async_trait]
impl ZoneSource for CsvZoneSource {
    async fn load_zones(&self) -> Result<Vec<ZoneView>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read zone table '{}'", self.path.display()))?;

        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let mut zones = Vec::new();
        for result in rdr.deserialize() {
            let row: ZoneSummary = result?;
            zones.push(ZoneView::from(row));
        }

        debug!(rows = zones.len(), "Zone table loaded");
        Ok(zones)
    }
}

/// Reads the richer JSON variant: an array of records with the summary
/// columns and optional [`ZoneProfile`] fields.
pub struct JsonZoneSource {
    pub path: PathBuf,
}

#[async_trait]
impl ZoneSource for JsonZoneSource {
    async fn load_zones(&self) -> Result<Vec<ZoneView>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read zone profiles '{}'", self.path.display()))?;
        let zones: Vec<ZoneView> = serde_json::from_str(&content)?;

        debug!(rows = zones.len(), "Zone profiles loaded");
        Ok(zones)
    }
}

/// Picks a source by file extension: `.json` is the profile variant,
/// anything else is the CSV table.
pub fn source_for_path(path: impl AsRef<Path>) -> Box<dyn ZoneSource> {
    let path = path.as_ref().to_path_buf();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Box::new(JsonZoneSource { path }),
        _ => Box::new(CsvZoneSource { path }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{Level, aggregate};
    use crate::output::write_table;
    use crate::parser::TripRecord;

    #[tokio::test]
    async fn test_csv_source_reads_aggregator_output() {
        let table = aggregate(&[
            TripRecord::new("Gandhipuram", 100.0, 0.0, "High"),
            TripRecord::new("Ukkadam", 80.0, 4.0, "Low"),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zone_ui_data.csv");
        write_table(&path, &table).unwrap();

        let zones = source_for_path(&path).load_zones().await.unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].summary, table[0]);
        assert_eq!(zones[1].summary.explanation, table[1].explanation);
        assert_eq!(zones[0].profile, ZoneProfile::default());
    }

    #[tokio::test]
    async fn test_json_source_reads_profile_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zone_profiles.json");
        std::fs::write(
            &path,
            r#"[{
                "zone": "Peelamedu",
                "avg_fare": 150.0,
                "min_fare": 120.0,
                "max_fare": 180.0,
                "incentive_rate": 0.3,
                "dominant_demand": "Medium",
                "assignment_level": "Medium",
                "incentive_likelihood": "Medium",
                "lat": 11.029,
                "lng": 77.021,
                "explanation": "Demand is Medium, resulting in Medium task availability. Incentives are medium.",
                "zone_state": 2,
                "fairness_label": "Fair",
                "avg_pay": 142.5,
                "APAI": 0.37
            }]"#,
        )
        .unwrap();

        let zones = source_for_path(&path).load_zones().await.unwrap();

        assert_eq!(zones.len(), 1);
        let zone = &zones[0];
        assert_eq!(zone.summary.assignment_level, Level::Medium);
        assert_eq!(zone.profile.zone_state, Some(2));
        assert_eq!(zone.profile.fairness_label.as_deref(), Some("Fair"));
        assert_eq!(zone.profile.apai, Some(0.37));
        assert_eq!(zone.profile.pay_change_pct, None);
    }

    #[test]
    fn test_view_serializes_only_present_profile_fields() {
        let table = aggregate(&[TripRecord::new("RS_Puram", 90.0, 0.0, "Low")]).unwrap();
        let mut view = ZoneView::from(table[0].clone());
        view.profile.apai = Some(0.5);

        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["zone"], "RS_Puram");
        assert_eq!(value["APAI"], 0.5);
        assert!(value.get("fairness_label").is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let source = CsvZoneSource {
            path: PathBuf::from("/definitely/not/here.csv"),
        };
        assert!(source.load_zones().await.is_err());
    }
}
