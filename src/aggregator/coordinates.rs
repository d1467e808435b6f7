use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, WhiteBoxError};

/// Map pins for the known pickup zones, as `(zone, lat, lng)`.
static BUILTIN_ZONES: &[(&str, f64, f64)] = &[
    ("Gandhipuram", 11.017, 76.967),
    ("Peelamedu", 11.029, 77.021),
    ("RS_Puram", 11.010, 76.947),
    ("Saibaba_Colony", 11.041, 76.951),
    ("Ukkadam", 10.990, 76.962),
    ("Singanallur", 11.000, 77.030),
];

/// Zone to `(lat, lng)` table.
///
/// Defaults to the built-in zones. A run may replace it with a JSON file:
/// ```json
/// {
///   "Gandhipuram": [11.017, 76.967],
///   "Peelamedu": [11.029, 77.021]
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCoordinates {
    entries: BTreeMap<String, (f64, f64)>,
}

impl ZoneCoordinates {
    pub fn builtin() -> Self {
        let entries = BUILTIN_ZONES
            .iter()
            .map(|&(zone, lat, lng)| (zone.to_string(), (lat, lng)))
            .collect();
        Self { entries }
    }

    /// Loads a replacement table from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: BTreeMap<String, (f64, f64)> = serde_json::from_str(&content)?;
        Ok(Self { entries })
    }

    /// Returns the coordinates for `zone`.
    ///
    /// # Errors
    ///
    /// [`WhiteBoxError::UnknownZone`] when the zone has no entry.
    pub fn lookup(&self, zone: &str) -> Result<(f64, f64)> {
        self.entries
            .get(zone)
            .copied()
            .ok_or_else(|| WhiteBoxError::UnknownZone(zone.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ZoneCoordinates {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Looks `zone` up in the built-in table.
pub fn lookup_coordinates(zone: &str) -> Result<(f64, f64)> {
    ZoneCoordinates::builtin().lookup(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(lookup_coordinates("Gandhipuram").unwrap(), (11.017, 76.967));
        assert_eq!(lookup_coordinates("Singanallur").unwrap(), (11.000, 77.030));
        assert_eq!(ZoneCoordinates::builtin().len(), 6);
    }

    #[test]
    fn test_unknown_zone_fails() {
        let err = lookup_coordinates("Nowhere").unwrap_err();
        assert!(matches!(err, WhiteBoxError::UnknownZone(ref z) if z == "Nowhere"));
    }

    #[test]
    fn test_load_replaces_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");
        std::fs::write(&path, r#"{"Nowhere": [1.5, -2.25]}"#).unwrap();

        let coords = ZoneCoordinates::load(&path).unwrap();

        assert_eq!(coords.lookup("Nowhere").unwrap(), (1.5, -2.25));
        assert!(coords.lookup("Gandhipuram").is_err());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");
        std::fs::write(&path, r#"{"Nowhere": "north"}"#).unwrap();

        assert!(matches!(
            ZoneCoordinates::load(&path),
            Err(WhiteBoxError::Json(_))
        ));
    }
}
