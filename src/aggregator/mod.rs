//! Zone aggregation and classification.
//!
//! Groups raw trips by pickup zone, computes fare and incentive statistics,
//! classifies each zone into ordinal [`Level`]s, and attaches coordinates and
//! a plain-language explanation.

pub mod aggregate;
pub mod classify;
pub mod coordinates;
pub mod explain;
pub mod types;
pub mod utility;

pub use aggregate::{aggregate, aggregate_with};
pub use classify::{classify_assignment, classify_incentive};
pub use coordinates::{ZoneCoordinates, lookup_coordinates};
pub use explain::build_explanation;
pub use types::{Level, ZoneSummary};
