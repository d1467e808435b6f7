//! Error type shared by the aggregation pipeline.

use thiserror::Error;

/// Everything that can abort an aggregation run.
///
/// The run is fail-fast: any of these stops it before output is written.
#[derive(Debug, Error)]
pub enum WhiteBoxError {
    /// A zone in the input has no entry in the coordinate table.
    #[error("unknown zone '{0}': no coordinate entry")]
    UnknownZone(String),

    /// A raw trip record is missing a required value.
    ///
    /// `record` is the 1-based data row (the header is not counted).
    #[error("record {record}: missing required field '{field}'")]
    MissingField { record: usize, field: &'static str },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = WhiteBoxError> = std::result::Result<T, E>;
