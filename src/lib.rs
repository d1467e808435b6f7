//! The White Box: per-zone delivery statistics and the dashboard that shows them.
//!
//! [`aggregator`] turns raw trip records into a zone summary table,
//! [`output`] writes it, and [`presenter`] serves it over HTTP.

pub mod aggregator;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod presenter;

pub use error::WhiteBoxError;
