//! Error types for statistics computation.

use thiserror::Error;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while computing report statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Error from the data layer
    #[error(transparent)]
    Data(#[from] autosales_data::DataError),

    /// Report label that matches neither report type
    #[error("Unknown report type: {0}")]
    UnknownReport(String),

    /// Statistic name not present in the registry
    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    /// A per-year statistic was requested without a year
    #[error("{0} requires a year")]
    MissingYear(String),
}
