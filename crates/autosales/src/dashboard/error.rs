//! Dashboard errors and their HTTP mapping.

use autosales_charts::ExportError;
use autosales_data::DataError;
use autosales_stats::StatsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Errors raised while serving the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Loading the sales table failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Computing a report failed
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Exporting a table failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Binding or serving the HTTP listener failed
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// HTTP status reported for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Stats(StatsError::UnknownStatistic(_)) => StatusCode::NOT_FOUND,
            Self::Stats(StatsError::MissingYear(_) | StatsError::UnknownReport(_))
            | Self::Export(ExportError::InvalidFormat(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
