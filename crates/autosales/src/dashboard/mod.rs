//! Dashboard server module.
//!
//! Provides a web server that:
//! - Serves a single-page frontend with the two report controls
//! - Answers control changes with the chart grid for the selection
//! - Exports the table behind any chart as CSV or JSON

pub mod callbacks;
pub mod config;
pub mod error;
pub mod frontend;

pub use callbacks::{
    ControlOptions, DropdownOption, control_options, update_output, year_selector_disabled,
};
pub use config::DashboardConfig;
pub use error::DashboardError;

use autosales_charts::{ChartGrid, ExportFormat, Exporter};
use autosales_data::SalesTable;
use autosales_stats::Statistic;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared state for the dashboard server.
#[derive(Debug)]
pub struct DashboardState {
    table: SalesTable,
    config: DashboardConfig,
}

impl DashboardState {
    /// Create the state.
    pub const fn new(table: SalesTable, config: DashboardConfig) -> Self {
        Self { table, config }
    }

    /// The loaded sales table.
    pub const fn table(&self) -> &SalesTable {
        &self.table
    }
}

/// The dashboard server that serves the web UI and API endpoints.
#[derive(Debug)]
pub struct DashboardServer {
    state: Arc<DashboardState>,
}

impl DashboardServer {
    /// Creates a new dashboard server over a loaded table.
    pub fn new(table: SalesTable, config: DashboardConfig) -> Self {
        Self {
            state: Arc::new(DashboardState::new(table, config)),
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// Starts the dashboard web server.
    /// This method runs until the server receives Ctrl-C.
    pub async fn run(self) -> Result<(), DashboardError> {
        let config = &self.state.config;
        let listener =
            tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
        info!(
            "Dashboard server starting on http://{}",
            listener.local_addr()?
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Dashboard server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

fn build_router(state: Arc<DashboardState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(serve_frontend))
        .route("/health", get(health))
        .route("/api/options", get(get_options))
        .route("/api/controls", get(get_controls))
        .route("/api/output", get(get_output))
        .route("/api/export/{statistic}", get(export_statistic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// GET / - Serves the dashboard page
async fn serve_frontend(State(state): State<Arc<DashboardState>>) -> Html<String> {
    Html(frontend::render(&state.config.title))
}

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// GET /api/options - Dropdown entries
async fn get_options() -> Json<ControlOptions> {
    Json(control_options())
}

/// Query of the control endpoints.
#[derive(Debug, Default, Deserialize)]
struct SelectionParams {
    statistics: Option<String>,
    year: Option<i32>,
}

/// Response of `/api/controls`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct ControlsState {
    year_disabled: bool,
}

/// GET /api/controls - Whether the year selector is enabled
async fn get_controls(Query(params): Query<SelectionParams>) -> Json<ControlsState> {
    Json(ControlsState {
        year_disabled: year_selector_disabled(params.statistics.as_deref()),
    })
}

/// GET /api/output - Chart grid for the current selection
async fn get_output(
    State(state): State<Arc<DashboardState>>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<ChartGrid>, DashboardError> {
    debug!(statistics = ?params.statistics, year = ?params.year, "updating output");
    let grid = update_output(&state.table, params.year, params.statistics.as_deref())?;
    Ok(Json(grid.unwrap_or_default()))
}

/// Query of the export endpoint.
#[derive(Debug, Default, Deserialize)]
struct ExportParams {
    year: Option<i32>,
    format: Option<String>,
}

/// GET /api/export/{statistic} - The table behind one chart
async fn export_statistic(
    State(state): State<Arc<DashboardState>>,
    Path(statistic): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<Response, DashboardError> {
    let statistic: Statistic = statistic.parse()?;
    let format: ExportFormat = params.format.as_deref().unwrap_or("csv").parse()?;

    let series = statistic.compute(&state.table, params.year)?;
    let body = series.export_to_string(format)?;

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
