//! Report types and the two report pipelines.

pub mod recession;
pub mod yearly;

pub use recession::RecessionTables;
pub use yearly::YearlyTables;

use crate::aggregate::GroupedSeries;
use crate::error::{Result, StatsError};
use autosales_data::SalesTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

/// Years offered by the year selector.
pub const YEAR_RANGE: RangeInclusive<i32> = 1980..=2023;

/// Year selector options, ascending.
pub fn year_options() -> Vec<i32> {
    YEAR_RANGE.collect()
}

/// The two report types offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    /// Statistics for one selected year
    Yearly,
    /// Statistics over every recession period
    Recession,
}

impl ReportKind {
    /// Dropdown label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Yearly => "Yearly Statistics",
            Self::Recession => "Recession Period Statistics",
        }
    }

    /// Report kinds in dropdown order.
    pub const fn all() -> [Self; 2] {
        [Self::Yearly, Self::Recession]
    }

    /// Whether the year selector applies to this report.
    pub const fn uses_year(&self) -> bool {
        matches!(self, Self::Yearly)
    }

    /// Parse an exact dropdown label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportKind {
    type Err = StatsError;

    /// Accepts the dropdown labels and the short forms `yearly` / `recession`.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(kind) = Self::from_label(s) {
            return Ok(kind);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" => Ok(Self::Yearly),
            "recession" => Ok(Self::Recession),
            _ => Err(StatsError::UnknownReport(s.to_string())),
        }
    }
}

/// Computed tables for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report {
    /// Yearly Statistics tables
    Yearly(YearlyTables),
    /// Recession Period Statistics tables
    Recession(RecessionTables),
}

impl Report {
    /// Report type.
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Yearly(_) => ReportKind::Yearly,
            Self::Recession(_) => ReportKind::Recession,
        }
    }

    /// Selected year, for yearly reports.
    pub const fn year(&self) -> Option<i32> {
        match self {
            Self::Yearly(tables) => Some(tables.year),
            Self::Recession(_) => None,
        }
    }

    /// The four aggregated series in statistic order.
    pub fn series(&self) -> [&GroupedSeries; 4] {
        match self {
            Self::Yearly(tables) => tables.series(),
            Self::Recession(tables) => tables.series(),
        }
    }
}

/// Compute a report.
///
/// Recession reports ignore `year`.
///
/// # Errors
/// Returns `StatsError::MissingYear` for a yearly report without a year.
pub fn run_report(table: &SalesTable, kind: ReportKind, year: Option<i32>) -> Result<Report> {
    debug!(report = %kind, ?year, "computing report");
    match kind {
        ReportKind::Recession => Ok(Report::Recession(RecessionTables::compute(table)?)),
        ReportKind::Yearly => {
            let year = year.ok_or_else(|| StatsError::MissingYear(kind.label().to_string()))?;
            Ok(Report::Yearly(YearlyTables::compute(table, year)?))
        }
    }
}
