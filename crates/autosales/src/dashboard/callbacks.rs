//! Control callbacks: what the page shows for a given pair of selections.

use autosales_charts::{ChartGrid, report_grid};
use autosales_data::SalesTable;
use autosales_stats::{ReportKind, run_report, year_options};
use serde::{Deserialize, Serialize};

/// A dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption<T> {
    /// Text shown to the user
    pub label: String,
    /// Value sent back on selection
    pub value: T,
}

/// Entries of both dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Report type entries
    pub statistics: Vec<DropdownOption<String>>,
    /// Year entries
    pub years: Vec<DropdownOption<i32>>,
}

/// Dropdown entries offered by the page.
pub fn control_options() -> ControlOptions {
    ControlOptions {
        statistics: ReportKind::all()
            .into_iter()
            .map(|kind| DropdownOption {
                label: kind.label().to_string(),
                value: kind.label().to_string(),
            })
            .collect(),
        years: year_options()
            .into_iter()
            .map(|year| DropdownOption {
                label: year.to_string(),
                value: year,
            })
            .collect(),
    }
}

/// Whether the year selector is disabled for the selected report type.
///
/// Only "Yearly Statistics" enables it; no selection disables it.
pub fn year_selector_disabled(statistics: Option<&str>) -> bool {
    statistics.and_then(ReportKind::from_label) != Some(ReportKind::Yearly)
}

/// Contents of the output container.
///
/// Returns `None` (empty container) when no report is selected, the label is
/// unknown, or the yearly report has no year yet. The recession report
/// ignores `year`.
pub fn update_output(
    table: &SalesTable,
    year: Option<i32>,
    statistics: Option<&str>,
) -> autosales_stats::Result<Option<ChartGrid>> {
    let Some(kind) = statistics.and_then(ReportKind::from_label) else {
        return Ok(None);
    };

    let year = match kind {
        ReportKind::Recession => None,
        ReportKind::Yearly => match year {
            Some(year) => Some(year),
            None => return Ok(None),
        },
    };

    let report = run_report(table, kind, year)?;
    Ok(Some(report_grid(&report)))
}
