//! Statistic Registry
//!
//! Catalogue of every chart statistic with the metadata the CLI lists and
//! the chart layer needs to pick a figure type.

use crate::report::ReportKind;
use crate::statistic::Statistic;
use autosales_data::columns;

/// Figure type a statistic is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Line chart
    Line,
    /// Bar chart
    Bar,
    /// Pie chart
    Pie,
}

impl ChartKind {
    /// Figure type used for a statistic.
    pub const fn of(statistic: Statistic) -> Self {
        match statistic {
            Statistic::RecessionSalesByYear
            | Statistic::YearlySalesTrend
            | Statistic::MonthlySales => Self::Line,
            Statistic::RecessionSalesRanking | Statistic::VehicleSalesRanking => Self::Bar,
            Statistic::RecessionSalesByVehicle
            | Statistic::RecessionAdvertisingByVehicle
            | Statistic::AdvertisingTotalByVehicle => Self::Pie,
        }
    }

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

/// Statistic metadata
#[derive(Debug, Clone)]
pub struct StatisticInfo {
    /// The statistic
    pub statistic: Statistic,
    /// Report it belongs to
    pub report: ReportKind,
    /// Figure type
    pub chart: ChartKind,
    /// Brief description of what is measured
    pub description: &'static str,
    /// Columns read from the sales table
    pub required_columns: &'static [&'static str],
}

impl StatisticInfo {
    /// Statistic name.
    pub const fn name(&self) -> &'static str {
        self.statistic.name()
    }
}

/// Get all available statistic info
pub fn available_statistics() -> Vec<StatisticInfo> {
    vec![
        // Recession report
        StatisticInfo {
            statistic: Statistic::RecessionSalesByYear,
            report: ReportKind::Recession,
            chart: ChartKind::Line,
            description: "Average automobile sales per year during recessions",
            required_columns: &[columns::RECESSION, columns::YEAR, columns::AUTOMOBILE_SALES],
        },
        StatisticInfo {
            statistic: Statistic::RecessionSalesByVehicle,
            report: ReportKind::Recession,
            chart: ChartKind::Pie,
            description: "Average automobile sales per vehicle type during recessions",
            required_columns: &[
                columns::RECESSION,
                columns::VEHICLE_TYPE,
                columns::AUTOMOBILE_SALES,
            ],
        },
        StatisticInfo {
            statistic: Statistic::RecessionAdvertisingByVehicle,
            report: ReportKind::Recession,
            chart: ChartKind::Pie,
            description: "Advertising expenditure share per vehicle type during recessions",
            required_columns: &[
                columns::RECESSION,
                columns::VEHICLE_TYPE,
                columns::ADVERTISING_EXPENDITURE,
            ],
        },
        StatisticInfo {
            statistic: Statistic::RecessionSalesRanking,
            report: ReportKind::Recession,
            chart: ChartKind::Bar,
            description: "Vehicle types ranked by average sales during recessions",
            required_columns: &[
                columns::RECESSION,
                columns::VEHICLE_TYPE,
                columns::AUTOMOBILE_SALES,
            ],
        },
        // Yearly report
        StatisticInfo {
            statistic: Statistic::YearlySalesTrend,
            report: ReportKind::Yearly,
            chart: ChartKind::Line,
            description: "Average automobile sales per year over the whole period",
            required_columns: &[columns::YEAR, columns::AUTOMOBILE_SALES],
        },
        StatisticInfo {
            statistic: Statistic::MonthlySales,
            report: ReportKind::Yearly,
            chart: ChartKind::Line,
            description: "Average automobile sales per month of the selected year",
            required_columns: &[columns::YEAR, columns::MONTH, columns::AUTOMOBILE_SALES],
        },
        StatisticInfo {
            statistic: Statistic::VehicleSalesRanking,
            report: ReportKind::Yearly,
            chart: ChartKind::Bar,
            description: "Vehicle types ranked by average sales in the selected year",
            required_columns: &[
                columns::YEAR,
                columns::VEHICLE_TYPE,
                columns::AUTOMOBILE_SALES,
            ],
        },
        StatisticInfo {
            statistic: Statistic::AdvertisingTotalByVehicle,
            report: ReportKind::Yearly,
            chart: ChartKind::Pie,
            description: "Total advertising expenditure per vehicle type in the selected year",
            required_columns: &[
                columns::YEAR,
                columns::VEHICLE_TYPE,
                columns::ADVERTISING_EXPENDITURE,
            ],
        },
    ]
}

/// Get statistics of one report
pub fn statistics_for(report: ReportKind) -> Vec<StatisticInfo> {
    available_statistics()
        .into_iter()
        .filter(|info| info.report == report)
        .collect()
}

/// Get statistic info by name
pub fn get_statistic_info(name: &str) -> Option<StatisticInfo> {
    available_statistics()
        .into_iter()
        .find(|info| info.name() == name)
}
