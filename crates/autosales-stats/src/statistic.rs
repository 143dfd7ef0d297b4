//! The eight statistics behind the dashboard charts.

use crate::aggregate::{GroupOrder, GroupedAggregate, GroupedSeries};
use crate::error::{Result, StatsError};
use crate::report::ReportKind;
use autosales_data::SalesTable;
use autosales_data::columns::{
    ADVERTISING_EXPENDITURE, AUTOMOBILE_SALES, MONTH, RECESSION, VEHICLE_TYPE, YEAR,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rows a statistic is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Rows flagged as recession periods
    Recession,
    /// Every row
    All,
    /// Rows of the selected year
    SelectedYear,
}

/// A single chart statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Mean sales per year during recessions
    RecessionSalesByYear,
    /// Mean sales per vehicle type during recessions
    RecessionSalesByVehicle,
    /// Mean advertising spend per vehicle type during recessions
    RecessionAdvertisingByVehicle,
    /// Mean sales per vehicle type during recessions, largest first
    RecessionSalesRanking,
    /// Mean sales per year over the whole table
    YearlySalesTrend,
    /// Mean sales per month of the selected year
    MonthlySales,
    /// Mean sales per vehicle type in the selected year, largest first
    VehicleSalesRanking,
    /// Total advertising spend per vehicle type in the selected year
    AdvertisingTotalByVehicle,
}

impl Statistic {
    /// Every statistic, recession report first.
    pub const ALL: [Self; 8] = [
        Self::RecessionSalesByYear,
        Self::RecessionSalesByVehicle,
        Self::RecessionAdvertisingByVehicle,
        Self::RecessionSalesRanking,
        Self::YearlySalesTrend,
        Self::MonthlySales,
        Self::VehicleSalesRanking,
        Self::AdvertisingTotalByVehicle,
    ];

    /// Stable identifier used by the CLI and the export endpoint.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RecessionSalesByYear => "recession_sales_by_year",
            Self::RecessionSalesByVehicle => "recession_sales_by_vehicle",
            Self::RecessionAdvertisingByVehicle => "recession_advertising_by_vehicle",
            Self::RecessionSalesRanking => "recession_sales_ranking",
            Self::YearlySalesTrend => "yearly_sales_trend",
            Self::MonthlySales => "monthly_sales",
            Self::VehicleSalesRanking => "vehicle_sales_ranking",
            Self::AdvertisingTotalByVehicle => "advertising_total_by_vehicle",
        }
    }

    /// Report this statistic belongs to.
    pub const fn report(&self) -> ReportKind {
        match self {
            Self::RecessionSalesByYear
            | Self::RecessionSalesByVehicle
            | Self::RecessionAdvertisingByVehicle
            | Self::RecessionSalesRanking => ReportKind::Recession,
            Self::YearlySalesTrend
            | Self::MonthlySales
            | Self::VehicleSalesRanking
            | Self::AdvertisingTotalByVehicle => ReportKind::Yearly,
        }
    }

    const fn scope(&self) -> Scope {
        match self {
            Self::RecessionSalesByYear
            | Self::RecessionSalesByVehicle
            | Self::RecessionAdvertisingByVehicle
            | Self::RecessionSalesRanking => Scope::Recession,
            Self::YearlySalesTrend => Scope::All,
            Self::MonthlySales | Self::VehicleSalesRanking | Self::AdvertisingTotalByVehicle => {
                Scope::SelectedYear
            }
        }
    }

    /// Whether computing this statistic needs a selected year.
    pub const fn needs_year(&self) -> bool {
        matches!(self.scope(), Scope::SelectedYear)
    }

    /// The group-by step of this statistic.
    pub const fn aggregate(&self) -> GroupedAggregate {
        match self {
            Self::RecessionSalesByYear | Self::YearlySalesTrend => {
                GroupedAggregate::mean(YEAR, AUTOMOBILE_SALES)
            }
            Self::RecessionSalesByVehicle => GroupedAggregate::mean(VEHICLE_TYPE, AUTOMOBILE_SALES),
            Self::RecessionAdvertisingByVehicle => {
                GroupedAggregate::mean(VEHICLE_TYPE, ADVERTISING_EXPENDITURE)
            }
            Self::RecessionSalesRanking => GroupedAggregate::mean(VEHICLE_TYPE, AUTOMOBILE_SALES)
                .ordered(GroupOrder::ValueDescending),
            Self::MonthlySales => {
                GroupedAggregate::mean(MONTH, AUTOMOBILE_SALES).ordered(GroupOrder::FirstSeen)
            }
            Self::VehicleSalesRanking => GroupedAggregate::mean(VEHICLE_TYPE, AUTOMOBILE_SALES)
                .ordered(GroupOrder::ValueDescending),
            Self::AdvertisingTotalByVehicle => {
                GroupedAggregate::sum(VEHICLE_TYPE, ADVERTISING_EXPENDITURE)
            }
        }
    }

    /// Restrict the table to the rows this statistic covers.
    fn scoped(&self, table: &SalesTable, year: Option<i32>) -> Result<LazyFrame> {
        match self.scope() {
            Scope::Recession => Ok(table.lazy().filter(col(RECESSION).eq(lit(1)))),
            Scope::All => Ok(table.lazy()),
            Scope::SelectedYear => {
                let year = year.ok_or_else(|| StatsError::MissingYear(self.name().to_string()))?;
                Ok(table.lazy().filter(col(YEAR).eq(lit(year))))
            }
        }
    }

    /// Compute the statistic.
    ///
    /// `year` is only read by per-year statistics; the others ignore it.
    ///
    /// # Errors
    /// Returns `StatsError::MissingYear` when a per-year statistic gets no year.
    pub fn compute(&self, table: &SalesTable, year: Option<i32>) -> Result<GroupedSeries> {
        let data = self.scoped(table, year)?;
        self.aggregate().apply(self.name(), data)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.name() == s)
            .ok_or_else(|| StatsError::UnknownStatistic(s.to_string()))
    }
}
