//! Yearly Statistics.
//!
//! The sales trend covers the whole table; the other three tables only the
//! selected year.

use crate::aggregate::GroupedSeries;
use crate::error::Result;
use crate::statistic::Statistic;
use autosales_data::SalesTable;
use serde::{Deserialize, Serialize};

/// Tables behind the yearly report charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTables {
    /// Selected year
    pub year: i32,
    /// Mean sales per year, all years
    pub sales_trend: GroupedSeries,
    /// Mean sales per month of the selected year
    pub monthly_sales: GroupedSeries,
    /// Mean sales per vehicle type in the selected year, largest first
    pub vehicle_ranking: GroupedSeries,
    /// Advertising spend per vehicle type in the selected year
    pub advertising_total: GroupedSeries,
}

impl YearlyTables {
    /// Compute every yearly table for `year`.
    pub fn compute(table: &SalesTable, year: i32) -> Result<Self> {
        let year_opt = Some(year);
        Ok(Self {
            year,
            sales_trend: Statistic::YearlySalesTrend.compute(table, year_opt)?,
            monthly_sales: Statistic::MonthlySales.compute(table, year_opt)?,
            vehicle_ranking: Statistic::VehicleSalesRanking.compute(table, year_opt)?,
            advertising_total: Statistic::AdvertisingTotalByVehicle.compute(table, year_opt)?,
        })
    }

    /// Tables in statistic order.
    pub const fn series(&self) -> [&GroupedSeries; 4] {
        [
            &self.sales_trend,
            &self.monthly_sales,
            &self.vehicle_ranking,
            &self.advertising_total,
        ]
    }

    /// Whether the selected year had no rows.
    pub fn is_empty_year(&self) -> bool {
        self.monthly_sales.is_empty()
    }
}
