//! Recession Period Statistics.
//!
//! All four tables are computed over rows with `Recession == 1`.

use crate::aggregate::GroupedSeries;
use crate::error::Result;
use crate::statistic::Statistic;
use autosales_data::SalesTable;
use serde::{Deserialize, Serialize};

/// Tables behind the recession report charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecessionTables {
    /// Mean sales per year
    pub sales_by_year: GroupedSeries,
    /// Mean sales per vehicle type
    pub sales_by_vehicle: GroupedSeries,
    /// Mean advertising spend per vehicle type
    pub advertising_by_vehicle: GroupedSeries,
    /// Mean sales per vehicle type, largest first
    pub sales_ranking: GroupedSeries,
}

impl RecessionTables {
    /// Compute every recession table.
    pub fn compute(table: &SalesTable) -> Result<Self> {
        Ok(Self {
            sales_by_year: Statistic::RecessionSalesByYear.compute(table, None)?,
            sales_by_vehicle: Statistic::RecessionSalesByVehicle.compute(table, None)?,
            advertising_by_vehicle: Statistic::RecessionAdvertisingByVehicle
                .compute(table, None)?,
            sales_ranking: Statistic::RecessionSalesRanking.compute(table, None)?,
        })
    }

    /// Tables in statistic order.
    pub const fn series(&self) -> [&GroupedSeries; 4] {
        [
            &self.sales_by_year,
            &self.sales_by_vehicle,
            &self.advertising_by_vehicle,
            &self.sales_ranking,
        ]
    }
}
