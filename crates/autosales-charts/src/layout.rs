//! Chart titles and grid placement for both reports.

use crate::figure::Figure;
use crate::grid::{ChartGrid, ChartItem};
use autosales_stats::{ChartKind, GroupedSeries, RecessionTables, Report, Statistic, YearlyTables};

/// Title of the chart drawn for a statistic.
///
/// Per-year charts mention the year; without one the year is left out.
pub fn chart_title(statistic: Statistic, year: Option<i32>) -> String {
    let year = year.map(|y| format!(" in {}", y)).unwrap_or_default();
    match statistic {
        Statistic::RecessionSalesByYear => {
            "Average Automobile Sales fluctuation over Recession Period".to_string()
        }
        Statistic::RecessionSalesByVehicle => "Average Automobile Sales by Vehicle Type".to_string(),
        Statistic::RecessionAdvertisingByVehicle => {
            "Total Expenditure Share by Vehicle Type".to_string()
        }
        Statistic::RecessionSalesRanking => "Average Sales by Vehicle Type".to_string(),
        Statistic::YearlySalesTrend => "Yearly Automobile Sales".to_string(),
        Statistic::MonthlySales => format!("Monthly Automobile Sales{}", year),
        Statistic::VehicleSalesRanking => {
            format!("Average Vehicles Sold by Vehicle Type{}", year)
        }
        Statistic::AdvertisingTotalByVehicle => {
            format!("Total Advertisement Expenditure by Vehicle Type{}", year)
        }
    }
}

const fn axis_titles(statistic: Statistic) -> Option<(&'static str, &'static str)> {
    match statistic {
        Statistic::RecessionSalesByYear | Statistic::YearlySalesTrend => {
            Some(("Year", "Automobile Sales"))
        }
        Statistic::MonthlySales => Some(("Month", "Automobile Sales")),
        Statistic::RecessionSalesRanking | Statistic::VehicleSalesRanking => {
            Some(("Vehicle Type", "Automobile Sales"))
        }
        Statistic::RecessionSalesByVehicle
        | Statistic::RecessionAdvertisingByVehicle
        | Statistic::AdvertisingTotalByVehicle => None,
    }
}

/// Figure for one statistic's series.
pub fn statistic_figure(statistic: Statistic, series: &GroupedSeries, year: Option<i32>) -> Figure {
    let mut figure = Figure::of_kind(
        ChartKind::of(statistic),
        series,
        chart_title(statistic, year),
    );
    if let Some((x, y)) = axis_titles(statistic) {
        figure = figure.with_axis_titles(x, y);
    }
    if statistic == Statistic::RecessionSalesByYear {
        figure = figure.with_markers().dotted();
    }
    figure
}

fn cell(statistic: Statistic, series: &GroupedSeries, year: Option<i32>) -> ChartItem {
    ChartItem::new(statistic.name(), statistic_figure(statistic, series, year))
}

/// Recession grid.
///
/// Top row: yearly trend, advertising share. Bottom row: sales by vehicle
/// type, sales ranking.
pub fn recession_grid(tables: &RecessionTables) -> ChartGrid {
    ChartGrid::two_by_two(
        [
            cell(Statistic::RecessionSalesByYear, &tables.sales_by_year, None),
            cell(
                Statistic::RecessionAdvertisingByVehicle,
                &tables.advertising_by_vehicle,
                None,
            ),
        ],
        [
            cell(
                Statistic::RecessionSalesByVehicle,
                &tables.sales_by_vehicle,
                None,
            ),
            cell(Statistic::RecessionSalesRanking, &tables.sales_ranking, None),
        ],
    )
}

/// Yearly grid.
///
/// Top row: monthly sales, advertising total. Bottom row: yearly trend,
/// vehicle ranking.
pub fn yearly_grid(tables: &YearlyTables) -> ChartGrid {
    let year = Some(tables.year);
    ChartGrid::two_by_two(
        [
            cell(Statistic::MonthlySales, &tables.monthly_sales, year),
            cell(
                Statistic::AdvertisingTotalByVehicle,
                &tables.advertising_total,
                year,
            ),
        ],
        [
            cell(Statistic::YearlySalesTrend, &tables.sales_trend, year),
            cell(Statistic::VehicleSalesRanking, &tables.vehicle_ranking, year),
        ],
    )
}

/// Grid for a computed report.
pub fn report_grid(report: &Report) -> ChartGrid {
    match report {
        Report::Yearly(tables) => yearly_grid(tables),
        Report::Recession(tables) => recession_grid(tables),
    }
}
