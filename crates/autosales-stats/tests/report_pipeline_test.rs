//! Integration tests for the yearly and recession report pipelines.

use approx::assert_relative_eq;
use autosales_data::SalesTable;
use autosales_stats::{ReportKind, Statistic, StatsError, run_report};
use polars::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn table() -> SalesTable {
    let frame = df!(
        "Year" => [1980i64, 1980, 1980, 1981, 1981, 1981, 1982],
        "Month" => ["Jan", "Jan", "Feb", "Mar", "Feb", "Mar", "Jan"],
        "Recession" => [1i64, 1, 1, 0, 0, 0, 1],
        "Automobile_Sales" => [100.0, 300.0, 200.0, 1000.0, 500.0, 800.0, 50.0],
        "Vehicle_Type" => [
            "Sports",
            "Executivecar",
            "Sports",
            "Sports",
            "Executivecar",
            "Executivecar",
            "Supperminicar",
        ],
        "Advertising_Expenditure" => [10i64, 20, 30, 40, 50, 60, 70],
        "unemployment_rate" => [5.1, 5.2, 5.3, 3.0, 3.1, 3.2, 6.0],
    )
    .unwrap();
    SalesTable::from_frame(frame).unwrap()
}

#[rstest]
fn test_recession_report(table: SalesTable) {
    let report = run_report(&table, ReportKind::Recession, None).unwrap();
    assert_eq!(report.kind(), ReportKind::Recession);
    assert_eq!(report.year(), None);

    let [by_year, by_vehicle, advertising, ranking] = report.series();

    assert_eq!(by_year.labels, vec!["1980", "1982"]);
    assert_relative_eq!(by_year.values[0], 200.0);
    assert_relative_eq!(by_year.values[1], 50.0);

    assert_eq!(
        by_vehicle.labels,
        vec!["Executive car", "Sports car", "Suppermini car"]
    );
    assert_relative_eq!(by_vehicle.value_of("Sports car").unwrap(), 150.0);

    assert_relative_eq!(advertising.value_of("Executive car").unwrap(), 20.0);
    assert_relative_eq!(advertising.value_of("Sports car").unwrap(), 20.0);
    assert_relative_eq!(advertising.value_of("Suppermini car").unwrap(), 70.0);

    assert_eq!(
        ranking.labels,
        vec!["Executive car", "Sports car", "Suppermini car"]
    );
    assert_relative_eq!(ranking.values[0], 300.0);
}

#[rstest]
fn test_recession_report_ignores_year(table: SalesTable) {
    let without = run_report(&table, ReportKind::Recession, None).unwrap();
    let with = run_report(&table, ReportKind::Recession, Some(1981)).unwrap();
    assert_eq!(without, with);
}

#[rstest]
fn test_yearly_report(table: SalesTable) {
    let report = run_report(&table, ReportKind::Yearly, Some(1981)).unwrap();
    assert_eq!(report.year(), Some(1981));

    let [trend, monthly, ranking, advertising] = report.series();

    // Trend covers every year, not just the selected one.
    assert_eq!(trend.labels, vec!["1980", "1981", "1982"]);
    assert_relative_eq!(trend.values[1], 2300.0 / 3.0, epsilon = 1e-9);

    // Months keep their first-seen order.
    assert_eq!(monthly.labels, vec!["Mar", "Feb"]);
    assert_relative_eq!(monthly.values[0], 900.0);
    assert_relative_eq!(monthly.values[1], 500.0);

    assert_eq!(ranking.labels, vec!["Sports car", "Executive car"]);
    assert_relative_eq!(ranking.values[0], 1000.0);
    assert_relative_eq!(ranking.values[1], 650.0);

    // Advertising is summed, not averaged.
    assert_eq!(advertising.labels, vec!["Executive car", "Sports car"]);
    assert_relative_eq!(advertising.values[0], 110.0);
    assert_relative_eq!(advertising.values[1], 40.0);
}

#[rstest]
fn test_yearly_report_for_year_without_rows(table: SalesTable) {
    let report = run_report(&table, ReportKind::Yearly, Some(2005)).unwrap();
    let [trend, monthly, ranking, advertising] = report.series();

    assert_eq!(trend.len(), 3);
    assert!(monthly.is_empty());
    assert!(ranking.is_empty());
    assert!(advertising.is_empty());
}

#[rstest]
fn test_yearly_report_requires_year(table: SalesTable) {
    let result = run_report(&table, ReportKind::Yearly, None);
    assert!(matches!(result, Err(StatsError::MissingYear(_))));
}

#[rstest]
#[case(Statistic::MonthlySales)]
#[case(Statistic::VehicleSalesRanking)]
#[case(Statistic::AdvertisingTotalByVehicle)]
fn test_per_year_statistic_requires_year(table: SalesTable, #[case] stat: Statistic) {
    assert!(matches!(
        stat.compute(&table, None),
        Err(StatsError::MissingYear(_))
    ));
}

#[rstest]
fn test_single_statistic_matches_report(table: SalesTable) {
    let report = run_report(&table, ReportKind::Yearly, Some(1980)).unwrap();
    let monthly = Statistic::MonthlySales.compute(&table, Some(1980)).unwrap();
    assert_eq!(report.series()[1], &monthly);
    assert_eq!(monthly.name, "monthly_sales");
}

#[test]
fn test_yearly_report_with_missing_cells() {
    let csv = "\
Year,Month,Recession,Automobile_Sales,Vehicle_Type,Advertising_Expenditure
1990,Jan,0,100.0,Sports,1000
1990,Feb,0,200.0,,2000
1990,Mar,0,,Executivecar,3000
";
    let table = SalesTable::from_csv_bytes(csv).unwrap();
    let report = run_report(&table, ReportKind::Yearly, Some(1990)).unwrap();
    let [_, _, ranking, advertising] = report.series();

    assert_eq!(ranking.labels, vec!["Sports car", "Executive car"]);
    assert_relative_eq!(ranking.values[0], 100.0);
    assert!(ranking.values[1].is_nan());

    assert_eq!(advertising.labels, vec!["Executive car", "Sports car"]);
    assert_relative_eq!(advertising.total(), 4000.0);
}
