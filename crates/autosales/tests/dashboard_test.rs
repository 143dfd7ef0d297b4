//! Dashboard callbacks and router over an in-memory sales table.

use autosales::dashboard::{
    DashboardConfig, DashboardServer, control_options, update_output, year_selector_disabled,
};
use autosales::charts::ChartGrid;
use autosales::{ReportKind, SalesTable};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use polars::prelude::*;
use rstest::{fixture, rstest};
use tower::ServiceExt;

#[fixture]
fn table() -> SalesTable {
    let frame = df!(
        "Year" => [1980i64, 1980, 1980, 1981, 1981],
        "Month" => ["Mar", "Jan", "Mar", "Jan", "Feb"],
        "Recession" => [1i64, 1, 0, 0, 0],
        "Automobile_Sales" => [100.0, 300.0, 500.0, 900.0, 1100.0],
        "Vehicle_Type" => ["Supperminicar", "Sports", "Sports", "Mediumfamilycar", "Sports"],
        "Advertising_Expenditure" => [1000i64, 3000, 2000, 2500, 1500],
    )
    .unwrap();
    SalesTable::from_frame(frame).unwrap()
}

#[rstest]
fn test_no_selection_shows_nothing(table: SalesTable) {
    assert!(update_output(&table, None, None).unwrap().is_none());
    assert!(update_output(&table, Some(1980), None).unwrap().is_none());
    assert!(
        update_output(&table, None, Some("Something else"))
            .unwrap()
            .is_none()
    );
}

#[rstest]
fn test_yearly_waits_for_year(table: SalesTable) {
    let label = ReportKind::Yearly.label();
    assert!(!year_selector_disabled(Some(label)));
    assert!(update_output(&table, None, Some(label)).unwrap().is_none());
}

#[rstest]
fn test_recession_ignores_year(table: SalesTable) {
    let label = ReportKind::Recession.label();
    let without = update_output(&table, None, Some(label)).unwrap().unwrap();
    let with = update_output(&table, Some(1981), Some(label)).unwrap().unwrap();
    assert_eq!(without, with);
    assert!(year_selector_disabled(Some(label)));
}

#[rstest]
fn test_yearly_grid_contents(table: SalesTable) {
    let grid = update_output(&table, Some(1980), Some(ReportKind::Yearly.label()))
        .unwrap()
        .unwrap();
    assert_eq!(
        grid.ids(),
        vec![
            "monthly_sales",
            "advertising_total_by_vehicle",
            "yearly_sales_trend",
            "vehicle_sales_ranking",
        ]
    );

    let json = serde_json::to_value(&grid).unwrap();
    let monthly = &json["rows"][0]["items"][0]["figure"]["data"][0];
    // months keep their order of appearance
    assert_eq!(monthly["x"], serde_json::json!(["Mar", "Jan"]));
    assert_eq!(monthly["y"], serde_json::json!([300.0, 300.0]));

    let ranking = &json["rows"][1]["items"][1]["figure"]["data"][0];
    assert_eq!(
        ranking["x"],
        serde_json::json!(["Sports car", "Suppermini car"])
    );
    assert_eq!(ranking["y"], serde_json::json!([400.0, 100.0]));
}

#[rstest]
fn test_year_without_rows_renders_empty_charts(table: SalesTable) {
    let grid = update_output(&table, Some(2005), Some(ReportKind::Yearly.label()))
        .unwrap()
        .unwrap();
    let monthly = grid.find("monthly_sales").unwrap();
    assert_eq!(monthly.figure.title(), "Monthly Automobile Sales in 2005");

    let trend = grid.find("yearly_sales_trend").unwrap();
    assert_eq!(trend.figure.title(), "Yearly Automobile Sales");
}

#[test]
fn test_control_options_json() {
    let json = serde_json::to_value(control_options()).unwrap();
    assert_eq!(json["statistics"].as_array().unwrap().len(), 2);
    assert_eq!(json["years"].as_array().unwrap().len(), 44);
    assert_eq!(json["years"][0], serde_json::json!({"label": "1980", "value": 1980}));
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn router(table: SalesTable) -> Router {
    DashboardServer::new(table, DashboardConfig::with_port(0)).router()
}

#[rstest]
#[tokio::test]
async fn test_page_and_options_routes(table: SalesTable) {
    let app = router(table);

    let (status, page) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"id="dropdown-statistics""#));

    let (status, body) = get(app.clone(), "/api/options").await;
    assert_eq!(status, StatusCode::OK);
    let options: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(options["years"].as_array().unwrap().len(), 44);

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[rstest]
#[case("/api/controls?statistics=Yearly%20Statistics", false)]
#[case("/api/controls?statistics=Recession%20Period%20Statistics", true)]
#[case("/api/controls", true)]
#[tokio::test]
async fn test_controls_route(table: SalesTable, #[case] uri: &str, #[case] disabled: bool) {
    let (status, body) = get(router(table), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!(r#"{{"year_disabled":{}}}"#, disabled));
}

#[rstest]
#[tokio::test]
async fn test_output_route(table: SalesTable) {
    let app = router(table);

    let (status, body) = get(
        app.clone(),
        "/api/output?statistics=Yearly%20Statistics&year=1980",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let grid: ChartGrid = serde_json::from_str(&body).unwrap();
    assert_eq!(grid.ids().len(), 4);
    assert_eq!(
        grid.find("monthly_sales").unwrap().figure.title(),
        "Monthly Automobile Sales in 1980"
    );

    let (status, body) = get(app.clone(), "/api/output?statistics=Yearly%20Statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"rows":[]}"#);

    let (status, body) = get(app.clone(), "/api/output").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"rows":[]}"#);

    let (status, _) = get(app, "/api/output?statistics=Yearly%20Statistics&year=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn test_export_route(table: SalesTable) {
    let app = router(table);

    let request = Request::builder()
        .uri("/api/export/vehicle_sales_ranking?year=1980&format=json")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let series: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        series["labels"],
        serde_json::json!(["Sports car", "Suppermini car"])
    );

    let (status, csv) = get(app.clone(), "/api/export/yearly_sales_trend").await;
    assert_eq!(status, StatusCode::OK);
    assert!(csv.starts_with("Year,Automobile_Sales\n"));

    let (status, _) = get(app.clone(), "/api/export/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app.clone(), "/api/export/monthly_sales").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app, "/api/export/monthly_sales?year=1980&format=xml").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
