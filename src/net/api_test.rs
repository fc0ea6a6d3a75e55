use super::*;

// =============================================================
// Resource paths
// =============================================================

#[test]
fn paths_are_built_from_category_and_filename() {
    assert_eq!(manifest_path("assets/data"), "assets/data/manifest.json");
    assert_eq!(records_path("assets/data", Category::Rent, "2025_11.csv"), "assets/data/rent/2025_11.csv");
    assert_eq!(aggregate_path("assets/data", Category::Trade), "assets/data/stats_trade.json");
    assert_eq!(observation_log_path("data", Category::Rent), "data/observation_log_rent.json");
}

// =============================================================
// Manifest
// =============================================================

#[test]
fn parse_manifest_reads_both_categories() {
    let manifest = parse_manifest(r#"{"trade": ["a.csv"], "rent": []}"#).unwrap();
    assert_eq!(manifest.files(Category::Trade), ["a.csv"]);
    assert!(manifest.files(Category::Rent).is_empty());
}

#[test]
fn parse_manifest_rejects_unusable_structure() {
    assert!(parse_manifest("[]").is_err());
    assert!(parse_manifest(r#"{"trade": "a.csv"}"#).is_err());
    assert!(parse_manifest("<html>").is_err());
}

// =============================================================
// Records
// =============================================================

#[test]
fn parse_records_coerces_cells_in_header_order() {
    let rows = parse_records("name,amt,flag\nA,100,true\nB,bad,\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), ["name", "amt", "flag"]);
    assert_eq!(rows[0].get("amt"), Some(&CellValue::Number(100.0)));
    assert_eq!(rows[0].get("flag"), Some(&CellValue::Bool(true)));
    assert_eq!(rows[1].get("amt"), Some(&CellValue::Text("bad".to_owned())));
    assert_eq!(rows[1].get("flag"), Some(&CellValue::Empty));
}

#[test]
fn parse_records_short_line_leaves_columns_absent() {
    let rows = parse_records("a,b,c\n1\n").unwrap();
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("b"), None);
}

#[test]
fn parse_records_quoted_commas_stay_text() {
    let rows = parse_records("amt\n\"1,000\"\n").unwrap();
    assert_eq!(rows[0].get("amt"), Some(&CellValue::Text("1,000".to_owned())));
}

#[test]
fn parse_records_strips_byte_order_mark() {
    let rows = parse_records("\u{feff}amt\n5\n").unwrap();
    assert_eq!(rows[0].get("amt"), Some(&CellValue::Number(5.0)));
}

#[test]
fn parse_records_header_only_yields_no_rows() {
    assert!(parse_records("a,b\n").unwrap().is_empty());
}

// =============================================================
// Trend artifacts
// =============================================================

#[test]
fn parse_aggregate_rejects_non_integer_counts() {
    assert!(parse_aggregate(r#"{"2025_11": {"total": 10}}"#).is_ok());
    assert!(parse_aggregate(r#"{"2025_11": {"total": "ten"}}"#).is_err());
    assert!(parse_aggregate("[]").is_err());
}

#[test]
fn parse_observation_log_accepts_empty_array() {
    assert!(parse_observation_log("[]").unwrap().is_empty());
    assert!(parse_observation_log("{}").is_err());
}

// =============================================================
// Transport (native build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn native_transport_reports_unavailable() {
    let config = DashboardConfig::default();
    let result = block_on(fetch_records(&config, Category::Trade, "a.csv"));
    assert_eq!(result, Err(FetchError::Unavailable));
}

/// Drive a future that never suspends to completion.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended in native build"),
    }
}
