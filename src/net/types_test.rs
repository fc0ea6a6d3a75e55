use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_default_is_trade() {
    assert_eq!(Category::default(), Category::Trade);
}

#[test]
fn category_parse_accepts_wire_names_only() {
    assert_eq!(Category::parse("trade"), Some(Category::Trade));
    assert_eq!(Category::parse("rent"), Some(Category::Rent));
    assert_eq!(Category::parse("Rent"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn category_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Category::Rent).unwrap(), "\"rent\"");
    assert_eq!(Category::Trade.to_string(), "trade");
}

// =============================================================
// Manifest
// =============================================================

#[test]
fn manifest_missing_category_reads_as_empty() {
    let manifest: Manifest = serde_json::from_str(r#"{"trade": ["a.csv", "b.csv"]}"#).unwrap();
    assert_eq!(manifest.files(Category::Trade), ["a.csv", "b.csv"]);
    assert!(manifest.files(Category::Rent).is_empty());
}

// =============================================================
// CellValue
// =============================================================

#[test]
fn coerce_types_numbers_booleans_and_blanks() {
    assert_eq!(CellValue::coerce("100"), CellValue::Number(100.0));
    assert_eq!(CellValue::coerce(" 2.5 "), CellValue::Number(2.5));
    assert_eq!(CellValue::coerce("TRUE"), CellValue::Bool(true));
    assert_eq!(CellValue::coerce("   "), CellValue::Empty);
    assert_eq!(CellValue::coerce("1,000"), CellValue::Text("1,000".to_owned()));
    assert_eq!(CellValue::coerce("NaN"), CellValue::Text("NaN".to_owned()));
}

#[test]
fn as_number_ignores_booleans_and_text() {
    assert_eq!(CellValue::Number(3.0).as_number(), Some(3.0));
    assert_eq!(CellValue::Text(" 42 ".to_owned()).as_number(), Some(42.0));
    assert_eq!(CellValue::Text("bad".to_owned()).as_number(), None);
    assert_eq!(CellValue::Bool(true).as_number(), None);
    assert_eq!(CellValue::Empty.as_number(), None);
}

#[test]
fn cell_display_matches_table_text() {
    assert_eq!(CellValue::Number(1000.0).to_string(), "1000");
    assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
    assert_eq!(CellValue::Empty.to_string(), "");
    assert_eq!(CellValue::Bool(false).to_string(), "false");
}

// =============================================================
// RecordRow
// =============================================================

#[test]
fn record_row_preserves_column_order() {
    let row: RecordRow = [("b", CellValue::Empty), ("a", CellValue::Number(1.0))].into_iter().collect();
    assert_eq!(row.columns().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(row.get("a"), Some(&CellValue::Number(1.0)));
    assert_eq!(row.get("missing"), None);
}

// =============================================================
// MonthlyAggregate / ObservationSnapshot
// =============================================================

#[test]
fn aggregate_months_iterate_in_key_order() {
    let agg: MonthlyAggregate =
        serde_json::from_str(r#"{"2025_12": {"total": 5}, "2025_02": {"total": 1}, "2025_10": {"total": 3}}"#).unwrap();
    assert_eq!(agg.months().collect::<Vec<_>>(), ["2025_02", "2025_10", "2025_12"]);
    assert_eq!(agg.count("2025_10", TOTAL_KEY), Some(3));
    assert_eq!(agg.count("2025_10", "Mapo-gu"), None);
}

#[test]
fn snapshot_reads_observation_date_and_data() {
    let log: ObservationLog =
        serde_json::from_str(r#"[{"observation_date": "2025-11-03", "data": {"11": 100, "10": 90}}]"#).unwrap();
    assert_eq!(log[0].observation_date, "2025-11-03");
    assert_eq!(log[0].data.get("10"), Some(&90));
}
