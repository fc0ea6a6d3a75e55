use super::*;
use crate::error::FetchError;
use crate::net::api::parse_aggregate;

fn aggregate(json: &str) -> MonthlyAggregate {
    parse_aggregate(json).unwrap()
}

fn sample() -> MonthlyAggregate {
    aggregate(
        r#"{
            "2025_12": {"total": 30, "Mapo-gu": 4, "Jongno-gu": 6},
            "2025_10": {"total": 10, "Jongno-gu": 2},
            "2025_11": {"total": 20, "Gangnam-gu": 9}
        }"#,
    )
}

fn unavailable() -> TrendUnavailable {
    TrendUnavailable { resource: "assets/data/stats_trade.json".to_owned(), source: FetchError::Timeout(1) }
}

// =============================================================
// RegionVocabulary
// =============================================================

#[test]
fn vocabulary_is_sorted_union_without_total() {
    assert_eq!(RegionVocabulary::derive(&sample()), ["Gangnam-gu", "Jongno-gu", "Mapo-gu"]);
}

#[test]
fn vocabulary_populates_once_per_category() {
    let mut vocab = RegionVocabulary::default();
    assert!(vocab.populate(Category::Trade, &sample()));

    let changed = aggregate(r#"{"2026_01": {"total": 1, "Seocho-gu": 1}}"#);
    assert!(!vocab.populate(Category::Trade, &changed));

    assert_eq!(vocab.regions(), ["Gangnam-gu", "Jongno-gu", "Mapo-gu"]);
    assert!(vocab.is_populated_for(Category::Trade));
}

#[test]
fn vocabulary_repopulates_after_invalidate() {
    let mut vocab = RegionVocabulary::default();
    vocab.populate(Category::Trade, &sample());
    vocab.invalidate();
    assert!(vocab.regions().is_empty());

    let rent = aggregate(r#"{"2025_11": {"total": 3, "Seocho-gu": 3}}"#);
    assert!(vocab.populate(Category::Rent, &rent));
    assert_eq!(vocab.regions(), ["Seocho-gu"]);
}

#[test]
fn vocabulary_of_totals_only_is_empty() {
    assert!(RegionVocabulary::derive(&aggregate(r#"{"2025_11": {"total": 5}}"#)).is_empty());
}

// =============================================================
// MonthlySeries
// =============================================================

#[test]
fn total_series_uses_total_key_in_month_order() {
    let series = MonthlySeries::build(&sample(), &RegionSelection::Total, Category::Trade).unwrap();
    assert_eq!(series.months, ["2025_10", "2025_11", "2025_12"]);
    assert_eq!(series.counts, [10, 20, 30]);
    assert_eq!(series.label, "Total Transactions (All Regions, trade)");
}

#[test]
fn named_region_series_fills_absent_months_with_zero() {
    let region = RegionSelection::Named("Jongno-gu".to_owned());
    let series = MonthlySeries::build(&sample(), &region, Category::Rent).unwrap();
    assert_eq!(series.counts, [2, 0, 6]);
    assert_eq!(series.label, "Transactions (Jongno-gu, rent)");
}

#[test]
fn month_missing_total_reads_as_zero() {
    let agg = aggregate(r#"{"2025_11": {"Mapo-gu": 1}}"#);
    let series = MonthlySeries::build(&agg, &RegionSelection::Total, Category::Trade).unwrap();
    assert_eq!(series.counts, [0]);
}

#[test]
fn empty_aggregate_has_no_series() {
    assert_eq!(MonthlySeries::build(&MonthlyAggregate::default(), &RegionSelection::Total, Category::Trade), None);
}

#[test]
fn bar_config_begins_at_zero() {
    let config = MonthlySeries::build(&sample(), &RegionSelection::Total, Category::Trade).unwrap().chart_config();
    assert_eq!(config.kind, ChartKind::Bar);
    assert_eq!(config.data.datasets[0].data, [Some(10), Some(20), Some(30)]);
    assert_eq!(config.options.scales.as_ref().map(|s| s.y.begin_at_zero), Some(true));
}

// =============================================================
// MonthlyTrendState
// =============================================================

#[test]
fn load_caches_aggregate_and_vocabulary() {
    let mut state = MonthlyTrendState::default();
    let token = state.begin_load();
    assert!(state.complete_load(token, Category::Trade, Ok(sample())));

    assert!(state.cached_for(Category::Trade).is_some());
    assert!(state.cached_for(Category::Rent).is_none());
    assert_eq!(state.vocabulary.regions().len(), 3);
}

#[test]
fn region_change_renders_from_cache_without_refetch() {
    let mut state = MonthlyTrendState::default();
    assert_eq!(state.region_change(Category::Trade), RegionChange::Load);

    let token = state.begin_load();
    state.complete_load(token, Category::Trade, Ok(sample()));

    assert_eq!(state.region_change(Category::Trade), RegionChange::RenderFromCache);
    assert_eq!(state.region_change(Category::Rent), RegionChange::Load);

    let region = RegionSelection::Named("Mapo-gu".to_owned());
    let series = state.series(Category::Trade, &region).unwrap();
    assert_eq!(series.counts, [0, 0, 4]);
}

#[test]
fn repeated_load_does_not_duplicate_regions() {
    let mut state = MonthlyTrendState::default();
    for _ in 0..3 {
        let token = state.begin_load();
        state.complete_load(token, Category::Trade, Ok(sample()));
    }
    assert_eq!(state.vocabulary.regions(), ["Gangnam-gu", "Jongno-gu", "Mapo-gu"]);
}

#[test]
fn failure_keeps_same_category_cache() {
    let mut state = MonthlyTrendState::default();
    let token = state.begin_load();
    state.complete_load(token, Category::Trade, Ok(sample()));

    let token = state.begin_load();
    assert!(state.complete_load(token, Category::Trade, Err(unavailable())));
    assert!(state.chart_config(Category::Trade, &RegionSelection::Total).is_some());
}

#[test]
fn failure_for_other_category_empties_panel() {
    let mut state = MonthlyTrendState::default();
    let token = state.begin_load();
    state.complete_load(token, Category::Trade, Ok(sample()));

    let token = state.begin_load();
    state.complete_load(token, Category::Rent, Err(unavailable()));
    assert!(state.cached_for(Category::Trade).is_none());
    assert!(state.chart_config(Category::Rent, &RegionSelection::Total).is_none());
}

#[test]
fn stale_completion_does_not_overwrite_cache() {
    let mut state = MonthlyTrendState::default();
    let stale = state.begin_load();
    let current = state.begin_load();

    state.complete_load(current, Category::Rent, Ok(aggregate(r#"{"2025_11": {"total": 7}}"#)));
    assert!(!state.complete_load(stale, Category::Trade, Ok(sample())));

    assert!(state.cached_for(Category::Rent).is_some());
    assert!(state.cached_for(Category::Trade).is_none());
}

#[test]
fn invalidate_clears_cache_and_vocabulary() {
    let mut state = MonthlyTrendState::default();
    let token = state.begin_load();
    state.complete_load(token, Category::Trade, Ok(sample()));

    state.invalidate();

    assert!(state.cached_for(Category::Trade).is_none());
    assert!(state.vocabulary.regions().is_empty());
}
