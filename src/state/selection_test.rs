use super::*;

// =============================================================
// Category sync
// =============================================================

#[test]
fn primary_change_updates_secondary_once() {
    let mut state = SelectionState::new(Category::Trade);
    assert_eq!(state.projection(SelectorEndpoint::Secondary), Category::Trade);

    let event = state.on_primary_changed(Category::Rent);
    assert_eq!(
        event,
        Some(CategoryChanged { previous: Category::Trade, current: Category::Rent, origin: SelectorEndpoint::Primary })
    );
    assert_eq!(state.projection(SelectorEndpoint::Secondary), Category::Rent);

    // The secondary now mirrors the value, so its echo terminates.
    assert_eq!(state.on_secondary_changed(Category::Rent), None);
    assert_eq!(state.on_primary_changed(Category::Rent), None);
}

#[test]
fn secondary_change_is_symmetric() {
    let mut state = SelectionState::new(Category::Rent);
    let event = state.on_secondary_changed(Category::Trade).unwrap();
    assert_eq!(event.origin, SelectorEndpoint::Secondary);
    assert_eq!(state.projection(SelectorEndpoint::Primary), Category::Trade);
    assert_eq!(state.category(), Category::Trade);
}

#[test]
fn same_value_raises_no_event() {
    let mut state = SelectionState::new(Category::Trade);
    assert_eq!(state.on_primary_changed(Category::Trade), None);
}

#[test]
fn category_change_resets_file_and_region() {
    let mut state = SelectionState::new(Category::Trade);
    state.file = Some("a.csv".to_owned());
    state.region = RegionSelection::Named("Mapo-gu".to_owned());

    state.on_primary_changed(Category::Rent);

    assert_eq!(state.file, None);
    assert_eq!(state.region, RegionSelection::Total);
}

#[test]
fn ignored_change_keeps_file_and_region() {
    let mut state = SelectionState::new(Category::Trade);
    state.file = Some("a.csv".to_owned());
    state.region = RegionSelection::Named("Mapo-gu".to_owned());

    state.on_secondary_changed(Category::Trade);

    assert_eq!(state.file.as_deref(), Some("a.csv"));
    assert_eq!(state.region.value(), "Mapo-gu");
}

// =============================================================
// RegionSelection
// =============================================================

#[test]
fn region_selection_maps_total_value() {
    assert_eq!(RegionSelection::from_value("Total"), RegionSelection::Total);
    assert_eq!(RegionSelection::from_value(""), RegionSelection::Total);
    assert_eq!(RegionSelection::from_value("Jongno-gu"), RegionSelection::Named("Jongno-gu".to_owned()));
    assert_eq!(RegionSelection::Total.value(), TOTAL_REGION_VALUE);
}
