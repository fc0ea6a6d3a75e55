//! Dashboard orchestration: user intents → state transitions → fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Dashboard` bundles the reactive signals for every state module and is
//! provided via context. Views call its intent methods; those apply the pure
//! transitions from `state::*` and spawn the matching loads.
//!
//! All fetching is gated behind `#[cfg(feature = "csr")]` since it requires a
//! browser. Each completion is fenced by the owning module's request token.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::chart::ChartConfig;
use crate::config::DashboardConfig;
use crate::error::ManifestUnavailable;
use crate::net::types::{Category, Manifest};
use crate::state::manifest::{FileSelect, ManifestRegistry};
use crate::state::monthly::{MonthlyTrendState, RegionChange};
use crate::state::observed::ObservedTrendState;
use crate::state::records::RecordViewState;
use crate::state::selection::{RegionSelection, SelectionState, SelectorEndpoint};
use crate::state::tabs::{Tab, TrendLoad};

#[derive(Clone, Copy)]
pub struct Dashboard {
    pub config: StoredValue<DashboardConfig>,
    pub selection: RwSignal<SelectionState>,
    pub manifest: RwSignal<ManifestRegistry>,
    pub records: RwSignal<RecordViewState>,
    pub monthly: RwSignal<MonthlyTrendState>,
    pub observed: RwSignal<ObservedTrendState>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let selection = SelectionState::new(config.initial_category);
        Self {
            config: StoredValue::new(config),
            selection: RwSignal::new(selection),
            manifest: RwSignal::new(ManifestRegistry::default()),
            records: RwSignal::new(RecordViewState::default()),
            monthly: RwSignal::new(MonthlyTrendState::default()),
            observed: RwSignal::new(ObservedTrendState::default()),
        }
    }

    pub fn category(self) -> Category {
        self.selection.with(SelectionState::category)
    }

    pub fn file_select(self) -> FileSelect {
        let category = self.category();
        self.manifest.with(|m| m.file_select(category))
    }

    pub fn monthly_chart(self) -> Option<ChartConfig> {
        let (category, region) = self.selection.with(|s| (s.category(), s.region.clone()));
        self.monthly.with(|m| m.chart_config(category, &region))
    }

    pub fn observed_chart(self) -> Option<ChartConfig> {
        let category = self.category();
        self.observed.with(|o| o.chart_config(category))
    }

    /// Fetch the manifest once at start-up.
    pub fn load_manifest(self) {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let config = self.config.get_value();
                let result = crate::net::api::fetch_manifest(&config).await;
                self.apply_manifest(result);
            });
        }
    }

    /// Store a manifest outcome, surface a failure in the status line, and
    /// repopulate the file selector.
    pub fn apply_manifest(self, result: Result<Manifest, ManifestUnavailable>) {
        match &result {
            Ok(m) => leptos::logging::log!("manifest loaded: {} trade, {} rent", m.trade.len(), m.rent.len()),
            Err(e) => leptos::logging::warn!("manifest load failed: {e}"),
        }
        if let Some(message) = self.manifest.try_update(|m| m.apply(result)).flatten() {
            self.records.update(|r| r.set_status(message));
        }
        self.reset_file_selection();
    }

    /// Preselect the first file of the active category, as a fresh `<select>` would.
    fn reset_file_selection(self) {
        let category = self.selection.with_untracked(SelectionState::category);
        let first = self.manifest.with_untracked(|m| m.files_for(category).first().cloned());
        self.selection.update(|s| s.file = first);
    }

    /// A category selector changed. Only an effective change propagates.
    pub fn change_category(self, endpoint: SelectorEndpoint, value: Category) {
        let Some(change) = self.selection.try_update(|s| s.on_category_changed(endpoint, value)).flatten() else {
            return;
        };
        leptos::logging::log!("category {} -> {} ({:?})", change.previous, change.current, change.origin);

        self.reset_file_selection();
        self.monthly.update(MonthlyTrendState::invalidate);
        self.observed.update(ObservedTrendState::invalidate);
        self.load_monthly();
        self.load_observed();
    }

    pub fn select_file(self, file: String) {
        let file = (!file.is_empty()).then_some(file);
        self.selection.update(|s| s.file = file);
    }

    /// Load the selected file into the record viewer. No-op without a file.
    pub fn load_records(self) {
        let (category, file) = self.selection.with_untracked(|s| (s.category(), s.file.clone()));
        let Some(file) = file else {
            return;
        };
        let Some(token) = self.records.try_update(|r| r.begin_load(&file)) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let config = self.config.get_value();
                let result = crate::net::api::fetch_records(&config, category, &file).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("record load failed for {file}: {e}");
                }
                let applied = self
                    .records
                    .try_update(|r| r.complete_load(token, &file, result, &config.amount_field))
                    .unwrap_or(false);
                if !applied {
                    log::debug!("stale record load for {file} ignored");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (category, token);
        }
    }

    /// Re-render from cache when possible; otherwise fetch.
    pub fn select_region(self, value: &str) {
        let region = RegionSelection::from_value(value);
        self.selection.update(|s| s.region = region);
        let category = self.selection.with_untracked(SelectionState::category);
        if self.monthly.with_untracked(|m| m.region_change(category)) == RegionChange::Load {
            self.load_monthly();
        }
    }

    pub fn activate_tab(self, tab: Tab) {
        match self.selection.try_update(|s| s.tabs.activate(tab)).flatten() {
            Some(TrendLoad::Monthly) => self.load_monthly(),
            Some(TrendLoad::Observed) => self.load_observed(),
            None => {}
        }
    }

    pub fn load_monthly(self) {
        let category = self.selection.with_untracked(SelectionState::category);
        let Some(token) = self.monthly.try_update(MonthlyTrendState::begin_load) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let config = self.config.get_value();
                let result = crate::net::api::fetch_aggregate(&config, category).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("no monthly stats for {category}: {e}");
                }
                let applied = self
                    .monthly
                    .try_update(|m| m.complete_load(token, category, result))
                    .unwrap_or(false);
                if !applied {
                    log::debug!("stale monthly stats for {category} ignored");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (category, token);
        }
    }

    pub fn load_observed(self) {
        let category = self.selection.with_untracked(SelectionState::category);
        let Some(token) = self.observed.try_update(ObservedTrendState::begin_load) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let config = self.config.get_value();
                let result = crate::net::api::fetch_observation_log(&config, category).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("no observation log for {category}: {e}");
                }
                let applied = self
                    .observed
                    .try_update(|o| o.complete_load(token, category, result))
                    .unwrap_or(false);
                if !applied {
                    log::debug!("stale observation log for {category} ignored");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (category, token);
        }
    }
}
