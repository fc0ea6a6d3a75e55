//! Active selection state and category selector sync.
//!
//! DESIGN
//! ======
//! The category has one source of truth. The primary (records view) and
//! secondary (trend view) selectors are read-only projections of it, so a
//! change from either side updates the other exactly once and cannot bounce
//! back.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::Category;
use crate::state::tabs::TabController;

/// Option value and label of the all-regions choice.
pub const TOTAL_REGION_VALUE: &str = "Total";

/// Which of the two category selectors raised a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorEndpoint {
    Primary,
    Secondary,
}

/// Region chosen for the monthly bar chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegionSelection {
    #[default]
    Total,
    Named(String),
}

impl RegionSelection {
    /// Map a region selector option value.
    pub fn from_value(value: &str) -> Self {
        if value == TOTAL_REGION_VALUE || value.is_empty() {
            Self::Total
        } else {
            Self::Named(value.to_owned())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Total => TOTAL_REGION_VALUE,
            Self::Named(name) => name,
        }
    }
}

/// Emitted once per effective category change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryChanged {
    pub previous: Category,
    pub current: Category,
    pub origin: SelectorEndpoint,
}

/// The `(category, file, region, tab)` tuple shared by all components.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    category: Category,
    pub file: Option<String>,
    pub region: RegionSelection,
    pub tabs: TabController,
}

impl SelectionState {
    pub fn new(category: Category) -> Self {
        Self { category, ..Self::default() }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Value shown by a selector endpoint.
    pub fn projection(&self, _endpoint: SelectorEndpoint) -> Category {
        self.category
    }

    pub fn on_primary_changed(&mut self, value: Category) -> Option<CategoryChanged> {
        self.on_category_changed(SelectorEndpoint::Primary, value)
    }

    pub fn on_secondary_changed(&mut self, value: Category) -> Option<CategoryChanged> {
        self.on_category_changed(SelectorEndpoint::Secondary, value)
    }

    /// Apply a selector change. Returns `None` when `value` already matches
    /// the other endpoint, which ends propagation.
    ///
    /// An effective change drops the selected file and resets the region.
    pub fn on_category_changed(&mut self, origin: SelectorEndpoint, value: Category) -> Option<CategoryChanged> {
        if value == self.category {
            return None;
        }
        let previous = self.category;
        self.category = value;
        self.file = None;
        self.region = RegionSelection::Total;
        Some(CategoryChanged { previous, current: value, origin })
    }
}
