//! Monthly trend engine: cached month → region aggregate and its bar chart.
//!
//! DESIGN
//! ======
//! - The aggregate is cached per category; region changes re-render from the
//!   cache and never refetch.
//! - The region vocabulary is populated once per category load and only
//!   grows until the category changes.
//! - Month order is the lexicographic order of the zero-padded keys.

#[cfg(test)]
#[path = "monthly_test.rs"]
mod monthly_test;

use std::collections::BTreeSet;

use crate::chart::{Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Scales};
use crate::error::TrendUnavailable;
use crate::net::request::{RequestToken, RequestTracker};
use crate::net::types::{Category, MonthlyAggregate, TOTAL_KEY};
use crate::state::selection::RegionSelection;
use crate::util::color::{BAR_BORDER, BAR_FILL};

/// Region options derived from the loaded aggregate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionVocabulary {
    populated_for: Option<Category>,
    regions: Vec<String>,
}

impl RegionVocabulary {
    /// Sorted union of every month's region keys, without `"total"`.
    pub fn derive(aggregate: &MonthlyAggregate) -> Vec<String> {
        let regions: BTreeSet<&str> = aggregate
            .0
            .values()
            .flat_map(|month| month.keys())
            .map(String::as_str)
            .filter(|key| *key != TOTAL_KEY)
            .collect();
        regions.into_iter().map(str::to_owned).collect()
    }

    /// Populate from `aggregate` unless already populated for `category`.
    /// Existing options are kept; only missing regions are appended.
    pub fn populate(&mut self, category: Category, aggregate: &MonthlyAggregate) -> bool {
        if self.populated_for == Some(category) {
            return false;
        }
        for region in Self::derive(aggregate) {
            if !self.regions.contains(&region) {
                self.regions.push(region);
            }
        }
        self.populated_for = Some(category);
        true
    }

    pub fn invalidate(&mut self) {
        self.populated_for = None;
        self.regions.clear();
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn is_populated_for(&self, category: Category) -> bool {
        self.populated_for == Some(category)
    }
}

/// One bar series over sorted months.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlySeries {
    pub label: String,
    pub months: Vec<String>,
    pub counts: Vec<i64>,
}

impl MonthlySeries {
    /// Build the series for `region`. Months lacking the region count as 0.
    /// Returns `None` for an aggregate with no months.
    pub fn build(aggregate: &MonthlyAggregate, region: &RegionSelection, category: Category) -> Option<Self> {
        if aggregate.is_empty() {
            return None;
        }
        let key = match region {
            RegionSelection::Total => TOTAL_KEY,
            RegionSelection::Named(name) => name.as_str(),
        };
        let months: Vec<String> = aggregate.months().map(str::to_owned).collect();
        let counts = months.iter().map(|m| aggregate.count(m, key).unwrap_or(0)).collect();
        let label = match region {
            RegionSelection::Total => format!("Total Transactions (All Regions, {category})"),
            RegionSelection::Named(name) => format!("Transactions ({name}, {category})"),
        };
        Some(Self { label, months, counts })
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: self.months.clone(),
                datasets: vec![Dataset {
                    label: self.label.clone(),
                    data: self.counts.iter().copied().map(Some).collect(),
                    background_color: Some(BAR_FILL.to_owned()),
                    border_color: BAR_BORDER.to_owned(),
                    border_width: Some(1),
                    tension: None,
                }],
            },
            options: ChartOptions { responsive: true, scales: Some(Scales { y: Axis { begin_at_zero: true } }) },
        }
    }
}

/// What a region change requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionChange {
    RenderFromCache,
    Load,
}

#[derive(Clone, Debug, Default)]
pub struct MonthlyTrendState {
    cache: Option<(Category, MonthlyAggregate)>,
    pub vocabulary: RegionVocabulary,
    requests: RequestTracker,
}

impl MonthlyTrendState {
    pub fn begin_load(&mut self) -> RequestToken {
        self.requests.begin()
    }

    /// Apply a load outcome for `category`. Returns `false` when superseded.
    ///
    /// A failure keeps a cache of the same category and drops any other, so
    /// the panel never shows another category's data.
    pub fn complete_load(
        &mut self,
        token: RequestToken,
        category: Category,
        result: Result<MonthlyAggregate, TrendUnavailable>,
    ) -> bool {
        if !self.requests.is_current(token) {
            return false;
        }
        match result {
            Ok(aggregate) => {
                self.vocabulary.populate(category, &aggregate);
                self.cache = Some((category, aggregate));
            }
            Err(_) => {
                if self.cached_for(category).is_none() {
                    self.cache = None;
                }
            }
        }
        true
    }

    /// Drop the cache and vocabulary after a category change.
    pub fn invalidate(&mut self) {
        self.cache = None;
        self.vocabulary.invalidate();
    }

    pub fn cached_for(&self, category: Category) -> Option<&MonthlyAggregate> {
        match &self.cache {
            Some((cached, aggregate)) if *cached == category => Some(aggregate),
            _ => None,
        }
    }

    pub fn region_change(&self, category: Category) -> RegionChange {
        if self.cached_for(category).is_some() { RegionChange::RenderFromCache } else { RegionChange::Load }
    }

    pub fn series(&self, category: Category, region: &RegionSelection) -> Option<MonthlySeries> {
        MonthlySeries::build(self.cached_for(category)?, region, category)
    }

    pub fn chart_config(&self, category: Category, region: &RegionSelection) -> Option<ChartConfig> {
        self.series(category, region).map(|s| s.chart_config())
    }
}
