//! Observation trend engine: one line per target month across observations.
//!
//! DESIGN
//! ======
//! The latest snapshot decides which target months are drawn. A snapshot that
//! lacks a tracked key contributes `None` (a gap), never zero. X labels keep
//! the log's own order.

#[cfg(test)]
#[path = "observed_test.rs"]
mod observed_test;

use std::cmp::Ordering;

use crate::chart::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset};
use crate::error::TrendUnavailable;
use crate::net::request::{RequestToken, RequestTracker};
use crate::net::types::{Category, ObservationLog, ObservationSnapshot};
use crate::util::color::series_color;

pub const LINE_TENSION: f64 = 0.1;

/// True for keys a browser enumerates as integer indices (`"0"`, `"11"`, not `"01"`).
fn is_index_key(key: &str) -> bool {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if key.len() > 1 && key.starts_with('0') {
        return false;
    }
    key.parse::<u32>().is_ok_and(|n| n != u32::MAX)
}

/// Integer-like keys ascending by value, ahead of every other key. Two
/// non-integer keys compare equal so a stable sort keeps their document order.
fn compare_target_keys(a: &str, b: &str) -> Ordering {
    match (is_index_key(a), is_index_key(b)) {
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Target-month keys of `snapshot` in the order a browser enumerates them.
pub fn target_months(snapshot: &ObservationSnapshot) -> Vec<String> {
    let mut keys: Vec<String> = snapshot.data.keys().cloned().collect();
    keys.sort_by(|a, b| compare_target_keys(a, b));
    keys
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObservationSeries {
    pub target_month: String,
    pub color: String,
    pub points: Vec<Option<i64>>,
}

/// Line chart rebuilt from an observation log.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationChart {
    pub labels: Vec<String>,
    pub series: Vec<ObservationSeries>,
}

impl ObservationChart {
    /// Returns `None` for an empty log.
    pub fn build(log: &ObservationLog) -> Option<Self> {
        let latest = log.last()?;
        let labels = log.iter().map(|s| s.observation_date.clone()).collect();
        let series = target_months(latest)
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                let points = log.iter().map(|s| s.data.get(&key).copied()).collect();
                ObservationSeries { color: series_color(index), target_month: key, points }
            })
            .collect();
        Some(Self { labels, series })
    }

    pub fn chart_config(&self) -> ChartConfig {
        let datasets = self
            .series
            .iter()
            .map(|s| Dataset {
                label: format!("Month {} Count", s.target_month),
                data: s.points.clone(),
                background_color: None,
                border_color: s.color.clone(),
                border_width: None,
                tension: Some(LINE_TENSION),
            })
            .collect();
        ChartConfig {
            kind: ChartKind::Line,
            data: ChartData { labels: self.labels.clone(), datasets },
            options: ChartOptions::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObservedTrendState {
    log: Option<(Category, ObservationLog)>,
    requests: RequestTracker,
}

impl ObservedTrendState {
    pub fn begin_load(&mut self) -> RequestToken {
        self.requests.begin()
    }

    /// Apply a load outcome for `category`. Returns `false` when superseded.
    pub fn complete_load(
        &mut self,
        token: RequestToken,
        category: Category,
        result: Result<ObservationLog, TrendUnavailable>,
    ) -> bool {
        if !self.requests.is_current(token) {
            return false;
        }
        match result {
            Ok(log) => self.log = Some((category, log)),
            Err(_) => {
                if self.log.as_ref().is_some_and(|(cached, _)| *cached != category) {
                    self.log = None;
                }
            }
        }
        true
    }

    pub fn invalidate(&mut self) {
        self.log = None;
    }

    pub fn chart(&self, category: Category) -> Option<ObservationChart> {
        match &self.log {
            Some((cached, log)) if *cached == category => ObservationChart::build(log),
            _ => None,
        }
    }

    pub fn chart_config(&self, category: Category) -> Option<ChartConfig> {
        self.chart(category).map(|c| c.chart_config())
    }
}
