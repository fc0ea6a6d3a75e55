//! Wire schema for the static data artifacts.
//!
//! DESIGN
//! ======
//! Region and target-month keys are unknown until data arrives, so aggregates
//! and snapshots are string-keyed maps. Vocabularies are derived explicitly by
//! the state modules rather than assumed as fixed fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key carrying the all-region count inside each month entry.
pub const TOTAL_KEY: &str = "total";

/// Top-level dataset partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Trade,
    Rent,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Trade, Category::Rent];

    /// Wire and path form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::Rent => "rent",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Trade => "Trade",
            Self::Rent => "Rent",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "trade" => Some(Self::Trade),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of available record files per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub trade: Vec<String>,
    #[serde(default)]
    pub rent: Vec<String>,
}

impl Manifest {
    #[must_use]
    pub fn files(&self, category: Category) -> &[String] {
        match category {
            Category::Trade => &self.trade,
            Category::Rent => &self.rent,
        }
    }
}

/// A single scalar cell after best-effort coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Coerce a raw delimited-text field.
    ///
    /// Finite numbers and `true`/`false` are typed; blank fields are empty;
    /// everything else stays text (so `"1,000"` is text, not a number).
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Numeric reading used by the summary average.
    ///
    /// Text that still parses as a finite number counts; booleans, blanks and
    /// non-numeric text do not.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Empty | Self::Bool(_) => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One parsed record: column name → value, in header order.
///
/// Columns missing from a short line are absent, not empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordRow {
    cells: Vec<(String, CellValue)>,
}

impl RecordRow {
    #[must_use]
    pub fn new(cells: Vec<(String, CellValue)>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(name, _)| name == column).map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CellValue)> for RecordRow {
    fn from_iter<I: IntoIterator<Item = (S, CellValue)>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

/// Month key → region key → count, e.g. `{"2025_11": {"total": 100, "Jongno-gu": 10}}`.
///
/// Month keys are zero-padded `YYYY_MM`, so ordered map iteration is
/// chronological.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyAggregate(pub BTreeMap<String, BTreeMap<String, i64>>);

impl MonthlyAggregate {
    /// Month keys in ascending lexicographic order.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn count(&self, month: &str, region: &str) -> Option<i64> {
        self.0.get(month).and_then(|regions| regions.get(region)).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One timestamped observation of counts per target month.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSnapshot {
    #[serde(alias = "observed_at")]
    pub observation_date: String,
    /// Target month → count, in document order.
    #[serde(default)]
    pub data: IndexMap<String, i64>,
}

/// Snapshots in source order (assumed chronological).
pub type ObservationLog = Vec<ObservationSnapshot>;
