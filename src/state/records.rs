//! Record viewer: one file rendered as a table plus a summary.
//!
//! DESIGN
//! ======
//! Every load clears the previous table and summary up front and replaces
//! them wholesale on success; there is no incremental diffing. Completions
//! from superseded loads are dropped via the request tracker.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::error::FetchError;
use crate::net::request::{RequestToken, RequestTracker};
use crate::net::types::{CellValue, RecordRow};
use crate::util::format::format_whole_with_commas;

/// Table render: header columns and stringified cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Columns come from the first row, in order, skipping blank names.
    /// Returns `None` when there are no rows.
    pub fn from_rows(rows: &[RecordRow]) -> Option<Self> {
        let first = rows.first()?;
        let columns: Vec<String> = first
            .columns()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_owned)
            .collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.get(col).map(ToString::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();
        Some(Self { columns, rows })
    }
}

/// Mean of the monetary field over qualifying rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountAverage {
    pub mean: f64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordSummary {
    pub total_records: usize,
    pub average: Option<AmountAverage>,
}

impl RecordSummary {
    /// Rows whose `amount_field` is absent, blank, or not numeric are left out
    /// of both the sum and the count.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(rows: &[RecordRow], amount_field: &str) -> Self {
        let (sum, count) = rows
            .iter()
            .filter_map(|row| row.get(amount_field))
            .filter(|value| !value.is_empty())
            .filter_map(CellValue::as_number)
            .fold((0.0_f64, 0_usize), |(sum, count), n| (sum + n, count + 1));

        let average = (count > 0).then(|| AmountAverage { mean: sum / count as f64, count });
        Self { total_records: rows.len(), average }
    }

    /// Display lines; the average line is omitted when nothing qualified.
    pub fn lines(&self) -> Vec<(String, String)> {
        let mut lines = vec![("Total Records:".to_owned(), self.total_records.to_string())];
        if let Some(avg) = self.average {
            lines.push(("Average Deal Amount:".to_owned(), format!("{} (unit)", format_whole_with_commas(avg.mean))));
        }
        lines
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordViewState {
    pub status: String,
    pub table: Option<RecordTable>,
    pub summary: Option<RecordSummary>,
    requests: RequestTracker,
}

impl RecordViewState {
    /// Replace the status line, e.g. with a manifest error.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Start loading `file`: show progress and clear prior output.
    pub fn begin_load(&mut self, file: &str) -> RequestToken {
        self.status = format!("Loading {file}...");
        self.table = None;
        self.summary = None;
        self.requests.begin()
    }

    /// Apply a load outcome. Returns `false` for a superseded load, which
    /// leaves the state untouched.
    pub fn complete_load(
        &mut self,
        token: RequestToken,
        file: &str,
        result: Result<Vec<RecordRow>, FetchError>,
        amount_field: &str,
    ) -> bool {
        if !self.requests.is_current(token) {
            return false;
        }
        match result {
            Ok(rows) => {
                self.status = format!("Loaded {} records.", rows.len());
                self.table = RecordTable::from_rows(&rows);
                self.summary = Some(RecordSummary::compute(&rows, amount_field));
            }
            Err(FetchError::Parse(e)) => {
                self.status = format!("Error parsing CSV: {e}");
            }
            Err(e) => {
                self.status = format!("Error loading {file}: {e}");
            }
        }
        true
    }
}
