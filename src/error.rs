//! Error types for resource loading and chart rendering.
//!
//! ERROR HANDLING
//! ==============
//! Two severities exist. Manifest and record-file failures are user-facing and
//! end up as status text via `Display`. Aggregate and observation-log failures
//! are best-effort: they are logged and the panel stays empty.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure while retrieving or decoding a data artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("not available outside the browser")]
    Unavailable,
}

impl FetchError {
    /// True when the transport succeeded but the body was malformed.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Malformed body structure, distinct from transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error("{0}")]
    Csv(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<csv::Error> for ParseError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

/// The manifest could not be loaded; the registry falls back to empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ManifestUnavailable(#[from] pub FetchError);

/// A trend artifact (aggregate or observation log) is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} unavailable: {source}")]
pub struct TrendUnavailable {
    pub resource: String,
    #[source]
    pub source: FetchError,
}

/// Chart collaborator failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("chart canvas `{0}` not found")]
    CanvasMissing(String),
    #[error("chart config could not be serialized: {0}")]
    Config(String),
    #[error("chart construction failed: {0}")]
    Construct(String),
}
