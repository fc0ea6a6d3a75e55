//! Static resource access: paths, transport, and body parsing.
//!
//! Client-side (csr): real HTTP GETs via `gloo-net`, raced against an
//! optional `gloo-timers` timeout.
//! Native builds (tests): the transport reports `FetchError::Unavailable`,
//! while every parse function stays usable.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and malformed bodies are kept apart (`FetchError` vs
//! `ParseError`) so the record viewer can word its status line accordingly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CellValue, Category, Manifest, MonthlyAggregate, ObservationLog, RecordRow};
use crate::config::DashboardConfig;
use crate::error::{FetchError, ManifestUnavailable, ParseError, TrendUnavailable};

pub fn manifest_path(data_root: &str) -> String {
    format!("{data_root}/manifest.json")
}

pub fn records_path(data_root: &str, category: Category, filename: &str) -> String {
    format!("{data_root}/{category}/{filename}")
}

pub fn aggregate_path(data_root: &str, category: Category) -> String {
    format!("{data_root}/stats_{category}.json")
}

pub fn observation_log_path(data_root: &str, category: Category) -> String {
    format!("{data_root}/observation_log_{category}.json")
}

/// Parse the manifest body. Anything but an object of string arrays fails.
///
/// # Errors
///
/// Returns `ParseError::Json` when the body has no usable structure.
pub fn parse_manifest(body: &str) -> Result<Manifest, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ParseError::Json("manifest is not an object".to_owned()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse delimited text with a header row into coerced records.
///
/// Short lines leave trailing columns absent; extra fields are dropped.
///
/// # Errors
///
/// Returns `ParseError::Csv` on malformed quoting or invalid UTF-8.
pub fn parse_records(body: &str) -> Result<Vec<RecordRow>, ParseError> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RecordRow = headers
            .iter()
            .zip(record.iter())
            .map(|(name, raw)| (name.clone(), CellValue::coerce(raw)))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// # Errors
///
/// Returns `ParseError::Json` unless the body is month → region → integer.
pub fn parse_aggregate(body: &str) -> Result<MonthlyAggregate, ParseError> {
    Ok(serde_json::from_str(body)?)
}

/// # Errors
///
/// Returns `ParseError::Json` unless the body is an array of snapshots.
pub fn parse_observation_log(body: &str) -> Result<ObservationLog, ParseError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and parse `manifest.json`.
///
/// # Errors
///
/// Returns `ManifestUnavailable` on transport or parse failure.
pub async fn fetch_manifest(config: &DashboardConfig) -> Result<Manifest, ManifestUnavailable> {
    let body = fetch_text(&manifest_path(&config.data_root), config.fetch_timeout_ms).await?;
    Ok(parse_manifest(&body).map_err(FetchError::from)?)
}

/// Fetch and parse one record file.
///
/// # Errors
///
/// Returns `FetchError::Parse` for malformed rows, other variants for transport.
pub async fn fetch_records(
    config: &DashboardConfig,
    category: Category,
    filename: &str,
) -> Result<Vec<RecordRow>, FetchError> {
    let body = fetch_text(&records_path(&config.data_root, category, filename), config.fetch_timeout_ms).await?;
    Ok(parse_records(&body)?)
}

/// Fetch and parse `stats_{category}.json`.
///
/// # Errors
///
/// Returns `TrendUnavailable` when the aggregate is missing or malformed.
pub async fn fetch_aggregate(config: &DashboardConfig, category: Category) -> Result<MonthlyAggregate, TrendUnavailable> {
    let path = aggregate_path(&config.data_root, category);
    let result = match fetch_text(&path, config.fetch_timeout_ms).await {
        Ok(body) => parse_aggregate(&body).map_err(FetchError::from),
        Err(e) => Err(e),
    };
    result.map_err(|source| TrendUnavailable { resource: path, source })
}

/// Fetch and parse `observation_log_{category}.json`.
///
/// # Errors
///
/// Returns `TrendUnavailable` when the log is missing or malformed.
pub async fn fetch_observation_log(
    config: &DashboardConfig,
    category: Category,
) -> Result<ObservationLog, TrendUnavailable> {
    let path = observation_log_path(&config.data_root, category);
    let result = match fetch_text(&path, config.fetch_timeout_ms).await {
        Ok(body) => parse_observation_log(&body).map_err(FetchError::from),
        Err(e) => Err(e),
    };
    result.map_err(|source| TrendUnavailable { resource: path, source })
}

/// GET `path` as text, failing on non-2xx status or timeout.
async fn fetch_text(path: &str, timeout_ms: Option<u32>) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        use futures::future::{Either, select};

        let request = async {
            let resp = gloo_net::http::Request::get(path)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(FetchError::Status { path: path.to_owned(), status: resp.status() });
            }
            resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))
        };

        let Some(ms) = timeout_ms else {
            return request.await;
        };
        let timeout = gloo_timers::future::TimeoutFuture::new(ms);
        futures::pin_mut!(request);
        futures::pin_mut!(timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::Timeout(ms)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, timeout_ms);
        Err(FetchError::Unavailable)
    }
}
