//! Dashboard configuration with URL-query overrides.
//!
//! Every setting has a default so the page works with no query string. In the
//! browser the lookup reads `window.location.search`; tests supply a closure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Category;

pub const DEFAULT_DATA_ROOT: &str = "assets/data";
pub const DEFAULT_AMOUNT_FIELD: &str = "거래금액";
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base path of the static data artifacts, without trailing slash.
    pub data_root: String,
    /// Column averaged in the record summary.
    pub amount_field: String,
    /// `None` disables the fetch timeout.
    pub fetch_timeout_ms: Option<u32>,
    pub initial_category: Category,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_root: DEFAULT_DATA_ROOT.to_owned(),
            amount_field: DEFAULT_AMOUNT_FIELD.to_owned(),
            fetch_timeout_ms: Some(DEFAULT_FETCH_TIMEOUT_MS),
            initial_category: Category::default(),
        }
    }
}

impl DashboardConfig {
    /// Build config from a key lookup.
    ///
    /// Optional keys:
    /// - `data_root`: default `assets/data`
    /// - `amount_field`: default `거래금액`
    /// - `fetch_timeout_ms`: default 15000, `0` disables
    /// - `category`: `trade` (default) or `rent`
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_root = lookup("data_root")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.data_root);
        let amount_field = lookup("amount_field")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.amount_field);
        let fetch_timeout_ms = match lookup("fetch_timeout_ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => defaults.fetch_timeout_ms,
        };
        let initial_category = lookup("category")
            .and_then(|v| Category::parse(v.trim()))
            .unwrap_or(defaults.initial_category);

        Self { data_root, amount_field, fetch_timeout_ms, initial_category }
    }

    /// Read overrides from the page's query string.
    #[cfg(feature = "csr")]
    pub fn from_location() -> Self {
        let params = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok());
        match params {
            Some(params) => Self::from_lookup(|key| params.get(key)),
            None => Self::default(),
        }
    }
}
