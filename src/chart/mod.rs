//! Chart configuration and the owned chart-instance slot.
//!
//! ARCHITECTURE
//! ============
//! State modules produce a serializable [`ChartConfig`]; a [`ChartSlot`] owns
//! at most one live handle from the charting collaborator and replaces it by
//! destroying the old instance before constructing the new one. The browser
//! binding lives in `chartjs`; tests plug in a recording backend.


#[cfg(feature = "csr")]
pub mod chartjs;

use serde::Serialize;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Collaborator config, serialized in the charting library's JSON shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One series. `None` points serialize as `null` and render as gaps.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { responsive: true, scales: None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

/// A live chart instance.
pub trait ChartHandle {
    fn destroy(self);
}

/// Constructs chart instances on one canvas.
pub trait ChartBackend {
    type Handle: ChartHandle;

    /// # Errors
    ///
    /// Returns `ChartError` when the canvas or config is unusable.
    fn construct(&self, config: &ChartConfig) -> Result<Self::Handle, ChartError>;
}

/// Owned slot holding at most one live chart.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, handle: None }
    }

    /// Release the current instance, then draw `config`.
    ///
    /// On construction failure the slot is left empty.
    ///
    /// # Errors
    ///
    /// Propagates the backend's `ChartError`.
    pub fn replace(&mut self, config: &ChartConfig) -> Result<(), ChartError> {
        self.clear();
        self.handle = Some(self.backend.construct(config)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
    }

    /// Draw `config` when present, otherwise leave the slot empty.
    ///
    /// # Errors
    ///
    /// Propagates the backend's `ChartError`.
    pub fn sync(&mut self, config: Option<&ChartConfig>) -> Result<(), ChartError> {
        match config {
            Some(config) => self.replace(config),
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
