//! Chart.js binding for the [`ChartBackend`] seam.
//!
//! Expects the Chart.js UMD bundle to define a global `Chart` constructor.

use wasm_bindgen::prelude::*;

use super::{ChartBackend, ChartConfig, ChartHandle};
use crate::error::ChartError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

/// Draws onto one canvas element.
pub struct ChartJsBackend {
    canvas: web_sys::HtmlCanvasElement,
}

impl ChartJsBackend {
    pub fn new(canvas: web_sys::HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

pub struct ChartJsHandle(JsChart);

impl ChartHandle for ChartJsHandle {
    fn destroy(self) {
        self.0.destroy();
    }
}

impl ChartBackend for ChartJsBackend {
    type Handle = ChartJsHandle;

    fn construct(&self, config: &ChartConfig) -> Result<Self::Handle, ChartError> {
        let json = serde_json::to_string(config).map_err(|e| ChartError::Config(e.to_string()))?;
        let value = js_sys::JSON::parse(&json).map_err(|e| ChartError::Config(format!("{e:?}")))?;
        let chart = JsChart::new(&self.canvas, &value).map_err(|e| ChartError::Construct(format!("{e:?}")))?;
        Ok(ChartJsHandle(chart))
    }
}
