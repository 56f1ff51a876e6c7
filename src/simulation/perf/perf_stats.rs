use wasm_bindgen::prelude::*;

/// Last-step timing snapshot. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) snapshot_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) color_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) cells_total: u32,
    pub(super) cells_interior: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn snapshot_ms(&self) -> f64 { self.snapshot_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn color_ms(&self) -> f64 { self.color_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_total(&self) -> u32 { self.cells_total }
    #[wasm_bindgen(getter)]
    pub fn cells_interior(&self) -> u32 { self.cells_interior }
}
