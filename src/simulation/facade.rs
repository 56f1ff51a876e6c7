use wasm_bindgen::prelude::*;

use crate::domain::params::SimParams;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct AbiLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with default params at given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, resolution: u32) -> Result<Simulation, JsValue> {
        let core = SimulationCore::new(width, resolution)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Simulation { core })
    }

    /// Create a simulation from a params JSON document
    #[wasm_bindgen(js_name = withParams)]
    pub fn with_params(json: &str) -> Result<Simulation, JsValue> {
        let params = SimParams::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let core = SimulationCore::with_params(params)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Simulation { core })
    }

    /// Apply a params JSON document to a live simulation (rebuilds the grid)
    pub fn load_params(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_params_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Current params as a JSON document
    pub fn params_json(&self) -> String {
        self.core.params_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.core.resolution() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> usize { self.core.cell_count() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> f32 { self.core.cell_size() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.core.set_damping(damping);
    }

    pub fn set_time_step(&mut self, dt: f32) {
        self.core.set_time_step(dt);
    }

    pub fn set_poke_power(&mut self, power: f32) {
        self.core.set_poke_power(power);
    }

    /// Disturb the cell at lattice coordinates; false when out of range
    pub fn poke(&mut self, row: u32, col: u32) -> bool {
        self.core.poke(row, col)
    }

    /// Disturb the cell at a flat index (what picking hands back)
    pub fn poke_index(&mut self, idx: usize) -> bool {
        self.core.poke_index(idx)
    }

    /// Return every cell to rest
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the surface by one fixed time step
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Height lookup; 0 outside the grid
    pub fn height_at(&self, row: u32, col: u32) -> f32 {
        self.core.height_at(row, col)
    }

    /// Boundary lookup; false outside the grid
    pub fn is_edge(&self, row: u32, col: u32) -> bool {
        self.core.is_edge(row, col)
    }

    /// Get pointer to the xyz positions array (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.core.positions_len_bytes()
    }

    /// Get pointer to the rgb colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const f32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            positions_ptr: data.positions_ptr as u32,
            positions_len_elements: data.positions_len_elements as u32,
            positions_len_bytes: data.positions_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
        }
    }
}
