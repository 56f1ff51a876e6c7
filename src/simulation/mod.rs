//! Simulation - height-field water surface with an explicit tick.
//!
//! Orchestration only: grid construction lives in spatial/, the wave and
//! color passes in systems/. Each `step()` is snapshot -> integrate ->
//! recolor -> render extract; the host drives the cadence and pokes
//! between ticks.

use crate::domain::params::{ParamsError, SimParams};
use crate::spatial::grid::{FieldSnapshot, Grid};

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, Simulation};
pub use perf_stats::PerfStats;

pub(crate) struct AbiLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) positions_len_elements: usize,
    pub(crate) positions_len_bytes: usize,
    pub(crate) colors_ptr: *const f32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
}

/// Packed transfer buffers the JS renderer reads zero-copy.
/// xyz / rgb triples per cell, row-major, refreshed at the end of a step.
pub(crate) struct RenderBuffers {
    pub(crate) positions: Vec<f32>,
    pub(crate) colors: Vec<f32>,
}

/// The simulation state
pub struct SimulationCore {
    params: SimParams,
    grid: Grid,
    prev: FieldSnapshot,

    // State
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with the default params at given dimensions
    pub fn new(width: f32, resolution: u32) -> Result<Self, ParamsError> {
        Self::with_params(SimParams {
            width,
            resolution,
            ..SimParams::default()
        })
    }

    pub fn with_params(params: SimParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(init::create_core(params))
    }

    /// Parse, validate and apply a params document, rebuilding the grid.
    pub fn load_params_json(&mut self, json: &str) -> Result<(), ParamsError> {
        settings::load_params_json(self, json)
    }

    pub fn params_json(&self) -> String {
        settings::params_json(self)
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn resolution(&self) -> u32 { self.grid.resolution() }

    pub fn cell_count(&self) -> usize { self.grid.size() }

    pub fn cell_size(&self) -> f32 { self.grid.cell_size() }

    pub fn width(&self) -> f32 { self.grid.width() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_damping(&mut self, damping: f32) {
        settings::set_damping(self, damping);
    }

    pub fn set_time_step(&mut self, dt: f32) {
        settings::set_time_step(self, dt);
    }

    pub fn set_poke_power(&mut self, power: f32) {
        settings::set_poke_power(self, power);
    }

    /// Disturb the cell at lattice coordinates and its linked neighbors
    pub fn poke(&mut self, row: u32, col: u32) -> bool {
        commands::poke(self, row, col)
    }

    /// Disturb the cell at a flat arena index (what picking hands back)
    pub fn poke_index(&mut self, idx: usize) -> bool {
        commands::poke_index(self, idx)
    }

    /// Return every cell to rest
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the surface by one fixed time step
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Height lookup; 0 outside the grid
    pub fn height_at(&self, row: u32, col: u32) -> f32 {
        if !self.grid.in_bounds(row, col) {
            return 0.0;
        }
        self.grid.height(self.grid.index(row, col))
    }

    /// Boundary lookup; false outside the grid
    pub fn is_edge(&self, row: u32, col: u32) -> bool {
        if !self.grid.in_bounds(row, col) {
            return false;
        }
        self.grid.is_edge(self.grid.index(row, col))
    }

    /// Get pointer to the xyz positions array (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    pub fn positions_len_bytes(&self) -> usize {
        self.render.positions.len() * std::mem::size_of::<f32>()
    }

    /// Get pointer to the rgb colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const f32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.render.colors.len() * std::mem::size_of::<f32>()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            positions_ptr: self.positions_ptr(),
            positions_len_elements: self.positions_len(),
            positions_len_bytes: self.positions_len_bytes(),
            colors_ptr: self.colors_ptr(),
            colors_len_elements: self.colors_len(),
            colors_len_bytes: self.colors_len_bytes(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
