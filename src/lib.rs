//! Ripple Engine - interactive height-field water simulation in WASM
//!
//! A square lattice of linked cells, a linearized shallow-water step, a
//! poke perturbation and a height-to-color ramp. The browser host owns the
//! camera, the draw calls and the picking; this crate owns the state and
//! the numbers.
//!
//! Layout:
//! - domain/      - cell record and run parameters
//! - spatial/     - cell arena with index-based neighbor links
//! - systems/     - wave and color passes
//! - simulation/  - orchestration and the wasm facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🌊 Ripple WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cell::Cell;
pub use domain::params::{ColorRamp, ParamsError, SimParams};
pub use simulation::{PerfStats, Simulation, SimulationCore};
