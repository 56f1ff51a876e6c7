use crate::domain::params::{ParamsError, SimParams};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}

// Setters hold the same finiteness rule as the JSON path: a non-finite
// value is ignored and the previous setting stays.
pub(super) fn set_gravity(core: &mut SimulationCore, gravity: f32) {
    if gravity.is_finite() {
        core.params.gravity = gravity;
    }
}

pub(super) fn set_damping(core: &mut SimulationCore, damping: f32) {
    if damping.is_finite() {
        core.params.damping = damping;
    }
}

pub(super) fn set_time_step(core: &mut SimulationCore, dt: f32) {
    if dt.is_finite() {
        core.params.time_step = dt;
    }
}

pub(super) fn set_poke_power(core: &mut SimulationCore, power: f32) {
    if power.is_finite() {
        core.params.poke_power = power;
    }
}

/// Geometry may change, so the whole core is rebuilt. The perf toggle is
/// the one piece of state that survives a reload.
pub(super) fn load_params_json(core: &mut SimulationCore, json: &str) -> Result<(), ParamsError> {
    let params = SimParams::from_json(json)?;
    let perf_enabled = core.perf_enabled;
    *core = super::init::create_core(params);
    core.perf_enabled = perf_enabled;
    Ok(())
}

pub(super) fn params_json(core: &SimulationCore) -> String {
    core.params.to_json()
}
