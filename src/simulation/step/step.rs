use crate::systems::{coloring, waves};

use super::clock::now_ms;
use super::SimulationCore;

pub(super) fn step(core: &mut SimulationCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.cells_total = core.grid.size() as u32;
        let r = core.grid.resolution();
        core.perf_stats.cells_interior = (r - 1) * (r - 1);
    }
    let step_start = perf_on.then(now_ms);

    // === SNAPSHOT ===
    // The wave pass reads last tick's fields only; capture them first.
    if perf_on {
        let t0 = now_ms();
        core.prev.capture(&core.grid);
        core.perf_stats.snapshot_ms = now_ms() - t0;
    } else {
        core.prev.capture(&core.grid);
    }

    // === WAVE PASS ===
    let gravity = core.params.gravity;
    let damping = core.params.damping;
    let dt = core.params.time_step;
    if perf_on {
        let t0 = now_ms();
        waves::integrate(&mut core.grid, &core.prev, gravity, damping, dt);
        core.perf_stats.integrate_ms = now_ms() - t0;
    } else {
        waves::integrate(&mut core.grid, &core.prev, gravity, damping, dt);
    }

    // === COLOR PASS ===
    if perf_on {
        let t0 = now_ms();
        coloring::recolor(&mut core.grid, &core.params.ramp);
        core.perf_stats.color_ms = now_ms() - t0;
    } else {
        coloring::recolor(&mut core.grid, &core.params.ramp);
    }

    // === RENDER EXTRACT ===
    // Positions and colors must be current before the host reads them.
    if perf_on {
        let t0 = now_ms();
        super::render_extract::refresh(core);
        core.perf_stats.extract_ms = now_ms() - t0;
    } else {
        super::render_extract::refresh(core);
    }

    if let Some(t0) = step_start {
        core.perf_stats.step_ms = now_ms() - t0;
    }

    core.frame += 1;
}
