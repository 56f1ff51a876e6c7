use crate::domain::params::SimParams;
use crate::spatial::grid::{FieldSnapshot, Grid};

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

/// Expects validated params; `SimulationCore::with_params` is the guard.
pub(super) fn create_core(params: SimParams) -> SimulationCore {
    let grid = Grid::new(&params);
    let size = grid.size();

    let mut core = SimulationCore {
        grid,
        prev: FieldSnapshot::new(size),
        params,
        frame: 0,
        render: RenderBuffers {
            positions: vec![0.0; size * 3],
            colors: vec![0.0; size * 3],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    // The transfer buffers must hold valid data before the first step.
    super::render_extract::refresh(&mut core);
    core
}
