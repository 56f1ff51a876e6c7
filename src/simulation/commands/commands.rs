use super::SimulationCore;

pub(super) fn poke(core: &mut SimulationCore, row: u32, col: u32) -> bool {
    if !core.grid.in_bounds(row, col) {
        return false;
    }
    let idx = core.grid.index(row, col);
    poke_index(core, idx)
}

/// Set the target cell's height to poke power, plus every linked neighbor.
/// Missing links at the border are simply skipped; a linked border cell is
/// written like any other (the wave pass alone keeps the boundary frozen).
/// Velocities are left untouched.
pub(super) fn poke_index(core: &mut SimulationCore, idx: usize) -> bool {
    if idx >= core.grid.size() {
        return false;
    }

    let power = core.params.poke_power;
    core.grid.set_height(idx, power);
    for neighbor in core.grid.links(idx).into_iter().flatten() {
        core.grid.set_height(neighbor as usize, power);
    }
    true
}

/// Back to the construction state: flat water, zero velocity, the
/// border/surface palette, frame counter at zero.
pub(super) fn clear(core: &mut SimulationCore) {
    for cell in core.grid.cells.iter_mut() {
        cell.u = 0.0;
        cell.v = 0.0;
        cell.set_height(0.0);
    }
    let (surface, border) = (core.params.surface_color, core.params.border_color);
    core.grid.reset_colors(surface, border);
    core.frame = 0;
    super::render_extract::refresh(core);
}
