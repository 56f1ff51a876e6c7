use super::SimulationCore;

/// Repack cell positions and colors into the flat transfer buffers.
/// Strided cell structs -> tight xyz / rgb triples the host maps as
/// Float32Arrays over wasm memory.
pub(super) fn refresh(core: &mut SimulationCore) {
    let positions = &mut core.render.positions;
    let colors = &mut core.render.colors;

    debug_assert_eq!(positions.len(), core.grid.size() * 3);
    debug_assert_eq!(colors.len(), core.grid.size() * 3);

    for (idx, cell) in core.grid.cells.iter().enumerate() {
        let base = idx * 3;
        positions[base] = cell.position.x;
        positions[base + 1] = cell.position.y;
        positions[base + 2] = cell.position.z;
        colors[base] = cell.color.x;
        colors[base + 1] = cell.color.y;
        colors[base + 2] = cell.color.z;
    }
}
