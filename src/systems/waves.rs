//! Wave System - explicit shallow-water step over the cell arena.
//!
//! Linearized height-field scheme on central differences:
//! - Velocities respond to the height gradient across opposite neighbors
//!   and decay linearly with damping.
//! - Heights respond to the divergence of column flux, where a column is
//!   rest depth plus the current offset.
//!
//! All reads come from the previous-tick snapshot and all writes go to the
//! cells, so the traversal order never leaks into the result. Cells without
//! a full neighbor set (the border) are skipped and act as a fixed boundary.

use crate::spatial::grid::{FieldSnapshot, Grid};

pub fn integrate(grid: &mut Grid, prev: &FieldSnapshot, gravity: f32, damping: f32, dt: f32) {
    let inv_span = 1.0 / (2.0 * grid.cell_size());

    for idx in 0..grid.size() {
        let Some((left, right, above, below)) = grid.neighbors4(idx) else {
            continue;
        };

        let u = prev.u[idx];
        let v = prev.v[idx];

        let du = -gravity * (prev.h[right] - prev.h[left]) * inv_span - damping * u;
        let dv = -gravity * (prev.h[above] - prev.h[below]) * inv_span - damping * v;

        let outflow_x = (prev.u[right] * column(grid, prev, right)
            - prev.u[left] * column(grid, prev, left))
            * inv_span;
        let outflow_z = (prev.v[above] * column(grid, prev, above)
            - prev.v[below] * column(grid, prev, below))
            * inv_span;

        let h = prev.h[idx] - dt * (outflow_x + outflow_z);

        let cell = &mut grid.cells[idx];
        cell.u = u + dt * du;
        cell.v = v + dt * dv;
        cell.set_height(h);
    }
}

/// Water column depth at a cell: rest depth plus the height offset.
#[inline]
fn column(grid: &Grid, prev: &FieldSnapshot, idx: usize) -> f32 {
    grid.cells[idx].rest + prev.h[idx]
}
