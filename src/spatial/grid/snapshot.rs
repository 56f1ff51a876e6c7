//! Previous-tick copy of the mutable fields, reused every step.
//!
//! The wave pass reads exclusively from here and writes into the cells, so
//! one update never sees another update from the same tick.

use super::Grid;

pub struct FieldSnapshot {
    pub h: Vec<f32>,
    pub u: Vec<f32>,
    pub v: Vec<f32>,
}

impl FieldSnapshot {
    pub fn new(size: usize) -> Self {
        Self {
            h: vec![0.0; size],
            u: vec![0.0; size],
            v: vec![0.0; size],
        }
    }

    /// Copy the grid's current fields. Allocation-free once sized.
    pub fn capture(&mut self, grid: &Grid) {
        let size = grid.size();
        if self.h.len() != size {
            self.h.resize(size, 0.0);
            self.u.resize(size, 0.0);
            self.v.resize(size, 0.0);
        }
        for (idx, cell) in grid.cells.iter().enumerate() {
            self.h[idx] = cell.h;
            self.u[idx] = cell.u;
            self.v[idx] = cell.v;
        }
    }
}
