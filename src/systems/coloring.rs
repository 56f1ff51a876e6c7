//! Color System - maps each cell's height onto the configured ramp.
//!
//! Runs over the whole grid every tick, border included. Construction
//! colors survive only until the first pass.

use crate::domain::params::ColorRamp;
use crate::spatial::grid::Grid;

pub fn recolor(grid: &mut Grid, ramp: &ColorRamp) {
    for cell in grid.cells.iter_mut() {
        cell.color = ramp.color_for(cell.h);
    }
}
