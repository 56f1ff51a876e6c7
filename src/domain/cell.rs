//! Cell - one lattice point of the water surface.
//!
//! Neighbor relationships are flat indices into the grid's cell arena
//! (`None` along the border), never references to other cells. Everything
//! mutable during a run goes through small plain methods.

use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Cell {
    /// Lattice coordinates, fixed after construction.
    pub row: u32,
    pub col: u32,

    /// World-space position; `position.y` always mirrors `h`.
    pub position: Vec3,

    /// Horizontal velocity along the column (x) axis.
    pub u: f32,
    /// Horizontal velocity along the row (z) axis.
    pub v: f32,
    /// Height offset from rest.
    pub h: f32,
    /// Rest depth of the water column, uniform across the grid.
    pub rest: f32,

    /// Arena indices of the four axis neighbors, `None` at the border.
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub above: Option<u32>,
    pub below: Option<u32>,

    /// True when any neighbor link is missing. Edge cells are the fixed
    /// boundary: the integrator never writes them.
    pub edge: bool,

    /// Display color, RGB in 0..1 (out-of-range when `h` leaves the ramp).
    pub color: Vec3,
}

impl Cell {
    pub fn new(row: u32, col: u32, position: Vec3, rest: f32) -> Self {
        Self {
            row,
            col,
            position,
            u: 0.0,
            v: 0.0,
            h: 0.0,
            rest,
            left: None,
            right: None,
            above: None,
            below: None,
            edge: false,
            color: Vec3::ZERO,
        }
    }

    /// Write a new height and keep the vertical world position in sync.
    #[inline]
    pub fn set_height(&mut self, h: f32) {
        self.h = h;
        self.position.y = h;
    }
}
