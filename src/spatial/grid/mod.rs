//! Grid - arena of water-surface cells with index-based neighbor links.
//!
//! Instead of: cells holding references to each other  // Bad: ownership knots
//! We have:    one row-major Vec<Cell> + Option<u32> link indices  // Good: plain lookups
//!
//! Construction is two passes: allocate every cell first, then wire the
//! links from pure index arithmetic. No link is read before the second
//! pass completes.

use glam::Vec3;

use crate::domain::cell::Cell;
use crate::domain::params::SimParams;

mod accessors;
mod indexing;
mod snapshot;

pub use snapshot::FieldSnapshot;

/// Square lattice of cells, `cols = resolution + 1` per side.
pub struct Grid {
    cols: u32,
    resolution: u32,
    cell_size: f32,
    width: f32,
    size: usize,

    pub cells: Vec<Cell>,
}

impl Grid {
    /// Expects validated params (`resolution >= 1`, positive finite width).
    pub fn new(params: &SimParams) -> Self {
        debug_assert!(params.resolution >= 1 && params.width > 0.0);

        let resolution = params.resolution;
        let cols = resolution + 1;
        let size = (cols as usize) * (cols as usize);
        let cell_size = params.width / resolution as f32;
        let half = params.width * 0.5;

        let mut cells = Vec::with_capacity(size);
        for row in 0..cols {
            for col in 0..cols {
                // Lattice centered at the origin, y up. Heights start at rest.
                let position = Vec3::new(
                    col as f32 * cell_size - half,
                    0.0,
                    row as f32 * cell_size - half,
                );
                cells.push(Cell::new(row, col, position, params.rest_depth));
            }
        }

        let mut grid = Self {
            cols,
            resolution,
            cell_size,
            width: params.width,
            size,
            cells,
        };
        grid.link_neighbors();
        grid.reset_colors(params.surface_color, params.border_color);
        grid
    }

    fn link_neighbors(&mut self) {
        let cols = self.cols;
        let last = cols - 1;
        for idx in 0..self.size {
            let (row, col) = self.coords(idx);
            let i = idx as u32;
            let cell = &mut self.cells[idx];
            cell.left = if col > 0 { Some(i - 1) } else { None };
            cell.right = if col < last { Some(i + 1) } else { None };
            cell.above = if row > 0 { Some(i - cols) } else { None };
            cell.below = if row < last { Some(i + cols) } else { None };
            cell.edge = cell.left.is_none()
                || cell.right.is_none()
                || cell.above.is_none()
                || cell.below.is_none();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(resolution: u32) -> Grid {
        Grid::new(&SimParams {
            resolution,
            ..SimParams::default()
        })
    }

    #[test]
    fn cell_count_is_cols_squared() {
        let g = grid(4);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.size(), 25);
        assert_eq!(g.cells.len(), 25);

        let interior = g.cells.iter().filter(|c| !c.edge).count();
        assert_eq!(interior, 9);
    }

    #[test]
    fn neighbor_links_are_symmetric() {
        let g = grid(5);
        for (idx, cell) in g.cells.iter().enumerate() {
            let i = idx as u32;
            if let Some(r) = cell.right {
                assert_eq!(g.cells[r as usize].left, Some(i), "right/left at {idx}");
            }
            if let Some(l) = cell.left {
                assert_eq!(g.cells[l as usize].right, Some(i), "left/right at {idx}");
            }
            if let Some(a) = cell.above {
                assert_eq!(g.cells[a as usize].below, Some(i), "above/below at {idx}");
            }
            if let Some(b) = cell.below {
                assert_eq!(g.cells[b as usize].above, Some(i), "below/above at {idx}");
            }
        }
    }

    #[test]
    fn edge_iff_on_border() {
        let g = grid(6);
        let last = g.cols() - 1;
        for cell in g.cells.iter() {
            let on_border =
                cell.row == 0 || cell.row == last || cell.col == 0 || cell.col == last;
            assert_eq!(cell.edge, on_border, "cell ({}, {})", cell.row, cell.col);
            let missing_link = cell.left.is_none()
                || cell.right.is_none()
                || cell.above.is_none()
                || cell.below.is_none();
            assert_eq!(cell.edge, missing_link);
        }
    }

    #[test]
    fn minimal_grid_is_all_edge() {
        let g = grid(1);
        assert_eq!(g.size(), 4);
        assert!(g.cells.iter().all(|c| c.edge));
        // Corner links that do exist still point at real cells.
        assert_eq!(g.cells[0].right, Some(1));
        assert_eq!(g.cells[0].below, Some(2));
        assert_eq!(g.cells[3].left, Some(2));
        assert_eq!(g.cells[3].above, Some(1));
    }

    #[test]
    fn lattice_is_centered_with_uniform_spacing() {
        let g = Grid::new(&SimParams {
            width: 10.0,
            resolution: 2,
            ..SimParams::default()
        });
        assert_eq!(g.cell_size(), 5.0);
        // Corners at -width/2 and +width/2, center cell at the origin.
        assert_eq!(g.cells[0].position, Vec3::new(-5.0, 0.0, -5.0));
        assert_eq!(g.cells[4].position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(g.cells[8].position, Vec3::new(5.0, 0.0, 5.0));
    }

    #[test]
    fn construction_colors_split_border_and_interior() {
        let params = SimParams::default();
        let g = Grid::new(&params);
        for cell in g.cells.iter() {
            let expected = if cell.edge {
                params.border_color
            } else {
                params.surface_color
            };
            assert_eq!(cell.color, expected);
        }
    }
}
