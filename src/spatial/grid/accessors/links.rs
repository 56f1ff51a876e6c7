use super::super::*;

impl Grid {
    /// The four neighbor links in left, right, above, below order.
    /// Returned by value so callers can keep mutating the grid.
    #[inline]
    pub fn links(&self, idx: usize) -> [Option<u32>; 4] {
        let cell = &self.cells[idx];
        [cell.left, cell.right, cell.above, cell.below]
    }

    /// All four neighbors, or `None` when any link is missing.
    /// `None` exactly for edge cells.
    #[inline]
    pub fn neighbors4(&self, idx: usize) -> Option<(usize, usize, usize, usize)> {
        let cell = &self.cells[idx];
        match (cell.left, cell.right, cell.above, cell.below) {
            (Some(l), Some(r), Some(a), Some(b)) => {
                Some((l as usize, r as usize, a as usize, b as usize))
            }
            _ => None,
        }
    }
}
