use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn resolution(&self) -> u32 { self.resolution }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn width(&self) -> f32 { self.width }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.cols && col < self.cols,
            "index: out of bounds ({}, {}) for {} cols",
            row,
            col,
            self.cols
        );
        (row * self.cols + col) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx as u32) / self.cols;
        let col = (idx as u32) % self.cols;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.cols && col < self.cols
    }
}
