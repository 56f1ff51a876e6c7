use super::super::*;

impl Grid {
    // === Height ===
    #[inline]
    pub fn height(&self, idx: usize) -> f32 {
        self.cells[idx].h
    }

    /// Height write that keeps `position.y` in sync.
    #[inline]
    pub fn set_height(&mut self, idx: usize, h: f32) {
        self.cells[idx].set_height(h);
    }

    // === Velocity ===
    #[inline]
    pub fn velocity(&self, idx: usize) -> (f32, f32) {
        let cell = &self.cells[idx];
        (cell.u, cell.v)
    }

    // === Color ===
    #[inline]
    pub fn color(&self, idx: usize) -> Vec3 {
        self.cells[idx].color
    }

    /// Paint the construction palette: border highlight on edge cells,
    /// base surface color everywhere else.
    pub fn reset_colors(&mut self, surface: Vec3, border: Vec3) {
        for cell in self.cells.iter_mut() {
            cell.color = if cell.edge { border } else { surface };
        }
    }

    // === Boundary ===
    #[inline]
    pub fn is_edge(&self, idx: usize) -> bool {
        self.cells[idx].edge
    }
}
