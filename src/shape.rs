/// Hexagonal trim of a `(2S+1) x (2S+1)` backing grid, where `S` is the
/// board radius (edge length in cells). The standard Catch-Up board is
/// radius 5 (61 cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    radius: u8,
}

impl Shape {
    pub fn new(radius: u8) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Side length of the backing square grid.
    pub fn side(&self) -> usize {
        2 * usize::from(self.radius) + 1
    }

    /// Returns whether `(row, col)` lies inside the hexagon.
    /// Total over all integers: out-of-grid coordinates are invalid
    /// cells, not errors.
    pub fn is_valid_cell(&self, row: i32, col: i32) -> bool {
        // i64 keeps the distance arithmetic overflow-free at the i32 extremes.
        let s = i64::from(self.radius);
        let dr = i64::from(row) - s;
        let dc = i64::from(col) - s;

        -dr < s && dr < s && -dc < s && dc < s && -(dr + dc) < s && dr + dc < s
    }

    /// Number of valid cells, `3S^2 - 3S + 1`.
    pub fn cell_count(&self) -> usize {
        let s = usize::from(self.radius);
        3 * s * s - 3 * s + 1
    }

    /// Valid cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let side = self.side() as i32;
        (0..side)
            .flat_map(move |row| (0..side).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_valid_cell(row, col))
    }
}
