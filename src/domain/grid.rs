use super::{Cell, SimError};

/// Moore neighbourhood offsets as (row, col) deltas
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Grid is a fixed-size, row-major rectangle of cells.
/// Its dimensions never change once created; evolution produces a new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Cell> Grid<C> {
    /// Create a grid with every cell set by `fill_rule(row, col)`.
    /// Cells are filled in row-major order.
    pub fn create(
        rows: usize,
        cols: usize,
        mut fill_rule: impl FnMut(usize, usize) -> C,
    ) -> Result<Self, SimError> {
        let mut cells = Self::reserve(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                cells.push(fill_rule(row, col));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid with every cell set to `cell`
    pub fn filled(rows: usize, cols: usize, cell: C) -> Result<Self, SimError> {
        Self::create(rows, cols, |_, _| cell)
    }

    /// Reserve storage for a rows x cols grid without aborting on failure
    pub(crate) fn reserve(rows: usize, cols: usize) -> Result<Vec<C>, SimError> {
        if rows == 0 || cols == 0 {
            return Err(SimError::EmptyGrid { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(SimError::Allocation { cells: usize::MAX })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SimError::Allocation { cells: len })?;
        Ok(cells)
    }

    /// Wrap cells produced by the transition engine
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<C>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub(crate) fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether a signed coordinate lies inside the grid. There is no wraparound.
    pub const fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<C> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: C) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count in-bounds Moore neighbours of (row, col) matching `predicate`.
    /// Neighbours that would fall off the edge are simply absent.
    pub fn count_neighbors(&self, row: usize, col: usize, predicate: impl Fn(C) -> bool) -> u8 {
        MOORE_OFFSETS
            .iter()
            .map(|&(dr, dc)| (row as isize + dr, col as isize + dc))
            .filter(|&(nr, nc)| self.is_in_bounds(nr, nc))
            .filter(|&(nr, nc)| predicate(self.cells[self.get_index(nr as usize, nc as usize)]))
            .count() as u8
    }

    /// Number of cells matching `predicate`
    pub fn census(&self, predicate: impl Fn(C) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[C]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForestCell, LifeCell};

    #[test]
    fn test_create_uses_fill_rule() {
        let grid = Grid::create(2, 3, |row, col| {
            if (row + col) % 2 == 0 { LifeCell::Alive } else { LifeCell::Dead }
        })
        .unwrap();

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 0), Some(LifeCell::Alive));
        assert_eq!(grid.get(0, 1), Some(LifeCell::Dead));
        assert_eq!(grid.get(1, 1), Some(LifeCell::Alive));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_create_rejects_empty_dimensions() {
        assert!(matches!(
            Grid::filled(0, 5, LifeCell::Dead),
            Err(SimError::EmptyGrid { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Grid::filled(5, 0, LifeCell::Dead),
            Err(SimError::EmptyGrid { rows: 5, cols: 0 })
        ));
    }

    #[test]
    fn test_create_reports_overflowing_size() {
        assert!(matches!(
            Grid::filled(usize::MAX, 2, LifeCell::Dead),
            Err(SimError::Allocation { .. })
        ));
    }

    #[test]
    fn test_bounds_do_not_wrap() {
        let grid = Grid::filled(3, 4, ForestCell::Empty).unwrap();
        assert!(grid.is_in_bounds(0, 0));
        assert!(grid.is_in_bounds(2, 3));
        assert!(!grid.is_in_bounds(-1, 0));
        assert!(!grid.is_in_bounds(0, -1));
        assert!(!grid.is_in_bounds(3, 0));
        assert!(!grid.is_in_bounds(0, 4));
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let grid = Grid::filled(3, 3, LifeCell::Alive).unwrap();
        assert_eq!(grid.count_neighbors(0, 0, LifeCell::is_alive), 3);
        assert_eq!(grid.count_neighbors(2, 2, LifeCell::is_alive), 3);
        assert_eq!(grid.count_neighbors(0, 1, LifeCell::is_alive), 5);
        assert_eq!(grid.count_neighbors(1, 1, LifeCell::is_alive), 8);
    }

    #[test]
    fn test_count_ignores_self_and_far_cells() {
        let mut grid = Grid::filled(5, 5, ForestCell::Tree).unwrap();
        grid.set(2, 2, ForestCell::Burning);
        grid.set(0, 0, ForestCell::Burning);

        assert_eq!(grid.count_neighbors(2, 2, ForestCell::is_burning), 0);
        assert_eq!(grid.count_neighbors(1, 1, ForestCell::is_burning), 2);
        assert_eq!(grid.count_neighbors(3, 3, ForestCell::is_burning), 1);
        assert_eq!(grid.count_neighbors(4, 4, ForestCell::is_burning), 0);
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::filled(1, 1, LifeCell::Alive).unwrap();
        assert_eq!(grid.count_neighbors(0, 0, LifeCell::is_alive), 0);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::filled(2, 2, LifeCell::Dead).unwrap();
        grid.set(5, 5, LifeCell::Alive);
        assert_eq!(grid.census(LifeCell::is_alive), 0);
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::create(2, 2, |row, col| {
            if row == 1 && col == 0 { LifeCell::Alive } else { LifeCell::Dead }
        })
        .unwrap();
        let positions: Vec<_> = grid.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.row(1), Some(&[LifeCell::Alive, LifeCell::Dead][..]));
        assert_eq!(grid.row(2), None);
    }
}
