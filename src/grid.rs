//! Owned square grid with row-major storage.

use std::ops::{Index, IndexMut};

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Square grid of spiral values.
///
/// Cells live in one flat buffer, row 0 first. Indexing takes
/// `(row, col)` with row 0 at the top and col 0 at the left.
///
/// # Example
/// ```
/// use spiral_grid::Grid;
///
/// let mut grid = Grid::filled(3);
/// grid[(0, 2)] = 9;
/// assert_eq!(grid.get(0, 2), Some(9));
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<u64>,
}

impl Grid {
    /// Create a `side` x `side` grid with every cell set to zero.
    pub fn filled(side: usize) -> Self {
        Self {
            side,
            cells: vec![0; side * side],
        }
    }

    /// Side length.
    #[inline]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// Value of the center cell.
    ///
    /// # Panics
    /// Panics if the grid is empty.
    #[inline]
    pub fn center(&self) -> u64 {
        let mid = self.side / 2;
        self[(mid, mid)]
    }

    /// One row as a slice.
    ///
    /// # Panics
    /// Panics if `row` is outside the grid.
    #[inline]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        // chunks_exact panics on zero, and an empty grid has no rows anyway
        self.cells.chunks_exact(self.side.max(1))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }

    /// Copy into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    /// Take ownership of the flat buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u64> {
        self.cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        debug_assert!(col < self.side, "column {col} outside side {}", self.side);
        &self.cells[row * self.side + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u64 {
        debug_assert!(col < self.side, "column {col} outside side {}", self.side);
        &mut self.cells[row * self.side + col]
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.side))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(side: usize) -> Grid {
        let mut grid = Grid::filled(side);
        for (i, cell) in grid.cells.iter_mut().enumerate() {
            *cell = i as u64;
        }
        grid
    }

    #[test]
    fn test_grid_filled() {
        let grid = Grid::filled(3);
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.len(), 9);
        assert!(!grid.is_empty());
        assert!(grid.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_grid_row_major() {
        let grid = counting(3);
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(0, 2)], 2);
        assert_eq!(grid[(1, 0)], 3);
        assert_eq!(grid[(2, 2)], 8);
        assert_eq!(grid.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_grid_get_bounds() {
        let grid = counting(3);
        assert_eq!(grid.get(2, 1), Some(7));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_grid_rows() {
        let grid = counting(2);
        let rows: Vec<&[u64]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 3][..]]);
        assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_grid_empty() {
        let grid = Grid::filled(0);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn test_grid_center() {
        let grid = counting(5);
        assert_eq!(grid.center(), 12);
    }

    #[test]
    fn test_grid_serialize_rows() {
        let grid = counting(2);
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[0,1],[2,3]]");
    }
}
