//! Closed-form spiral construction.
//!
//! The grid is filled ring by ring without walking the spiral. For a side
//! `n` with `mid = n / 2`, each corner column `c` (from `n - 1` down to 0)
//! is paired with the mirrored row `r = n - 1 - c`. The cell `(r, c)` for
//! `c >= mid` is the top-right corner of ring `c - mid`, which holds the
//! odd square `(2 * (c - mid + 1) - 1)^2`. Everything else is a run of
//! consecutive values hanging off an already known cell:
//!
//! ```text
//!  B  B  B  B  C
//!  A  B  B  C  D
//!  A  A  C  D  E
//!  A  A  X  E  E
//!  A  Y  Y  Y  E
//! ```
//!
//! - `C`: ring corner, from the odd square
//! - `D`: right of a corner, `C + 1`
//! - `B`: top edge, decreasing leftward from `C`
//! - `E`: right edge, increasing downward from `D`
//! - `A`: left edge, decreasing downward from the top-left corner
//! - `Y`: bottom edge, decreasing rightward from the bottom-left corner
//! - `X`: the cell below the center, patched after the loop
//!
//! The `E` and `A` runs of a ring are written two iterations after its
//! corner, which is why they sit at column `c + 2` and `r - 2`.

use crate::grid::Grid;
use crate::range::SpiralRange;

/// Build the spiral grid for a validated range.
///
/// The center holds `range.start()`, the top-right corner holds
/// `range.end()`, and consecutive values are orthogonal neighbours.
///
/// # Example
/// ```
/// use spiral_grid::{builder::build_grid, SpiralRange};
///
/// let grid = build_grid(&SpiralRange::new(1, 9).unwrap());
/// assert_eq!(grid.row(0), &[7, 8, 9]);
/// assert_eq!(grid.row(1), &[6, 1, 2]);
/// assert_eq!(grid.row(2), &[5, 4, 3]);
/// ```
pub fn build_grid(range: &SpiralRange) -> Grid {
    let n = range.side_usize();
    let mut grid = Grid::filled(n);

    tracing::debug!(
        start = range.start(),
        end = range.end(),
        side = n,
        "building spiral grid"
    );

    if range.is_single() {
        grid[(0, 0)] = range.start();
        return grid;
    }

    let mid = n / 2;
    let offset = range.offset();

    for c in (0..n).rev() {
        let r = n - 1 - c;

        // Corners only follow the odd squares in the upper-right half.
        // Below the diagonal, (r, c) is a bottom-left corner owned by `A`.
        if c >= mid {
            let corner = corner_value(c, mid) + offset;
            tracing::trace!(c, r, corner, "ring corner");
            grid[(r, c)] = corner;

            if c < n - 1 {
                grid[(r, c + 1)] = corner + 1;
            }
        }

        // B
        for j in (r..c).rev() {
            grid[(r, j)] = grid[(r, j + 1)] - 1;
        }

        if r > 1 {
            fill_right_edge(&mut grid, r, c + 2);
            fill_left_edge(&mut grid, r, r - 2);

            // The outermost ring has no row below it
            if r > mid && r + 1 < n {
                fill_bottom_edge(&mut grid, r + 1, c);
            }
        }
    }

    // Its neighbours are only known after the ring below the center is done
    grid[(mid + 1, mid)] = range.start() + 3;

    grid
}

/// Odd square at the top-right corner of the ring for column `c >= mid`.
#[inline]
fn corner_value(c: usize, mid: usize) -> u64 {
    let root = 2 * (c - mid + 1) as u64 - 1;
    root * root
}

/// E: column `col` downward from row `r` through row `n - r + 1`.
#[inline]
fn fill_right_edge(grid: &mut Grid, r: usize, col: usize) {
    let last = grid.side() - r + 1;
    for row in r..=last {
        grid[(row, col)] = grid[(row - 1, col)] + 1;
    }
}

/// A: column `col` downward from row `r - 1` through row `n - r + 1`.
#[inline]
fn fill_left_edge(grid: &mut Grid, r: usize, col: usize) {
    let last = grid.side() - r + 1;
    for row in r - 1..=last {
        grid[(row, col)] = grid[(row - 1, col)] - 1;
    }
}

/// Y: row `row` rightward from column `c` up to the ring's bottom-right corner.
#[inline]
fn fill_bottom_edge(grid: &mut Grid, row: usize, c: usize) {
    let end = grid.side() - c;
    for col in c..end {
        grid[(row, col)] = grid[(row, col - 1)] - 1;
    }
}
