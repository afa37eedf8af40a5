//! spiral-grid: closed-form square spiral grids
//!
//! Arranges a contiguous range `start..=end` in an N×N grid so that the
//! values wind from `start` at the center out to `end` at the top-right
//! corner:
//!
//! ```text
//! 21  22  23  24  25
//! 20   7   8   9  10
//! 19   6   1   2  11
//! 18   5   4   3  12
//! 17  16  15  14  13
//! ```
//!
//! # Design Principles
//! - No cursor walk: every ring is derived from its odd-square corner
//! - One allocation: the grid buffer is sized from the validated range
//! - Validation first: nothing is allocated for a range that cannot
//!   form a centered square

pub mod builder;
pub mod error;
pub mod grid;
pub mod limits;
pub mod range;
pub mod render;

// Re-export primary types
pub use builder::build_grid;
pub use error::{Result, SizeProblem, SpiralError};
pub use grid::Grid;
pub use range::SpiralRange;
pub use render::GridWriter;

/// Text output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Character placed between cells of a row.
    pub separator: char,
    /// Also place the separator after the last cell of each row.
    pub trailing_separator: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: '\t',
            trailing_separator: false,
        }
    }
}

/// Validate `start..=end` and build its spiral grid.
///
/// # Errors
/// Returns the validation error from [`SpiralRange::new`].
///
/// # Example
/// ```
/// let grid = spiral_grid::build(1, 25).unwrap();
/// assert_eq!(grid.row(0), &[21, 22, 23, 24, 25]);
/// assert_eq!(grid.center(), 1);
///
/// assert!(spiral_grid::build(1, 16).is_err());
/// ```
pub fn build(start: u64, end: u64) -> Result<Grid> {
    let range = SpiralRange::new(start, end).inspect_err(|err| {
        tracing::debug!(start, end, %err, "rejected spiral range");
    })?;
    Ok(build_grid(&range))
}

/// Build the spiral for `start..=end` as tab-separated rows.
///
/// # Errors
/// Returns the validation error from [`SpiralRange::new`].
///
/// # Example
/// ```
/// let text = spiral_grid::to_tsv(1, 9).unwrap();
/// assert_eq!(text, "7\t8\t9\n6\t1\t2\n5\t4\t3\n");
/// ```
pub fn to_tsv(start: u64, end: u64) -> Result<String> {
    to_tsv_with_options(start, end, &Options::default())
}

/// Build the spiral for `start..=end` as delimited rows with options.
///
/// # Errors
/// Returns the validation error from [`SpiralRange::new`].
pub fn to_tsv_with_options(start: u64, end: u64, options: &Options) -> Result<String> {
    let grid = build(start, end)?;
    Ok(render_with_options(&grid, options))
}

/// Render a grid as tab-separated rows.
pub fn render(grid: &Grid) -> String {
    render_with_options(grid, &Options::default())
}

/// Render a grid as delimited rows with options.
pub fn render_with_options(grid: &Grid, options: &Options) -> String {
    let mut writer = GridWriter::with_capacity_for(grid, options);
    writer.write_grid(grid, options);
    writer.into_string()
}
