//! Resource limits.
//!
//! The grid is allocated up front, so the side length is capped before
//! any allocation happens.

/// Maximum side length of a spiral grid.
///
/// 4095² cells of `u64` is a little over 128 MiB.
pub const MAX_SIDE: u64 = 4095;

/// Maximum number of cells in a spiral grid.
pub const MAX_CELLS: u64 = MAX_SIDE * MAX_SIDE;
