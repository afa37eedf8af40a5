//! Validated number range for a spiral.
//!
//! A range `start..=end` can form a centered square spiral only when it
//! holds an odd square number of values: 1, 9, 25, 49, ...

use std::ops::RangeInclusive;

use crate::error::{Result, SizeProblem, SpiralError};
use crate::limits::MAX_SIDE;

/// Inclusive range of spiral values with a known odd side length.
///
/// # Example
/// ```
/// use spiral_grid::SpiralRange;
///
/// let range = SpiralRange::new(1, 25).unwrap();
/// assert_eq!(range.count(), 25);
/// assert_eq!(range.side(), 5);
/// assert_eq!(range.offset(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiralRange {
    start: u64,
    end: u64,
    side: u64,
}

impl SpiralRange {
    /// Validate `start..=end` as a spiral range.
    ///
    /// # Errors
    /// - [`SpiralError::InvalidStart`] if `start` is zero.
    /// - [`SpiralError::InvalidOrder`] if `end < start`.
    /// - [`SpiralError::InvalidSize`] if the count is not an odd square.
    /// - [`SpiralError::TooLarge`] if the side exceeds [`MAX_SIDE`].
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start == 0 {
            return Err(SpiralError::InvalidStart);
        }
        if end < start {
            return Err(SpiralError::InvalidOrder { start, end });
        }

        // Cannot overflow: start >= 1
        let count = end - start + 1;
        let side = count.isqrt();
        if side * side != count {
            return Err(SpiralError::InvalidSize {
                count,
                problem: SizeProblem::NotSquare,
            });
        }
        if side % 2 == 0 {
            return Err(SpiralError::InvalidSize {
                count,
                problem: SizeProblem::EvenRoot { root: side },
            });
        }
        if side > MAX_SIDE {
            return Err(SpiralError::TooLarge {
                side,
                max: MAX_SIDE,
            });
        }

        Ok(Self { start, end, side })
    }

    /// First (center) value.
    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last (top-right corner) value.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of values in the range.
    #[inline]
    pub const fn count(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Amount added to every value of the spiral starting at 1.
    #[inline]
    pub const fn offset(&self) -> u64 {
        self.start - 1
    }

    /// Side length of the square grid.
    #[inline]
    pub const fn side(&self) -> u64 {
        self.side
    }

    /// Side length as usize.
    #[inline]
    pub const fn side_usize(&self) -> usize {
        self.side as usize
    }

    /// Check if the range holds a single value.
    #[inline]
    pub const fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl TryFrom<RangeInclusive<u64>> for SpiralRange {
    type Error = SpiralError;

    #[inline]
    fn try_from(r: RangeInclusive<u64>) -> Result<Self> {
        Self::new(*r.start(), *r.end())
    }
}

impl From<SpiralRange> for RangeInclusive<u64> {
    #[inline]
    fn from(r: SpiralRange) -> Self {
        r.start..=r.end
    }
}
