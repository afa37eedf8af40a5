//! Delimited text output for grids.
//!
//! One line per row, cells joined by a single separator character.

use crate::Options;
use crate::grid::Grid;

/// Text output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use spiral_grid::{GridWriter, Options};
///
/// let mut writer = GridWriter::new();
/// writer.write_row(&[7, 8], &Options::default());
/// writer.write_u64(6);
/// writer.newline();
///
/// assert_eq!(writer.into_string(), "7\t8\n6\n");
/// ```
#[derive(Debug, Default)]
pub struct GridWriter {
    out: Vec<u8>,
}

impl GridWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with capacity sized for a whole grid.
    ///
    /// Reserves room for the widest value in every cell plus one
    /// separator and one newline each.
    #[inline]
    pub fn with_capacity_for(grid: &Grid, options: &Options) -> Self {
        let widest = grid.as_slice().iter().copied().max().map_or(1, decimal_len);
        let cell = widest + options.separator.len_utf8() + 1;
        Self {
            out: Vec::with_capacity(grid.len() * cell),
        }
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write_bytes(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Write an unsigned integer in decimal.
    pub fn write_u64(&mut self, mut n: u64) {
        if n == 0 {
            self.write_byte(b'0');
            return;
        }

        let mut buf = [0u8; 20]; // Max digits for u64
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        self.write_bytes(&buf[i..]);
    }

    /// Write one grid row followed by a newline.
    pub fn write_row(&mut self, row: &[u64], options: &Options) {
        for (i, &value) in row.iter().enumerate() {
            if i > 0 {
                self.write_char(options.separator);
            }
            self.write_u64(value);
        }
        if options.trailing_separator && !row.is_empty() {
            self.write_char(options.separator);
        }
        self.newline();
    }

    /// Write every row of a grid.
    pub fn write_grid(&mut self, grid: &Grid, options: &Options) {
        for row in grid.rows() {
            self.write_row(row, options);
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only ASCII digits, newlines and whole encoded chars are written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: see `as_str`
        unsafe { String::from_utf8_unchecked(self.out) }
    }
}

#[inline]
fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: &[&[u64]]) -> Grid {
        let mut grid = Grid::filled(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid[(r, c)] = v;
            }
        }
        grid
    }

    #[test]
    fn test_write_u64() {
        let mut writer = GridWriter::new();
        writer.write_u64(0);
        assert_eq!(writer.as_str(), "0");

        writer.clear();
        writer.write_u64(42);
        assert_eq!(writer.as_str(), "42");

        writer.clear();
        writer.write_u64(u64::MAX);
        assert_eq!(writer.as_str(), "18446744073709551615");
    }

    #[test]
    fn test_write_row_tab() {
        let mut writer = GridWriter::new();
        writer.write_row(&[7, 8, 9], &Options::default());
        assert_eq!(writer.as_str(), "7\t8\t9\n");
    }

    #[test]
    fn test_write_row_trailing() {
        let options = Options {
            trailing_separator: true,
            ..Options::default()
        };
        let mut writer = GridWriter::new();
        writer.write_row(&[7, 8, 9], &options);
        assert_eq!(writer.as_str(), "7\t8\t9\t\n");
    }

    #[test]
    fn test_write_row_custom_separator() {
        let options = Options {
            separator: ',',
            ..Options::default()
        };
        let mut writer = GridWriter::new();
        writer.write_row(&[1, 2], &options);
        assert_eq!(writer.as_str(), "1,2\n");
    }

    #[test]
    fn test_write_grid() {
        let grid = grid_of(&[&[7, 8, 9], &[6, 1, 2], &[5, 4, 3]]);
        let options = Options::default();
        let mut writer = GridWriter::with_capacity_for(&grid, &options);
        writer.write_grid(&grid, &options);
        assert_eq!(writer.as_str(), "7\t8\t9\n6\t1\t2\n5\t4\t3\n");
    }

    #[test]
    fn test_capacity_fits_output() {
        let grid = grid_of(&[&[100, 2], &[3, 4]]);
        let options = Options {
            separator: '│',
            trailing_separator: true,
        };
        let mut writer = GridWriter::with_capacity_for(&grid, &options);
        let capacity = writer.out.capacity();
        writer.write_grid(&grid, &options);
        assert!(writer.len() <= capacity);
    }

    #[test]
    fn test_write_char_multibyte() {
        let mut writer = GridWriter::new();
        writer.write_char('│');
        assert_eq!(writer.as_str(), "│");
        assert_eq!(writer.len(), 3);
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(u64::MAX), 20);
    }
}
