//! Row stride arithmetic for 24-bit rows.

/// Bytes per pixel on disk.
pub const BYTES_PER_PIXEL: usize = 3;

/// Bytes occupied by one row on disk, padding included: `(w*3 + 3) & !3`.
///
/// Computed in `u64` so it is exact for every `u32` width.
pub const fn row_stride(width: u32) -> u64 {
    (width as u64 * BYTES_PER_PIXEL as u64 + 3) & !3
}

/// Padding bytes after each row, always below 4.
pub const fn row_padding(width: u32) -> usize {
    (row_stride(width) - width as u64 * BYTES_PER_PIXEL as u64) as usize
}

/// [`row_stride`] as a `usize`, or `None` if it does not fit.
pub fn checked_row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}
