//! BMP encoder: uncompressed 24-bit, rows in storage order.

use std::io::{Seek, SeekFrom, Write};

use super::header::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET};
use super::utils::{BYTES_PER_PIXEL, checked_row_stride, row_padding};
use crate::error::BmpError;
use crate::pixel::Bgr;

/// Write a fresh file header and info header for a `width`x`height`
/// image at offset 0, returning what was written.
///
/// File size and reserved are written as zero. Dimensions above
/// `i32::MAX` cannot be stored in the signed header fields and are
/// rejected as [`BmpError::ImageTooLarge`].
pub fn write_headers<W: Write + Seek>(
    writer: &mut W,
    width: u32,
    height: u32,
) -> Result<(FileHeader, InfoHeader), BmpError> {
    check_dimensions(width, height)?;
    writer.seek(SeekFrom::Start(0)).map_err(BmpError::Write)?;
    emit_headers(writer, width, height)
}

/// Write `pixels` as `height` rows of `width`, each padded with zero bytes
/// to a 4-byte boundary, starting at the header's pixel data offset.
pub fn write_pixels<W: Write + Seek>(
    writer: &mut W,
    file_header: &FileHeader,
    pixels: &[Bgr],
    width: u32,
    height: u32,
) -> Result<(), BmpError> {
    check_dimensions(width, height)?;
    check_pixel_count(pixels, width, height)?;
    writer
        .seek(SeekFrom::Start(u64::from(file_header.pixel_data_offset)))
        .map_err(BmpError::Write)?;
    emit_rows(writer, pixels, width, height)
}

/// Encode a whole image to an in-memory BMP file.
pub(crate) fn encode_bmp(pixels: &[Bgr], width: u32, height: u32) -> Result<Vec<u8>, BmpError> {
    check_dimensions(width, height)?;
    check_pixel_count(pixels, width, height)?;
    let row_stride =
        checked_row_stride(width).ok_or(BmpError::ImageTooLarge { width, height })?;
    let file_size = row_stride
        .checked_mul(height as usize)
        .and_then(|n| n.checked_add(PIXEL_DATA_OFFSET as usize))
        .ok_or(BmpError::ImageTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    emit_headers(&mut out, width, height)?;
    emit_rows(&mut out, pixels, width, height)?;
    Ok(out)
}

fn emit_headers<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
) -> Result<(FileHeader, InfoHeader), BmpError> {
    let file = FileHeader::new();
    let info = InfoHeader::for_dimensions(width, height);
    writer
        .write_all(&file.to_bytes())
        .map_err(BmpError::Write)?;
    writer
        .write_all(&info.to_bytes())
        .map_err(BmpError::Write)?;
    Ok((file, info))
}

fn emit_rows<W: Write>(
    writer: &mut W,
    pixels: &[Bgr],
    width: u32,
    height: u32,
) -> Result<(), BmpError> {
    // Zero width means zero-length rows; zero height means no rows.
    let w = width as usize;
    if w == 0 || height == 0 {
        return Ok(());
    }
    // pixels.len() == w * h, so one row is never larger than the input.
    let pad = row_padding(width);
    let mut row = Vec::with_capacity(w * BYTES_PER_PIXEL + pad);
    for src in pixels.chunks_exact(w) {
        row.clear();
        for px in src {
            row.extend_from_slice(&px.to_bytes());
        }
        row.extend(core::iter::repeat_n(0u8, pad));
        writer.write_all(&row).map_err(BmpError::Write)?;
    }
    Ok(())
}

/// Width and height are stored as signed 32-bit values; anything above
/// `i32::MAX` would read back as negative.
fn check_dimensions(width: u32, height: u32) -> Result<(), BmpError> {
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(BmpError::ImageTooLarge { width, height });
    }
    Ok(())
}

fn check_pixel_count(pixels: &[Bgr], width: u32, height: u32) -> Result<(), BmpError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(BmpError::ImageTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(BmpError::NotInitialized(
            "pixel buffer does not hold width x height pixels",
        ));
    }
    Ok(())
}
