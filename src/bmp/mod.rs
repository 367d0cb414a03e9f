//! 24-bit BMP codec over any `Read`/`Write` + `Seek` stream.
//!
//! The file-backed [`crate::BmpImage`] is a thin layer over these
//! functions; they also work on `std::io::Cursor<Vec<u8>>`.

mod decode;
mod encode;
mod header;
mod utils;

pub use decode::{read_headers, read_pixels};
pub use encode::{write_headers, write_pixels};
pub use header::{
    BITS_PER_PIXEL, DEFAULT_RESOLUTION, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader,
    PIXEL_DATA_OFFSET, SIGNATURE,
};
pub use utils::{BYTES_PER_PIXEL, checked_row_stride, row_padding, row_stride};

use std::io::Cursor;

use crate::decode::Decoded;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Bgr;

/// Decode a whole in-memory BMP file.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Decoded, BmpError> {
    let mut cursor = Cursor::new(data);
    let (file_header, info_header) = read_headers(&mut cursor)?;
    let pixels = read_pixels(
        &mut cursor,
        &file_header,
        info_header.width,
        info_header.height,
        limits,
    )?;
    Ok(Decoded::new(file_header, info_header, pixels))
}

/// Encode to BMP.
pub(crate) fn encode(pixels: &[Bgr], width: u32, height: u32) -> Result<Vec<u8>, BmpError> {
    encode::encode_bmp(pixels, width, height)
}
