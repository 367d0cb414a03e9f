//! Stream reader for 24-bit BMP headers and pixel rows.

use std::io::{self, Read, Seek, SeekFrom};

use super::header::{self, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader};
use super::utils::{BYTES_PER_PIXEL, row_padding, row_stride};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Bgr;

/// Read and validate the 14-byte file header and 40-byte info header.
///
/// The signature is checked as soon as its two bytes are available, so a
/// non-BMP file is reported as unsupported even when it is shorter than a
/// full header.
pub fn read_headers<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader), BmpError> {
    let mut file_bytes = [0u8; FILE_HEADER_LEN];
    let got = read_up_to(reader, &mut file_bytes).map_err(BmpError::Read)?;
    if got >= 2 && file_bytes[..2] != *b"BM" {
        return Err(BmpError::FileNotSupported(format!(
            "bad signature {:#04x} {:#04x}, expected \"BM\"",
            file_bytes[0], file_bytes[1]
        )));
    }
    if got < FILE_HEADER_LEN {
        return Err(BmpError::Read(io::ErrorKind::UnexpectedEof.into()));
    }

    let mut info_bytes = [0u8; INFO_HEADER_LEN];
    reader.read_exact(&mut info_bytes).map_err(BmpError::Read)?;

    let file = FileHeader::from_bytes(&file_bytes);
    let info = InfoHeader::from_bytes(&info_bytes);
    header::validate(&file, &info)?;
    log::trace!(
        "parsed BMP header: {}x{}, pixel data at {}",
        info.width,
        info.height,
        file.pixel_data_offset
    );
    Ok((file, info))
}

/// Read `height` rows of `width` pixels starting at the header's pixel
/// data offset.
///
/// Rows come back in storage order: row 0 is the first row in the file,
/// which for a standard bottom-up BMP is the bottom of the picture.
///
/// The stream length is checked against the rows the dimensions promise
/// before anything is allocated, so a short input fails with
/// `Read(UnexpectedEof)` at a cost bounded by its own size. The padding
/// after the last row may be missing.
pub fn read_pixels<R: Read + Seek>(
    reader: &mut R,
    file_header: &FileHeader,
    width: u32,
    height: u32,
    limits: Option<&Limits>,
) -> Result<Vec<Bgr>, BmpError> {
    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let offset = u64::from(file_header.pixel_data_offset);
    let row_bytes = u64::from(width) * BYTES_PER_PIXEL as u64;
    let needed = row_stride(width)
        .checked_mul(u64::from(height - 1))
        .and_then(|n| n.checked_add(row_bytes))
        .and_then(|n| n.checked_add(offset))
        .ok_or(BmpError::ImageTooLarge { width, height })?;
    let available = reader.seek(SeekFrom::End(0)).map_err(BmpError::Read)?;
    if available < needed {
        log::trace!("{width}x{height} pixel rows need {needed} bytes, stream has {available}");
        return Err(BmpError::Read(io::ErrorKind::UnexpectedEof.into()));
    }

    let w = width as usize;
    let pixel_count = w
        .checked_mul(height as usize)
        .ok_or(BmpError::ImageTooLarge { width, height })?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(pixel_count)
        .map_err(|_| BmpError::ImageTooLarge { width, height })?;
    let row_len = w
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or(BmpError::ImageTooLarge { width, height })?;
    let mut row = vec![0u8; row_len];

    reader
        .seek(SeekFrom::Start(offset))
        .map_err(BmpError::Read)?;

    let padding = row_padding(width) as i64;
    for _ in 0..height {
        reader.read_exact(&mut row).map_err(BmpError::Read)?;
        pixels.extend(
            row.chunks_exact(BYTES_PER_PIXEL)
                .map(|c| Bgr::new(c[0], c[1], c[2])),
        );
        if padding > 0 {
            reader.seek_relative(padding).map_err(BmpError::Read)?;
        }
    }

    Ok(pixels)
}

/// Like `read_exact`, but stops quietly at end of input and returns the
/// number of bytes filled.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
