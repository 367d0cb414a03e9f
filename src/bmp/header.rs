//! BITMAPFILEHEADER / BITMAPINFOHEADER records.
//!
//! Both are decoded field by field from little-endian bytes, so the
//! in-memory struct layout never has to match the packed disk layout.

use super::utils::row_stride;
use crate::error::BmpError;

/// "BM" read as a little-endian u16.
pub const SIGNATURE: u16 = 0x4D42;
/// Size of the file header on disk.
pub const FILE_HEADER_LEN: usize = 14;
/// Size of the BITMAPINFOHEADER on disk.
pub const INFO_HEADER_LEN: usize = 40;
/// Pixel data offset of every file this crate writes.
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;
/// The only supported depth.
pub const BITS_PER_PIXEL: u16 = 24;
/// 72 DPI in pixels per metre, as written to new files.
pub const DEFAULT_RESOLUTION: u32 = 0x0B12;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    /// Offset from the start of the file to the pixel array.
    pub pixel_data_offset: u32,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_resolution: u32,
    pub y_resolution: u32,
    pub colors: u32,
    pub important_colors: u32,
}

impl FileHeader {
    /// Header for a new file. File size and reserved are left zero.
    pub const fn new() -> Self {
        Self {
            signature: SIGNATURE,
            file_size: 0,
            reserved: 0,
            pixel_data_offset: PIXEL_DATA_OFFSET,
        }
    }

    pub fn from_bytes(b: &[u8; FILE_HEADER_LEN]) -> Self {
        Self {
            signature: u16::from_le_bytes([b[0], b[1]]),
            file_size: u32::from_le_bytes([b[2], b[3], b[4], b[5]]),
            reserved: u32::from_le_bytes([b[6], b[7], b[8], b[9]]),
            pixel_data_offset: u32::from_le_bytes([b[10], b[11], b[12], b[13]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&self.signature.to_le_bytes());
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.pixel_data_offset.to_le_bytes());
        out
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoHeader {
    /// Header for a new uncompressed 24-bit image of the given size.
    ///
    /// `image_size` saturates at `u32::MAX` for widths whose stride
    /// cannot be represented on disk.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let image_size = (row_stride(width) as u64)
            .saturating_mul(u64::from(height))
            .min(u64::from(u32::MAX)) as u32;
        Self {
            header_size: INFO_HEADER_LEN as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
            x_resolution: DEFAULT_RESOLUTION,
            y_resolution: DEFAULT_RESOLUTION,
            colors: 0,
            important_colors: 0,
        }
    }

    pub fn from_bytes(b: &[u8; INFO_HEADER_LEN]) -> Self {
        let u32_at = |i: usize| u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            header_size: u32_at(0),
            width: u32_at(4),
            height: u32_at(8),
            planes: u16_at(12),
            bits_per_pixel: u16_at(14),
            compression: u32_at(16),
            image_size: u32_at(20),
            x_resolution: u32_at(24),
            y_resolution: u32_at(28),
            colors: u32_at(32),
            important_colors: u32_at(36),
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_resolution.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_resolution.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors.to_le_bytes());
        out[36..40].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }
}

/// Reject anything other than a bottom-up 24-bit "BM" file.
///
/// Compression and planes are not checked.
pub(crate) fn validate(file: &FileHeader, info: &InfoHeader) -> Result<(), BmpError> {
    if file.signature != SIGNATURE {
        let [lo, hi] = file.signature.to_le_bytes();
        return Err(BmpError::FileNotSupported(format!(
            "bad signature {lo:#04x} {hi:#04x}, expected \"BM\""
        )));
    }
    if info.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BmpError::FileNotSupported(format!(
            "{} bits per pixel, only 24 is supported",
            info.bits_per_pixel
        )));
    }
    // Width and height are signed on disk. A negative height marks a
    // top-down bitmap.
    if (info.height as i32) < 0 {
        return Err(BmpError::FileNotSupported(
            "top-down bitmaps are not supported".into(),
        ));
    }
    if (info.width as i32) < 0 {
        return Err(BmpError::FileNotSupported(format!(
            "negative width {}",
            info.width as i32
        )));
    }
    Ok(())
}
