//! # bmp24
//!
//! Reader and writer for uncompressed 24-bit BMP images.
//!
//! Images are held fully in memory as a width x height grid of [`Bgr`]
//! pixels. [`BmpImage`] ties that grid to a file on disk and exposes the
//! codec as explicit steps: open or create the file, read or write the
//! headers, read or write the pixels, and edit pixels in between.
//!
//! ## Row order
//!
//! Pixels stay in storage order. Row 0 is the first row in the file,
//! which for an ordinary bottom-up BMP is the bottom of the picture.
//! Reading and then writing an image therefore preserves its rows exactly.
//!
//! ## Supported files
//!
//! - "BM" signature, BITMAPINFOHEADER, 24 bits per pixel, uncompressed
//! - Bottom-up only (positive height)
//!
//! Palettes, other depths, compression, alpha and top-down bitmaps are
//! rejected with [`BmpError::FileNotSupported`].
//!
//! ## Usage
//!
//! ```no_run
//! use bmp24::{Bgr, BmpImage, Channel};
//!
//! let mut input = BmpImage::new("input.bmp");
//! input.open()?;
//! input.read_header()?;
//! input.read_pixels()?;
//!
//! let px = input.index_mut(2, 2)?;
//! px[Channel::Red] = 255;
//! *input.index_mut(0, 0)? = Bgr::WHITE;
//!
//! let mut output = BmpImage::with_dimensions("output.bmp", input.width(), input.height());
//! output.set_pixels(input.pixels().to_vec());
//! output.create()?;
//! output.write_header()?;
//! output.write_pixels()?;
//! output.close()?;
//! # Ok::<(), bmp24::BmpError>(())
//! ```
//!
//! In-memory buffers go through [`encode`] and [`decode`]:
//!
//! ```
//! use bmp24::{Bgr, decode, encode};
//!
//! let pixels = vec![Bgr::new(0, 0, 255); 3];
//! let bytes = encode(&pixels, 3, 1)?;
//! assert_eq!(bytes.len(), 54 + 12);
//!
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded.pixels(), &pixels[..]);
//! # Ok::<(), bmp24::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod limits;
mod pixel;

pub mod bmp;

mod decode;

// Re-exports
pub use bmp::{FileHeader, InfoHeader};
pub use decode::{DecodeRequest, Decoded};
pub use error::BmpError;
pub use image::{BmpImage, SharedBmpImage};
pub use limits::Limits;
pub use pixel::{Bgr, Channel};

/// Decode an in-memory BMP file.
pub fn decode(data: &[u8]) -> Result<Decoded, BmpError> {
    DecodeRequest::new(data).decode()
}

/// Decode an in-memory BMP file, rejecting dimensions outside `limits`.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Decoded, BmpError> {
    DecodeRequest::new(data).with_limits(limits).decode()
}

/// Encode `width * height` pixels, row-major in storage order, as a BMP file.
pub fn encode(pixels: &[Bgr], width: u32, height: u32) -> Result<Vec<u8>, BmpError> {
    bmp::encode(pixels, width, height)
}
