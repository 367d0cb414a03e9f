use crate::bmp::{FileHeader, InfoHeader};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Bgr;

/// Decoded image: headers as found in the file plus the pixel grid in
/// storage row order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    file_header: FileHeader,
    info_header: InfoHeader,
    width: u32,
    height: u32,
    pixels: Vec<Bgr>,
}

impl Decoded {
    pub(crate) fn new(file_header: FileHeader, info_header: InfoHeader, pixels: Vec<Bgr>) -> Self {
        Self {
            file_header,
            info_header,
            width: info_header.width,
            height: info_header.height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// File header exactly as read.
    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    /// Info header exactly as read.
    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    /// Access the pixel data, row-major.
    pub fn pixels(&self) -> &[Bgr] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<Bgr> {
        self.pixels
    }

    /// Pixel at column `x` of storage row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<&Bgr> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// Borrowed 2-D view of the pixel grid.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Bgr> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy into an [`imgref::ImgVec`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn to_rgb_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.pixels.iter().map(|&px| px.into()).collect(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Builder for decoding an in-memory BMP file.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<Decoded, BmpError> {
        crate::bmp::decode(self.data, self.limits)
    }
}
