//! File-backed 24-bit image with random pixel access.
//!
//! A [`BmpImage`] exclusively owns its file handle. Cloning copies the
//! name, dimensions, headers and pixels but never the handle; a clone
//! starts closed. Code that needs several handles onto one image shares
//! it explicitly through [`SharedBmpImage`].

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::bmp::{self, FileHeader, InfoHeader};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Bgr;

/// Reference-counted shared view of one image. The file closes when the
/// last clone is dropped.
pub type SharedBmpImage = Rc<RefCell<BmpImage>>;

#[derive(Debug)]
enum Handle {
    Reader(BufReader<File>),
    Writer(BufWriter<File>),
}

/// An uncompressed 24-bit BMP image bound to a file name.
///
/// Pixels are kept in storage order: row 0 is the first row in the file,
/// which is the bottom row of a standard bottom-up bitmap. Nothing is
/// flipped on read or write.
#[derive(Debug)]
pub struct BmpImage {
    file_name: PathBuf,
    handle: Option<Handle>,
    file_header: Option<FileHeader>,
    info_header: Option<InfoHeader>,
    width: u32,
    height: u32,
    pixels: Vec<Bgr>,
    limits: Limits,
}

impl BmpImage {
    /// An image to be read from `file_name`.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self::with_dimensions(file_name, 0, 0)
    }

    /// An image of known size, typically a write target.
    ///
    /// The pixel buffer starts empty; fill it with [`set_pixels`](Self::set_pixels)
    /// or [`fill`](Self::fill) before writing.
    pub fn with_dimensions(file_name: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.into(),
            handle: None,
            file_header: None,
            info_header: None,
            width,
            height,
            pixels: Vec::new(),
            limits: Limits::default(),
        }
    }

    /// Decode a whole image from an in-memory or already-open stream.
    pub fn read_from<R: Read + Seek>(
        file_name: impl Into<PathBuf>,
        reader: &mut R,
    ) -> Result<Self, BmpError> {
        let mut image = Self::new(file_name);
        let (file_header, info_header) = bmp::read_headers(reader)?;
        image.adopt_headers(file_header, info_header);
        image.pixels = bmp::read_pixels(
            reader,
            &file_header,
            image.width,
            image.height,
            Some(&image.limits),
        )?;
        Ok(image)
    }

    /// Encode the whole image to `writer`, independent of any open handle.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), BmpError> {
        let bytes = bmp::encode(&self.pixels, self.width, self.height)?;
        writer.write_all(&bytes).map_err(BmpError::Write)
    }

    /// Open `file_name` for reading, closing any handle already held.
    pub fn open(&mut self) -> Result<(), BmpError> {
        self.close()?;
        log::debug!("opening BMP file {}", self.file_name.display());
        let file = File::open(&self.file_name).map_err(|source| BmpError::FileOpen {
            path: self.file_name.clone(),
            source,
        })?;
        self.handle = Some(Handle::Reader(BufReader::new(file)));
        Ok(())
    }

    /// Create or truncate `file_name` for writing, closing any handle
    /// already held.
    pub fn create(&mut self) -> Result<(), BmpError> {
        self.close()?;
        log::debug!("creating BMP file {}", self.file_name.display());
        let file = File::create(&self.file_name).map_err(|source| BmpError::FileCreate {
            path: self.file_name.clone(),
            source,
        })?;
        self.handle = Some(Handle::Writer(BufWriter::new(file)));
        Ok(())
    }

    /// Flush and release the file handle. A no-op when nothing is open.
    pub fn close(&mut self) -> Result<(), BmpError> {
        if let Some(Handle::Writer(mut w)) = self.handle.take() {
            w.flush().map_err(BmpError::Write)?;
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Read and validate both headers, then adopt their width and height.
    pub fn read_header(&mut self) -> Result<(FileHeader, InfoHeader), BmpError> {
        log::debug!("reading image headers from {}", self.file_name.display());
        let Some(Handle::Reader(reader)) = self.handle.as_mut() else {
            return Err(BmpError::not_open_for_reading());
        };
        let (file_header, info_header) = bmp::read_headers(reader)?;
        self.adopt_headers(file_header, info_header);
        Ok((file_header, info_header))
    }

    /// Read `width` x `height` pixels from the offset named in the file
    /// header, replacing the current pixel buffer.
    pub fn read_pixels(&mut self) -> Result<&[Bgr], BmpError> {
        log::debug!("reading image pixels from {}", self.file_name.display());
        let file_header = self
            .file_header
            .ok_or(BmpError::NotInitialized("image header has not been read"))?;
        let Some(Handle::Reader(reader)) = self.handle.as_mut() else {
            return Err(BmpError::not_open_for_reading());
        };
        self.pixels = bmp::read_pixels(
            reader,
            &file_header,
            self.width,
            self.height,
            Some(&self.limits),
        )?;
        Ok(self.pixels.as_slice())
    }

    /// Write freshly built headers for the current width and height.
    pub fn write_header(&mut self) -> Result<(FileHeader, InfoHeader), BmpError> {
        log::debug!("writing image headers to {}", self.file_name.display());
        let Some(Handle::Writer(writer)) = self.handle.as_mut() else {
            return Err(BmpError::not_open_for_writing());
        };
        let (file_header, info_header) = bmp::write_headers(writer, self.width, self.height)?;
        self.file_header = Some(file_header);
        self.info_header = Some(info_header);
        Ok((file_header, info_header))
    }

    /// Write the pixel buffer, zero-padding each row, and flush.
    pub fn write_pixels(&mut self) -> Result<(), BmpError> {
        log::debug!("writing image pixels to {}", self.file_name.display());
        let file_header = self.file_header.unwrap_or_default();
        let Some(Handle::Writer(writer)) = self.handle.as_mut() else {
            return Err(BmpError::not_open_for_writing());
        };
        bmp::write_pixels(writer, &file_header, &self.pixels, self.width, self.height)?;
        writer.flush().map_err(BmpError::Write)
    }

    /// The pixel at column `x`, row `y`.
    pub fn index(&self, x: u32, y: u32) -> Result<&Bgr, BmpError> {
        let i = self.offset(x, y)?;
        Ok(&self.pixels[i])
    }

    /// Mutable access to the pixel at column `x`, row `y`.
    pub fn index_mut(&mut self, x: u32, y: u32) -> Result<&mut Bgr, BmpError> {
        let i = self.offset(x, y)?;
        Ok(&mut self.pixels[i])
    }

    /// Total pixel count, `width * height`.
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Replace the pixel buffer with `width * height` copies of `color`.
    pub fn fill(&mut self, color: Bgr) -> Result<(), BmpError> {
        let count = usize::try_from(self.size()).map_err(|_| BmpError::ImageTooLarge {
            width: self.width,
            height: self.height,
        })?;
        self.pixels = vec![color; count];
        Ok(())
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<PathBuf>) {
        self.file_name = file_name.into();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn pixels(&self) -> &[Bgr] {
        &self.pixels
    }

    pub fn set_pixels(&mut self, pixels: Vec<Bgr>) {
        self.pixels = pixels;
    }

    /// File header last read or written, if any.
    pub fn file_header(&self) -> Option<&FileHeader> {
        self.file_header.as_ref()
    }

    /// Info header last read or written, if any.
    pub fn info_header(&self) -> Option<&InfoHeader> {
        self.info_header.as_ref()
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Limits applied to dimensions taken from files on the next pixel read.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    pub fn into_shared(self) -> SharedBmpImage {
        Rc::new(RefCell::new(self))
    }

    fn adopt_headers(&mut self, file_header: FileHeader, info_header: InfoHeader) {
        self.width = info_header.width;
        self.height = info_header.height;
        self.file_header = Some(file_header);
        self.info_header = Some(info_header);
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, BmpError> {
        if x >= self.width || y >= self.height {
            return Err(BmpError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if self.pixels.len() as u64 != self.size() {
            return Err(BmpError::NotInitialized(
                "pixel buffer does not hold width x height pixels",
            ));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl Clone for BmpImage {
    /// Deep copy without the file handle.
    fn clone(&self) -> Self {
        Self {
            file_name: self.file_name.clone(),
            handle: None,
            file_header: self.file_header,
            info_header: self.info_header,
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            limits: self.limits.clone(),
        }
    }
}
