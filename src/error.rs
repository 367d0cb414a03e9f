use std::io;
use std::path::PathBuf;

/// Errors from BMP reading, writing and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("could not open {} for reading: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read image data: {0}")]
    Read(#[source] io::Error),

    #[error("could not write image data: {0}")]
    Write(#[source] io::Error),

    #[error("file is not a supported BMP: {0}")]
    FileNotSupported(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("image state not initialized: {0}")]
    NotInitialized(&'static str),

    #[error("image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl BmpError {
    /// The read error raised when no read handle is open.
    pub(crate) fn not_open_for_reading() -> Self {
        BmpError::Read(io::Error::new(
            io::ErrorKind::NotConnected,
            "no file open for reading",
        ))
    }

    /// The write error raised when no write handle is open.
    pub(crate) fn not_open_for_writing() -> Self {
        BmpError::Write(io::Error::new(
            io::ErrorKind::NotConnected,
            "no file open for writing",
        ))
    }
}
