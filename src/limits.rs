use crate::error::BmpError;
use crate::pixel::Bgr;

/// Caps on the dimensions accepted from a file before its pixel buffer is
/// allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// No limits at all; same as `Limits::default()`.
    pub const fn none() -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_pixels: None,
            max_memory_bytes: None,
        }
    }

    /// Check a `width` x `height` image and its decoded buffer size.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let exceeds = |what: &str, value: u64, max: Option<u64>| match max {
            Some(max) if value > max => Err(BmpError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };

        let pixels = u64::from(width) * u64::from(height);
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds(
            "pixel buffer bytes",
            pixels.saturating_mul(core::mem::size_of::<Bgr>() as u64),
            self.max_memory_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert_eq!(Limits::default(), Limits::none());
        assert!(Limits::none().check(u32::MAX, u32::MAX).is_ok());
    }

    #[test]
    fn pixel_count_limit() {
        let limits = Limits {
            max_pixels: Some(12),
            ..Default::default()
        };
        assert!(limits.check(4, 3).is_ok());
        match limits.check(4, 4) {
            Err(BmpError::LimitExceeded(msg)) => assert!(msg.contains("16")),
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn width_and_height_limits() {
        let limits = Limits {
            max_width: Some(10),
            max_height: Some(5),
            ..Default::default()
        };
        assert!(limits.check(10, 5).is_ok());
        assert!(limits.check(11, 1).is_err());
        assert!(limits.check(1, 6).is_err());
    }

    #[test]
    fn memory_limit_counts_three_bytes_per_pixel() {
        let limits = Limits {
            max_memory_bytes: Some(300),
            ..Default::default()
        };
        assert!(limits.check(10, 10).is_ok());
        assert!(limits.check(10, 11).is_err());
    }
}
