use core::ops::{Index, IndexMut};

/// Color channel selector for [`Bgr`] indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// A 24-bit pixel, stored blue-green-red as it appears on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    pub const BLACK: Bgr = Bgr::new(0, 0, 0);
    pub const WHITE: Bgr = Bgr::new(255, 255, 255);

    /// Build a pixel from channels in on-disk (blue, green, red) order.
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Build a pixel from a packed `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            b: rgb as u8,
            g: (rgb >> 8) as u8,
            r: (rgb >> 16) as u8,
        }
    }

    /// Packed view with red in the most significant byte: `0xRRGGBB`.
    pub const fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The three bytes as written to disk.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<[u8; 3]> for Bgr {
    /// Bytes are taken in on-disk order: `[b, g, r]`.
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Bgr> for [u8; 3] {
    fn from(px: Bgr) -> Self {
        px.to_bytes()
    }
}

impl Index<Channel> for Bgr {
    type Output = u8;

    fn index(&self, channel: Channel) -> &u8 {
        match channel {
            Channel::Blue => &self.b,
            Channel::Green => &self.g,
            Channel::Red => &self.r,
        }
    }
}

impl IndexMut<Channel> for Bgr {
    fn index_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Blue => &mut self.b,
            Channel::Green => &mut self.g,
            Channel::Red => &mut self.r,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Bgr {
    fn from(px: rgb::RGB8) -> Self {
        Self::new(px.b, px.g, px.r)
    }
}

#[cfg(feature = "rgb")]
impl From<Bgr> for rgb::RGB8 {
    fn from(px: Bgr) -> Self {
        rgb::RGB8 {
            r: px.r,
            g: px.g,
            b: px.b,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGR8> for Bgr {
    fn from(px: rgb::alt::BGR8) -> Self {
        Self::new(px.b, px.g, px.r)
    }
}

#[cfg(feature = "rgb")]
impl From<Bgr> for rgb::alt::BGR8 {
    fn from(px: Bgr) -> Self {
        rgb::alt::BGR8 {
            b: px.b,
            g: px.g,
            r: px.r,
        }
    }
}
