/// RGB framebuffer with a Y-up logical coordinate system
use std::str::FromStr;

use crate::error::{Error, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `rrggbb` or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Anything a line can be drawn into
pub trait PixelSink {
    /// Write one pixel. Coordinates outside the target are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

/// External collaborator that turns raw RGB rows into an image file
pub trait ImageEncoder {
    /// `rgb` is row-major, top row first, `width * height * 3` bytes.
    fn encode(&mut self, width: u32, height: u32, rgb: &[u8]) -> Result<()>;
}

/// Flat RGB pixel store.
///
/// Callers address pixels with the origin at the bottom-left and Y growing
/// upwards. Rows are stored top-down, so `y` is flipped on every write.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a black framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 3;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Byte offset of a logical pixel, `None` when off-canvas.
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        let row = (self.height - 1 - y) as usize;
        Some((row * self.width as usize + x as usize) * 3)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Read back a logical pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let p = &self.data[offset..offset + 3];
        Some(Color::new(p[0], p[1], p[2]))
    }

    /// Stored bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Hand the whole buffer to an encoder.
    pub fn write<E: ImageEncoder + ?Sized>(&self, encoder: &mut E) -> Result<()> {
        encoder.encode(self.width, self.height, &self.data)
    }
}

impl PixelSink for Framebuffer {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        Framebuffer::set_pixel(self, x, y, color);
    }
}
