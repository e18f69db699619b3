/// Render configuration with documented defaults
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::framebuffer::Color;
use crate::projection::Centering;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Everything one rendering pass needs besides the mesh
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Destination handed to the image encoder.
    pub output: PathBuf,
    pub foreground: Color,
    pub background: Color,
    pub centering: Centering,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            foreground: Color::WHITE,
            background: Color::BLACK,
            centering: Centering::default(),
        }
    }
}
