/// Command line surface
use clap::Parser;
use std::path::PathBuf;
use wirecast_core::config::{DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};
use wirecast_core::{Centering, Color, RenderConfig};

#[derive(Debug, Parser)]
#[command(
    name = "wirecast",
    version,
    about = "Render the wireframe of a Wavefront OBJ file to a PNG image"
)]
pub struct Cli {
    /// Wavefront OBJ file to read as input
    pub filename: PathBuf,

    /// Width of output image
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of output image
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Name of output image file
    #[arg(long = "out", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Line color as rrggbb hex
    #[arg(long, default_value = "ffffff")]
    pub color: Color,

    /// Background color as rrggbb hex
    #[arg(long, default_value = "000000")]
    pub background: Color,

    /// Mesh placement: `bbox` centres the bounding box, `offset` uses the legacy formula
    #[arg(long, default_value = "bbox")]
    pub centering: Centering,
}

impl Cli {
    /// Split into the input path and the render configuration.
    pub fn into_config(self) -> (PathBuf, RenderConfig) {
        let config = RenderConfig {
            width: self.width,
            height: self.height,
            output: self.output,
            foreground: self.color,
            background: self.background,
            centering: self.centering,
        };
        (self.filename, config)
    }
}
