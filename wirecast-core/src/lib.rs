/// Wirecast Core Library - mesh loading, fitting and line rasterization
///
/// This library loads Wavefront OBJ meshes, fits their XY bounding box into
/// a fixed-size image with a uniform scale and draws every triangle edge
/// into an RGB framebuffer. Image encoding is left to an `ImageEncoder`.

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod obj;
pub mod projection;
pub mod raster;
pub mod render;

// Re-export commonly used types
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use framebuffer::{Color, Framebuffer, ImageEncoder, PixelSink};
pub use geometry::{Bounds, Face, Mesh, Point3};
pub use obj::{load_obj, parse_obj};
pub use projection::{Centering, FitTransform};
pub use raster::{draw_line, draw_triangle, PixelPoint};
pub use render::{render_mesh, RenderStats, Rendered};
