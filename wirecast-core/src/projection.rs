/// Orthographic XY projection with uniform fit-to-image scaling
use nalgebra::Vector2;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Mesh, Point3};
use crate::raster::PixelPoint;

/// How the mesh bounding box is placed in the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Centering {
    /// Centre the XY bounding box and keep every vertex on the canvas.
    #[default]
    BoundingBox,
    /// The legacy formula: `dim / 2 + min + max` with a `dim / max_extent`
    /// scale. Only fits meshes centred on the origin.
    Offset,
}

impl FromStr for Centering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bbox" | "bounding-box" => Ok(Self::BoundingBox),
            "offset" => Ok(Self::Offset),
            other => Err(Error::InvalidCentering(other.to_string())),
        }
    }
}

/// Uniform scale plus 2D translation from mesh space to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub translate: Vector2<f64>,
}

impl FitTransform {
    /// Compute the transform that fits `bounds` into a `width` x `height` image.
    ///
    /// Only X and Y take part. Fails with `DegenerateMesh` before dividing
    /// when the larger XY extent is zero or not finite, and after dividing
    /// when the scale or translation comes out non-finite.
    pub fn new(bounds: &Bounds, width: u32, height: u32, centering: Centering) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let max_extent = bounds.max_xy_extent();
        if !max_extent.is_finite() || max_extent <= 0.0 {
            return Err(Error::DegenerateMesh { max_extent });
        }

        let (w, h) = (f64::from(width), f64::from(height));
        let (min, max) = (bounds.min, bounds.max);

        let transform = match centering {
            Centering::BoundingBox => {
                // Spans of dim - 1 put the box on [0.5, dim - 0.5] so floor stays on canvas
                let scale = ((w - 1.0) / max_extent).min((h - 1.0) / max_extent);
                Self {
                    scale,
                    translate: Vector2::new(
                        w / 2.0 - scale * (min.x + max.x) / 2.0,
                        h / 2.0 - scale * (min.y + max.y) / 2.0,
                    ),
                }
            }
            Centering::Offset => Self {
                scale: (w / max_extent).min(h / max_extent),
                translate: Vector2::new(w / 2.0 + min.x + max.x, h / 2.0 + min.y + max.y),
            },
        };

        // A subnormal extent passes the check above but still overflows the division
        let finite = transform.scale.is_finite()
            && transform.scale >= 0.0
            && transform.translate.iter().all(|t| t.is_finite());
        if !finite {
            return Err(Error::DegenerateMesh { max_extent });
        }

        Ok(transform)
    }

    /// Fit a whole mesh; an empty mesh is degenerate.
    pub fn for_mesh(mesh: &Mesh, width: u32, height: u32, centering: Centering) -> Result<Self> {
        let bounds = mesh
            .bounds()
            .ok_or(Error::DegenerateMesh { max_extent: 0.0 })?;
        Self::new(bounds, width, height, centering)
    }

    /// `floor(coord * scale + translate)` per axis; Z is dropped.
    pub fn project(&self, point: Point3) -> PixelPoint {
        let pixel = Vector2::new(point.x, point.y) * self.scale + self.translate;
        // `as` saturates at the i32 range
        PixelPoint::new(pixel.x.floor() as i32, pixel.y.floor() as i32)
    }
}
