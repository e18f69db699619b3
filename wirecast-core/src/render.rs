/// Wireframe render pass: fit, project, rasterize
use log::debug;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::framebuffer::{Color, Framebuffer};
use crate::geometry::Mesh;
use crate::projection::FitTransform;
use crate::raster::draw_triangle;

/// Counters from one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    pub edges: usize,
}

/// Result of a render pass, ready to hand to an encoder
#[derive(Debug, Clone)]
pub struct Rendered {
    pub framebuffer: Framebuffer,
    pub transform: FitTransform,
    pub stats: RenderStats,
}

/// Draw every face of `mesh` as a closed triangle outline.
///
/// The configuration and mesh indices are checked and the fit transform is
/// computed before any pixel is touched, so a degenerate mesh never produces
/// a partial image.
pub fn render_mesh(mesh: &Mesh, config: &RenderConfig) -> Result<Rendered> {
    config.validate()?;
    mesh.validate()?;

    let transform = FitTransform::for_mesh(mesh, config.width, config.height, config.centering)?;
    debug!(
        "Fit transform: scale {} translate ({}, {})",
        transform.scale, transform.translate.x, transform.translate.y
    );

    let mut framebuffer = Framebuffer::new(config.width, config.height);
    if config.background != Color::BLACK {
        framebuffer.fill(config.background);
    }

    let mut stats = RenderStats::default();
    for (n, face) in mesh.faces.iter().enumerate() {
        let vertices = mesh.face_vertices(face).ok_or(Error::InvalidFace {
            face: n,
            index: face.indices[0],
            vertex_count: mesh.vertices.len(),
        })?;
        let corners = vertices.map(|v| transform.project(v));
        draw_triangle(&mut framebuffer, corners, config.foreground);
        stats.faces += 1;
        stats.edges += 3;
    }

    debug!("Rasterized {} faces ({} edges)", stats.faces, stats.edges);

    Ok(Rendered {
        framebuffer,
        transform,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Face, Point3};
    use crate::projection::Centering;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_face(Face::new(0, 1, 2));
        mesh
    }

    #[test]
    fn test_render_triangle() {
        let rendered = render_mesh(&triangle(), &RenderConfig::default()).unwrap();
        assert_eq!(rendered.stats, RenderStats { faces: 1, edges: 3 });

        let fb = &rendered.framebuffer;
        assert_eq!(fb.pixel(100, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(699, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(100, 599), Some(Color::WHITE));
        // Interior stays background
        assert_eq!(fb.pixel(200, 100), Some(Color::BLACK));
    }

    #[test]
    fn test_colors_applied() {
        let config = RenderConfig {
            foreground: Color::new(255, 0, 0),
            background: Color::new(0, 0, 255),
            ..RenderConfig::new(50, 50)
        };
        let rendered = render_mesh(&triangle(), &config).unwrap();
        let fb = &rendered.framebuffer;
        assert_eq!(fb.pixel(0, 0), Some(Color::new(255, 0, 0)));
        assert_eq!(fb.pixel(30, 30), Some(Color::new(0, 0, 255)));
    }

    #[test]
    fn test_cube_offset_mode_clips_silently() {
        let config = RenderConfig {
            centering: Centering::Offset,
            ..RenderConfig::default()
        };
        let rendered = render_mesh(&Mesh::cube(2.0), &config).unwrap();
        assert_eq!(rendered.stats.faces, 12);
        assert_eq!(rendered.framebuffer.pixel(100, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_degenerate_mesh_rejected() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(2.0, 2.0, 0.0));
        mesh.add_face(Face::new(0, 0, 0));
        assert!(matches!(
            render_mesh(&mesh, &RenderConfig::default()),
            Err(Error::DegenerateMesh { .. })
        ));
    }

    #[test]
    fn test_invalid_face_rejected() {
        let mut mesh = triangle();
        mesh.add_face(Face::new(0, 1, 9));
        assert!(matches!(
            render_mesh(&mesh, &RenderConfig::default()),
            Err(Error::InvalidFace { face: 1, index: 9, .. })
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            render_mesh(&triangle(), &RenderConfig::new(0, 10)),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
