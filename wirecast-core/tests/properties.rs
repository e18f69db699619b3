//! Property-based tests for loading, fitting and line drawing.
//!
//! Run with: cargo test -p wirecast-core --test properties

use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;
use wirecast_core::{
    draw_line, parse_obj, render_mesh, Centering, Color, FitTransform, Framebuffer, Mesh,
    PixelPoint, PixelSink, Point3, RenderConfig,
};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default)]
struct Recorder {
    writes: Vec<(i32, i32)>,
}

impl PixelSink for Recorder {
    fn set_pixel(&mut self, x: i32, y: i32, _color: Color) {
        self.writes.push((x, y));
    }
}

fn trace(from: PixelPoint, to: PixelPoint) -> Vec<(i32, i32)> {
    let mut recorder = Recorder::default();
    draw_line(&mut recorder, from, to, Color::WHITE);
    recorder.writes
}

fn arb_position() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-1000.0..1000.0f64)
}

fn arb_pixel() -> impl Strategy<Value = PixelPoint> {
    (-200..200i32, -200..200i32).prop_map(|(x, y)| PixelPoint::new(x, y))
}

fn mesh_from(positions: &[[f64; 3]]) -> Mesh {
    let mut mesh = Mesh::new();
    for &[x, y, z] in positions {
        mesh.add_vertex(Point3::new(x, y, z));
    }
    mesh
}

fn lit_pixels(fb: &Framebuffer) -> BTreeSet<(i32, i32)> {
    let mut lit = BTreeSet::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            if fb.pixel(x, y) != Some(Color::BLACK) {
                lit.insert((x, y));
            }
        }
    }
    lit
}

/// True when every pixel is reachable from the first through 8-neighbours.
fn is_connected(pixels: &BTreeSet<(i32, i32)>) -> bool {
    let Some(&start) = pixels.iter().next() else {
        return true;
    };
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some((x, y)) = queue.pop_front() {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let next = (x + dx, y + dy);
                if pixels.contains(&next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen.len() == pixels.len()
}

// =============================================================================
// Extents
// =============================================================================

proptest! {
    /// Extents equal the exact max minus min on every axis.
    #[test]
    fn extent_matches_min_max(positions in prop::collection::vec(arb_position(), 1..64)) {
        let mesh = mesh_from(&positions);
        let extent = mesh.extent().unwrap();

        for axis in 0..3 {
            let values = positions.iter().map(|p| p[axis]);
            let min = values.clone().fold(f64::INFINITY, f64::min);
            let max = values.fold(f64::NEG_INFINITY, f64::max);
            let value = extent.component(axis).unwrap();
            prop_assert!(value >= 0.0);
            prop_assert_eq!(value, max - min);
        }
    }

    /// Loading through the OBJ parser gives the same bounds as building directly.
    #[test]
    fn parsed_bounds_match(positions in prop::collection::vec(arb_position(), 1..32)) {
        let text: String = positions
            .iter()
            .map(|[x, y, z]| format!("v {} {} {}\n", x, y, z))
            .collect();
        let parsed = parse_obj(&text).unwrap();
        let built = mesh_from(&positions);
        prop_assert_eq!(parsed.bounds(), built.bounds());
    }
}

// =============================================================================
// Fit transform
// =============================================================================

proptest! {
    /// Every vertex of a mesh with positive extent lands on the canvas.
    #[test]
    fn fitted_vertices_stay_on_canvas(
        positions in prop::collection::vec(arb_position(), 2..32),
        width in 1u32..2000,
        height in 1u32..2000,
    ) {
        let mesh = mesh_from(&positions);
        let bounds = *mesh.bounds().unwrap();
        prop_assume!(bounds.max_xy_extent() > 1e-3);

        let fit = FitTransform::new(&bounds, width, height, Centering::BoundingBox).unwrap();
        let corners = [bounds.min, bounds.max];
        for point in corners.iter().chain(mesh.vertices.iter()) {
            let pixel = fit.project(*point);
            prop_assert!(pixel.x >= 0 && (pixel.x as u32) < width, "x {} of {}", pixel.x, width);
            prop_assert!(pixel.y >= 0 && (pixel.y as u32) < height, "y {} of {}", pixel.y, height);
        }
    }
}

// =============================================================================
// Line rasterization
// =============================================================================

proptest! {
    /// A to B and B to A visit the same pixels.
    #[test]
    fn line_is_direction_invariant(a in arb_pixel(), b in arb_pixel()) {
        let forward: BTreeSet<_> = trace(a, b).into_iter().collect();
        let backward: BTreeSet<_> = trace(b, a).into_iter().collect();
        prop_assert_eq!(forward, backward);
    }

    /// One pixel per step along the major axis, each touching the last.
    #[test]
    fn line_has_no_gaps(a in arb_pixel(), b in arb_pixel()) {
        let writes = trace(a, b);
        let major = (a.x - b.x).abs().max((a.y - b.y).abs());
        prop_assert_eq!(writes.len() as i32, major + 1);

        for pair in writes.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            prop_assert!((x1 - x0).abs() <= 1 && (y1 - y0).abs() <= 1);
        }

        let ends: BTreeSet<_> = writes.iter().copied().collect();
        prop_assert!(ends.contains(&(a.x, a.y)));
        prop_assert!(ends.contains(&(b.x, b.y)));
    }

    #[test]
    fn point_line_writes_once(a in arb_pixel()) {
        prop_assert_eq!(trace(a, a), vec![(a.x, a.y)]);
    }

    /// Horizontal lines cover the whole span at a fixed row.
    #[test]
    fn horizontal_line_covers_span(x0 in -50..50i32, x1 in -50..50i32, y in -50..50i32) {
        let pixels: BTreeSet<_> = trace(PixelPoint::new(x0, y), PixelPoint::new(x1, y))
            .into_iter()
            .collect();
        let expected: BTreeSet<_> = (x0.min(x1)..=x0.max(x1)).map(|x| (x, y)).collect();
        prop_assert_eq!(pixels, expected);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_triangle_outline_is_closed() {
    let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
    let rendered = render_mesh(&mesh, &RenderConfig::default()).unwrap();
    let lit = lit_pixels(&rendered.framebuffer);

    let fit = rendered.transform;
    for vertex in &mesh.vertices {
        let corner = fit.project(*vertex);
        assert!(lit.contains(&(corner.x, corner.y)), "corner {:?} not drawn", corner);
    }
    assert!(is_connected(&lit));

    // Removing any one edge's pixels must leave the outline open, so every
    // lit pixel has at least two lit neighbours.
    for &(x, y) in &lit {
        let neighbours = (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (x + dx, y + dy)))
            .filter(|&p| p != (x, y) && lit.contains(&p))
            .count();
        assert!(neighbours >= 2, "pixel {:?} is a dead end", (x, y));
    }
}

#[test]
fn cube_wireframe_is_connected() {
    let rendered = render_mesh(&Mesh::cube(2.0), &RenderConfig::new(64, 48)).unwrap();
    let lit = lit_pixels(&rendered.framebuffer);
    assert!(!lit.is_empty());
    assert!(is_connected(&lit));
}

#[test]
fn set_pixel_off_canvas_leaves_buffer_untouched() {
    let mut fb = Framebuffer::new(8, 8);
    fb.fill(Color::new(10, 20, 30));
    let before = fb.as_bytes().to_vec();
    fb.set_pixel(-5, 3, Color::WHITE);
    assert_eq!(fb.as_bytes(), &before[..]);
}
