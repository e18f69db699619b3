/// Integer line rasterization
use std::mem::swap;

use crate::framebuffer::{Color, PixelSink};

/// A position on the pixel grid, Y up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Draw a one pixel wide line from `from` to `to`, both ends inclusive.
///
/// Lines steeper than 45 degrees are drawn with X and Y exchanged so a
/// single shallow-slope loop covers every octant. Endpoints are ordered by
/// X before stepping, which makes the result independent of direction.
/// Pixels that fall outside the sink are dropped by the sink itself.
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    from: PixelPoint,
    to: PixelPoint,
    color: Color,
) {
    let (mut x0, mut y0) = (i64::from(from.x), i64::from(from.y));
    let (mut x1, mut y1) = (i64::from(to.x), i64::from(to.y));

    let steep = (x0 - x1).abs() < (y0 - y1).abs();
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let (dy, step_y) = if y0 > y1 { (y0 - y1, -1) } else { (y1 - y0, 1) };
    let dx = x1 - x0;

    let mut d = 2 * dy - dx;
    let east = 2 * dy;
    let north_east = 2 * (dy - dx);

    // x and y stay between the original endpoint values, so they fit i32
    let mut plot = |x: i64, y: i64| {
        if steep {
            sink.set_pixel(y as i32, x as i32, color);
        } else {
            sink.set_pixel(x as i32, y as i32, color);
        }
    };

    let (mut x, mut y) = (x0, y0);
    plot(x, y);
    while x < x1 {
        if d <= 0 {
            d += east;
        } else {
            d += north_east;
            y += step_y;
        }
        x += 1;
        plot(x, y);
    }
}

/// Outline a triangle with its three closing edges.
pub fn draw_triangle<S: PixelSink + ?Sized>(sink: &mut S, corners: [PixelPoint; 3], color: Color) {
    let [a, b, c] = corners;
    draw_line(sink, a, b, color);
    draw_line(sink, b, c, color);
    draw_line(sink, c, a, color);
}
