//! Rasterization of the traced polyline onto an RGB canvas.
//!
//! Consecutive polyline vertices become black Bresenham line segments on a
//! white canvas. Pixels falling outside the canvas are silently dropped,
//! since the doubled curve coordinates can touch the canvas edge.

use image::{Rgb, RgbImage};

const INK: Rgb<u8> = Rgb([0, 0, 0]);
const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

/// A white canvas of the given dimensions.
pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, PAPER)
}

/// Draw every consecutive vertex pair as a black line segment.
pub fn draw_polyline(canvas: &mut RgbImage, points: &[(i64, i64)]) {
    for pair in points.windows(2) {
        draw_segment(canvas, pair[0], pair[1]);
    }
}

/// Bresenham segment from `p` to `q`, split into the shallow and steep
/// octant walks.
pub fn draw_segment(canvas: &mut RgbImage, p: (i64, i64), q: (i64, i64)) {
    if (q.1 - p.1).abs() < (q.0 - p.0).abs() {
        if p.0 > q.0 {
            plot_line_low(canvas, q, p);
        } else {
            plot_line_low(canvas, p, q);
        }
    } else if p.1 > q.1 {
        plot_line_high(canvas, q, p);
    } else {
        plot_line_high(canvas, p, q);
    }
}

fn plot_line_low(canvas: &mut RgbImage, p: (i64, i64), q: (i64, i64)) {
    let dx = q.0 - p.0;
    let mut dy = q.1 - p.1;
    let yi = dy.signum();
    dy *= yi;
    let mut d = 2 * dy - dx;
    let mut y = p.1;
    for x in p.0..=q.0 {
        set_pixel(canvas, x, y);
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
}

fn plot_line_high(canvas: &mut RgbImage, p: (i64, i64), q: (i64, i64)) {
    let mut dx = q.0 - p.0;
    let dy = q.1 - p.1;
    let xi = dx.signum();
    dx *= xi;
    let mut d = 2 * dx - dy;
    let mut x = p.0;
    for y in p.1..=q.1 {
        set_pixel(canvas, x, y);
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
}

fn set_pixel(canvas: &mut RgbImage, x: i64, y: i64) {
    if x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height()) {
        canvas.put_pixel(x as u32, y as u32, INK);
    }
}

/// Crop the canvas to `width x height` from the origin. If the canvas is
/// smaller than the target along an axis, the missing area stays paper
/// white instead of erroring.
pub fn crop_to(canvas: &RgbImage, width: u32, height: u32) -> RgbImage {
    let mut out = blank_canvas(width, height);
    let w = width.min(canvas.width());
    let h = height.min(canvas.height());
    for y in 0..h {
        for x in 0..w {
            out.put_pixel(x, y, *canvas.get_pixel(x, y));
        }
    }
    out
}
