//! The rendering pipeline: enhancement, curve tracing, rasterization.

use curve_geom::{canvas_side, polyline, top_quad, PixelGrid, Tracer};
use image::RgbImage;

use crate::enhance;
use crate::error::RenderError;
use crate::raster;
use crate::RenderOptions;

/// Render a source image into its space-filling-curve line drawing.
///
/// Stages, in order:
/// 1. brightness/contrast enhancement (unless disabled),
/// 2. recursive trace over the padded `W x W` canvas, `W = 2^k - 1`,
/// 3. single-pass gap filtering with the 2x scale and row/col swap,
/// 4. Bresenham rasterization onto a white `2W x 2W` canvas,
/// 5. crop to the doubled source dimensions.
///
/// The output is always `(2 * width, 2 * height)` for a non-empty source.
pub fn render(img: &RgbImage, options: &RenderOptions) -> Result<RgbImage, RenderError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(RenderError::EmptyImage);
    }
    if !(options.threshold > 0.0 && options.threshold <= 1.0) {
        return Err(RenderError::InvalidThreshold(options.threshold));
    }

    let enhanced;
    let source = if options.enhance {
        enhanced = enhance::enhance(img);
        &enhanced
    } else {
        img
    };

    let rows = source.height() as usize;
    let cols = source.width() as usize;
    let grid = PixelGrid::new(source.as_raw(), rows, cols, 3)?;

    let side = canvas_side(rows, cols);
    let tracer = Tracer::new(options.curve)
        .with_threshold(options.threshold)
        .with_min_half_side(options.min_half_side);
    let traced = tracer.trace(top_quad(side), &grid);
    let points = polyline(&traced);

    let mut canvas = raster::blank_canvas(side * 2, side * 2);
    raster::draw_polyline(&mut canvas, &points);
    Ok(raster::crop_to(&canvas, img.width() * 2, img.height() * 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_geom::CurveKind;
    use image::Rgb;

    fn options() -> RenderOptions {
        RenderOptions {
            curve: CurveKind::Hilbert,
            threshold: 0.6,
            min_half_side: 0,
            enhance: false,
        }
    }

    fn solid(level: u8, w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([level, level, level]))
    }

    #[test]
    fn output_has_doubled_dimensions() {
        let img = solid(0, 5, 3);
        let out = render(&img, &options()).unwrap();
        assert_eq!(out.dimensions(), (10, 6));
    }

    #[test]
    fn white_image_renders_blank() {
        let img = solid(255, 4, 4);
        let out = render(&img, &options()).unwrap();
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn black_image_renders_a_trace() {
        let img = solid(0, 4, 4);
        let out = render(&img, &options()).unwrap();
        assert!(out.pixels().any(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(render(&img, &options()), Err(RenderError::EmptyImage)));
    }

    #[test]
    fn bad_threshold_is_rejected() {
        let img = solid(0, 4, 4);
        let mut opts = options();
        opts.threshold = 0.0;
        assert!(matches!(
            render(&img, &opts),
            Err(RenderError::InvalidThreshold(_))
        ));
    }
}
