//! # curveink
//!
//! Renders a raster image as an adaptive space-filling-curve line drawing:
//! the image plane is recursively subdivided into nested square regions
//! following a Hilbert (or z-order) pattern, each terminal region's average
//! brightness decides draw-or-skip, and the surviving corner points compose
//! into one connected polyline whose density follows the luminance of the
//! source.
//!
//! ## Architecture
//!
//! - `curve_geom` (workspace subcrate): the pure geometry + sampling core,
//!   operating on a borrowed pixel grid with no I/O.
//! - [`enhance`]: the fixed brightness/contrast pre-stage.
//! - [`render`]: the pipeline tying enhancement, tracing, and
//!   rasterization together.
//! - [`raster`]: Bresenham polyline drawing and the final crop.
//! - [`config`] / [`error`]: the boundary types the CLI works with.
//!
//! ## Example
//!
//! ```rust,no_run
//! use curveink::{render_image, RenderOptions};
//! use curve_geom::CurveKind;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("portrait.png")?.to_rgb8();
//! let options = RenderOptions {
//!     curve: CurveKind::Hilbert,
//!     threshold: 0.6,
//!     min_half_side: 0,
//!     enhance: true,
//! };
//! let drawing = render_image(&img, &options)?;
//! drawing.save("portrait.curve.png")?;
//! # Ok(())
//! # }
//! ```

use image::RgbImage;

pub mod config;
pub mod enhance;
pub mod error;
pub mod raster;
pub mod render;

pub use config::RenderConfig;
pub use error::RenderError;

/// Re-export the core types callers need to drive a render.
pub use curve_geom::{CurveKind, PathElement, Point, Quad, Tracer};

/// Options consumed by [`render_image`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Subdivision rule: Hilbert for one connected curve, z-order for the
    /// jumpier Morton layout.
    pub curve: CurveKind,
    /// Darkness threshold in `(0, 1]`. A terminal region is drawn when its
    /// summed normalized luminance stays under `threshold * area`.
    pub threshold: f64,
    /// Stop subdividing once a region's remaining-halving counter reaches
    /// this value; 0 is the classic single-pixel-ish termination.
    pub min_half_side: u32,
    /// Apply the brightness x1.3 / contrast x10 pre-stage before sampling.
    pub enhance: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            curve: CurveKind::Hilbert,
            threshold: curve_geom::DARKNESS_THRESHOLD,
            min_half_side: 0,
            enhance: true,
        }
    }
}

/// Render `img` into its curve drawing, sized `(2 * width, 2 * height)`.
///
/// # Errors
///
/// Rejects zero-dimension images and thresholds outside `(0, 1]`; the trace
/// itself cannot fail.
pub fn render_image(img: &RgbImage, options: &RenderOptions) -> Result<RgbImage, RenderError> {
    render::render(img, options)
}
