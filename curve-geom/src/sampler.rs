// SPDX-License-Identifier: MIT
//! Block brightness aggregation with replicate-edge clamping.

use crate::point::Point;

/// Default darkness threshold: a block is drawn when its summed normalized
/// luminance stays under `threshold * area`.
pub const DARKNESS_THRESHOLD: f64 = 0.6;

#[derive(Debug)]
pub enum GridError {
    /// The byte buffer is shorter than `rows * cols * channels`.
    BufferTooSmall,
    /// Fewer than 3 channels per pixel.
    TooFewChannels,
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::BufferTooSmall => write!(f, "Pixel buffer too small for grid dimensions"),
            GridError::TooFewChannels => write!(f, "Pixel grid needs at least 3 channels"),
        }
    }
}

impl std::error::Error for GridError {}

/// Borrowed, read-only view over a packed row-major pixel buffer.
///
/// `channels` is 3 for RGB or 4 for RGBA; only the first three channels
/// contribute to brightness (alpha is ignored). The view is `Sync`, so the
/// tracer can fan recursive branches out across threads without copies.
#[derive(Clone, Copy, Debug)]
pub struct PixelGrid<'a> {
    data: &'a [u8],
    rows: usize,
    cols: usize,
    channels: usize,
}

impl<'a> PixelGrid<'a> {
    pub fn new(data: &'a [u8], rows: usize, cols: usize, channels: usize) -> Result<Self, GridError> {
        if channels < 3 {
            return Err(GridError::TooFewChannels);
        }
        if data.len() < rows * cols * channels {
            return Err(GridError::BufferTooSmall);
        }
        Ok(Self { data, rows, cols, channels })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Normalized luminance proxy in `[0, 1]` at `(row, col)`, both indices
    /// clamped to the last valid row/column (edge pixels replicate past the
    /// boundary).
    fn brightness(&self, row: usize, col: usize) -> f64 {
        let r = row.min(self.rows - 1);
        let c = col.min(self.cols - 1);
        let base = (r * self.cols + c) * self.channels;
        let px = &self.data[base..base + 3];
        f64::from(u32::from(px[0]) + u32::from(px[1]) + u32::from(px[2])) / (255.0 * 3.0)
    }
}

/// Decides whether a rectangular pixel block is dark enough to draw.
#[derive(Clone, Copy, Debug)]
pub struct BlockSampler {
    pub threshold: f64,
}

impl Default for BlockSampler {
    fn default() -> Self {
        Self { threshold: DARKNESS_THRESHOLD }
    }
}

impl BlockSampler {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Darkness verdict for the axis-aligned block spanned by the opposite
    /// corners `a` and `c`.
    ///
    /// Bounds are floored, half-open on the high side; a zero-area block is
    /// never dark (strict `<` against `threshold * area = 0`).
    pub fn is_dark(&self, a: Point, c: Point, grid: &PixelGrid<'_>) -> bool {
        let left = a.x.min(c.x).floor() as i64;
        let right = a.x.max(c.x).floor() as i64;
        let top = a.y.min(c.y).floor() as i64;
        let bottom = a.y.max(c.y).floor() as i64;
        let mut sum = 0.0;
        for i in left..right {
            for j in top..bottom {
                sum += grid.brightness(i.max(0) as usize, j.max(0) as usize);
            }
        }
        sum < self.threshold * ((bottom - top) * (right - left)) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(level: u8, rows: usize, cols: usize) -> Vec<u8> {
        vec![level; rows * cols * 3]
    }

    #[test]
    fn black_block_is_dark() {
        let data = solid(0, 4, 4);
        let grid = PixelGrid::new(&data, 4, 4, 3).unwrap();
        let sampler = BlockSampler::default();
        assert!(sampler.is_dark(Point::new(0.0, 0.0), Point::new(4.0, 4.0), &grid));
    }

    #[test]
    fn white_block_is_not_dark() {
        let data = solid(255, 4, 4);
        let grid = PixelGrid::new(&data, 4, 4, 3).unwrap();
        let sampler = BlockSampler::default();
        assert!(!sampler.is_dark(Point::new(0.0, 0.0), Point::new(4.0, 4.0), &grid));
    }

    #[test]
    fn zero_area_block_is_not_dark() {
        let data = solid(0, 4, 4);
        let grid = PixelGrid::new(&data, 4, 4, 3).unwrap();
        let sampler = BlockSampler::default();
        assert!(!sampler.is_dark(Point::new(1.0, 1.0), Point::new(1.0, 3.0), &grid));
    }

    #[test]
    fn corner_order_does_not_matter() {
        let data = solid(0, 4, 4);
        let grid = PixelGrid::new(&data, 4, 4, 3).unwrap();
        let sampler = BlockSampler::default();
        assert!(sampler.is_dark(Point::new(4.0, 4.0), Point::new(0.0, 0.0), &grid));
    }

    #[test]
    fn clamps_past_image_boundary() {
        // 2x2 black image sampled with a nominal 3x3 block: the out-of-range
        // row/column replicate the last valid pixels instead of faulting.
        let data = solid(0, 2, 2);
        let grid = PixelGrid::new(&data, 2, 2, 3).unwrap();
        let sampler = BlockSampler::default();
        assert!(sampler.is_dark(Point::new(0.0, 0.0), Point::new(3.0, 3.0), &grid));

        let white = solid(255, 2, 2);
        let grid = PixelGrid::new(&white, 2, 2, 3).unwrap();
        assert!(!sampler.is_dark(Point::new(0.0, 0.0), Point::new(3.0, 3.0), &grid));
    }

    #[test]
    fn threshold_is_monotonic() {
        // Mid-gray block: light at low thresholds, dark at high ones, with a
        // single crossover in between.
        let data = solid(128, 4, 4);
        let grid = PixelGrid::new(&data, 4, 4, 3).unwrap();
        let a = Point::new(0.0, 0.0);
        let c = Point::new(4.0, 4.0);
        let mut was_dark = false;
        for step in 0..=10 {
            let threshold = step as f64 / 10.0;
            let dark = BlockSampler::new(threshold).is_dark(a, c, &grid);
            if was_dark {
                assert!(dark, "raising threshold must never flip dark back to light");
            }
            was_dark = dark;
        }
        assert!(was_dark);
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let mut data = vec![0u8; 2 * 2 * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        let grid = PixelGrid::new(&data, 2, 2, 4).unwrap();
        let sampler = BlockSampler::default();
        assert!(sampler.is_dark(Point::new(0.0, 0.0), Point::new(2.0, 2.0), &grid));
    }

    #[test]
    fn rejects_short_buffer() {
        let data = solid(0, 2, 2);
        assert!(matches!(
            PixelGrid::new(&data, 3, 3, 3),
            Err(GridError::BufferTooSmall)
        ));
        assert!(matches!(
            PixelGrid::new(&data, 2, 2, 1),
            Err(GridError::TooFewChannels)
        ));
    }
}
