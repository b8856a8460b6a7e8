// SPDX-License-Identifier: MIT
//! Recursive curve tracing: subdivision, darkness-gated leaves, and the
//! ordered point sequence they produce.

use crate::point::Point;
use crate::quad::Quad;
use crate::sampler::{BlockSampler, PixelGrid};

/// How many recursion levels fan out over the rayon pool before falling
/// back to plain sequential recursion. Leaf work is tiny, so anything much
/// deeper just pays scheduling overhead.
pub const DEFAULT_PARALLEL_DEPTH: u32 = 2;

/// Subdivision rule selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveKind {
    /// Hilbert corner-permutation rule; adjacent children share endpoints,
    /// so the gap-filtered output is one connected polyline.
    Hilbert,
    /// Z-order (Morton) rule; children keep the parent's orientation and
    /// the trace jumps diagonally between quadrant pairs.
    ZOrder,
}

/// One entry of the traced sequence: a drawn corner point, or a gap where a
/// terminal region was judged too light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathElement {
    Drawn(Point),
    Gap,
}

/// Recursive tracer over a [`PixelGrid`]. Pure: two calls with the same
/// grid and quad produce identical sequences.
#[derive(Clone, Copy, Debug)]
pub struct Tracer {
    sampler: BlockSampler,
    min_half_side: u32,
    parallel_depth: u32,
    curve: CurveKind,
}

impl Tracer {
    pub fn new(curve: CurveKind) -> Self {
        Self {
            sampler: BlockSampler::default(),
            min_half_side: 0,
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
            curve,
        }
    }

    /// Override the darkness threshold (default 0.6).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.sampler = BlockSampler::new(threshold);
        self
    }

    /// Stop subdividing once the remaining-halving counter drops to this
    /// value. The default of 0 reproduces the classic construction, where
    /// the smallest regions may still cover a few pixels on small canvases.
    pub fn with_min_half_side(mut self, min_half_side: u32) -> Self {
        self.min_half_side = min_half_side;
        self
    }

    /// Levels of `rayon::join` fan-out (0 forces fully sequential).
    pub fn with_parallel_depth(mut self, depth: u32) -> Self {
        self.parallel_depth = depth;
        self
    }

    /// Trace the whole padded canvas for `grid`: the top-level quad is
    /// `(0,0),(W,0),(W,W),(0,W)` with `W` from [`canvas_side`].
    pub fn trace_grid(&self, grid: &PixelGrid<'_>) -> Vec<PathElement> {
        self.trace(top_quad(canvas_side(grid.rows(), grid.cols())), grid)
    }

    /// Trace one square region, returning the unfiltered sequence with gap
    /// markers in place. Child results are concatenated in the fixed
    /// subdivision order regardless of content or scheduling.
    pub fn trace(&self, quad: Quad, grid: &PixelGrid<'_>) -> Vec<PathElement> {
        let n = quad.half_steps();
        if n <= self.min_half_side {
            let [p1, p2, p3, p4] = quad.corners();
            return if self.sampler.is_dark(p1, p3, grid) {
                vec![
                    PathElement::Drawn(p1),
                    PathElement::Drawn(p2),
                    PathElement::Drawn(p3),
                    PathElement::Drawn(p4),
                ]
            } else {
                vec![PathElement::Gap]
            };
        }

        let children = match self.curve {
            CurveKind::Hilbert => quad.subdivide(n),
            CurveKind::ZOrder => quad.subdivide_z(n),
        };
        let [a, b, c, d] = children;

        let (mut out, rb, rc, rd) = if self.parallel_depth > 0 {
            let next = Self { parallel_depth: self.parallel_depth - 1, ..*self };
            let ((ra, rb), (rc, rd)) = rayon::join(
                || rayon::join(|| next.trace(a, grid), || next.trace(b, grid)),
                || rayon::join(|| next.trace(c, grid), || next.trace(d, grid)),
            );
            (ra, rb, rc, rd)
        } else {
            (
                self.trace(a, grid),
                self.trace(b, grid),
                self.trace(c, grid),
                self.trace(d, grid),
            )
        };
        out.extend(rb);
        out.extend(rc);
        out.extend(rd);
        out
    }
}

/// Side length `W = 2^k - 1` of the padded square canvas, where `2^k` is
/// the smallest power of two at least `max(rows, cols)`.
pub fn canvas_side(rows: usize, cols: usize) -> u32 {
    let longest = rows.max(cols);
    let mut k = 1usize;
    while k < longest {
        k *= 2;
    }
    (k - 1) as u32
}

/// Top-level quad `(0,0),(W,0),(W,W),(0,W)` for a canvas of side `side`.
pub fn top_quad(side: u32) -> Quad {
    let w = f64::from(side);
    Quad::new(
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, w),
        Point::new(0.0, w),
    )
}

/// Collapse a traced sequence into renderable pixel vertices in one pass:
/// gaps are dropped, coordinates are truncated, doubled, and swapped from
/// (row, col) to (x, y) pixel order.
pub fn polyline(elements: &[PathElement]) -> Vec<(i64, i64)> {
    elements
        .iter()
        .filter_map(|e| match e {
            PathElement::Drawn(p) => Some((p.y as i64 * 2, p.x as i64 * 2)),
            PathElement::Gap => None,
        })
        .collect()
}
