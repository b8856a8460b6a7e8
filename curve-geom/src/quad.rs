// SPDX-License-Identifier: MIT
//! Square regions of the recursive subdivision and their child rules.

use crate::point::Point;

/// One region of the recursion: four corner points in a fixed winding order
/// `(p1, p2, p3, p4)`. For the canvases the tracer builds, consecutive edges
/// are equal-length and perpendicular; child quads are derived by fixed
/// linear combinations of the parent's corners, so the invariant holds by
/// construction and is never checked at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    pub const fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self([p1, p2, p3, p4])
    }

    pub fn corners(&self) -> [Point; 4] {
        self.0
    }

    /// Remaining-halving counter: half the region's side length in grid
    /// units, rounded down (`floor(sqrt(edge . edge)) / 2` in integer
    /// arithmetic). Zero means the region is terminal.
    pub fn half_steps(&self) -> u32 {
        let edge = self.0[1] - self.0[0];
        (edge.dot(edge).sqrt() as u64 / 2) as u32
    }

    /// The four Hilbert children `a, b, c, d`, each a rotated/reflected
    /// half-side copy of the parent occupying one quadrant. Concatenating
    /// traversals in this order keeps each child's exit point adjacent to
    /// the next child's entry point.
    ///
    /// ```text
    /// 1       4
    /// |1-2 3-4|
    /// | a| |d |
    /// |4-3 2-1|
    /// ||     ||
    /// |1 4-1 4|
    /// ||b| |c||
    /// |2-3 2-3|
    /// 2-------3
    /// ```
    pub fn subdivide(&self, n: u32) -> [Quad; 4] {
        let [p1, p2, p3, p4] = self.0;
        let nf = n as f64;
        let step = 2.0 * nf + 1.0;
        let p12 = (p2 - p1) / step;
        let p23 = (p3 - p2) / step;
        let a = Quad::new(p1, p1 + p23 * nf, p1 + p23 * nf + p12 * nf, p1 + p12 * nf);
        let b = Quad::new(p2 - p12 * nf, p2, p2 + p23 * nf, p2 + p23 * nf - p12 * nf);
        let c = Quad::new(p3 - p23 * nf - p12 * nf, p3 - p23 * nf, p3, p3 - p12 * nf);
        let d = Quad::new(p4 + p12 * nf, p4 + p12 * nf - p23 * nf, p4 - p23 * nf, p4);
        [a, b, c, d]
    }

    /// The four z-order children. All keep the parent's orientation; the
    /// visit order is corner `p1`, then the neighbor along the `p1->p2`
    /// edge, then the neighbor along `p2->p3`, then the diagonal.
    pub fn subdivide_z(&self, n: u32) -> [Quad; 4] {
        let [p1, p2, p3, p4] = self.0;
        let nf = n as f64;
        let step = 2.0 * nf + 1.0;
        let p12 = (p2 - p1) / step;
        let p23 = (p3 - p2) / step;
        let q0 = Quad::new(p1, p1 + p12 * nf, p1 + p12 * nf + p23 * nf, p1 + p23 * nf);
        let q1 = Quad::new(p2 - p12 * nf, p2, p2 + p23 * nf, p2 - p12 * nf + p23 * nf);
        let q2 = Quad::new(p4 - p23 * nf, p4 + p12 * nf - p23 * nf, p4 + p12 * nf, p4);
        let q3 = Quad::new(p3 - p12 * nf - p23 * nf, p3 - p23 * nf, p3, p3 - p12 * nf);
        [q0, q1, q2, q3]
    }
}
