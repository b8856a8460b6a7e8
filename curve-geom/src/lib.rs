// SPDX-License-Identifier: MIT
//! Adaptive space-filling-curve tracing over raw pixel grids.
//!
//! The crate recursively subdivides a square region into nested quads
//! following either the Hilbert or the z-order corner rule, samples the
//! average brightness under each terminal quad, and produces an ordered
//! point sequence (with gaps) tracing the dark regions only.
//!
//! No image-format or I/O dependencies: callers hand in a [`PixelGrid`]
//! view over a packed RGB(A) byte buffer.

pub mod point;
pub mod quad;
pub mod sampler;
pub mod tracer;

pub use point::Point;
pub use quad::Quad;
pub use sampler::{BlockSampler, GridError, PixelGrid, DARKNESS_THRESHOLD};
pub use tracer::{canvas_side, polyline, top_quad, CurveKind, PathElement, Tracer};
