//! Multi-channel signed distance field rasterization for planar vector
//! shapes.
//!
//! A [`Shape`] is a set of closed contours built from linear, quadratic and
//! cubic Bézier edges. [`color_edges_simple`] partitions the contours into
//! channel-labelled runs meeting at corners, [`generate_msdf`] rasterizes
//! the shape into a three-channel field whose per-pixel median recovers the
//! true signed distance, and [`correct_errors`] collapses interpolation
//! clashes in the result. [`generate_sdf`] produces the plain
//! single-channel field through the same evaluator.

mod coloring;
mod edge;
mod error;
mod field;
mod math;
mod pixmap;
mod shape;

pub use coloring::color_edges_simple;
pub use edge::{EdgeColor, EdgeSegment, SegmentKind, SignedDistance};
pub use error::Error;
pub use field::{
    correct_errors, generate_msdf, generate_sdf, MsdfParams, MultiDistance, PixelRect,
};
pub use math::{median, non_zero_sign, Vec2};
pub use pixmap::{DistancePixel, MultiDistancePixel, Pixmap, Rgb, Rgba};
pub use shape::{Contour, Shape};
