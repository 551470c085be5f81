//! Rasterization drivers: map pixel space to shape space and fill a region.

use log::debug;

use crate::math::Vec2;
use crate::pixmap::{DistancePixel, MultiDistancePixel, Pixmap};
use crate::shape::Shape;

use super::evaluate::FieldScratch;

/// Pixel-space rectangle, clipped against the target pixmap before use.
///
/// `left..right` and `bottom..top` are half-open; out-of-range bounds are
/// legal and clip silently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub top: i32,
}

impl PixelRect {
    pub const fn new(left: i32, bottom: i32, right: i32, top: i32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Rectangle covering a full `width` by `height` pixmap.
    pub const fn of_size(width: usize, height: usize) -> Self {
        Self {
            left: 0,
            bottom: 0,
            right: width as i32,
            top: height as i32,
        }
    }

    pub(crate) fn clipped(self, width: usize, height: usize) -> Self {
        let w = width as i32;
        let h = height as i32;
        Self {
            left: self.left.max(0).min(w),
            bottom: self.bottom.max(0).min(h),
            right: self.right.max(0).min(w),
            top: self.top.max(0).min(h),
        }
    }
}

/// Coordinate mapping and distance window shared by the drivers.
///
/// A shape-space point maps to pixel space as `scale * (shape + translate)`;
/// a distance `d` encodes as `d / range + 0.5`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MsdfParams {
    /// Signed-distance window in shape units.
    pub range: f64,
    /// Shape-to-pixel scale, per axis.
    pub scale: Vec2,
    /// Shape-space translation applied before scaling.
    pub translate: Vec2,
}

impl Default for MsdfParams {
    fn default() -> Self {
        Self {
            range: 1.0,
            scale: Vec2::new(1.0, 1.0),
            translate: Vec2::ZERO,
        }
    }
}

impl MsdfParams {
    // Shape-space position of the center of pixel (x, y).
    fn shape_pos(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(
            (f64::from(x) + 0.5) / self.scale.x - self.translate.x,
            (f64::from(y) + 0.5) / self.scale.y - self.translate.y,
        )
    }

    fn encode(&self, distance: f64) -> f32 {
        (distance / self.range + 0.5) as f32
    }
}

/// Writes a single-channel signed distance field over `region`.
pub fn generate_sdf<T: DistancePixel>(
    output: &mut Pixmap<T>,
    shape: &Shape,
    region: PixelRect,
    params: &MsdfParams,
) {
    let region = region.clipped(output.width(), output.height());
    debug!(
        "sdf pass over {:?} with {} contours",
        region,
        shape.contours.len()
    );
    let mut scratch = FieldScratch::new(shape);
    for y in region.bottom..region.top {
        let row = mirror_row(shape, region, y);
        for x in region.left..region.right {
            let sd = scratch.evaluate_sdf(shape, params.shape_pos(x, y));
            output.put(x as usize, row as usize, T::encode(params.encode(sd)));
        }
    }
}

/// Writes a multi-channel signed distance field over `region`.
///
/// The shape must have been colored (see
/// [`color_edges_simple`](crate::color_edges_simple)) beforehand; uncolored
/// (black) edges contribute to no channel.
pub fn generate_msdf<T: MultiDistancePixel>(
    output: &mut Pixmap<T>,
    shape: &Shape,
    region: PixelRect,
    params: &MsdfParams,
) {
    let region = region.clipped(output.width(), output.height());
    debug!(
        "msdf pass over {:?} with {} contours",
        region,
        shape.contours.len()
    );
    let mut scratch = FieldScratch::new(shape);
    for y in region.bottom..region.top {
        let row = mirror_row(shape, region, y);
        for x in region.left..region.right {
            let msd = scratch.evaluate_msdf(shape, params.shape_pos(x, y));
            let value = T::encode(
                params.encode(msd.r),
                params.encode(msd.g),
                params.encode(msd.b),
            );
            output.put(x as usize, row as usize, value);
        }
    }
}

fn mirror_row(shape: &Shape, region: PixelRect, y: i32) -> i32 {
    if shape.inverse_y_axis {
        region.bottom + region.top - 1 - y
    } else {
        y
    }
}
