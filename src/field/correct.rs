//! MSDF error correction: collapse interpolation clashes to the median.

use log::debug;

use crate::math::{median, Vec2};
use crate::pixmap::{MultiDistancePixel, Pixmap};

use super::generate::PixelRect;

/// Detects pixel pairs whose interpolated decode would misclassify the
/// interior and collapses the offending pixels to a single-channel value.
///
/// Detection and collapse run as separate passes so corrections cannot
/// cascade. `threshold` gives the minimum channel delta treated as a
/// discontinuity, per axis, in encoded units. Idempotent: collapsed pixels
/// are uniform and can never clash again.
pub fn correct_errors<T: MultiDistancePixel>(
    output: &mut Pixmap<T>,
    region: PixelRect,
    threshold: Vec2,
) {
    let region = region.clipped(output.width(), output.height());
    let tx = threshold.x as f32;
    let ty = threshold.y as f32;

    let mut clashes = Vec::new();
    for y in region.bottom..region.top {
        for x in region.left..region.right {
            let here = output.at(x as usize, y as usize).channels();
            let horizontal = (x > region.left
                && pixel_clash(here, output.at(x as usize - 1, y as usize).channels(), tx))
                || (x + 1 < region.right
                    && pixel_clash(here, output.at(x as usize + 1, y as usize).channels(), tx));
            let vertical = (y > region.bottom
                && pixel_clash(here, output.at(x as usize, y as usize - 1).channels(), ty))
                || (y + 1 < region.top
                    && pixel_clash(here, output.at(x as usize, y as usize + 1).channels(), ty));
            if horizontal || vertical {
                clashes.push((x as usize, y as usize));
            }
        }
    }
    debug!("collapsing {} clash pixels", clashes.len());

    for (x, y) in clashes {
        let mut pixel = output.at(x, y);
        let [r, g, b] = pixel.channels();
        let m = median(r, g, b);
        pixel.set_channels([m, m, m]);
        output.put(x, y, pixel);
    }
}

// A clash needs two channels crossing 0.5 in opposite directions between
// the two pixels while the third stays put; bilinear interpolation between
// such pixels produces a spurious interior/exterior flip.
fn pixel_clash(a: [f32; 3], b: [f32; 3], threshold: f32) -> bool {
    let a_in = (a[0] > 0.5) as u32 + (a[1] > 0.5) as u32 + (a[2] > 0.5) as u32 >= 2;
    let b_in = (b[0] > 0.5) as u32 + (b[1] > 0.5) as u32 + (b[2] > 0.5) as u32 >= 2;
    if a_in != b_in {
        return false;
    }
    // Uniformly inside or outside pixels cannot participate.
    if (a[0] > 0.5 && a[1] > 0.5 && a[2] > 0.5)
        || (a[0] < 0.5 && a[1] < 0.5 && a[2] < 0.5)
        || (b[0] > 0.5 && b[1] > 0.5 && b[2] > 0.5)
        || (b[0] < 0.5 && b[1] < 0.5 && b[2] < 0.5)
    {
        return false;
    }
    // Find the two channels that cross between the pixels; the remaining
    // channel is shared.
    let crosses = |ca: f32, cb: f32| (ca > 0.5) != (cb > 0.5) && (ca < 0.5) != (cb < 0.5);
    let (aa, ba, ab, bb, ac, bc) = if crosses(a[0], b[0]) {
        if crosses(a[1], b[1]) {
            (a[0], b[0], a[1], b[1], a[2], b[2])
        } else if crosses(a[2], b[2]) {
            (a[0], b[0], a[2], b[2], a[1], b[1])
        } else {
            return false;
        }
    } else if crosses(a[1], b[1]) && crosses(a[2], b[2]) {
        (a[1], b[1], a[2], b[2], a[0], b[0])
    } else {
        return false;
    };
    // Both crossing channels must jump hard, and of the pair only the pixel
    // whose shared channel sits farther from the edge is flagged.
    (aa - ba).abs() >= threshold
        && (ab - bb).abs() >= threshold
        && (ac - 0.5).abs() >= (bc - 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clash_requires_two_opposite_crossings() {
        let a = [0.9, 0.1, 0.9];
        let b = [0.1, 0.9, 0.9];
        assert!(pixel_clash(a, b, 0.2));
        assert!(pixel_clash(b, a, 0.2));

        // A single crossing flips the interior label: a continuous edge.
        assert!(!pixel_clash([0.9, 0.6, 0.4], [0.9, 0.4, 0.4], 0.1));
        // Uniformly inside pixels never clash.
        assert!(!pixel_clash([0.9, 0.8, 0.7], [0.6, 0.7, 0.8], 0.1));
        // Interior label must match on both sides.
        assert!(!pixel_clash([0.9, 0.9, 0.1], [0.1, 0.1, 0.9], 0.1));
    }

    #[test]
    fn clash_respects_threshold() {
        let a = [0.55, 0.45, 0.9];
        let b = [0.45, 0.55, 0.9];
        assert!(pixel_clash(a, b, 0.05));
        assert!(!pixel_clash(a, b, 0.2));
    }
}
