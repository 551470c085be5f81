//! Per-pixel evaluation of single- and multi-channel signed distances.

use crate::edge::{EdgeColor, EdgeSegment, SignedDistance};
use crate::math::{median, Vec2};
use crate::shape::Shape;

/// Signed distances carried by the three channels at one sample point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MultiDistance {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub median: f64,
}

impl MultiDistance {
    fn splat(v: f64) -> Self {
        Self {
            r: v,
            g: v,
            b: v,
            median: v,
        }
    }
}

/// Nearest-edge accumulator for one channel.
#[derive(Copy, Clone)]
struct EdgePoint<'a> {
    min_distance: SignedDistance,
    near_edge: Option<&'a EdgeSegment>,
    near_param: f64,
}

impl<'a> EdgePoint<'a> {
    fn new() -> Self {
        Self {
            min_distance: SignedDistance::INFINITE,
            near_edge: None,
            near_param: 0.0,
        }
    }

    fn update(&mut self, distance: SignedDistance, edge: &'a EdgeSegment, param: f64) {
        if distance.closer_than(self.min_distance) {
            self.min_distance = distance;
            self.near_edge = Some(edge);
            self.near_param = param;
        }
    }

    fn merge(&mut self, other: EdgePoint<'a>) {
        if other.min_distance.closer_than(self.min_distance) {
            *self = other;
        }
    }

    fn to_pseudo_distance(&mut self, p: Vec2) {
        if let Some(edge) = self.near_edge {
            edge.distance_to_pseudo_distance(&mut self.min_distance, p, self.near_param);
        }
    }
}

/// Scratch reused across every pixel of one rasterization.
///
/// Holds the once-per-shape windings and the per-contour distance buffer
/// the evaluator overwrites each pixel. Concurrent pixel evaluation must
/// use one scratch per thread.
pub(crate) struct FieldScratch {
    windings: Vec<i32>,
    contour_sd: Vec<MultiDistance>,
}

impl FieldScratch {
    pub(crate) fn new(shape: &Shape) -> Self {
        Self {
            windings: shape.contours.iter().map(|c| c.winding()).collect(),
            contour_sd: vec![MultiDistance::splat(0.0); shape.contours.len()],
        }
    }

    /// Multi-channel signed distance of the shape at `p` (shape units).
    pub(crate) fn evaluate_msdf(&mut self, shape: &Shape, p: Vec2) -> MultiDistance {
        let infinite = SignedDistance::INFINITE.distance;
        let mut pos_dist = infinite;
        let mut neg_dist = -infinite;
        let mut best_abs_median = -infinite;
        let mut winding = 0;

        // Shape-wide channel winners, promoted at the end.
        let mut sr = EdgePoint::new();
        let mut sg = EdgePoint::new();
        let mut sb = EdgePoint::new();

        for (i, contour) in shape.contours.iter().enumerate() {
            let mut r = EdgePoint::new();
            let mut g = EdgePoint::new();
            let mut b = EdgePoint::new();

            for edge in &contour.edges {
                let (distance, param) = edge.signed_distance(p);
                if edge.color.contains(EdgeColor::RED) {
                    r.update(distance, edge, param);
                }
                if edge.color.contains(EdgeColor::GREEN) {
                    g.update(distance, edge, param);
                }
                if edge.color.contains(EdgeColor::BLUE) {
                    b.update(distance, edge, param);
                }
            }

            sr.merge(r);
            sg.merge(g);
            sb.merge(b);

            // Winding fallback from the closest contour's raw median.
            let med_abs = median(
                r.min_distance.distance,
                g.min_distance.distance,
                b.min_distance.distance,
            )
            .abs();
            if med_abs < best_abs_median {
                best_abs_median = med_abs;
                winding = -self.windings[i];
            }

            r.to_pseudo_distance(p);
            g.to_pseudo_distance(p);
            b.to_pseudo_distance(p);

            let med = median(
                r.min_distance.distance,
                g.min_distance.distance,
                b.min_distance.distance,
            );
            self.contour_sd[i] = MultiDistance {
                r: r.min_distance.distance,
                g: g.min_distance.distance,
                b: b.min_distance.distance,
                median: med,
            };
            if self.windings[i] > 0 && med >= 0.0 && med.abs() < pos_dist.abs() {
                pos_dist = med;
            }
            if self.windings[i] < 0 && med <= 0.0 && med.abs() < neg_dist.abs() {
                neg_dist = med;
            }
        }

        sr.to_pseudo_distance(p);
        sg.to_pseudo_distance(p);
        sb.to_pseudo_distance(p);

        let mut msd = MultiDistance::splat(infinite);
        if pos_dist >= 0.0 && pos_dist.abs() <= neg_dist.abs() {
            msd.median = infinite;
            winding = 1;
            for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
                if w > 0 && csd.median > msd.median && csd.median.abs() < neg_dist.abs() {
                    msd = *csd;
                }
            }
        } else if neg_dist <= 0.0 && neg_dist.abs() <= pos_dist.abs() {
            msd.median = -infinite;
            winding = -1;
            for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
                if w < 0 && csd.median < msd.median && csd.median.abs() < pos_dist.abs() {
                    msd = *csd;
                }
            }
        }
        // A contour of the opposite winding (a hole) may still be closest.
        for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
            if w != winding && csd.median.abs() < msd.median.abs() {
                msd = *csd;
            }
        }
        // Prefer the shape-wide pseudo-distances when they agree on the median.
        if median(
            sr.min_distance.distance,
            sg.min_distance.distance,
            sb.min_distance.distance,
        ) == msd.median
        {
            msd.r = sr.min_distance.distance;
            msd.g = sg.min_distance.distance;
            msd.b = sb.min_distance.distance;
        }
        msd
    }

    /// True signed distance of the shape at `p` (shape units).
    pub(crate) fn evaluate_sdf(&mut self, shape: &Shape, p: Vec2) -> f64 {
        let infinite = SignedDistance::INFINITE.distance;
        let mut pos_dist = infinite;
        let mut neg_dist = -infinite;
        let mut winding = 0;

        for (i, contour) in shape.contours.iter().enumerate() {
            let mut min_distance = SignedDistance::INFINITE;
            for edge in &contour.edges {
                let (distance, _) = edge.signed_distance(p);
                if distance.closer_than(min_distance) {
                    min_distance = distance;
                }
            }
            let d = min_distance.distance;
            self.contour_sd[i] = MultiDistance::splat(d);
            if self.windings[i] > 0 && d >= 0.0 && d.abs() < pos_dist.abs() {
                pos_dist = d;
            }
            if self.windings[i] < 0 && d <= 0.0 && d.abs() < neg_dist.abs() {
                neg_dist = d;
            }
        }

        let mut sd = infinite;
        if pos_dist >= 0.0 && pos_dist.abs() <= neg_dist.abs() {
            sd = pos_dist;
            winding = 1;
            for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
                if w > 0 && csd.median > sd && csd.median.abs() < neg_dist.abs() {
                    sd = csd.median;
                }
            }
        } else if neg_dist <= 0.0 && neg_dist.abs() <= pos_dist.abs() {
            sd = neg_dist;
            winding = -1;
            for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
                if w < 0 && csd.median < sd && csd.median.abs() < pos_dist.abs() {
                    sd = csd.median;
                }
            }
        }
        for (csd, &w) in self.contour_sd.iter().zip(&self.windings) {
            if w != winding && csd.median.abs() < sd.abs() {
                sd = csd.median;
            }
        }
        sd
    }
}
