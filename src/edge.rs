//! Edge segments: the linear/quadratic/cubic primitives contours are made of.

use bitflags::bitflags;

use crate::math::{non_zero_sign, solve_cubic, solve_quadratic, Vec2};

// Subdivision starts and Newton refinement steps for the cubic search.
const CUBIC_SEARCH_STARTS: usize = 4;
const CUBIC_SEARCH_STEPS: usize = 4;

bitflags! {
    /// Channel mask carried by every edge.
    ///
    /// Each set bit marks a field channel this edge contributes distance to.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct EdgeColor: u8 {
        const BLACK = 0;
        const RED = 1;
        const GREEN = 2;
        const BLUE = 4;
        const YELLOW = 3;
        const MAGENTA = 5;
        const CYAN = 6;
        const WHITE = 7;
    }
}

/// Signed distance to an edge, with a tangent tie-breaker.
///
/// `dot` is the cosine of the angle between the edge tangent at the closest
/// approach and the vector to the queried point; it disambiguates points
/// equidistant from two edges meeting at a corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignedDistance {
    pub distance: f64,
    pub dot: f64,
}

impl SignedDistance {
    /// Sentinel farther than any reachable distance.
    pub const INFINITE: Self = Self {
        distance: -1.0e240,
        dot: 1.0,
    };

    pub const fn new(distance: f64, dot: f64) -> Self {
        Self { distance, dot }
    }

    /// Magnitude ordering with `dot` as the tie-breaker.
    ///
    /// This is the only comparison the evaluator may use; the pair has no
    /// meaningful natural order.
    pub fn closer_than(self, other: Self) -> bool {
        self.distance.abs() < other.distance.abs()
            || (self.distance.abs() == other.distance.abs() && self.dot < other.dot)
    }
}

/// Control polygon of one edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegmentKind {
    Linear(Vec2, Vec2),
    Quadratic(Vec2, Vec2, Vec2),
    Cubic(Vec2, Vec2, Vec2, Vec2),
}

/// One directed edge of a contour.
///
/// The channel mask is shared by all variants; the geometry dispatches on
/// [`SegmentKind`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeSegment {
    pub color: EdgeColor,
    pub kind: SegmentKind,
}

impl EdgeSegment {
    /// Straight edge from `p0` to `p1`.
    pub fn line(p0: Vec2, p1: Vec2) -> Self {
        Self {
            color: EdgeColor::WHITE,
            kind: SegmentKind::Linear(p0, p1),
        }
    }

    /// Quadratic Bézier edge with control point `p1`.
    pub fn quadratic(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self {
            color: EdgeColor::WHITE,
            kind: SegmentKind::Quadratic(p0, p1, p2),
        }
    }

    /// Cubic Bézier edge with control points `p1` and `p2`.
    pub fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            color: EdgeColor::WHITE,
            kind: SegmentKind::Cubic(p0, p1, p2, p3),
        }
    }

    fn with_kind(&self, kind: SegmentKind) -> Self {
        Self {
            color: self.color,
            kind,
        }
    }

    /// First endpoint.
    pub fn start(&self) -> Vec2 {
        match self.kind {
            SegmentKind::Linear(p0, _) => p0,
            SegmentKind::Quadratic(p0, _, _) => p0,
            SegmentKind::Cubic(p0, _, _, _) => p0,
        }
    }

    /// Last endpoint.
    pub fn end(&self) -> Vec2 {
        match self.kind {
            SegmentKind::Linear(_, p1) => p1,
            SegmentKind::Quadratic(_, _, p2) => p2,
            SegmentKind::Cubic(_, _, _, p3) => p3,
        }
    }

    /// Point on the edge at parameter `t` in [0, 1].
    pub fn point(&self, t: f64) -> Vec2 {
        match self.kind {
            SegmentKind::Linear(p0, p1) => p0.lerp(p1, t),
            SegmentKind::Quadratic(p0, p1, p2) => p0.lerp(p1, t).lerp(p1.lerp(p2, t), t),
            SegmentKind::Cubic(p0, p1, p2, p3) => {
                let p12 = p1.lerp(p2, t);
                p0.lerp(p1, t)
                    .lerp(p12, t)
                    .lerp(p12.lerp(p2.lerp(p3, t), t), t)
            }
        }
    }

    /// Derivative at parameter `t` (not normalized).
    ///
    /// A cubic whose tangent vanishes at an endpoint falls back to the
    /// chord past the degenerate control leg.
    pub fn direction(&self, t: f64) -> Vec2 {
        match self.kind {
            SegmentKind::Linear(p0, p1) => p1 - p0,
            SegmentKind::Quadratic(p0, p1, p2) => (p1 - p0).lerp(p2 - p1, t),
            SegmentKind::Cubic(p0, p1, p2, p3) => {
                let tangent = (p1 - p0).lerp(p2 - p1, t).lerp((p2 - p1).lerp(p3 - p2, t), t);
                if tangent == Vec2::ZERO {
                    if t == 0.0 {
                        return p2 - p0;
                    }
                    if t == 1.0 {
                        return p3 - p1;
                    }
                }
                tangent
            }
        }
    }

    /// Signed distance from `origin` to this edge.
    ///
    /// Also returns the parameter of the closest approach; values outside
    /// [0, 1] indicate the closest point lies beyond an endpoint.
    pub fn signed_distance(&self, origin: Vec2) -> (SignedDistance, f64) {
        match self.kind {
            SegmentKind::Linear(p0, p1) => {
                let aq = origin - p0;
                let ab = p1 - p0;
                let t = aq.dot(ab) / ab.dot(ab);
                let eq = (if t > 0.5 { p1 } else { p0 }) - origin;
                let endpoint_distance = eq.length();
                if t > 0.0 && t < 1.0 {
                    let ortho_distance = ab.orthonormal(false, false).dot(aq);
                    if ortho_distance.abs() < endpoint_distance {
                        return (SignedDistance::new(ortho_distance, 0.0), t);
                    }
                }
                (
                    SignedDistance::new(
                        non_zero_sign(aq.cross(ab)) * endpoint_distance,
                        ab.normalize().dot(eq.normalize()).abs(),
                    ),
                    t,
                )
            }
            SegmentKind::Quadratic(p0, p1, p2) => {
                let qa = p0 - origin;
                let ab = p1 - p0;
                let br = p0 + p2 - p1 - p1;
                let a = br.dot(br);
                let b = 3.0 * ab.dot(br);
                let c = 2.0 * ab.dot(ab) + qa.dot(br);
                let d = qa.dot(ab);
                let mut roots = [0.0; 3];
                let solutions = solve_cubic(&mut roots, a, b, c, d);

                // Distance from the start point.
                let mut min_distance = non_zero_sign(ab.cross(qa)) * qa.length();
                let mut param = -qa.dot(ab) / ab.dot(ab);
                {
                    // Distance from the end point.
                    let bq = p2 - origin;
                    let distance = non_zero_sign((p2 - p1).cross(bq)) * bq.length();
                    if distance.abs() < min_distance.abs() {
                        min_distance = distance;
                        param = (origin - p1).dot(p2 - p1) / (p2 - p1).dot(p2 - p1);
                    }
                }
                for &t in roots.iter().take(solutions.max(0) as usize) {
                    if t > 0.0 && t < 1.0 {
                        let qe = p0 + ab * (2.0 * t) + br * (t * t) - origin;
                        let distance = non_zero_sign((p2 - p0).cross(qe)) * qe.length();
                        if distance.abs() <= min_distance.abs() {
                            min_distance = distance;
                            param = t;
                        }
                    }
                }

                if (0.0..=1.0).contains(&param) {
                    (SignedDistance::new(min_distance, 0.0), param)
                } else if param < 0.5 {
                    (
                        SignedDistance::new(
                            min_distance,
                            ab.normalize().dot(qa.normalize()).abs(),
                        ),
                        param,
                    )
                } else {
                    (
                        SignedDistance::new(
                            min_distance,
                            (p2 - p1).normalize().dot((p2 - origin).normalize()).abs(),
                        ),
                        param,
                    )
                }
            }
            SegmentKind::Cubic(p0, p1, p2, p3) => {
                let qa = p0 - origin;
                let ab = p1 - p0;
                let br = p2 - p1 - ab;
                let ax = (p3 - p2) - (p2 - p1) - br;

                // Distance from the start point.
                let mut ep_dir = self.direction(0.0);
                let mut min_distance = non_zero_sign(ep_dir.cross(qa)) * qa.length();
                let mut param = -qa.dot(ep_dir) / ep_dir.dot(ep_dir);
                {
                    // Distance from the end point.
                    ep_dir = self.direction(1.0);
                    let bq = p3 - origin;
                    let distance = bq.length();
                    if distance < min_distance.abs() {
                        min_distance = non_zero_sign(ep_dir.cross(bq)) * distance;
                        param = (origin + ep_dir - p3).dot(ep_dir) / ep_dir.dot(ep_dir);
                    }
                }
                // Newton refinement from evenly spaced starts.
                for i in 0..=CUBIC_SEARCH_STARTS {
                    let mut t = i as f64 / CUBIC_SEARCH_STARTS as f64;
                    let mut step = 0;
                    loop {
                        let qpt = self.point(t) - origin;
                        let distance = non_zero_sign(self.direction(t).cross(qpt)) * qpt.length();
                        if distance.abs() < min_distance.abs() {
                            min_distance = distance;
                            param = t;
                        }
                        if step == CUBIC_SEARCH_STEPS {
                            break;
                        }
                        let d1 = ax * (3.0 * t * t) + br * (6.0 * t) + ab * 3.0;
                        let d2 = ax * (6.0 * t) + br * 6.0;
                        t -= qpt.dot(d1) / (d1.dot(d1) + qpt.dot(d2));
                        if !(0.0..=1.0).contains(&t) {
                            break;
                        }
                        step += 1;
                    }
                }

                if (0.0..=1.0).contains(&param) {
                    (SignedDistance::new(min_distance, 0.0), param)
                } else if param < 0.5 {
                    (
                        SignedDistance::new(
                            min_distance,
                            self.direction(0.0).normalize().dot(qa.normalize()).abs(),
                        ),
                        param,
                    )
                } else {
                    (
                        SignedDistance::new(
                            min_distance,
                            self.direction(1.0)
                                .normalize()
                                .dot((p3 - origin).normalize())
                                .abs(),
                        ),
                        param,
                    )
                }
            }
        }
    }

    /// Extends a finite-segment distance past the endpoints.
    ///
    /// When the closest approach fell outside [0, 1], replaces the stored
    /// distance by the perpendicular distance to the endpoint tangent line
    /// whenever that is no farther. Keeps each channel's distance
    /// well-defined away from its owning edge.
    pub fn distance_to_pseudo_distance(
        &self,
        distance: &mut SignedDistance,
        origin: Vec2,
        param: f64,
    ) {
        if param < 0.0 {
            let dir = self.direction(0.0).normalize();
            let aq = origin - self.start();
            let ts = aq.dot(dir);
            if ts < 0.0 {
                let pseudo_distance = aq.cross(dir);
                if pseudo_distance.abs() <= distance.distance.abs() {
                    distance.distance = pseudo_distance;
                    distance.dot = 0.0;
                }
            }
        } else if param > 1.0 {
            let dir = self.direction(1.0).normalize();
            let bq = origin - self.end();
            let ts = bq.dot(dir);
            if ts > 0.0 {
                let pseudo_distance = bq.cross(dir);
                if pseudo_distance.abs() <= distance.distance.abs() {
                    distance.distance = pseudo_distance;
                    distance.dot = 0.0;
                }
            }
        }
    }

    /// Extends the accumulated bounding box to cover this edge.
    pub fn bounds(&self, left: &mut f64, bottom: &mut f64, right: &mut f64, top: &mut f64) {
        match self.kind {
            SegmentKind::Linear(p0, p1) => {
                point_bounds(p0, left, bottom, right, top);
                point_bounds(p1, left, bottom, right, top);
            }
            SegmentKind::Quadratic(p0, p1, p2) => {
                point_bounds(p0, left, bottom, right, top);
                point_bounds(p2, left, bottom, right, top);
                let bot = (p1 - p0) - (p2 - p1);
                if bot.x != 0.0 {
                    let t = (p1.x - p0.x) / bot.x;
                    if t > 0.0 && t < 1.0 {
                        point_bounds(self.point(t), left, bottom, right, top);
                    }
                }
                if bot.y != 0.0 {
                    let t = (p1.y - p0.y) / bot.y;
                    if t > 0.0 && t < 1.0 {
                        point_bounds(self.point(t), left, bottom, right, top);
                    }
                }
            }
            SegmentKind::Cubic(p0, p1, p2, p3) => {
                point_bounds(p0, left, bottom, right, top);
                point_bounds(p3, left, bottom, right, top);
                let a0 = p1 - p0;
                let a1 = ((p2 - p1) - a0) * 2.0;
                let a2 = p3 - p2 * 3.0 + p1 * 3.0 - p0;
                let mut params = [0.0; 2];
                let n = solve_quadratic(&mut params, a2.x, a1.x, a0.x);
                for &t in params.iter().take(n.max(0) as usize) {
                    if t > 0.0 && t < 1.0 {
                        point_bounds(self.point(t), left, bottom, right, top);
                    }
                }
                let n = solve_quadratic(&mut params, a2.y, a1.y, a0.y);
                for &t in params.iter().take(n.max(0) as usize) {
                    if t > 0.0 && t < 1.0 {
                        point_bounds(self.point(t), left, bottom, right, top);
                    }
                }
            }
        }
    }

    /// Moves the first endpoint to `to`, keeping the curve shape plausible.
    ///
    /// Quadratics reproject the control point along the far leg so the
    /// start tangent direction survives; if the adjustment would flip that
    /// tangent, the control point is left in place.
    pub fn move_start(&mut self, to: Vec2) {
        match &mut self.kind {
            SegmentKind::Linear(p0, _) => *p0 = to,
            SegmentKind::Quadratic(p0, p1, p2) => {
                let orig_s_dir = *p0 - *p1;
                let orig_p1 = *p1;
                *p1 += (*p2 - *p1)
                    * ((*p0 - *p1).cross(to - *p0) / (*p0 - *p1).cross(*p2 - *p1));
                *p0 = to;
                if orig_s_dir.dot(*p0 - *p1) < 0.0 {
                    *p1 = orig_p1;
                }
            }
            SegmentKind::Cubic(p0, p1, _, _) => {
                *p1 += to - *p0;
                *p0 = to;
            }
        }
    }

    /// Moves the last endpoint to `to`; see [`EdgeSegment::move_start`].
    pub fn move_end(&mut self, to: Vec2) {
        match &mut self.kind {
            SegmentKind::Linear(_, p1) => *p1 = to,
            SegmentKind::Quadratic(p0, p1, p2) => {
                let orig_e_dir = *p2 - *p1;
                let orig_p1 = *p1;
                *p1 += (*p0 - *p1)
                    * ((*p2 - *p1).cross(to - *p2) / (*p2 - *p1).cross(*p0 - *p1));
                *p2 = to;
                if orig_e_dir.dot(*p2 - *p1) < 0.0 {
                    *p1 = orig_p1;
                }
            }
            SegmentKind::Cubic(_, _, p2, p3) => {
                *p2 += to - *p3;
                *p3 = to;
            }
        }
    }

    /// Splits the edge into three parts reproducing the original trace on
    /// [0, ⅓], [⅓, ⅔] and [⅔, 1].
    pub fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        match self.kind {
            SegmentKind::Linear(p0, p1) => {
                let a = self.point(1.0 / 3.0);
                let b = self.point(2.0 / 3.0);
                [
                    self.with_kind(SegmentKind::Linear(p0, a)),
                    self.with_kind(SegmentKind::Linear(a, b)),
                    self.with_kind(SegmentKind::Linear(b, p1)),
                ]
            }
            SegmentKind::Quadratic(p0, p1, p2) => {
                let a = self.point(1.0 / 3.0);
                let b = self.point(2.0 / 3.0);
                [
                    self.with_kind(SegmentKind::Quadratic(p0, p0.lerp(p1, 1.0 / 3.0), a)),
                    self.with_kind(SegmentKind::Quadratic(
                        a,
                        p0.lerp(p1, 5.0 / 9.0).lerp(p1.lerp(p2, 4.0 / 9.0), 0.5),
                        b,
                    )),
                    self.with_kind(SegmentKind::Quadratic(b, p1.lerp(p2, 2.0 / 3.0), p2)),
                ]
            }
            SegmentKind::Cubic(p0, p1, p2, p3) => {
                let a = self.point(1.0 / 3.0);
                let b = self.point(2.0 / 3.0);
                [
                    self.with_kind(SegmentKind::Cubic(
                        p0,
                        if p0 == p1 { p0 } else { p0.lerp(p1, 1.0 / 3.0) },
                        p0.lerp(p1, 1.0 / 3.0).lerp(p1.lerp(p2, 1.0 / 3.0), 1.0 / 3.0),
                        a,
                    )),
                    self.with_kind(SegmentKind::Cubic(
                        a,
                        p0.lerp(p1, 1.0 / 3.0)
                            .lerp(p1.lerp(p2, 1.0 / 3.0), 1.0 / 3.0)
                            .lerp(
                                p1.lerp(p2, 1.0 / 3.0).lerp(p2.lerp(p3, 1.0 / 3.0), 1.0 / 3.0),
                                2.0 / 3.0,
                            ),
                        p0.lerp(p1, 2.0 / 3.0)
                            .lerp(p1.lerp(p2, 2.0 / 3.0), 2.0 / 3.0)
                            .lerp(
                                p1.lerp(p2, 2.0 / 3.0).lerp(p2.lerp(p3, 2.0 / 3.0), 2.0 / 3.0),
                                1.0 / 3.0,
                            ),
                        b,
                    )),
                    self.with_kind(SegmentKind::Cubic(
                        b,
                        p1.lerp(p2, 2.0 / 3.0).lerp(p2.lerp(p3, 2.0 / 3.0), 2.0 / 3.0),
                        if p2 == p3 { p3 } else { p2.lerp(p3, 2.0 / 3.0) },
                        p3,
                    )),
                ]
            }
        }
    }
}

pub(crate) fn point_bounds(p: Vec2, left: &mut f64, bottom: &mut f64, right: &mut f64, top: &mut f64) {
    if p.x < *left {
        *left = p.x;
    }
    if p.y < *bottom {
        *bottom = p.y;
    }
    if p.x > *right {
        *right = p.x;
    }
    if p.y > *top {
        *top = p.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1.0e-10;

    fn sample_edges() -> [EdgeSegment; 3] {
        [
            EdgeSegment::line(Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0)),
            EdgeSegment::quadratic(
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 3.0),
                Vec2::new(4.0, 0.0),
            ),
            EdgeSegment::cubic(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 2.0),
                Vec2::new(3.0, -1.0),
                Vec2::new(4.0, 1.0),
            ),
        ]
    }

    #[test]
    fn endpoints_match_control_points() {
        for edge in sample_edges() {
            let s = edge.point(0.0);
            let e = edge.point(1.0);
            assert!((s - edge.start()).length() < EPS);
            assert!((e - edge.end()).length() < EPS);
        }
    }

    #[test]
    fn split_in_thirds_preserves_trace() {
        for edge in sample_edges() {
            let [a, b, c] = edge.split_in_thirds();
            assert!((a.point(0.0) - edge.point(0.0)).length() < EPS);
            assert!((a.point(1.0) - edge.point(1.0 / 3.0)).length() < EPS);
            assert!((b.point(0.0) - edge.point(1.0 / 3.0)).length() < EPS);
            assert!((b.point(1.0) - edge.point(2.0 / 3.0)).length() < EPS);
            assert!((c.point(0.0) - edge.point(2.0 / 3.0)).length() < EPS);
            assert!((c.point(1.0) - edge.point(1.0)).length() < EPS);
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let split = if t < 1.0 / 3.0 {
                    a.point(3.0 * t)
                } else if t < 2.0 / 3.0 {
                    b.point(3.0 * t - 1.0)
                } else {
                    c.point(3.0 * t - 2.0)
                };
                assert!((split - edge.point(t)).length() < EPS);
            }
        }
    }

    #[test]
    fn linear_distance_at_midpoint() {
        let edge = EdgeSegment::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let (d, t) = edge.signed_distance(Vec2::new(5.0, 3.0));
        assert!((t - 0.5).abs() < EPS);
        assert!((d.distance + 3.0).abs() < EPS);
        assert_eq!(d.dot, 0.0);

        // Opposite side flips the sign.
        let (d, _) = edge.signed_distance(Vec2::new(5.0, -3.0));
        assert!((d.distance - 3.0).abs() < EPS);
    }

    #[test]
    fn linear_distance_past_endpoint() {
        let edge = EdgeSegment::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let (d, t) = edge.signed_distance(Vec2::new(13.0, 4.0));
        assert!(t > 1.0);
        assert!((d.distance.abs() - 5.0).abs() < EPS);
        assert!(d.dot > 0.0);
    }

    #[test]
    fn quadratic_distance_above_apex() {
        let edge = EdgeSegment::quadratic(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
        );
        // Apex of the curve is at (1, 1); query straight above it.
        let (d, t) = edge.signed_distance(Vec2::new(1.0, 3.0));
        assert!((t - 0.5).abs() < 1.0e-6);
        assert!((d.distance + 2.0).abs() < 1.0e-6);
    }

    #[test]
    fn cubic_distance_from_endpoint() {
        let edge = EdgeSegment::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
        );
        let (d, t) = edge.signed_distance(Vec2::new(0.0, 0.0));
        assert!(t.abs() < 1.0e-9);
        assert!(d.distance.abs() < 1.0e-9);

        // Beyond the start, along the degenerate-leg fallback tangent.
        let (mut d, t) = edge.signed_distance(Vec2::new(-1.0, 0.0));
        assert!(t < 0.0);
        edge.distance_to_pseudo_distance(&mut d, Vec2::new(-1.0, 0.0), t);
        let dir = edge.direction(0.0).normalize();
        let expected = (Vec2::new(-1.0, 0.0) - edge.start()).cross(dir);
        assert!((d.distance - expected).abs() < EPS);
        assert_eq!(d.dot, 0.0);
    }

    #[test]
    fn pseudo_distance_extends_past_start() {
        let edge = EdgeSegment::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let origin = Vec2::new(-2.0, 1.0);
        let (mut d, t) = edge.signed_distance(origin);
        assert!(t < 0.0);
        edge.distance_to_pseudo_distance(&mut d, origin, t);
        // Perpendicular distance to the start tangent line.
        assert!((d.distance + 1.0).abs() < EPS);
        assert_eq!(d.dot, 0.0);
    }

    #[test]
    fn bounds_cover_curve_extrema() {
        let edge = EdgeSegment::quadratic(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
        );
        let (mut l, mut b, mut r, mut t) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        edge.bounds(&mut l, &mut b, &mut r, &mut t);
        assert!((l - 0.0).abs() < EPS);
        assert!((r - 2.0).abs() < EPS);
        assert!((b - 0.0).abs() < EPS);
        // Apex at y = 1 is interior to the parameter range.
        assert!((t - 1.0).abs() < EPS);
    }

    #[test]
    fn move_start_translates_cubic_control() {
        let mut edge = EdgeSegment::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, -1.0),
            Vec2::new(4.0, 1.0),
        );
        edge.move_start(Vec2::new(-1.0, 0.5));
        assert_eq!(edge.start(), Vec2::new(-1.0, 0.5));
        match edge.kind {
            SegmentKind::Cubic(_, p1, _, _) => assert_eq!(p1, Vec2::new(0.0, 2.5)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn move_end_keeps_quadratic_tangent_orientation() {
        let mut edge = EdgeSegment::quadratic(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 0.0),
        );
        let end_dir = (edge.end() - Vec2::new(1.0, 2.0)).normalize();
        edge.move_end(Vec2::new(3.0, 0.0));
        assert_eq!(edge.end(), Vec2::new(3.0, 0.0));
        match edge.kind {
            SegmentKind::Quadratic(_, p1, p2) => {
                // The end tangent may stretch but must not reverse.
                assert!((p2 - p1).normalize().dot(end_dir) > 0.0);
            }
            _ => unreachable!(),
        }
    }
}
