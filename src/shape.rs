//! Contours and shapes: the closed outlines the rasterizer consumes.

use crate::edge::EdgeSegment;
use crate::math::Vec2;

/// A closed loop of edges, chained endpoint to endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub edges: Vec<EdgeSegment>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, edge: EdgeSegment) {
        self.edges.push(edge);
    }

    /// Orientation of the contour: +1 counter-clockwise, -1 clockwise.
    ///
    /// Sign of the signed area from sampled points; contours too short to
    /// span a polygon are sampled at interior parameters instead.
    pub fn winding(&self) -> i32 {
        fn shoelace(a: Vec2, b: Vec2) -> f64 {
            a.cross(b)
        }
        let total = match self.edges.len() {
            0 => return 0,
            1 => {
                let a = self.edges[0].point(0.0);
                let b = self.edges[0].point(1.0 / 3.0);
                let c = self.edges[0].point(2.0 / 3.0);
                shoelace(a, b) + shoelace(b, c) + shoelace(c, a)
            }
            2 => {
                let a = self.edges[0].point(0.0);
                let b = self.edges[0].point(0.5);
                let c = self.edges[1].point(0.0);
                let d = self.edges[1].point(0.5);
                shoelace(a, b) + shoelace(b, c) + shoelace(c, d) + shoelace(d, a)
            }
            n => {
                let mut total = 0.0;
                let mut prev = self.edges[n - 1].point(0.0);
                for edge in &self.edges {
                    let curr = edge.point(0.0);
                    total += shoelace(prev, curr);
                    prev = curr;
                }
                total
            }
        };
        if total > 0.0 {
            1
        } else if total < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Extends the accumulated bounding box to cover every edge.
    pub fn bounds(&self, left: &mut f64, bottom: &mut f64, right: &mut f64, top: &mut f64) {
        for edge in &self.edges {
            edge.bounds(left, bottom, right, top);
        }
    }
}

/// A set of contours plus the pixel-row orientation flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub contours: Vec<Contour>,
    /// Mirrors output rows within the written region when set.
    pub inverse_y_axis: bool,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// Checks that every contour chains endpoint to endpoint and closes.
    ///
    /// The rasterizer assumes a valid shape; callers decide whether an
    /// invalid one is normalized or refused.
    pub fn validate(&self) -> bool {
        for contour in &self.contours {
            let Some(last) = contour.edges.last() else {
                continue;
            };
            let mut corner = last.end();
            for edge in &contour.edges {
                if edge.start() != corner {
                    return false;
                }
                corner = edge.end();
            }
        }
        true
    }

    /// Splits single-edge contours into thirds.
    ///
    /// Edge coloring needs at least one corner candidate between distinct
    /// edges; a lone closed edge offers none.
    pub fn normalize(&mut self) {
        for contour in &mut self.contours {
            if contour.edges.len() == 1 {
                let parts = contour.edges[0].split_in_thirds();
                contour.edges.clear();
                contour.edges.extend(parts);
            }
        }
    }

    /// Extends the accumulated bounding box to cover every contour.
    pub fn bounds(&self, left: &mut f64, bottom: &mut f64, right: &mut f64, top: &mut f64) {
        for contour in &self.contours {
            contour.bounds(left, bottom, right, top);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(reversed: bool) -> Contour {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mut contour = Contour::new();
        if reversed {
            for i in (0..4).rev() {
                contour.add_edge(EdgeSegment::line(corners[(i + 1) % 4], corners[i]));
            }
        } else {
            for i in 0..4 {
                contour.add_edge(EdgeSegment::line(corners[i], corners[(i + 1) % 4]));
            }
        }
        contour
    }

    #[test]
    fn counter_clockwise_square_winds_positive() {
        assert_eq!(square(false).winding(), 1);
        assert_eq!(square(true).winding(), -1);
    }

    #[test]
    fn single_edge_contour_winding() {
        // A closed quadratic loop traversed counter-clockwise.
        let mut contour = Contour::new();
        contour.add_edge(EdgeSegment::quadratic(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 0.0),
        ));
        // Degenerate (zero-area) loop.
        assert_eq!(contour.winding(), 0);

        let mut contour = Contour::new();
        contour.add_edge(EdgeSegment::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, -2.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(0.0, 0.0),
        ));
        assert_eq!(contour.winding(), 1);
    }

    #[test]
    fn validate_detects_broken_chain() {
        let mut shape = Shape::new();
        shape.add_contour(square(false));
        assert!(shape.validate());

        let mut broken = square(false);
        broken.edges[2] = EdgeSegment::line(Vec2::new(5.0, 5.0), Vec2::new(0.0, 1.0));
        let mut shape = Shape::new();
        shape.add_contour(broken);
        assert!(!shape.validate());
    }

    #[test]
    fn normalize_splits_single_edge_contours() {
        let mut shape = Shape::new();
        let mut contour = Contour::new();
        contour.add_edge(EdgeSegment::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, -2.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(0.0, 0.0),
        ));
        shape.add_contour(contour);
        assert!(shape.validate());

        shape.normalize();
        assert_eq!(shape.contours[0].edges.len(), 3);
        assert!(shape.validate());
    }

    #[test]
    fn shape_bounds_union_over_contours() {
        let mut shape = Shape::new();
        shape.add_contour(square(false));
        let mut other = Contour::new();
        other.add_edge(EdgeSegment::line(Vec2::new(2.0, 2.0), Vec2::new(3.0, 4.0)));
        other.add_edge(EdgeSegment::line(Vec2::new(3.0, 4.0), Vec2::new(2.0, 2.0)));
        shape.add_contour(other);

        let (mut l, mut b, mut r, mut t) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        shape.bounds(&mut l, &mut b, &mut r, &mut t);
        assert_eq!((l, b, r, t), (0.0, 0.0, 3.0, 4.0));
    }
}
