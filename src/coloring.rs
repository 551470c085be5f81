//! Edge coloring: partitions contours into channel-labelled runs at corners.

use log::debug;

use crate::edge::{EdgeColor, EdgeSegment};
use crate::math::Vec2;
use crate::shape::Shape;

fn is_corner(a: Vec2, b: Vec2, cross_threshold: f64) -> bool {
    a.dot(b) <= 0.0 || a.cross(b).abs() > cross_threshold
}

/// Rotates `color` to a new non-black value, never landing on `banned`.
///
/// Single-bit overlaps with `banned` force the complementary pair; black
/// and white restart from a seed-picked two-channel color; anything else
/// rotates its bits under a seed-driven shift.
fn switch_color(color: &mut EdgeColor, seed: &mut u64, banned: EdgeColor) {
    let combined = *color & banned;
    if combined == EdgeColor::RED || combined == EdgeColor::GREEN || combined == EdgeColor::BLUE {
        *color = combined ^ EdgeColor::WHITE;
        return;
    }
    if *color == EdgeColor::BLACK || *color == EdgeColor::WHITE {
        const START: [EdgeColor; 3] = [EdgeColor::CYAN, EdgeColor::MAGENTA, EdgeColor::YELLOW];
        *color = START[(*seed % 3) as usize];
        *seed /= 3;
        return;
    }
    let shifted = color.bits() << (1 + (*seed & 1) as u32);
    *color = EdgeColor::from_bits_truncate((shifted | (shifted >> 3)) & EdgeColor::WHITE.bits());
    *seed >>= 1;
}

/// Assigns a channel mask to every edge of `shape`.
///
/// Corners are detected where consecutive tangents turn by more than
/// `angle_threshold` radians (or reverse); the labels change at every
/// corner while adjacent edges inside a smooth run share two channels.
/// `seed` picks the initial partition deterministically.
pub fn color_edges_simple(shape: &mut Shape, angle_threshold: f64, mut seed: u64) {
    let cross_threshold = angle_threshold.sin();
    let mut corners = Vec::new();
    for contour in &mut shape.contours {
        // Identify corners between consecutive edges.
        corners.clear();
        if let Some(last) = contour.edges.last() {
            let mut prev_direction = last.direction(1.0);
            for (index, edge) in contour.edges.iter().enumerate() {
                if is_corner(
                    prev_direction.normalize(),
                    edge.direction(0.0).normalize(),
                    cross_threshold,
                ) {
                    corners.push(index);
                }
                prev_direction = edge.direction(1.0);
            }
        }
        debug!(
            "coloring contour with {} edges, {} corners",
            contour.edges.len(),
            corners.len()
        );

        match corners.len() {
            // Smooth loop: every channel everywhere.
            0 => {
                for edge in &mut contour.edges {
                    edge.color = EdgeColor::WHITE;
                }
            }
            // "Teardrop": a single corner must both start and end the cycle.
            1 => {
                let mut colors = [EdgeColor::WHITE; 3];
                switch_color(&mut colors[0], &mut seed, EdgeColor::BLACK);
                colors[2] = colors[0];
                switch_color(&mut colors[2], &mut seed, EdgeColor::BLACK);
                let corner = corners[0];
                let m = contour.edges.len();
                if m >= 3 {
                    for i in 0..m {
                        let slot =
                            (3.0 + 2.875 * i as f64 / (m - 1) as f64 - 1.4375 + 0.5).floor() as i32
                                - 3;
                        contour.edges[(corner + i) % m].color = colors[(1 + slot) as usize];
                    }
                } else {
                    // Too few edges to cycle colors: split them into thirds
                    // so the corner lands between distinct labels.
                    assert!(corner < 2);
                    let mut parts: [Option<EdgeSegment>; 6] = [None; 6];
                    let split = contour.edges[0].split_in_thirds();
                    if m >= 2 {
                        let split_second = contour.edges[1].split_in_thirds();
                        for (i, part) in split.into_iter().enumerate() {
                            parts[i + 3 * corner] = Some(part);
                        }
                        for (i, part) in split_second.into_iter().enumerate() {
                            parts[3 + i - 3 * corner] = Some(part);
                        }
                        for (i, part) in parts.iter_mut().enumerate() {
                            if let Some(part) = part {
                                part.color = colors[i / 2];
                            }
                        }
                    } else {
                        for (i, part) in split.into_iter().enumerate() {
                            let mut part = part;
                            part.color = colors[i];
                            parts[i] = Some(part);
                        }
                    }
                    contour.edges.clear();
                    contour.edges.extend(parts.iter().flatten().copied());
                }
            }
            // Two or more corners: walk the splines between them.
            corner_count => {
                let mut spline = 0;
                let start = corners[0];
                let m = contour.edges.len();
                let mut color = EdgeColor::WHITE;
                switch_color(&mut color, &mut seed, EdgeColor::BLACK);
                let initial_color = color;
                for i in 0..m {
                    let index = (start + i) % m;
                    if spline + 1 < corner_count && corners[spline + 1] == index {
                        spline += 1;
                        // The last spline may not collide with the first.
                        let banned = if spline == corner_count - 1 {
                            initial_color
                        } else {
                            EdgeColor::BLACK
                        };
                        switch_color(&mut color, &mut seed, banned);
                    }
                    contour.edges[index].color = color;
                }
            }
        }
    }
}
