// Segment-segment intersection via f64 orientation tests with tolerances.
// Classifies proper crossings, endpoint touches, and collinear pairs.
// Only `Proper` counts as a visual crossing for scoring; touches at a
// shared graph vertex are structural, and parallel/collinear pairs never
// cross at a single interior point.

use super::tolerance::{clamp01, near_zero, EPS_DENOM, EPS_POS};
use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegIntersection {
    None,
    // Interior crossing, strictly away from all four endpoints
    Proper { at: Point },
    // Meeting at (or within tolerance of) an endpoint of either segment
    Touch { at: Point },
    // All four points on one line; may or may not overlap
    Collinear,
}

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

pub fn intersect_segments(a: Point, b: Point, c: Point, d: Point) -> SegIntersection {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    // All orientations ~ 0: the four points are collinear
    if near_zero(o1, EPS_POS)
        && near_zero(o2, EPS_POS)
        && near_zero(o3, EPS_POS)
        && near_zero(o4, EPS_POS)
    {
        return SegIntersection::Collinear;
    }

    // Straddle test with tolerance: c,d on opposite sides of AB and a,b of CD
    let straddle1 =
        (o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0) || near_zero(o1, EPS_POS) || near_zero(o2, EPS_POS);
    let straddle2 =
        (o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0) || near_zero(o3, EPS_POS) || near_zero(o4, EPS_POS);
    if !(straddle1 && straddle2) {
        return SegIntersection::None;
    }

    // Parametric solve on the supporting lines, then check [0,1] on both
    let rx = b.x - a.x;
    let ry = b.y - a.y;
    let sx = d.x - c.x;
    let sy = d.y - c.y;
    let rxs = rx * sy - ry * sx;
    if near_zero(rxs, EPS_DENOM) {
        // Parallel but not collinear (collinear already returned above)
        return SegIntersection::None;
    }
    let qpx = c.x - a.x;
    let qpy = c.y - a.y;
    let t = (qpx * sy - qpy * sx) / rxs;
    let u = (qpx * ry - qpy * rx) / rxs;

    if t < -EPS_POS || t > 1.0 + EPS_POS || u < -EPS_POS || u > 1.0 + EPS_POS {
        return SegIntersection::None;
    }

    let at = Point::new(a.x + clamp01(t) * rx, a.y + clamp01(t) * ry);
    let is_touch = near_zero(t, EPS_POS)
        || near_zero(1.0 - t, EPS_POS)
        || near_zero(u, EPS_POS)
        || near_zero(1.0 - u, EPS_POS);
    if is_touch {
        SegIntersection::Touch { at }
    } else {
        SegIntersection::Proper { at }
    }
}

/// Scoring predicate: true only for a proper interior crossing.
pub fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    matches!(intersect_segments(a, b, c, d), SegIntersection::Proper { .. })
}
