use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates a closed polygon so it starts at the bottommost vertex (smallest y),
/// breaking ties by smallest x. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y < b.y - TOLERANCE || (pt.y - b.y).abs() < TOLERANCE && pt.x < b.x {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Even-odd point-in-polygon test by horizontal ray casting.
///
/// The polygon may be concave and is implicitly closed. Fewer than three
/// vertices never contain anything. Points exactly on an edge may land on
/// either side; pair with [`point_on_polygon_boundary`] when that matters.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Returns `true` if `point` lies within [`TOLERANCE`] of any edge of the
/// implicitly closed polygon. A single vertex is treated as a zero-length
/// edge.
#[must_use]
pub fn point_on_polygon_boundary(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|i| {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        point_to_segment_dist(point.x, point.y, a.x, a.y, b.x, b.y) <= TOLERANCE
    })
}

/// Twice the signed area of triangle `(a, b, c)`; positive when `c` is to the
/// left of the directed line `a → b`.
#[must_use]
pub fn cross_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
