use crate::math::Point2;

/// The four points of a set that lie furthest along each diagonal direction.
///
/// Corners are named for a y-up frame and need not be distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremeCorners {
    /// Maximizes `-x - y`.
    pub lower_left: Point2,
    /// Maximizes `x - y`.
    pub lower_right: Point2,
    /// Maximizes `-x + y`.
    pub upper_left: Point2,
    /// Maximizes `x + y`.
    pub upper_right: Point2,
}

impl ExtremeCorners {
    /// Scans `points` once. Comparisons are strict, so the earliest point wins
    /// a tie. Projections use halved coordinates so they stay finite for any
    /// finite input. Returns `None` for an empty slice.
    #[must_use]
    pub fn locate(points: &[Point2]) -> Option<Self> {
        let first = *points.first()?;
        let mut corners = Self {
            lower_left: first,
            lower_right: first,
            upper_left: first,
            upper_right: first,
        };

        let sum = |p: &Point2| p.x * 0.5 + p.y * 0.5;
        let diff = |p: &Point2| p.x * 0.5 - p.y * 0.5;
        for pt in &points[1..] {
            if sum(pt) < sum(&corners.lower_left) {
                corners.lower_left = *pt;
            }
            if diff(pt) > diff(&corners.lower_right) {
                corners.lower_right = *pt;
            }
            if diff(pt) < diff(&corners.upper_left) {
                corners.upper_left = *pt;
            }
            if sum(pt) > sum(&corners.upper_right) {
                corners.upper_right = *pt;
            }
        }
        Some(corners)
    }
}
