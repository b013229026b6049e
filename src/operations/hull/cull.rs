use super::corners::ExtremeCorners;
use crate::math::Point2;

/// Axis-aligned box inscribed in the quadrilateral spanned by the
/// [`ExtremeCorners`] of a point set.
///
/// Every point strictly inside the box is strictly inside the convex hull,
/// so it can never be a hull vertex. For degenerate sets the box may be
/// inverted (`min > max` on an axis) and then contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingBox {
    pub min: Point2,
    pub max: Point2,
}

impl CullingBox {
    /// Builds the box from the four diagonal extremes.
    #[must_use]
    pub fn from_corners(corners: &ExtremeCorners) -> Self {
        let ExtremeCorners {
            lower_left,
            lower_right,
            upper_left,
            upper_right,
        } = corners;

        let xmin = lower_left.x.max(upper_left.x);
        let ymin = lower_left.y.max(lower_right.y);
        let xmax = lower_right.x.min(upper_right.x);
        let ymax = upper_right.y.min(upper_left.y);

        Self {
            min: Point2::new(xmin, ymin),
            max: Point2::new(xmax, ymax),
        }
    }

    /// Returns `true` if `pt` lies strictly inside the box on both axes.
    #[must_use]
    pub fn strictly_contains(&self, pt: &Point2) -> bool {
        pt.x > self.min.x && pt.x < self.max.x && pt.y > self.min.y && pt.y < self.max.y
    }
}

/// Returns the hull candidates of `points`: every point on or outside the
/// culling box, in input order, duplicates kept. Empty input yields an empty
/// candidate set.
#[must_use]
pub fn cull_interior(points: &[Point2]) -> Vec<Point2> {
    let Some(corners) = ExtremeCorners::locate(points) else {
        return Vec::new();
    };
    let culling_box = CullingBox::from_corners(&corners);
    points
        .iter()
        .filter(|pt| !culling_box.strictly_contains(pt))
        .copied()
        .collect()
}
