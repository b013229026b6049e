use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Creates a box from two corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for pt in rest {
            aabb.min.x = aabb.min.x.min(pt.x);
            aabb.min.y = aabb.min.y.min(pt.y);
            aabb.max.x = aabb.max.x.max(pt.x);
            aabb.max.y = aabb.max.y.max(pt.y);
        }
        Some(aabb)
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns `true` if the two boxes share any point, edges included.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(other.min.x > self.max.x
            || self.min.x > other.max.x
            || self.min.y > other.max.y
            || other.min.y > self.max.y)
    }
}
