//! Nearest-target search and centroids over anything with a planar position.

use super::bounds_2d::Aabb2;
use super::{Point2, Vector2};

/// Something that occupies a position in the plane.
pub trait Positioned {
    /// Current position.
    fn position(&self) -> Point2;
}

impl Positioned for Point2 {
    fn position(&self) -> Point2 {
        *self
    }
}

impl Positioned for Vector2 {
    fn position(&self) -> Point2 {
        Point2::from(*self)
    }
}

impl Positioned for (f64, f64) {
    fn position(&self) -> Point2 {
        Point2::new(self.0, self.1)
    }
}

/// How [`center`] summarizes a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterMode {
    /// Arithmetic mean; leans towards where targets are dense.
    #[default]
    Mean,
    /// Center of the axis-aligned bounding box.
    BoundingBox,
}

/// Returns the target closest to `origin`, or `None` if `targets` is empty.
///
/// The first of several equally close targets wins.
#[must_use]
pub fn closest<'a, T: Positioned>(origin: &Point2, targets: &'a [T]) -> Option<&'a T> {
    let mut best: Option<(&T, f64)> = None;
    for target in targets {
        let dist_sq = (target.position() - origin).norm_squared();
        if best.is_none_or(|(_, d)| dist_sq < d) {
            best = Some((target, dist_sq));
        }
    }
    best.map(|(target, _)| target)
}

/// Returns the center of all target positions, or `None` if `targets` is
/// empty.
#[must_use]
pub fn center<T: Positioned>(targets: &[T], mode: CenterMode) -> Option<Point2> {
    if targets.is_empty() {
        return None;
    }
    match mode {
        CenterMode::Mean => {
            let sum = targets
                .iter()
                .fold(Vector2::zeros(), |acc, t| acc + t.position().coords);
            #[allow(clippy::cast_precision_loss)]
            let n = targets.len() as f64;
            Some(Point2::from(sum / n))
        }
        CenterMode::BoundingBox => {
            let positions: Vec<Point2> = targets.iter().map(T::position).collect();
            Aabb2::from_points(&positions).map(|aabb| aabb.center())
        }
    }
}
