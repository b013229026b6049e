use super::Point2;

/// Whether a threshold itself satisfies a distance predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inclusion {
    /// The threshold distance satisfies the predicate.
    #[default]
    Inclusive,
    /// Only distances strictly past the threshold satisfy the predicate.
    Exclusive,
}

/// Returns the minimum distance from point `(px, py)` to the line segment
/// from `(ax, ay)` to `(bx, by)`.
#[must_use]
pub fn point_to_segment_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Returns `true` if `a` and `b` are closer than `max_distance`.
///
/// Compares squared distances. A negative `max_distance` is never met.
#[must_use]
pub fn within_distance(a: &Point2, b: &Point2, max_distance: f64, inclusion: Inclusion) -> bool {
    if max_distance < 0.0 {
        return false;
    }
    let dist_sq = (b - a).norm_squared();
    let max_sq = max_distance * max_distance;
    match inclusion {
        Inclusion::Inclusive => dist_sq <= max_sq,
        Inclusion::Exclusive => dist_sq < max_sq,
    }
}

/// Returns `true` if `a` and `b` are farther apart than `min_distance`.
///
/// Compares squared distances. A negative `min_distance` is always met.
#[must_use]
pub fn beyond_distance(a: &Point2, b: &Point2, min_distance: f64, inclusion: Inclusion) -> bool {
    if min_distance < 0.0 {
        return true;
    }
    let dist_sq = (b - a).norm_squared();
    let min_sq = min_distance * min_distance;
    match inclusion {
        Inclusion::Inclusive => dist_sq >= min_sq,
        Inclusion::Exclusive => dist_sq > min_sq,
    }
}

/// Returns `true` if the distance between `a` and `b` lies between
/// `min_distance` and `max_distance`, each end inclusive or exclusive.
#[must_use]
pub fn distance_in_range(
    a: &Point2,
    b: &Point2,
    min_distance: f64,
    max_distance: f64,
    min_inclusion: Inclusion,
    max_inclusion: Inclusion,
) -> bool {
    if max_distance < 0.0 {
        return false;
    }
    beyond_distance(a, b, min_distance, min_inclusion)
        && within_distance(a, b, max_distance, max_inclusion)
}
