use super::Point2;

/// Pseudo-angle assigned to a pair of coincident points.
///
/// Ten full turns: strictly greater than every directional value, so a
/// coincident candidate always sorts last.
pub const COINCIDENT_ANGLE: f64 = 3600.0;

/// Width of one quadrant on the pseudo-angle scale.
const QUADRANT: f64 = 90.0;

/// Returns a value in `[0, 360)` that orders the direction from `from` to `to`
/// the same way the true polar angle (measured counter-clockwise from +x)
/// does, without calling any trigonometric function.
///
/// The mapping is linear in `dy / (|dx| + |dy|)` within each quadrant, so it
/// is monotonic in the true angle but not equal to it. Coincident points map
/// to [`COINCIDENT_ANGLE`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pseudo_angle(from: &Point2, to: &Point2) -> f64 {
    let (dx, dy) = finite_delta(from, to);
    let manhattan = dx.abs() + dy.abs();

    if manhattan == 0.0 {
        return COINCIDENT_ANGLE;
    }

    let mut t = dy / manhattan;
    if dx < 0.0 {
        t = 2.0 - t;
    } else if dy < 0.0 {
        t = 4.0 + t;
    }
    t * QUADRANT
}

/// Components of `to - from`, scaled by a quarter when the Manhattan length
/// would overflow. The pseudo-angle only depends on the direction.
fn finite_delta(from: &Point2, to: &Point2) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if (dx.abs() + dy.abs()).is_finite() {
        (dx, dy)
    } else {
        (to.x * 0.25 - from.x * 0.25, to.y * 0.25 - from.y * 0.25)
    }
}
