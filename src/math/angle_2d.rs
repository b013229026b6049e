//! Polar conversion, vector rotation and degree-based angle helpers.

use rand::Rng;

use super::{Point2, Vector2};

/// Converts polar coordinates to cartesian coordinates.
///
/// `angle` is measured in radians counter-clockwise from +x.
#[must_use]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point2 {
    let (sin, cos) = angle.sin_cos();
    Point2::new(radius * cos, radius * sin)
}

/// Converts cartesian coordinates to `(radius, angle)` with the angle in
/// radians, in `(-π, π]`.
#[must_use]
pub fn cartesian_to_polar(point: &Point2) -> (f64, f64) {
    (point.coords.norm(), rotation(&point.coords))
}

/// Draws a vector of length one in a uniformly random direction.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    polar_to_cartesian(1.0, angle).coords
}

/// Angle of `v` in radians, measured from +x.
#[must_use]
pub fn rotation(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    nalgebra::Rotation2::new(angle) * *v
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation in degrees that takes `from` onto `to`.
///
/// Positive is counter-clockwise, negative clockwise, zero when the angles
/// coincide (0 and 360 included). A half-turn resolves counter-clockwise.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn shortest_rotation_degrees(from: f64, to: f64) -> f64 {
    let ccw = normalize_degrees(to - from);
    if ccw == 0.0 {
        0.0
    } else if ccw <= 180.0 {
        ccw
    } else {
        ccw - 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn polar_round_trip_quadrant() {
        let p = polar_to_cartesian(2.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);

        let (r, theta) = cartesian_to_polar(&Point2::new(-3.0, 0.0));
        assert_relative_eq!(r, 3.0);
        assert_relative_eq!(theta, PI);
    }

    #[test]
    fn random_unit_vectors_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut upper_half = 0;
        for _ in 0..200 {
            let v = random_unit_vector(&mut rng);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
            if v.y > 0.0 {
                upper_half += 1;
            }
        }
        // Directions should cover both half-planes.
        assert!((50..150).contains(&upper_half), "skewed: {upper_half}");
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate(&Vector2::new(1.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(v, Vector2::new(0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(rotation(&v), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_relative_eq!(normalize_degrees(370.0), 10.0);
        assert_relative_eq!(normalize_degrees(-90.0), 270.0);
        assert_relative_eq!(normalize_degrees(-720.0), 0.0);
        assert_relative_eq!(normalize_degrees(360.0), 0.0);
        let tiny = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn shortest_rotation_direction() {
        assert_relative_eq!(shortest_rotation_degrees(10.0, 50.0), 40.0);
        assert_relative_eq!(shortest_rotation_degrees(50.0, 10.0), -40.0);
        assert_relative_eq!(shortest_rotation_degrees(350.0, 10.0), 20.0);
        assert_relative_eq!(shortest_rotation_degrees(10.0, 350.0), -20.0);
        assert_relative_eq!(shortest_rotation_degrees(-45.0, 315.0), 0.0);
        assert_relative_eq!(shortest_rotation_degrees(0.0, 360.0), 0.0);
    }
}
