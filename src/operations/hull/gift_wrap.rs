use crate::math::pseudo_angle::{pseudo_angle, COINCIDENT_ANGLE};
use crate::math::Point2;

/// Index of the lowest candidate, ties broken by the smaller x. Comparisons
/// are exact.
#[allow(clippy::float_cmp)]
fn start_index(candidates: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in candidates.iter().enumerate().skip(1) {
        let b = &candidates[best];
        if pt.y < b.y || (pt.y == b.y && pt.x < b.x) {
            best = i;
        }
    }
    best
}

/// Candidate sets of at most two points: start point first, exact duplicates
/// collapsed.
fn wrap_small(candidates: &[Point2]) -> Vec<Point2> {
    let start = start_index(candidates);
    let mut hull = vec![candidates[start]];
    for (i, pt) in candidates.iter().enumerate() {
        if i != start && !hull.contains(pt) {
            hull.push(*pt);
        }
    }
    hull
}

/// Wraps `candidates` counter-clockwise (y-up) starting from the lowest,
/// then leftmost, point.
///
/// Candidates are never moved; a consumed flag per index marks the ones
/// already on the hull. Each round takes the unconsumed candidate whose
/// pseudo-angle from the last hull vertex is smallest without falling behind
/// the current sweep angle. Equal angles go to the nearer candidate so that
/// collinear boundary points are visited in order. The wrap closes as soon as
/// the start point is at least as good as the best candidate.
///
/// Returns an empty hull for an empty candidate set.
#[must_use]
pub fn gift_wrap(candidates: &[Point2]) -> Vec<Point2> {
    match candidates.len() {
        0 => return Vec::new(),
        1 | 2 => return wrap_small(candidates),
        _ => {}
    }

    let start = start_index(candidates);
    let mut consumed = vec![false; candidates.len()];
    consumed[start] = true;
    let mut remaining = candidates.len() - 1;

    let mut hull = vec![candidates[start]];
    let mut sweep = 0.0;

    while remaining > 0 {
        let last = hull[hull.len() - 1];

        // (index, angle, manhattan distance)
        let mut best: Option<(usize, f64, f64)> = None;
        for (i, pt) in candidates.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            let angle = pseudo_angle(&last, pt);
            if angle < sweep || angle >= COINCIDENT_ANGLE {
                continue;
            }
            // Quarter scale keeps the sum finite for any finite input.
            let dist =
                (pt.x * 0.25 - last.x * 0.25).abs() + (pt.y * 0.25 - last.y * 0.25).abs();
            let better = best.is_none_or(|(_, best_angle, best_dist)| {
                angle < best_angle || (angle <= best_angle && dist < best_dist)
            });
            if better {
                best = Some((i, angle, dist));
            }
        }

        let Some((index, best_angle, _)) = best else {
            tracing::trace!(vertices = hull.len(), "no eligible candidate left");
            break;
        };

        let closing_angle = pseudo_angle(&last, &hull[0]);
        if closing_angle >= sweep && best_angle >= closing_angle {
            break;
        }

        tracing::trace!(
            x = candidates[index].x,
            y = candidates[index].y,
            angle = best_angle,
            "accepted hull vertex"
        );
        hull.push(candidates[index]);
        consumed[index] = true;
        remaining -= 1;
        sweep = best_angle;
    }

    hull
}
