//! Planar convex hulls by gift wrapping.
//!
//! The pipeline is: validate → [`ExtremeCorners`] → [`CullingBox`] →
//! [`gift_wrap`]. Culling only removes points that cannot be hull vertices,
//! so it can be switched off through [`HullParams`] without changing the
//! result.

mod corners;
mod cull;
mod gift_wrap;

pub use corners::ExtremeCorners;
pub use cull::{cull_interior, CullingBox};
pub use gift_wrap::gift_wrap;

use crate::error::{HullError, Result};
use crate::math::polygon_2d::{point_in_polygon, point_on_polygon_boundary, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// Parameters controlling hull construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullParams {
    /// Discard points strictly inside the culling box before wrapping.
    pub cull_interior: bool,
}

impl Default for HullParams {
    fn default() -> Self {
        Self {
            cull_interior: true,
        }
    }
}

/// A convex polygon produced by [`ConvexHull`].
///
/// Vertices are a subsequence of the input values, counter-clockwise in a
/// y-up frame, starting at the lowest (then leftmost) input point.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    vertices: Vec<Point2>,
}

impl Hull {
    /// Hull vertices in wrap order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Consumes the hull, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Number of vertices; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a hull is only built from a non-empty point set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the hull encloses no area: fewer than three
    /// vertices, or all vertices on one line.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.signed_area().abs() <= TOLERANCE
    }

    /// Signed area of the hull polygon; non-negative for wrap order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns `true` if `point` is inside the hull or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_on_polygon_boundary(point, &self.vertices)
            || point_in_polygon(point, &self.vertices)
    }
}

/// Computes the convex hull of a planar point set.
///
/// The caller's slice is only read; all working storage is private to the
/// call, so independent hulls may be computed concurrently.
pub struct ConvexHull<'a> {
    points: &'a [Point2],
    params: HullParams,
}

impl<'a> ConvexHull<'a> {
    /// Creates a new `ConvexHull` operation with default parameters.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            params: HullParams::default(),
        }
    }

    /// Sets custom hull parameters.
    #[must_use]
    pub fn with_params(mut self, params: HullParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the hull.
    ///
    /// Collinear or repeated input is not an error; check
    /// [`Hull::is_degenerate`] for that case.
    ///
    /// # Errors
    ///
    /// Returns `HullError::EmptyInput` if there are no points and
    /// `HullError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    /// Both are detected before any work is done.
    pub fn execute(&self) -> Result<Hull> {
        self.validate()?;

        let vertices = if self.params.cull_interior {
            let candidates = cull_interior(self.points);
            tracing::debug!(
                input = self.points.len(),
                candidates = candidates.len(),
                "culled interior points"
            );
            gift_wrap(&candidates)
        } else {
            gift_wrap(self.points)
        };

        tracing::debug!(vertices = vertices.len(), "convex hull built");
        Ok(Hull { vertices })
    }

    fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(HullError::EmptyInput.into());
        }
        if let Some((index, pt)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, pt)| !pt.x.is_finite() || !pt.y.is_finite())
        {
            tracing::warn!(index, "rejecting non-finite hull input");
            return Err(HullError::NonFiniteCoordinate {
                index,
                x: pt.x,
                y: pt.y,
            }
            .into());
        }
        Ok(())
    }
}

/// Computes the convex hull of `points` with default parameters.
///
/// # Errors
///
/// See [`ConvexHull::execute`].
pub fn convex_hull(points: &[Point2]) -> Result<Hull> {
    ConvexHull::new(points).execute()
}

#[cfg(test)]
mod proptests;
