use super::Vector2;
use crate::error::{OperationError, Result};

/// Velocity reached by a body of `mass` after `force` has acted on it for
/// `duration`, starting from rest: `(force / mass) * duration`.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `mass` is not finite and
/// positive.
pub fn initial_velocity(force: &Vector2, mass: f64, duration: f64) -> Result<Vector2> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(OperationError::InvalidInput(format!(
            "mass must be finite and positive, got {mass}"
        ))
        .into());
    }
    Ok(force / mass * duration)
}
