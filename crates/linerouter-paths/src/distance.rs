use linerouter_core::CoordPoint;

use crate::PlanError;

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f32 = 1.0;

/// Cost of a diagonal step, a fixed approximation of √2.
#[allow(clippy::excessive_precision)]
pub const DIAGONAL_COST: f32 = 1.4142136;

/// Euclidean distance from `p` to `target` using signed deltas.
///
/// Fails with [`PlanError::CoordinateOverflow`] if `target` does not fit the
/// signed range. Admissible for the unit/√2 step costs above.
#[inline]
pub fn euclidean(p: CoordPoint, target: CoordPoint) -> Result<f32, PlanError> {
    let (Ok(tx), Ok(ty)) = (isize::try_from(target.x), isize::try_from(target.y)) else {
        return Err(PlanError::CoordinateOverflow { point: target });
    };
    let (Ok(px), Ok(py)) = (isize::try_from(p.x), isize::try_from(p.y)) else {
        return Err(PlanError::CoordinateOverflow { point: p });
    };
    let dx = (tx - px) as f32;
    let dy = (ty - py) as f32;
    Ok((dx * dx + dy * dy).sqrt())
}
