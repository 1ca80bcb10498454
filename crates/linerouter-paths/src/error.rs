use linerouter_core::{CoordPoint, GridError};
use thiserror::Error;

/// Why a planning call produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A grid accessor was handed an index outside the grid.
    #[error(transparent)]
    OutOfRange(#[from] GridError),

    /// The planner has no availability map to search.
    #[error("no availability map bound to the planner")]
    MissingAvailabilityMap,

    /// Start or end lies outside the `width × height` grid.
    #[error("{point} is outside the {width}x{height} grid")]
    InvalidCoordinates {
        point: CoordPoint,
        width: usize,
        height: usize,
    },

    /// Coordinates too large for the signed distance computation.
    #[error("coordinates of {point} overflow the distance heuristic")]
    CoordinateOverflow { point: CoordPoint },

    /// The search exhausted the frontier without reaching the goal.
    #[error("no path from {start} to {end}")]
    NoPath { start: CoordPoint, end: CoordPoint },

    /// The predecessor links did not lead back to the start.
    #[error("path reconstruction failed: {0}")]
    ReconstructionFailure(&'static str),
}

impl PlanError {
    /// Whether this error points at an internal inconsistency rather than a
    /// bad request or an unreachable goal.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::ReconstructionFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_reconstruction_is_internal() {
        assert!(PlanError::ReconstructionFailure("loop").is_internal());
        assert!(
            !PlanError::NoPath {
                start: CoordPoint::ZERO,
                end: CoordPoint::new(1, 1),
            }
            .is_internal()
        );
        assert!(!PlanError::MissingAvailabilityMap.is_internal());
    }

    #[test]
    fn grid_errors_convert() {
        let e: PlanError = GridError::OutOfRange { index: 9, len: 4 }.into();
        assert_eq!(
            e.to_string(),
            "flat index 9 out of range for grid of 4 cells"
        );
    }

    #[test]
    fn messages_name_the_points() {
        let e = PlanError::InvalidCoordinates {
            point: CoordPoint::new(1000, 0),
            width: 1000,
            height: 1000,
        };
        assert_eq!(e.to_string(), "(1000, 0) is outside the 1000x1000 grid");
    }
}
