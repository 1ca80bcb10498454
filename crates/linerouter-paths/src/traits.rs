use linerouter_core::{AvailabilityMap, CoordPoint};

use crate::PlanError;

/// Capability set shared by every grid path planner.
///
/// Planners search the cells marked available in their bound
/// [`AvailabilityMap`]. The map may be shared with other code and changed
/// between calls; planners pick up size changes on the next call.
pub trait PathPlanner {
    /// Shortest path from `start` to `end`, both endpoints included.
    fn get_path(&mut self, start: CoordPoint, end: CoordPoint)
    -> Result<Vec<CoordPoint>, PlanError>;

    /// Grid width.
    fn width(&self) -> usize;

    /// Grid height.
    fn height(&self) -> usize;

    /// Resize the grid. Can be costly on large grids.
    fn set_grid_size(&mut self, width: usize, height: usize);

    /// Handle to the bound availability map, if any.
    fn availability_map(&self) -> Option<AvailabilityMap>;

    /// Replace the bound availability map.
    fn set_availability_map(&mut self, map: AvailabilityMap);

    /// Mark `p` passable.
    fn set_available(&mut self, p: CoordPoint) -> Result<(), PlanError>;

    /// Mark `p` blocked.
    fn set_blocked(&mut self, p: CoordPoint) -> Result<(), PlanError>;

    /// Mark `(x, y)` passable.
    fn set_available_at(&mut self, x: usize, y: usize) -> Result<(), PlanError> {
        self.set_available(CoordPoint::new(x, y))
    }

    /// Mark `(x, y)` blocked.
    fn set_blocked_at(&mut self, x: usize, y: usize) -> Result<(), PlanError> {
        self.set_blocked(CoordPoint::new(x, y))
    }
}
