//! The [`AvailabilityMap`] — which cells a path may pass through.
//!
//! An `AvailabilityMap` is a *handle* to a shared boolean grid. Cloning it
//! yields another handle to the **same** storage, so a planner and the code
//! drawing obstacles can both hold it and see each other's changes. The
//! storage lives as long as its longest holder.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::grid::{CellIndex, FlatGrid, GridError};

/// Shared passable/blocked map. `true` means passable.
#[derive(Debug, Clone)]
pub struct AvailabilityMap {
    cells: Rc<RefCell<FlatGrid<bool>>>,
}

impl AvailabilityMap {
    /// Create a `width × height` map with every cell available.
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(FlatGrid::new(width, height, true))
    }

    /// Wrap an existing boolean grid.
    pub fn from_grid(grid: FlatGrid<bool>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(grid)),
        }
    }

    /// Width of the map.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.borrow().width()
    }

    /// Height of the map.
    #[inline]
    pub fn height(&self) -> usize {
        self.cells.borrow().height()
    }

    /// `(width, height)` read under a single borrow.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        let g = self.cells.borrow();
        (g.width(), g.height())
    }

    /// Whether the cell at `at` is passable.
    #[inline]
    pub fn is_available<I: CellIndex>(&self, at: I) -> Result<bool, GridError> {
        self.cells.borrow().get(at)
    }

    /// Mark the cell at `at` passable.
    #[inline]
    pub fn set_available<I: CellIndex>(&self, at: I) -> Result<(), GridError> {
        self.cells.borrow_mut().set(at, true)
    }

    /// Mark the cell at `at` blocked.
    #[inline]
    pub fn set_blocked<I: CellIndex>(&self, at: I) -> Result<(), GridError> {
        self.cells.borrow_mut().set(at, false)
    }

    /// Resize the shared storage. See [`FlatGrid::resize`] for how existing
    /// cells are reinterpreted.
    pub fn resize(&self, width: usize, height: usize, fill: bool) {
        self.cells.borrow_mut().resize(width, height, fill);
    }

    /// Borrow the underlying grid for a batch of reads.
    ///
    /// The borrow must be released before the map is mutated through any
    /// handle.
    #[inline]
    pub fn cells(&self) -> Ref<'_, FlatGrid<bool>> {
        self.cells.borrow()
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells
            .borrow()
            .as_slice()
            .iter()
            .filter(|&&available| !available)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{CoordPoint, FlatPoint};

    #[test]
    fn new_is_all_available() {
        let m = AvailabilityMap::new(5, 4);
        assert_eq!(m.size(), (5, 4));
        assert_eq!(m.blocked_count(), 0);
        assert!(m.is_available(CoordPoint::new(4, 3)).unwrap());
    }

    #[test]
    fn block_and_unblock_every_form() {
        let m = AvailabilityMap::new(10, 10);
        m.set_blocked(CoordPoint::new(2, 3)).unwrap();
        assert!(!m.is_available(32usize).unwrap());
        assert!(!m.is_available(FlatPoint::new(32)).unwrap());
        assert!(!m.is_available((2usize, 3usize)).unwrap());

        m.set_available(FlatPoint::from_xy(2, 3, 10)).unwrap();
        assert!(m.is_available(CoordPoint::new(2, 3)).unwrap());
    }

    #[test]
    fn out_of_range_is_reported() {
        let m = AvailabilityMap::new(10, 10);
        assert!(m.is_available(100usize).is_err());
        assert!(m.set_blocked(CoordPoint::new(0, 10)).is_err());
        assert!(m.set_available(FlatPoint::new(1000)).is_err());
        assert_eq!(m.blocked_count(), 0);
    }

    #[test]
    fn clones_share_storage() {
        let a = AvailabilityMap::new(3, 3);
        let b = a.clone();
        b.set_blocked(CoordPoint::new(1, 1)).unwrap();
        assert!(!a.is_available(CoordPoint::new(1, 1)).unwrap());
        assert_eq!(a.blocked_count(), 1);
    }

    #[test]
    fn resize_through_any_handle() {
        let a = AvailabilityMap::new(3, 3);
        let b = a.clone();
        b.resize(6, 2, true);
        assert_eq!(a.size(), (6, 2));
    }

    #[test]
    fn grow_keeps_blocked_cells_by_flat_index() {
        let m = AvailabilityMap::new(3, 3);
        m.set_blocked(CoordPoint::new(1, 1)).unwrap();
        m.resize(4, 4, true);
        assert_eq!(m.blocked_count(), 1);
        // Flat index 4 is (0, 1) at width 4.
        assert!(!m.is_available(CoordPoint::new(0, 1)).unwrap());
        assert!(m.is_available(CoordPoint::new(1, 1)).unwrap());
        assert!((9..16).all(|i: usize| m.is_available(i).unwrap()));
    }
}
