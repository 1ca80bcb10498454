//! **linerouter-core** — grid addressing and storage for the line router.
//!
//! This crate provides the foundational types shared by the planners:
//! the two equivalent cell addressing forms, a dense flattened grid, and the
//! shared availability map that marks cells passable or blocked.

pub mod availability;
pub mod geom;
pub mod grid;

pub use availability::AvailabilityMap;
pub use geom::{CoordPoint, FlatPoint};
pub use grid::{CellIndex, FlatGrid, GridError};
