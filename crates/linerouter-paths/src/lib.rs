//! Shortest-path planning for the line router.
//!
//! This crate searches a [`linerouter_core::AvailabilityMap`] for the
//! shortest 8-connected route between two cells:
//!
//! - **A\*** search with a Euclidean heuristic and a corner-cutting rule for
//!   diagonal steps ([`AstarPlanner`])
//! - **Line routing** that blocks each routed line and a clearance band
//!   around it, so successive lines never cross ([`LineRouter`])
//!
//! Planners implement [`PathPlanner`], so callers can swap search strategies
//! without changing how they mark cells or request paths.
//!
//! ```
//! use linerouter_core::CoordPoint;
//! use linerouter_paths::{AstarPlanner, PathPlanner};
//!
//! let mut planner = AstarPlanner::new(8, 8);
//! planner.set_blocked_at(3, 3).unwrap();
//! let path = planner
//!     .get_path(CoordPoint::new(0, 0), CoordPoint::new(7, 7))
//!     .unwrap();
//! assert_eq!(path.first(), Some(&CoordPoint::new(0, 0)));
//! assert!(!path.contains(&CoordPoint::new(3, 3)));
//! ```

mod astar;
mod cost_point;
mod distance;
mod error;
mod neighbors;
mod router;
mod traits;

pub use astar::AstarPlanner;
pub use cost_point::CostPoint;
pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, euclidean};
pub use error::PlanError;
pub use neighbors::{Neighbor, Neighbors};
pub use router::{LineRouter, RouterConfig};
pub use traits::PathPlanner;
