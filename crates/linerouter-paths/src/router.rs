//! Routing of non-intersecting lines through shared space.
//!
//! A [`LineRouter`] plans a line with any [`PathPlanner`] and then carves it
//! into the availability map: every cell of the line, plus a clearance band
//! around it, is marked blocked so later lines can neither cross nor touch
//! it.

use linerouter_core::CoordPoint;
use log::debug;

use crate::PlanError;
use crate::astar::AstarPlanner;
use crate::traits::PathPlanner;

/// Settings for a [`LineRouter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Chebyshev radius blocked around each routed cell. `0` blocks only the
    /// line itself.
    pub clearance: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            clearance: 1,
        }
    }
}

impl RouterConfig {
    /// A `width × height` config with the default clearance.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the clearance radius.
    pub fn with_clearance(mut self, clearance: usize) -> Self {
        self.clearance = clearance;
        self
    }
}

/// Routes lines one at a time, blocking each routed line for the next.
pub struct LineRouter<P: PathPlanner = AstarPlanner> {
    planner: P,
    config: RouterConfig,
    lines: Vec<Vec<CoordPoint>>,
}

impl LineRouter<AstarPlanner> {
    /// Create a router backed by an [`AstarPlanner`] of the configured size.
    pub fn with_config(config: RouterConfig) -> Self {
        Self::new(AstarPlanner::new(config.width, config.height), config)
    }
}

impl<P: PathPlanner> LineRouter<P> {
    /// Create a router around an existing planner.
    ///
    /// The planner keeps its own grid size; `config.width` and
    /// `config.height` are only used by [`LineRouter::with_config`].
    pub fn new(planner: P, config: RouterConfig) -> Self {
        Self {
            planner,
            config,
            lines: Vec::new(),
        }
    }

    /// Route a line from `start` to `end` and block it.
    ///
    /// Nothing is blocked when planning fails.
    pub fn route(
        &mut self,
        start: CoordPoint,
        end: CoordPoint,
    ) -> Result<Vec<CoordPoint>, PlanError> {
        let path = self.planner.get_path(start, end)?;
        for &p in &path {
            self.block_around(p)?;
        }
        debug!(
            "routed line {} from {start} to {end} ({} cells)",
            self.lines.len(),
            path.len()
        );
        self.lines.push(path.clone());
        Ok(path)
    }

    /// Block `p` and every in-bounds cell within the clearance radius.
    fn block_around(&mut self, p: CoordPoint) -> Result<(), PlanError> {
        let r = self.config.clearance;
        let (width, height) = (self.planner.width(), self.planner.height());
        let x_end = p.x.saturating_add(r).min(width.saturating_sub(1));
        let y_end = p.y.saturating_add(r).min(height.saturating_sub(1));
        for y in p.y.saturating_sub(r)..=y_end {
            for x in p.x.saturating_sub(r)..=x_end {
                self.planner.set_blocked_at(x, y)?;
            }
        }
        Ok(())
    }

    /// Every line routed so far, oldest first.
    pub fn lines(&self) -> &[Vec<CoordPoint>] {
        &self.lines
    }

    /// The settings in use.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The underlying planner.
    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Mutable access to the underlying planner, e.g. to place obstacles.
    pub fn planner_mut(&mut self) -> &mut P {
        &mut self.planner
    }

    /// Consume the router and return its planner.
    pub fn into_planner(self) -> P {
        self.planner
    }
}
