use std::collections::BinaryHeap;

use linerouter_core::{AvailabilityMap, CoordPoint, FlatGrid, FlatPoint};
use log::{debug, error, trace, warn};

use crate::PlanError;
use crate::cost_point::CostPoint;
use crate::distance::{DIAGONAL_COST, ORTHOGONAL_COST, euclidean};
use crate::neighbors::Neighbors;
use crate::traits::PathPlanner;

/// A* shortest-path planner over an [`AvailabilityMap`].
///
/// Moves are 8-directional: orthogonal steps cost `1.0`, diagonal steps
/// cost `1.4142136`, and the heuristic is the Euclidean distance, so the
/// returned path is always a shortest one. Diagonal steps are refused when
/// both flanking orthogonal cells are blocked.
///
/// The planner keeps its cost and predecessor grids between calls and
/// resizes them whenever the bound map changes size, including when another
/// holder of the map resized it.
pub struct AstarPlanner {
    map: Option<AvailabilityMap>,
    width: usize,
    height: usize,
    // best known cost from the start of the last search
    cost: FlatGrid<f32>,
    // flat index each visited cell was reached from
    came_from: FlatGrid<usize>,
    neighbors: Neighbors,
}

impl Default for AstarPlanner {
    fn default() -> Self {
        Self::unbound()
    }
}

impl AstarPlanner {
    /// Create a planner that owns a fresh, fully available
    /// `width × height` map.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_map(AvailabilityMap::new(width, height))
    }

    /// Create a planner searching a map shared with the caller.
    pub fn with_map(map: AvailabilityMap) -> Self {
        let (width, height) = map.size();
        Self {
            map: Some(map),
            width,
            height,
            cost: FlatGrid::new(width, height, f32::INFINITY),
            came_from: FlatGrid::new(width, height, 0),
            neighbors: Neighbors::new(),
        }
    }

    /// Create a planner with no map bound. Every search fails with
    /// [`PlanError::MissingAvailabilityMap`] until one is set.
    pub fn unbound() -> Self {
        Self {
            map: None,
            width: 0,
            height: 0,
            cost: FlatGrid::new(0, 0, f32::INFINITY),
            came_from: FlatGrid::new(0, 0, 0),
            neighbors: Neighbors::new(),
        }
    }

    /// Cost from the start of the last search to `p`. Infinite for cells the
    /// search never reached.
    pub fn path_cost(&self, p: CoordPoint) -> Result<f32, PlanError> {
        Ok(self.cost.get(p)?)
    }

    fn bound_map(&self) -> Result<AvailabilityMap, PlanError> {
        self.map.clone().ok_or(PlanError::MissingAvailabilityMap)
    }

    /// Bring the internal grids in line with the map's current size.
    fn sync_size(&mut self, map: &AvailabilityMap) {
        let (width, height) = map.size();
        if (width, height) != (self.width, self.height) {
            debug!(
                "availability map changed from {}x{} to {width}x{height}, resyncing",
                self.width, self.height
            );
            self.resize_grids(width, height);
        }
    }

    fn resize_grids(&mut self, width: usize, height: usize) {
        if self.cost.width() != width || self.cost.height() != height {
            self.cost.resize(width, height, f32::INFINITY);
        }
        if self.came_from.width() != width || self.came_from.height() != height {
            self.came_from.resize(width, height, 0);
        }
        self.width = width;
        self.height = height;
    }

    fn check_bounds(&self, p: CoordPoint) -> Result<(), PlanError> {
        if p.in_bounds(self.width, self.height) {
            return Ok(());
        }
        warn!(
            "{p} is outside the {}x{} planning grid",
            self.width, self.height
        );
        Err(PlanError::InvalidCoordinates {
            point: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Run the search. Returns the goal's flat index if it was reached.
    fn search(
        &mut self,
        available: &FlatGrid<bool>,
        start: CoordPoint,
        end: CoordPoint,
    ) -> Result<Option<FlatPoint>, PlanError> {
        let width = self.width;
        let start_idx = self.cost.index_of(start)?;
        let goal_idx = self.cost.index_of(end)?;

        self.cost.fill(f32::INFINITY);
        self.cost.set(start_idx, 0.0)?;

        let mut open = BinaryHeap::new();
        open.push(CostPoint::new(
            FlatPoint::new(start_idx),
            euclidean(start, end)?,
        ));

        let mut expanded = 0usize;
        while let Some(current) = open.pop() {
            if current.point.flat_index() == goal_idx {
                trace!("A* {start} -> {end}: expanded {expanded} cells");
                return Ok(Some(current.point));
            }
            expanded += 1;

            let current_g = self.cost.get(current.point)?;
            for n in self.neighbors.admissible(current.point, available)? {
                let step = if n.diagonal {
                    DIAGONAL_COST
                } else {
                    ORTHOGONAL_COST
                };
                let tentative = current_g + step;
                if tentative >= self.cost.get(n.point)? {
                    continue;
                }

                let h = euclidean(n.point.to_coord(width), end)?;
                open.push(CostPoint::new(n.point, tentative + h));
                self.cost.set(n.point, tentative)?;
                self.came_from.set(n.point, current.point.flat_index())?;
            }
        }

        trace!("A* {start} -> {end}: frontier exhausted after {expanded} cells");
        Ok(None)
    }

    /// Walk predecessor links from `goal` back to `start`.
    fn reconstruct(
        &self,
        start: CoordPoint,
        goal: FlatPoint,
    ) -> Result<Vec<CoordPoint>, PlanError> {
        let width = self.width;
        let start_idx = start.flat_index(width);
        // A valid chain visits every cell at most once.
        let max_steps = width * self.height;

        let mut path = vec![goal.to_coord(width)];
        let mut next = self.came_from.get(goal)?;
        let mut steps = 0usize;
        // The walk only stops on the start, so a chain that never reaches it
        // runs into the cap.
        while next != start_idx {
            if steps >= max_steps {
                error!("path reconstruction from {goal} exceeded {max_steps} steps");
                return Err(PlanError::ReconstructionFailure(
                    "predecessor chain does not reach the start",
                ));
            }
            steps += 1;
            path.push(FlatPoint::new(next).to_coord(width));
            next = self.came_from.get(next)?;
        }

        path.push(start);
        path.reverse();
        Ok(path)
    }
}

impl PathPlanner for AstarPlanner {
    fn get_path(
        &mut self,
        start: CoordPoint,
        end: CoordPoint,
    ) -> Result<Vec<CoordPoint>, PlanError> {
        let map = self.bound_map().inspect_err(|_| {
            warn!("cannot plan {start} -> {end}: no availability map bound");
        })?;
        self.sync_size(&map);

        self.check_bounds(start)?;
        self.check_bounds(end)?;

        if start == end {
            return Ok(vec![start]);
        }

        let available = map.cells();
        match self.search(&available, start, end)? {
            Some(goal) => {
                let path = self.reconstruct(start, goal)?;
                trace!("A* {start} -> {end}: {} cells", path.len());
                Ok(path)
            }
            None => {
                debug!("failed to plan path from {start} to {end}");
                Err(PlanError::NoPath { start, end })
            }
        }
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_grid_size(&mut self, width: usize, height: usize) {
        if let Some(map) = &self.map {
            if map.size() != (width, height) {
                map.resize(width, height, true);
            }
        }
        self.resize_grids(width, height);
    }

    fn availability_map(&self) -> Option<AvailabilityMap> {
        self.map.clone()
    }

    fn set_availability_map(&mut self, map: AvailabilityMap) {
        let (width, height) = map.size();
        self.map = Some(map);
        self.resize_grids(width, height);
    }

    fn set_available(&mut self, p: CoordPoint) -> Result<(), PlanError> {
        let map = self.bound_map()?;
        self.sync_size(&map);
        Ok(map.set_available(p)?)
    }

    fn set_blocked(&mut self, p: CoordPoint) -> Result<(), PlanError> {
        let map = self.bound_map()?;
        self.sync_size(&map);
        Ok(map.set_blocked(p)?)
    }
}
