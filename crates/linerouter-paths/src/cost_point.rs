use std::cmp::Ordering;

use linerouter_core::FlatPoint;

/// A frontier entry: a cell with its estimated total cost `f = g + h`.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the **lowest** cost first.
#[derive(Debug, Clone, Copy)]
pub struct CostPoint {
    pub point: FlatPoint,
    pub cost: f32,
}

impl CostPoint {
    #[inline]
    pub const fn new(point: FlatPoint, cost: f32) -> Self {
        Self { point, cost }
    }
}

impl PartialEq for CostPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostPoint {}

impl Ord for CostPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for CostPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
