use linerouter_core::{FlatGrid, FlatPoint, GridError};

/// A reachable neighbor and whether the step to it is diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub point: FlatPoint,
    pub diagonal: bool,
}

/// Cached neighbor computation helper.
///
/// Enumerates the passable 8-neighborhood of a cell in the order left, up,
/// right, down, upper-left, upper-right, lower-right, lower-left. The order
/// decides which of several equal-cost paths a search finds first.
pub struct Neighbors {
    buf: Vec<Neighbor>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbors of `center` that a path may step to.
    ///
    /// Orthogonal neighbors need only be in bounds and available. A diagonal
    /// neighbor must also have at least one of its two flanking orthogonal
    /// cells available, so paths never squeeze between two blocked corners.
    pub fn admissible(
        &mut self,
        center: FlatPoint,
        available: &FlatGrid<bool>,
    ) -> Result<&[Neighbor], GridError> {
        self.buf.clear();

        let width = available.width();
        let height = available.height();
        if width == 0 {
            return Ok(&self.buf);
        }
        let c = center.flat_index();
        let x = center.x(width);
        let y = center.y(width);

        let has_left = x > 0;
        let has_up = y > 0;
        let has_right = x + 1 < width;
        let has_down = y + 1 < height;

        let left = has_left && available.get(c - 1)?;
        let up = has_up && available.get(c - width)?;
        let right = has_right && available.get(c + 1)?;
        let down = has_down && available.get(c + width)?;

        if left {
            self.push(c - 1, false);
        }
        if up {
            self.push(c - width, false);
        }
        if right {
            self.push(c + 1, false);
        }
        if down {
            self.push(c + width, false);
        }

        if has_up && has_left && (up || left) && available.get(c - width - 1)? {
            self.push(c - width - 1, true);
        }
        if has_up && has_right && (up || right) && available.get(c - width + 1)? {
            self.push(c - width + 1, true);
        }
        if has_down && has_right && (down || right) && available.get(c + width + 1)? {
            self.push(c + width + 1, true);
        }
        if has_down && has_left && (down || left) && available.get(c + width - 1)? {
            self.push(c + width - 1, true);
        }

        Ok(&self.buf)
    }

    #[inline]
    fn push(&mut self, index: usize, diagonal: bool) {
        self.buf.push(Neighbor {
            point: FlatPoint::new(index),
            diagonal,
        });
    }
}
