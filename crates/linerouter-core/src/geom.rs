//! Cell addressing: [`CoordPoint`] and [`FlatPoint`].
//!
//! A cell in a `width × height` grid can be named either by its coordinates
//! `(x, y)` or by its flat index `x + y * width`. Both forms convert into each
//! other losslessly as long as the width is known. Neither type knows the
//! grid it lives in, so out-of-range values are representable and only fail
//! once they are used to index a grid.

use std::fmt;

// ---------------------------------------------------------------------------
// CoordPoint
// ---------------------------------------------------------------------------

/// A 2D cell coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordPoint {
    pub x: usize,
    pub y: usize,
}

impl CoordPoint {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate point.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Decode a flat index in a grid of the given `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    pub const fn from_flat(point: FlatPoint, width: usize) -> Self {
        Self {
            x: point.x(width),
            y: point.y(width),
        }
    }

    /// Flat index of this point in a grid of the given `width`.
    #[inline]
    pub const fn flat_index(self, width: usize) -> usize {
        self.x + self.y * width
    }

    /// Encode as a [`FlatPoint`] for a grid of the given `width`.
    #[inline]
    pub const fn to_flat(self, width: usize) -> FlatPoint {
        FlatPoint::new(self.flat_index(width))
    }

    /// Whether the point lies inside a `width × height` grid.
    #[inline]
    pub const fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

impl From<(usize, usize)> for CoordPoint {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for CoordPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// FlatPoint
// ---------------------------------------------------------------------------

/// A cell identified by its flat index `x + y * width`.
///
/// Equality and ordering compare the flat index only. The ordering exists
/// for sorting and carries no geometric meaning across grids of different
/// widths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlatPoint(usize);

impl FlatPoint {
    /// Create a point from a raw flat index.
    #[inline]
    pub const fn new(flat_index: usize) -> Self {
        Self(flat_index)
    }

    /// Create a point from `(x, y)` in a grid of the given `width`.
    #[inline]
    pub const fn from_xy(x: usize, y: usize, width: usize) -> Self {
        Self(x + y * width)
    }

    /// Encode a [`CoordPoint`] for a grid of the given `width`.
    #[inline]
    pub const fn from_coord(point: CoordPoint, width: usize) -> Self {
        Self::from_xy(point.x, point.y, width)
    }

    /// The raw flat index.
    #[inline]
    pub const fn flat_index(self) -> usize {
        self.0
    }

    /// X coordinate in a grid of the given `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    pub const fn x(self, width: usize) -> usize {
        self.0 % width
    }

    /// Y coordinate in a grid of the given `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    pub const fn y(self, width: usize) -> usize {
        self.0 / width
    }

    /// Decode into a [`CoordPoint`] for a grid of the given `width`.
    #[inline]
    pub const fn to_coord(self, width: usize) -> CoordPoint {
        CoordPoint::from_flat(self, width)
    }
}

impl From<usize> for FlatPoint {
    #[inline]
    fn from(flat_index: usize) -> Self {
        Self(flat_index)
    }
}

impl From<FlatPoint> for usize {
    #[inline]
    fn from(point: FlatPoint) -> Self {
        point.0
    }
}

impl fmt::Display for FlatPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_to_flat() {
        let p = CoordPoint::new(3, 2);
        assert_eq!(p.flat_index(10), 23);
        assert_eq!(p.to_flat(10), FlatPoint::new(23));
        assert_eq!(FlatPoint::from_coord(p, 10), FlatPoint::from_xy(3, 2, 10));
    }

    #[test]
    fn flat_to_coord() {
        let f = FlatPoint::new(23);
        assert_eq!(f.x(10), 3);
        assert_eq!(f.y(10), 2);
        assert_eq!(f.to_coord(10), CoordPoint::new(3, 2));
        assert_eq!(CoordPoint::from_flat(f, 7), CoordPoint::new(2, 3));
    }

    #[test]
    fn flat_coord_flat_is_identity() {
        for width in [1usize, 2, 7, 64] {
            for i in 0..500 {
                let f = FlatPoint::new(i);
                assert_eq!(f.to_coord(width).to_flat(width), f);
            }
        }
    }

    #[test]
    fn out_of_range_coords_are_representable() {
        let p = CoordPoint::new(100, 0);
        assert!(!p.in_bounds(10, 10));
        // Wraps onto a later row; the grid is what rejects it.
        assert_eq!(p.flat_index(10), 100);
    }

    #[test]
    fn flat_ordering_by_index() {
        let mut pts = vec![FlatPoint::new(9), FlatPoint::new(2), FlatPoint::new(5)];
        pts.sort();
        assert_eq!(
            pts,
            vec![FlatPoint::new(2), FlatPoint::new(5), FlatPoint::new(9)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(CoordPoint::new(4, 1).to_string(), "(4, 1)");
        assert_eq!(FlatPoint::new(17).to_string(), "17");
    }
}
