//! The [`FlatGrid`] type — a dense `width × height` grid stored row-major in
//! a single `Vec`.
//!
//! Element `i` of the backing storage represents cell
//! `(i % width, i / width)`. Every accessor is bounds-checked against the
//! backing length and reports [`GridError::OutOfRange`] instead of panicking.

use thiserror::Error;

use crate::geom::{CoordPoint, FlatPoint};

/// Errors reported by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The computed flat index does not address a cell of the grid.
    ///
    /// `index` is `usize::MAX` when computing the flat index itself
    /// overflowed.
    #[error("flat index {index} out of range for grid of {len} cells")]
    OutOfRange { index: usize, len: usize },
    /// Stored cells do not cover exactly `width * height` positions.
    #[error("{len} cells do not fill a {width}x{height} grid")]
    SizeMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
}

// ---------------------------------------------------------------------------
// CellIndex
// ---------------------------------------------------------------------------

/// Anything that can be turned into a flat index for a grid of known width.
///
/// Implemented for raw `usize` indices, [`FlatPoint`], [`CoordPoint`] and
/// `(x, y)` tuples, so that grid accessors accept either addressing form.
pub trait CellIndex {
    /// Flat index in a grid of the given `width`, or `None` if the
    /// computation overflows.
    fn flat_index_for(&self, width: usize) -> Option<usize>;
}

impl CellIndex for usize {
    #[inline]
    fn flat_index_for(&self, _width: usize) -> Option<usize> {
        Some(*self)
    }
}

impl CellIndex for FlatPoint {
    #[inline]
    fn flat_index_for(&self, _width: usize) -> Option<usize> {
        Some(self.flat_index())
    }
}

impl CellIndex for CoordPoint {
    #[inline]
    fn flat_index_for(&self, width: usize) -> Option<usize> {
        self.y.checked_mul(width)?.checked_add(self.x)
    }
}

impl CellIndex for (usize, usize) {
    #[inline]
    fn flat_index_for(&self, width: usize) -> Option<usize> {
        CoordPoint::new(self.0, self.1).flat_index_for(width)
    }
}

// ---------------------------------------------------------------------------
// FlatGrid
// ---------------------------------------------------------------------------

/// A fixed-size 2D grid of `T` backed by a flat `Vec<T>`.
///
/// The backing length always equals `width * height`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFlatGrid<T>"))]
pub struct FlatGrid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

// Unchecked wire form, validated by the `TryFrom` below.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFlatGrid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawFlatGrid<T>> for FlatGrid<T> {
    type Error = GridError;

    fn try_from(raw: RawFlatGrid<T>) -> Result<Self, GridError> {
        let RawFlatGrid {
            cells,
            width,
            height,
        } = raw;
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::SizeMismatch {
                len: cells.len(),
                width,
                height,
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }
}

impl<T: Clone> FlatGrid<T> {
    /// Create a `width × height` grid with every cell set to `initial`.
    pub fn new(width: usize, height: usize, initial: T) -> Self {
        Self {
            cells: vec![initial; width * height],
            width,
            height,
        }
    }

    /// Resize to `width × height`, filling newly created cells with `fill`.
    ///
    /// Existing storage is reinterpreted positionally: the first
    /// `min(old_len, new_len)` elements keep their flat index, so when the
    /// width changes a stored value ends up at a different coordinate. Cells
    /// are not moved to follow their old `(x, y)`.
    pub fn resize(&mut self, width: usize, height: usize, fill: T) {
        self.width = width;
        self.height = height;
        self.cells.resize(width * height, fill);
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> FlatGrid<T> {
    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid's `width × height` extent.
    #[inline]
    pub fn contains(&self, p: CoordPoint) -> bool {
        p.in_bounds(self.width, self.height)
    }

    /// Resolve `at` to a checked flat index.
    #[inline]
    pub fn index_of<I: CellIndex>(&self, at: I) -> Result<usize, GridError> {
        let len = self.cells.len();
        match at.flat_index_for(self.width) {
            Some(index) if index < len => Ok(index),
            Some(index) => Err(GridError::OutOfRange { index, len }),
            None => Err(GridError::OutOfRange {
                index: usize::MAX,
                len,
            }),
        }
    }

    /// Borrow the cell at `at`.
    #[inline]
    pub fn get_ref<I: CellIndex>(&self, at: I) -> Result<&T, GridError> {
        let i = self.index_of(at)?;
        Ok(&self.cells[i])
    }

    /// Set the cell at `at` to `value`.
    #[inline]
    pub fn set<I: CellIndex>(&mut self, at: I, value: T) -> Result<(), GridError> {
        let i = self.index_of(at)?;
        self.cells[i] = value;
        Ok(())
    }

    /// The backing storage, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Copy> FlatGrid<T> {
    /// Read the cell at `at`.
    #[inline]
    pub fn get<I: CellIndex>(&self, at: I) -> Result<T, GridError> {
        self.get_ref(at).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_initial_value() {
        let g = FlatGrid::new(20, 25, 500.0_f32);
        assert_eq!(g.width(), 20);
        assert_eq!(g.height(), 25);
        assert_eq!(g.len(), 500);
        assert!(g.as_slice().iter().all(|&v| v == 500.0));
    }

    #[test]
    fn set_and_get_by_every_form() {
        let mut g = FlatGrid::new(50, 60, 0.0_f32);
        g.set(CoordPoint::new(35, 43), 34324.45).unwrap();
        assert_eq!(g.get((35usize, 43usize)).unwrap(), 34324.45);
        assert_eq!(g.get(35usize + 43 * 50).unwrap(), 34324.45);
        assert_eq!(g.get(FlatPoint::from_xy(35, 43, 50)).unwrap(), 34324.45);
    }

    #[test]
    fn get_out_of_range() {
        let g = FlatGrid::new(20, 25, 123.32_f32);
        let err = g.get(CoordPoint::new(0, 25)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                index: 500,
                len: 500
            }
        );
        assert!(g.get(500usize).is_err());
        assert!(g.get(499usize).is_ok());
    }

    #[test]
    fn set_out_of_range() {
        let mut g = FlatGrid::new(100, 100, 1.0_f32);
        assert!(g.set(CoordPoint::new(0, 100), 2.0).is_err());
        assert!(g.set(FlatPoint::new(10_000), 2.0).is_err());
        // Nothing was written.
        assert!(g.as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn overflowing_coordinate_is_out_of_range() {
        let g = FlatGrid::new(4, 4, 0u8);
        let err = g.get(CoordPoint::new(0, usize::MAX)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRange {
                index: usize::MAX,
                len: 16
            }
        );
    }

    #[test]
    fn x_past_width_wraps_onto_next_row() {
        // Only the flat index is checked, matching the addressing scheme.
        let mut g = FlatGrid::new(3, 3, 0u8);
        g.set(CoordPoint::new(3, 0), 7).unwrap();
        assert_eq!(g.get(CoordPoint::new(0, 1)).unwrap(), 7);
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut g = FlatGrid::new(3, 2, 0i32);
        g.set(4usize, 9).unwrap();
        g.fill(-1);
        assert!(g.as_slice().iter().all(|&v| v == -1));
    }

    #[test]
    fn resize_is_positional() {
        let mut g = FlatGrid::new(3, 2, 0i32);
        // (1, 1) is flat index 4 at width 3.
        g.set(CoordPoint::new(1, 1), 5).unwrap();
        g.resize(4, 2, -1);
        assert_eq!(g.len(), 8);
        // Flat index 4 at width 4 is (0, 1): the value did not follow (1, 1).
        assert_eq!(g.get(CoordPoint::new(0, 1)).unwrap(), 5);
        assert_eq!(g.get(CoordPoint::new(1, 1)).unwrap(), -1);
        assert_eq!(g.get(6usize).unwrap(), -1);
        assert_eq!(g.get(7usize).unwrap(), -1);
    }

    #[test]
    fn resize_shrink_truncates() {
        let mut g = FlatGrid::new(4, 4, 1u8);
        g.resize(2, 2, 0);
        assert_eq!(g.len(), 4);
        assert!(g.as_slice().iter().all(|&v| v == 1));
        assert!(g.get(4usize).is_err());
    }
}
