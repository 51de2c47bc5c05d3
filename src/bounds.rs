//! Axis-aligned bounding boxes.

use crate::point::Point;

/// An axis-aligned box spanning `[min, max]` per axis (inclusive on both
/// sides).
///
/// Used both for the tree's overall extent and for the derived extent of a
/// single cell (see [`SpatialTree::cell_bounds`](crate::SpatialTree::cell_bounds)).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds<const DIM: usize> {
    min: Point<DIM>,
    max: Point<DIM>,
}

impl<const DIM: usize> Bounds<DIM> {
    /// Creates a box from its two corners. Callers are responsible for
    /// passing `min` elementwise less than or equal to `max`.
    pub const fn new(min: Point<DIM>, max: Point<DIM>) -> Self {
        Bounds { min, max }
    }

    /// The minimum corner.
    pub const fn min(&self) -> Point<DIM> {
        self.min
    }

    /// The maximum corner.
    pub const fn max(&self) -> Point<DIM> {
        self.max
    }

    /// Per-axis extent, `max - min`.
    #[inline]
    pub fn size(&self) -> Point<DIM> {
        self.max - self.min
    }

    /// The geometric center, `(max + min) / 2`.
    #[inline]
    pub fn center(&self) -> Point<DIM> {
        (self.max + self.min) / 2.0
    }

    /// Returns whether `pos` lies inside the box. Both faces are inclusive,
    /// so points exactly on the boundary count as contained.
    #[inline]
    pub fn contains(&self, pos: Point<DIM>) -> bool {
        for i in 0..DIM {
            if pos[i] < self.min[i] || pos[i] > self.max[i] {
                return false;
            }
        }
        true
    }

    /// Returns whether `min <= max` holds on every axis.
    pub(crate) fn is_ordered(&self) -> bool {
        (0..DIM).all(|i| self.min[i] <= self.max[i])
    }
}
