//! Fixed-size coordinate vectors used for positions and cell centers.
//!
//! `Point<DIM>` wraps a `[f64; DIM]` array and provides the element-wise
//! arithmetic the tree needs: subtraction and addition for box math, division
//! by a scalar for halving extents, and indexing for per-axis comparisons.

use std::ops::{Add, Div, Index, IndexMut, Sub};

/// A point (or extent) in `DIM`-dimensional space with `f64` coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const DIM: usize>(
    /// Per-axis coordinates.
    pub [f64; DIM],
);

/// A 2D point, used with [`QuadTree`](crate::QuadTree).
pub type Point2 = Point<2>;

/// A 3D point, used with [`Octree`](crate::Octree).
pub type Point3 = Point<3>;

impl<const DIM: usize> Point<DIM> {
    /// Creates a point from per-axis coordinates.
    pub const fn new(coords: [f64; DIM]) -> Self {
        Point(coords)
    }

    /// The origin (all coordinates zero).
    pub const fn zero() -> Self {
        Point([0.0; DIM])
    }

    /// Returns the underlying coordinate array.
    pub const fn coords(&self) -> [f64; DIM] {
        self.0
    }
}

impl<const DIM: usize> Default for Point<DIM> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const DIM: usize> From<[f64; DIM]> for Point<DIM> {
    fn from(coords: [f64; DIM]) -> Self {
        Point(coords)
    }
}

impl<const DIM: usize> Index<usize> for Point<DIM> {
    type Output = f64;

    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl<const DIM: usize> IndexMut<usize> for Point<DIM> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.0[axis]
    }
}

impl<const DIM: usize> Add for Point<DIM> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..DIM {
            out[i] += rhs.0[i];
        }
        Point(out)
    }
}

impl<const DIM: usize> Sub for Point<DIM> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for i in 0..DIM {
            out[i] -= rhs.0[i];
        }
        Point(out)
    }
}

impl<const DIM: usize> Div<f64> for Point<DIM> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        let mut out = self.0;
        for i in 0..DIM {
            out[i] /= rhs;
        }
        Point(out)
    }
}
