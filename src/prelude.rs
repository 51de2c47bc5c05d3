//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use point_octree::prelude::*;
//! ```

pub use crate::bounds::Bounds;
pub use crate::point::{Point, Point2, Point3};
pub use crate::tree::{MergeFn, Node, Octree, QuadTree, SpatialTree};
