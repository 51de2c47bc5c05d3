//! # point-octree - Quadtree/Octree Point Index
//!
//! A Rust library providing a generic spatial-partitioning tree for point
//! data: a quadtree in 2D, an octree in 3D, the same const-generic core for
//! both.
//!
//! ## Features
//!
//! - **Lazy Subdivision**: cells are created the first time an insertion
//!   needs them, down to a configurable maximum depth
//! - **Mergeable Payloads**: points landing in the same cell combine their
//!   payloads (addition by default, any strategy via [`MergeFn`])
//! - **Best-Effort Lookup**: point lookup at any depth, degrading to the
//!   deepest existing ancestor instead of failing
//! - **Derived Cell Extents**: nodes store only their center; a cell's box
//!   is recomputed from the root bounds and the node's depth
//!
//! ## Quick Start
//!
//! ```rust
//! use point_octree::prelude::*;
//!
//! // A quadtree over [0,100] x [0,100], at most 4 levels of nodes.
//! let mut tree = QuadTree::new(Point2::new([0.0, 0.0]), Point2::new([100.0, 100.0]), 4);
//!
//! // Count points per cell: additive merge of 1.0 per insertion.
//! tree.insert(Point2::new([25.0, 25.0]), 1.0);
//! tree.insert(Point2::new([25.0, 25.0]), 1.0);
//! tree.insert(Point2::new([75.0, 75.0]), 1.0);
//!
//! // The deepest cell holding (25, 25) saw both insertions.
//! let node = tree.find(Point2::new([25.0, 25.0]));
//! assert_eq!(*node.data(), 2.0);
//!
//! // At depth 1 that point lives in the lower-left quadrant.
//! let quadrant = tree.find_at(Point2::new([25.0, 25.0]), 1);
//! assert_eq!(quadrant.center(), Point2::new([25.0, 25.0]));
//!
//! // Walk every cell, parents before children.
//! let mut cells = 0;
//! tree.visit(|node| {
//!     let bounds = tree.cell_bounds(node);
//!     assert!(bounds.contains(node.center()));
//!     cells += 1;
//! });
//! assert_eq!(cells, tree.node_count());
//! ```
//!
//! ## How It Works
//!
//! The tree covers a fixed axis-aligned region. Each node splits its cell
//! into `2^DIM` equal children around its center; an inserted point picks
//! its child slot bit-wise, one bit per axis, by which side of the center it
//! falls on. Insertion walks from the root to the deepest permitted level,
//! creating missing nodes and merging the payload into existing ones, so
//! every level of the tree holds an aggregate of the points beneath it.
//!
//! Points outside the region are ignored by [`SpatialTree::insert`] (see
//! [`SpatialTree::try_insert`] for an explicit answer), and lookups never
//! fail: they return the deepest node the point's path reaches.

pub mod bounds;
pub mod point;
pub mod prelude;
pub mod tree;

pub use bounds::Bounds;
pub use point::{Point, Point2, Point3};
pub use tree::{MergeFn, Node, Octree, QuadTree, SpatialTree};
