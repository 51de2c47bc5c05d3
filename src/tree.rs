//! Point quadtree/octree with mergeable payloads.
//!
//! The tree covers a fixed axis-aligned region and subdivides it lazily:
//! a cell's children come into existence the first time an insertion maps
//! through them. Each node stores only its center and depth; a cell's full
//! extent is recomputed from the root bounds on demand, so nothing redundant
//! is kept per node.
//!
//! Repeated insertions that resolve to the same cell are combined with the
//! tree's merge function (payload addition by default), which makes the
//! structure usable as a multi-resolution accumulator: point counts,
//! density sums, weights per region.

use std::ops::Add;

use crate::bounds::Bounds;
use crate::point::Point;

/// Combines the payload already stored in a cell (`old`) with a newly
/// inserted payload (`new`), producing the cell's updated payload.
///
/// Swapping this function changes only how payloads accumulate; indexing and
/// traversal are unaffected.
pub type MergeFn<D> = fn(old: &D, new: &D) -> D;

/// A quadtree, the 2D case of [`SpatialTree`].
pub type QuadTree<D> = SpatialTree<D, 2>;

/// An octree, the 3D case of [`SpatialTree`].
pub type Octree<D> = SpatialTree<D, 3>;

/// One cell of the subdivision.
///
/// A node exclusively owns its children; dropping it drops the whole
/// subtree. There are no parent links, traversal is strictly top-down.
#[derive(Clone, Debug)]
pub struct Node<D, const DIM: usize> {
    center: Point<DIM>,
    data: D,
    depth: usize,
    /// Child slots indexed `0..2^DIM`; empty until the first subdivision.
    children: Vec<Option<Box<Node<D, DIM>>>>,
}

impl<D, const DIM: usize> Node<D, DIM> {
    /// Number of child slots per node, `2^DIM`.
    pub const CHILD_COUNT: usize = 1 << DIM;

    fn with(center: Point<DIM>, data: D, depth: usize) -> Self {
        Node { center, data, depth, children: Vec::new() }
    }

    /// The geometric center of this cell.
    pub fn center(&self) -> Point<DIM> {
        self.center
    }

    /// The merged payload of this cell.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Distance from the root (the root itself is at depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The child in slot `index`, if that quadrant/octant was ever
    /// subdivided.
    ///
    /// # Panics
    /// Panics if `index >= 2^DIM`.
    pub fn child(&self, index: usize) -> Option<&Node<D, DIM>> {
        assert!(index < Self::CHILD_COUNT, "child index out of range");
        self.children.get(index).and_then(|slot| slot.as_deref())
    }

    /// Existing children in increasing slot order.
    pub fn children(&self) -> impl Iterator<Item = &Node<D, DIM>> {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Mutable access to a child slot, allocating the slot vector on first
    /// use so leaf nodes stay small.
    fn slot_mut(&mut self, index: usize) -> &mut Option<Box<Node<D, DIM>>> {
        if self.children.is_empty() {
            self.children.resize_with(Self::CHILD_COUNT, || None);
        }
        &mut self.children[index]
    }
}

/// A spatial-partitioning tree over a fixed `DIM`-dimensional region.
///
/// `DIM` is 2 for a [`QuadTree`] and 3 for an [`Octree`]; the core is the
/// same for any dimension count. `D` is the per-cell payload, combined with
/// the tree's [`MergeFn`] whenever two insertions land in the same cell.
///
/// See the [crate docs](crate) for a usage walkthrough.
#[derive(Clone, Debug)]
pub struct SpatialTree<D, const DIM: usize> {
    bounds: Bounds<DIM>,
    max_depth: usize,
    merge: MergeFn<D>,
    root: Box<Node<D, DIM>>,
}

/// The default merge: payload addition, newest first.
fn additive<D: Clone + Add<Output = D>>(old: &D, new: &D) -> D {
    new.clone() + old.clone()
}

impl<D, const DIM: usize> SpatialTree<D, DIM>
where
    D: Clone + Default + Add<Output = D>,
{
    /// Creates a tree over `[min, max]` with the additive merge function.
    ///
    /// The root node is allocated immediately at the region's center with a
    /// default payload; all other nodes are created lazily by insertion.
    ///
    /// # Panics
    /// Panics if `min` exceeds `max` on any axis or if `max_depth` is zero.
    pub fn new(min: Point<DIM>, max: Point<DIM>, max_depth: usize) -> Self {
        Self::with_merge(min, max, max_depth, additive::<D>)
    }
}

impl<D, const DIM: usize> SpatialTree<D, DIM>
where
    D: Clone + Default,
{
    /// Creates a tree over `[min, max]` with a caller-supplied merge
    /// function.
    ///
    /// # Panics
    /// Panics if `min` exceeds `max` on any axis or if `max_depth` is zero.
    pub fn with_merge(
        min: Point<DIM>,
        max: Point<DIM>,
        max_depth: usize,
        merge: MergeFn<D>,
    ) -> Self {
        let bounds = Bounds::new(min, max);
        assert!(
            bounds.is_ordered(),
            "tree bounds must satisfy min <= max on every axis"
        );
        assert!(max_depth >= 1, "max_depth must be at least 1");
        SpatialTree {
            root: Box::new(Node::with(bounds.center(), D::default(), 0)),
            bounds,
            max_depth,
            merge,
        }
    }

    /// Inserts `data` at `pos`, merging it into every cell along the path
    /// from the root's matching child down to the deepest level.
    ///
    /// Points outside the tree's bounds are silently ignored (a `debug`-level
    /// log record is emitted); use [`try_insert`](Self::try_insert) to
    /// observe the rejection.
    pub fn insert(&mut self, pos: Point<DIM>, data: D) {
        let _ = self.try_insert(pos, data);
    }

    /// Like [`insert`](Self::insert), but reports whether `pos` was inside
    /// the tree's bounds and the payload was stored.
    pub fn try_insert(&mut self, pos: Point<DIM>, data: D) -> bool {
        if !self.bounds.contains(pos) {
            log::debug!(
                "insert ignored: point {:?} outside tree bounds {:?}",
                pos,
                self.bounds
            );
            return false;
        }
        let root_size = self.bounds.size();
        Self::insert_node(&mut self.root, pos, data, root_size, self.max_depth, self.merge);
        true
    }

    fn insert_node(
        node: &mut Node<D, DIM>,
        pos: Point<DIM>,
        data: D,
        root_size: Point<DIM>,
        max_depth: usize,
        merge: MergeFn<D>,
    ) {
        // Nodes only exist at depths below max_depth; stop one level short.
        if node.depth + 1 == max_depth {
            return;
        }

        let index = child_index(pos, node.center);
        let center = child_center(pos, node.center, root_size, node.depth);
        let depth = node.depth + 1;

        let slot = node.slot_mut(index);
        match slot {
            Some(child) => child.data = merge(&child.data, &data),
            None => *slot = Some(Box::new(Node::with(center, data.clone(), depth))),
        }
        if let Some(child) = slot {
            Self::insert_node(child, pos, data, root_size, max_depth, merge);
        }
    }
}

impl<D, const DIM: usize> SpatialTree<D, DIM> {
    /// Finds the deepest existing node whose cell contains `pos`.
    ///
    /// Equivalent to [`find_at`](Self::find_at) with the tree's `max_depth`.
    pub fn find(&self, pos: Point<DIM>) -> &Node<D, DIM> {
        self.find_at(pos, self.max_depth)
    }

    /// Walks toward `pos` and returns the node at the requested `depth`, or
    /// the deepest existing ancestor if the point's cell was never
    /// subdivided that far.
    ///
    /// This lookup never fails: for a point outside the bounds, or one never
    /// inserted, it degrades to the closest ancestor (at worst the root).
    /// Callers that need an exact match should compare the returned node's
    /// [`depth`](Node::depth) against the requested one.
    pub fn find_at(&self, pos: Point<DIM>, depth: usize) -> &Node<D, DIM> {
        let mut node = &*self.root;
        while node.depth != depth {
            match node.child(child_index(pos, node.center)) {
                Some(child) => node = child,
                None => break,
            }
        }
        node
    }

    /// Reconstructs the axis-aligned extent of `node`'s cell.
    ///
    /// Nodes store only their center; the extent follows from the root
    /// bounds halved once per depth level:
    /// `half = root_size / 2^(depth + 1)`, cell = `center ± half`.
    pub fn cell_bounds(&self, node: &Node<D, DIM>) -> Bounds<DIM> {
        let half = self.bounds.size() / pow2(node.depth + 1);
        Bounds::new(node.center - half, node.center + half)
    }

    /// Pre-order traversal: `f` sees the current node before any of its
    /// children, children in increasing slot order, absent slots skipped.
    ///
    /// The walk is stateless and read-only; it can be restarted any number
    /// of times and visits every existing node exactly once.
    pub fn visit<F: FnMut(&Node<D, DIM>)>(&self, mut f: F) {
        Self::visit_node(&self.root, &mut f);
    }

    fn visit_node<F: FnMut(&Node<D, DIM>)>(node: &Node<D, DIM>, f: &mut F) {
        f(node);
        for child in node.children() {
            Self::visit_node(child, f);
        }
    }

    /// Returns whether `pos` lies inside the tree's overall bounds.
    ///
    /// Insertion silently drops out-of-bounds points; this is the explicit
    /// membership check for callers that want to know beforehand.
    pub fn contains(&self, pos: Point<DIM>) -> bool {
        self.bounds.contains(pos)
    }

    /// The region this tree covers.
    pub fn bounds(&self) -> Bounds<DIM> {
        self.bounds
    }

    /// The configured depth limit; every node's depth is strictly below it.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The root node (depth 0, centered in the tree's bounds).
    pub fn root(&self) -> &Node<D, DIM> {
        &self.root
    }

    /// Total number of existing nodes, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(|_| count += 1);
        count
    }
}

/// Selects the child slot for `pos` around `center`: bit `i` is set iff the
/// point lies on the positive side of the center along axis `i`.
#[inline]
fn child_index<const DIM: usize>(pos: Point<DIM>, center: Point<DIM>) -> usize {
    let mut index = 0;
    for i in 0..DIM {
        if pos[i] > center[i] {
            index |= 1 << i;
        }
    }
    index
}

/// Center of the child cell `pos` falls into: the parent center shifted by
/// half the child cell's size toward the point on each axis.
#[inline]
fn child_center<const DIM: usize>(
    pos: Point<DIM>,
    center: Point<DIM>,
    root_size: Point<DIM>,
    parent_depth: usize,
) -> Point<DIM> {
    let half = root_size / pow2(parent_depth + 2);
    let mut child = center;
    for i in 0..DIM {
        child[i] = if pos[i] > center[i] { child[i] + half[i] } else { child[i] - half[i] };
    }
    child
}

#[inline]
fn pow2(exp: usize) -> f64 {
    (exp as f64).exp2()
}
