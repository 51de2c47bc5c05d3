//! Point lookup at several depths.
use point_octree::{Point2, QuadTree};

fn main() {
    let mut tree = QuadTree::new(Point2::new([0.0, 0.0]), Point2::new([100.0, 100.0]), 4);
    tree.insert(Point2::new([25.0, 25.0]), 1.0);
    tree.insert(Point2::new([25.0, 25.0]), 1.0);

    let node = tree.find(Point2::new([25.0, 25.0]));
    println!("deepest: center {:?} data {} depth {}", node.center(), node.data(), node.depth());

    let node = tree.find_at(Point2::new([25.0, 25.0]), 1);
    println!("depth 1: center {:?} data {} depth {}", node.center(), node.data(), node.depth());

    // A point that was never inserted degrades to the deepest ancestor.
    let node = tree.find(Point2::new([90.0, 90.0]));
    println!("missing: center {:?} data {} depth {}", node.center(), node.data(), node.depth());
}
