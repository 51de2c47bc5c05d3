//! Pre-order dump of every cell in the tree.
use point_octree::{Point2, QuadTree};

fn main() {
    let mut tree = QuadTree::new(Point2::new([0.0, 0.0]), Point2::new([100.0, 100.0]), 4);
    for (x, y) in [(25.0, 25.0), (25.0, 25.0), (75.0, 25.0), (60.0, 60.0)] {
        tree.insert(Point2::new([x, y]), 1.0);
    }

    tree.visit(|node| {
        let cell = tree.cell_bounds(node);
        println!(
            "{:indent$}depth {} center {:?} data {} cell {:?} - {:?}",
            "",
            node.depth(),
            node.center(),
            node.data(),
            cell.min(),
            cell.max(),
            indent = node.depth() * 2,
        );
    });
}
