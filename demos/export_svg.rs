//! Render the tree's cells as an SVG file.
//!
//! Walks every cell with `visit`, recovers its rectangle with `cell_bounds`,
//! and writes one annotated `<rect>` per cell to `quadtree.svg`.

use point_octree::{Point2, QuadTree};
use rand::Rng;
use rand::SeedableRng;
use std::fmt::Write as _;
use std::fs;

fn main() {
    let mut tree = QuadTree::new(Point2::new([0.0, 0.0]), Point2::new([100.0, 100.0]), 5);
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for _ in 0..200 {
        // Cluster points in the lower-left so the subdivision is uneven.
        let x = rng.random_range(0.0..100.0_f64).powi(2) / 100.0;
        let y = rng.random_range(0.0..100.0_f64).powi(2) / 100.0;
        tree.insert(Point2::new([x, y]), 1.0);
    }

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="800" height="800">"#
    )
    .unwrap();
    tree.visit(|node| {
        let cell = tree.cell_bounds(node);
        let size = cell.size();
        writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="{:.2}"/>"#,
            cell.min()[0],
            cell.min()[1],
            size[0],
            size[1],
            0.5 / f64::from(1 << node.depth()),
        )
        .unwrap();
        writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="{:.2}" text-anchor="middle">{}</text>"#,
            node.center()[0],
            node.center()[1],
            3.0 / (node.depth() + 1) as f64,
            node.data(),
        )
        .unwrap();
    });
    writeln!(svg, "</svg>").unwrap();

    fs::write("quadtree.svg", svg).expect("write quadtree.svg");
    println!("wrote quadtree.svg ({} cells)", tree.node_count());
}
