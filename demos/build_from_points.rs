//! Build a quadtree from a text file of point records.
//!
//! Record format, one per line:
//!   boundary x0 y0 x1 y1
//!   obstacle x y w
//!
//! Run with a path, or without one to use a small built-in data set:
//!   cargo run --example build_from_points -- data/quadtree.txt

use point_octree::{Point2, QuadTree};
use std::fs;

const FALLBACK: &str = "\
boundary 0 0 100 100
obstacle 25 25 1
obstacle 25 25 1
obstacle 75 60 1
obstacle 80 65 1
";

fn main() {
    env_logger::init();

    let text = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {path}: {err}, using built-in data");
            FALLBACK.to_string()
        }),
        None => FALLBACK.to_string(),
    };

    let mut min = Point2::zero();
    let mut max = Point2::zero();
    let mut points: Vec<(Point2, f64)> = Vec::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["boundary", x0, y0, x1, y1] => {
                min = Point2::new([x0.parse().unwrap(), y0.parse().unwrap()]);
                max = Point2::new([x1.parse().unwrap(), y1.parse().unwrap()]);
            }
            ["obstacle", x, y, _w] => {
                let p = Point2::new([x.parse().unwrap(), y.parse().unwrap()]);
                // Count points per cell rather than summing raw weights.
                points.push((p, 1.0));
            }
            _ => {}
        }
    }

    let mut tree = QuadTree::new(min, max, 4);
    for &(pos, weight) in &points {
        tree.insert(pos, weight);
    }

    println!(
        "loaded {} points into {:?} - {:?}, {} nodes",
        points.len(),
        min,
        max,
        tree.node_count()
    );

    let node = tree.find(Point2::new([25.0, 25.0]));
    println!(
        "find (25, 25): center {:?} data {} depth {}",
        node.center(),
        node.data(),
        node.depth()
    );
}
