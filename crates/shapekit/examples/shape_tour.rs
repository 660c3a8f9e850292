//! Walk through the toolkit on a handful of shapes.
//!
//! Usage:
//!   cargo run -p shapekit --example shape_tour -- area
//!   cargo run -p shapekit --example shape_tour -- perimeter
//!
//! Prints the shapes in list order, then the in-order walk of a tree built
//! from that order, its area statistics and the total perimeter.

use shapekit::prelude::*;
use shapekit::TreeNodeId;

fn main() {
    let key = std::env::args().nth(1).unwrap_or_else(|| "area".to_string());
    let order = match key.as_str() {
        "area" => ShapeOrder::Area,
        "perimeter" => ShapeOrder::Perimeter,
        _ => {
            eprintln!("usage: shape_tour [area|perimeter]");
            return;
        }
    };

    let ring = [
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 1.0),
        Vec2::new(2.0, 3.0),
        Vec2::new(0.0, 1.0),
    ];
    let house = match Polygon::new("house", &ring) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let card = Rectangle::new("card", 3.0, 4.0);
    let tile = Rectangle::new("tile", 1.0, 1.0);
    let flag = Triangle::new("flag", 2.0);
    let sign = Triangle::new("sign", 5.0);

    let mut list = ShapeList::sorted_by(order.comparator());
    for shape in [&house as &dyn Shape, &card, &tile, &flag, &sign] {
        list.insert(shape);
    }
    println!("list by {key}:");
    for shape in &list {
        println!(
            "  {:<6} edges={} area={:>7.3} perimeter={:>7.3}",
            shape.name(),
            shape.edges(),
            shape.area(),
            shape.perimeter()
        );
    }

    let sorted: Vec<&dyn Shape> = list.iter().collect();
    let mut tree = Tree::with_capacity(sorted.len());
    if let Some(root) = balanced(&mut tree, &sorted) {
        tree.set_root(root).expect("fresh root is detached");
    }
    let names: Vec<&str> = TreeCursor::begin(&tree).map(|s| s.name()).collect();
    println!("tree in-order: {}", names.join(" "));
    if let Some(stats) = area_stats(&tree) {
        println!(
            "area max={:.3} min={:.3} avg={:.3}",
            stats.max, stats.min, stats.avg
        );
    }
    let total = fold(&tree, |s, acc| acc + s.perimeter(), 0.0);
    println!("total perimeter={total:.3}");
}

fn balanced<'s>(tree: &mut Tree<'s>, shapes: &[&'s dyn Shape]) -> Option<TreeNodeId> {
    if shapes.is_empty() {
        return None;
    }
    let mid = shapes.len() / 2;
    let left = balanced(tree, &shapes[..mid]);
    let right = balanced(tree, &shapes[mid + 1..]);
    tree.node(shapes[mid], left, right).ok()
}
