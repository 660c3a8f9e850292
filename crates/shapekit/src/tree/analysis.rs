//! Whole-tree computations: area statistics and the in-order fold.

use super::cursor::TreeCursor;
use super::types::{Tree, TreeNodeId};
use crate::shape::Shape;

/// Largest, smallest and mean area over a tree's shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

/// Area statistics over the in-order walk; `None` for an empty tree.
///
/// Walks with the default-capacity cursor, so a left spine longer than
/// `MAX_DEPTH` contributes only the nodes the cursor reaches.
pub fn area_stats(tree: &Tree<'_>) -> Option<AreaStats> {
    let mut cursor = TreeCursor::begin(tree);
    let first = cursor.shape()?.area();
    let (mut max, mut min, mut sum) = (first, first, first);
    let mut count = 1usize;

    cursor.advance();
    while let Some(shape) = cursor.shape() {
        let area = shape.area();
        if area > max {
            max = area;
        }
        if area < min {
            min = area;
        }
        sum += area;
        count += 1;
        cursor.advance();
    }
    Some(AreaStats {
        max,
        min,
        avg: sum / count as f64,
    })
}

/// Overwrite `out` with the tree's area statistics. An empty tree leaves
/// `out` exactly as the caller seeded it.
pub fn max_min_avg_area(tree: &Tree<'_>, out: &mut AreaStats) {
    if let Some(stats) = area_stats(tree) {
        *out = stats;
    }
}

/// In-order right fold: for shapes `s1..sk` returns `f(sk, ... f(s1, init))`.
///
/// Recurses over the tree structure directly (no cursor, no depth cap); the
/// empty tree returns `init`.
pub fn fold<'s, T, F>(tree: &Tree<'s>, mut f: F, init: T) -> T
where
    F: FnMut(&'s dyn Shape, T) -> T,
{
    fold_from(tree, tree.root(), &mut f, init)
}

fn fold_from<'s, T, F>(tree: &Tree<'s>, node: Option<TreeNodeId>, f: &mut F, data: T) -> T
where
    F: FnMut(&'s dyn Shape, T) -> T,
{
    let Some(id) = node else {
        return data;
    };
    let node = tree.at(id);
    let data = fold_from(tree, node.left, f, data);
    let data = f(node.shape, data);
    fold_from(tree, node.right, f, data)
}
