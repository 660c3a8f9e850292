//! Shapes, a shape list and an in-order tree cursor.
//!
//! Layout
//! - `shape`: the `Shape` trait, concrete variants and the two comparators.
//! - `list`: singly-linked shape list, optionally kept sorted by a comparator.
//! - `tree`: arena-backed binary tree, bounded-stack cursor, area statistics
//!   and the in-order fold.
//!
//! Ownership
//! - Shapes are always borrowed (`&'s dyn Shape`); containers never own them.
//! - Nodes live in a per-container arena and are addressed by typed ids.

pub mod list;
pub mod shape;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use list::{ListNode, ListNodeId, ShapeList};
pub use nalgebra::Vector2 as Vec2;
pub use shape::{
    compare_by_area, compare_by_perimeter, CompareFn, Polygon, Rectangle, Shape, ShapeError,
    ShapeOrder, Triangle,
};
pub use tree::{
    area_stats, fold, max_min_avg_area, AreaStats, Tree, TreeCursor, TreeError, TreeNode,
    TreeNodeId, MAX_DEPTH,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::list::ShapeList;
    pub use crate::shape::{
        compare_by_area, compare_by_perimeter, Polygon, Rectangle, Shape, ShapeOrder, Triangle,
    };
    pub use crate::tree::{area_stats, fold, AreaStats, Tree, TreeCursor, TreeNodeId};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise. Used by `Polygon`.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
