//! Shape abstraction and shape ordering.
//!
//! Purpose
//! - `Shape` is the capability table every variant fills in: name, edge count,
//!   area and perimeter. Callers hold `&dyn Shape` and never inspect fields.
//! - `compare_by_area` / `compare_by_perimeter` are the only ranking rules;
//!   both go through the trait, so lists and trees stay variant-agnostic.
//!
//! Variants
//! - `Rectangle`, `Triangle` (equilateral): infallible field initializers.
//! - `Polygon`: borrowed vertex ring, validated on construction.

mod order;
mod types;

pub use order::{compare_by_area, compare_by_perimeter, CompareFn, ShapeOrder};
pub use types::{Polygon, Rectangle, Shape, ShapeError, Triangle};

#[cfg(test)]
mod tests;
