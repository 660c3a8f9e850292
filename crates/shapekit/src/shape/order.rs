//! Total orders over shapes by a scalar metric.
//!
//! Both comparators read the metric through the `Shape` trait only. Exact
//! float comparison: equal metrics (and incomparable NaN pairs) yield `Equal`.

use std::cmp::Ordering;

use super::types::Shape;

/// Comparator injected into sorted containers.
pub type CompareFn = fn(&dyn Shape, &dyn Shape) -> Ordering;

#[inline]
fn compare_metric(lhs: f64, rhs: f64) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Orders `a` against `b` by area.
pub fn compare_by_area(a: &dyn Shape, b: &dyn Shape) -> Ordering {
    compare_metric(a.area(), b.area())
}

/// Orders `a` against `b` by perimeter.
pub fn compare_by_perimeter(a: &dyn Shape, b: &dyn Shape) -> Ordering {
    compare_metric(a.perimeter(), b.perimeter())
}

/// Metric selector for callers that pick the ordering at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeOrder {
    Area,
    Perimeter,
}

impl ShapeOrder {
    #[inline]
    pub fn comparator(self) -> CompareFn {
        match self {
            ShapeOrder::Area => compare_by_area,
            ShapeOrder::Perimeter => compare_by_perimeter,
        }
    }

    /// The metric this order ranks by.
    #[inline]
    pub fn metric(self, shape: &dyn Shape) -> f64 {
        match self {
            ShapeOrder::Area => shape.area(),
            ShapeOrder::Perimeter => shape.perimeter(),
        }
    }
}
