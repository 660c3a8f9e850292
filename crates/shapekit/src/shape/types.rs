//! The `Shape` trait and its concrete variants.
//!
//! - `Rectangle`: width × length, 4 edges.
//! - `Triangle`: equilateral, side `length`, 3 edges.
//! - `Polygon`: simple polygon over caller-owned vertices (shoelace area).

use std::fmt;

use nalgebra::Vector2;

use crate::parallelogram_area;

/// Capability table shared by all shapes.
///
/// Implementations fix their behavior when the value is created; the vtable
/// behind a `&dyn Shape` is never rebound.
pub trait Shape: fmt::Debug {
    /// Display name (caller-owned text).
    fn name(&self) -> &str;
    /// Number of edges of the outline.
    fn edges(&self) -> u32;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle<'a> {
    name: &'a str,
    pub width: f64,
    pub length: f64,
}

impl<'a> Rectangle<'a> {
    #[inline]
    pub fn new(name: &'a str, width: f64, length: f64) -> Self {
        Self {
            name,
            width,
            length,
        }
    }
}

impl Shape for Rectangle<'_> {
    fn name(&self) -> &str {
        self.name
    }
    fn edges(&self) -> u32 {
        4
    }
    fn area(&self) -> f64 {
        self.width * self.length
    }
    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

/// Equilateral triangle with side `length`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<'a> {
    name: &'a str,
    pub length: f64,
}

impl<'a> Triangle<'a> {
    #[inline]
    pub fn new(name: &'a str, length: f64) -> Self {
        Self { name, length }
    }
}

impl Shape for Triangle<'_> {
    fn name(&self) -> &str {
        self.name
    }
    fn edges(&self) -> u32 {
        3
    }
    /// (√3/4)·length²
    fn area(&self) -> f64 {
        (self.length * self.length) * (3f64.sqrt() / 4.0)
    }
    fn perimeter(&self) -> f64 {
        3.0 * self.length
    }
}

/// Errors surfaced by fallible shape constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex { index: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices, got {count}")
            }
            ShapeError::NonFiniteVertex { index } => {
                write!(f, "polygon vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Simple polygon over a borrowed vertex ring (closing edge implied).
///
/// Vertex order may be clockwise or counterclockwise; area is unsigned.
/// Self-intersecting rings are not detected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon<'a> {
    name: &'a str,
    vertices: &'a [Vector2<f64>],
}

impl<'a> Polygon<'a> {
    pub fn new(name: &'a str, vertices: &'a [Vector2<f64>]) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(ShapeError::NonFiniteVertex { index });
        }
        Ok(Self { name, vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &'a [Vector2<f64>] {
        self.vertices
    }

    /// Consecutive vertex pairs, closing edge last.
    fn edge_pairs(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl Shape for Polygon<'_> {
    fn name(&self) -> &str {
        self.name
    }
    /// One edge per vertex; saturates at `u32::MAX`.
    fn edges(&self) -> u32 {
        edge_count(self.vertices.len())
    }
    fn area(&self) -> f64 {
        // shoelace: half the sum of cross products of consecutive vertices
        let twice: f64 = self
            .edge_pairs()
            .map(|(a, b)| parallelogram_area(a, b))
            .sum();
        twice.abs() / 2.0
    }
    fn perimeter(&self) -> f64 {
        self.edge_pairs().map(|(a, b)| (b - a).norm()).sum()
    }
}

pub(super) fn edge_count(vertices: usize) -> u32 {
    u32::try_from(vertices).unwrap_or(u32::MAX)
}
