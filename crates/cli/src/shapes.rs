//! Shape arguments: `rect:NAME:WIDTH:LENGTH` and `tri:NAME:LENGTH`.

use anyhow::{bail, ensure, Context, Result};
use shapekit::{Rectangle, Shape, Triangle};
use std::str::FromStr;

/// A shape as given on the command line; owns its name.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeArg {
    Rect {
        name: String,
        width: f64,
        length: f64,
    },
    Tri {
        name: String,
        length: f64,
    },
}

impl FromStr for ShapeArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            ["rect", name, width, length] => Ok(ShapeArg::Rect {
                name: parse_name(name)?,
                width: parse_len(width)?,
                length: parse_len(length)?,
            }),
            ["tri", name, length] => Ok(ShapeArg::Tri {
                name: parse_name(name)?,
                length: parse_len(length)?,
            }),
            _ => bail!("expected rect:NAME:WIDTH:LENGTH or tri:NAME:LENGTH, got {s:?}"),
        }
    }
}

fn parse_name(field: &str) -> Result<String> {
    ensure!(!field.is_empty(), "shape name must not be empty");
    Ok(field.to_string())
}

fn parse_len(field: &str) -> Result<f64> {
    let v: f64 = field
        .parse()
        .with_context(|| format!("invalid length {field:?}"))?;
    ensure!(
        v.is_finite() && v >= 0.0,
        "length must be finite and non-negative, got {v}"
    );
    Ok(v)
}

impl ShapeArg {
    pub fn name(&self) -> &str {
        match self {
            ShapeArg::Rect { name, .. } | ShapeArg::Tri { name, .. } => name,
        }
    }

    /// Concrete shape borrowing this argument's name.
    pub fn build(&self) -> Built<'_> {
        match self {
            ShapeArg::Rect {
                name,
                width,
                length,
            } => Built::Rect(Rectangle::new(name, *width, *length)),
            ShapeArg::Tri { name, length } => Built::Tri(Triangle::new(name, *length)),
        }
    }
}

/// Storage for one built shape of either variant.
#[derive(Clone, Copy, Debug)]
pub enum Built<'a> {
    Rect(Rectangle<'a>),
    Tri(Triangle<'a>),
}

impl Built<'_> {
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            Built::Rect(r) => r,
            Built::Tri(t) => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_variants() {
        let r: ShapeArg = "rect:door:3:4".parse().unwrap();
        assert_eq!(
            r,
            ShapeArg::Rect {
                name: "door".into(),
                width: 3.0,
                length: 4.0
            }
        );
        let t: ShapeArg = "tri:flag:2.5".parse().unwrap();
        assert_eq!(
            t,
            ShapeArg::Tri {
                name: "flag".into(),
                length: 2.5
            }
        );
        assert_eq!(t.name(), "flag");
    }

    #[test]
    fn rejects_malformed_arguments() {
        for bad in ["circle:c:1", "rect:a:1", "tri::1", "tri:a:-1", "tri:a:nan", "rect:a:x:1"] {
            assert!(bad.parse::<ShapeArg>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn built_shapes_measure_through_trait() {
        let r: ShapeArg = "rect:r:3:4".parse().unwrap();
        let built = r.build();
        let s = built.as_shape();
        assert_eq!(s.name(), "r");
        assert_eq!(s.edges(), 4);
        assert!((s.area() - 12.0).abs() < 1e-12);
        assert!((s.perimeter() - 14.0).abs() < 1e-12);
    }
}
