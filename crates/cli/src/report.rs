use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use shapekit::{AreaStats, Shape};
use std::fmt;

/// One measured shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeRow {
    pub name: String,
    pub edges: u32,
    pub area: f64,
    pub perimeter: f64,
}

impl ShapeRow {
    pub fn of(shape: &dyn Shape) -> Self {
        Self {
            name: shape.name().to_string(),
            edges: shape.edges(),
            area: shape.area(),
            perimeter: shape.perimeter(),
        }
    }
}

impl fmt::Display for ShapeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} edges={} area={:.6} perimeter={:.6}",
            self.name, self.edges, self.area, self.perimeter
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct MeasureReport {
    pub shapes: Vec<ShapeRow>,
}

impl fmt::Display for MeasureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.shapes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Head-to-tail list order after inserts and the optional removal.
#[derive(Clone, Debug, Serialize)]
pub struct SortReport {
    pub by: &'static str,
    pub removed: usize,
    pub order: Vec<String>,
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "by={} removed={}", self.by, self.removed)?;
        write!(f, "{}", self.order.join(" "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatsRow {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl From<AreaStats> for StatsRow {
    fn from(s: AreaStats) -> Self {
        Self {
            max: s.max,
            min: s.min,
            avg: s.avg,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TreeReport {
    pub by: &'static str,
    pub in_order: Vec<String>,
    pub area: Option<StatsRow>,
    pub total_perimeter: f64,
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "by={} in-order: {}", self.by, self.in_order.join(" "))?;
        match self.area {
            Some(s) => writeln!(f, "area max={:.6} min={:.6} avg={:.6}", s.max, s.min, s.avg)?,
            None => writeln!(f, "area: empty tree")?,
        }
        write!(f, "total perimeter={:.6}", self.total_perimeter)
    }
}

/// Text lines, or a pretty JSON envelope tagged with the command and version.
pub fn render<T: Serialize + fmt::Display>(
    command: &str,
    report: &T,
    as_json: bool,
) -> Result<String> {
    if !as_json {
        return Ok(report.to_string());
    }
    let doc = json!({
        "version": shapekit::VERSION,
        "command": command,
        "report": report,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}
