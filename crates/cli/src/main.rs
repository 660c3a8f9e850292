use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shapekit::{
    area_stats, fold, Shape, ShapeList, ShapeOrder, Tree, TreeCursor, TreeError, TreeNodeId,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;
mod shapes;

use report::{MeasureReport, ShapeRow, SortReport, TreeReport};
use shapes::{Built, ShapeArg};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Measure, order and walk shapes")]
struct Cmd {
    /// Print a pretty JSON report instead of text lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Name, edge count, area and perimeter of each shape
    Measure {
        /// rect:NAME:WIDTH:LENGTH or tri:NAME:LENGTH
        #[arg(required = true)]
        shapes: Vec<ShapeArg>,
    },
    /// Insert shapes into a list and print it head to tail
    Sort {
        #[arg(long, value_enum, default_value_t = SortKey::Area)]
        by: SortKey,
        /// Unlink every node referencing the first shape with this name
        #[arg(long)]
        remove: Option<String>,
        #[arg(required = true)]
        shapes: Vec<ShapeArg>,
    },
    /// Build a balanced tree over the list order and walk it in order
    Tree {
        #[arg(long, value_enum, default_value_t = TreeKey::Area)]
        by: TreeKey,
        #[arg(required = true)]
        shapes: Vec<ShapeArg>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortKey {
    /// Insertion at the head, newest first
    None,
    Area,
    Perimeter,
}

impl SortKey {
    fn order(self) -> Option<ShapeOrder> {
        match self {
            SortKey::None => None,
            SortKey::Area => Some(ShapeOrder::Area),
            SortKey::Perimeter => Some(ShapeOrder::Perimeter),
        }
    }

    fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Area => "area",
            SortKey::Perimeter => "perimeter",
        }
    }
}

/// Orders accepted by `tree`; the balanced build needs a sorted list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TreeKey {
    Area,
    Perimeter,
}

impl From<TreeKey> for SortKey {
    fn from(key: TreeKey) -> Self {
        match key {
            TreeKey::Area => SortKey::Area,
            TreeKey::Perimeter => SortKey::Perimeter,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Measure { shapes } => report::render("measure", &measure(&shapes), cmd.json)?,
        Action::Sort { by, remove, shapes } => {
            report::render("sort", &sort(by, remove.as_deref(), &shapes)?, cmd.json)?
        }
        Action::Tree { by, shapes } => {
            report::render("tree", &tree(by.into(), &shapes)?, cmd.json)?
        }
    };
    println!("{out}");
    Ok(())
}

fn measure(args: &[ShapeArg]) -> MeasureReport {
    tracing::info!(count = args.len(), "measure");
    let shapes = args.iter().map(|a| ShapeRow::of(a.build().as_shape())).collect();
    MeasureReport { shapes }
}

/// List over `built` in the order `by` dictates.
fn list_of<'s>(by: SortKey, built: &'s [Built<'_>]) -> ShapeList<'s> {
    let compare = by.order().map(ShapeOrder::comparator);
    let mut list = ShapeList::with_capacity(compare, built.len());
    for b in built {
        list.insert(b.as_shape());
    }
    list
}

fn sort(by: SortKey, remove: Option<&str>, args: &[ShapeArg]) -> Result<SortReport> {
    let built: Vec<Built> = args.iter().map(ShapeArg::build).collect();
    let mut list = list_of(by, &built);

    let removed = match remove {
        Some(name) => {
            let target = built
                .iter()
                .map(Built::as_shape)
                .find(|s| s.name() == name)
                .with_context(|| format!("no shape named {name:?}"))?;
            list.remove(target)
        }
        None => 0,
    };
    tracing::info!(by = by.label(), count = args.len(), removed, "sort");
    Ok(SortReport {
        by: by.label(),
        removed,
        order: list.iter().map(|s| s.name().to_string()).collect(),
    })
}

fn tree(by: SortKey, args: &[ShapeArg]) -> Result<TreeReport> {
    let built: Vec<Built> = args.iter().map(ShapeArg::build).collect();
    let list = list_of(by, &built);
    let ordered: Vec<&dyn Shape> = list.iter().collect();

    let mut tree = Tree::with_capacity(ordered.len());
    if let Some(root) = balanced(&mut tree, &ordered).context("building balanced tree")? {
        tree.set_root(root)?;
    }
    tracing::info!(by = by.label(), nodes = tree.len(), "tree");
    Ok(TreeReport {
        by: by.label(),
        in_order: TreeCursor::begin(&tree)
            .map(|s| s.name().to_string())
            .collect(),
        area: area_stats(&tree).map(Into::into),
        total_perimeter: fold(&tree, |s, acc| acc + s.perimeter(), 0.0),
    })
}

/// Balanced tree whose in-order sequence is `shapes`.
fn balanced<'s>(
    tree: &mut Tree<'s>,
    shapes: &[&'s dyn Shape],
) -> Result<Option<TreeNodeId>, TreeError> {
    if shapes.is_empty() {
        return Ok(None);
    }
    let mid = shapes.len() / 2;
    let left = balanced(tree, &shapes[..mid])?;
    let right = balanced(tree, &shapes[mid + 1..])?;
    tree.node(shapes[mid], left, right).map(Some)
}
