//! Binary tree traversal over borrowed shapes.
//!
//! Purpose
//! - `Tree`: arena of nodes (`shape`, `left`, `right`), built bottom-up by the
//!   caller. No parent links.
//! - `TreeCursor`: in-order walk without recursion or allocation, driven by a
//!   fixed-capacity ancestor stack (`MAX_DEPTH` by default, const generic).
//! - `area_stats` / `max_min_avg_area`: aggregate areas through the cursor.
//! - `fold`: in-order right fold by plain recursion.
//!
//! Limits
//! - A left spine longer than the cursor capacity is truncated silently; see
//!   `cursor` for the exact behavior.

mod analysis;
mod cfg;
mod cursor;
mod types;

pub use analysis::{area_stats, fold, max_min_avg_area, AreaStats};
pub use cfg::MAX_DEPTH;
pub use cursor::TreeCursor;
pub use types::{Tree, TreeError, TreeNode, TreeNodeId};
