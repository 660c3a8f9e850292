//! Capacity defaults for tree traversal.
//!
//! Policy
//! - The cursor's ancestor stack is an inline array; its capacity is a const
//!   generic on `TreeCursor`. This constant is the crate-wide default used by
//!   `TreeCursor::begin` and the analysis helpers.

/// Ancestor stack capacity: the longest run of left edges the cursor can
/// follow from a root or right turn before its descent is truncated.
pub const MAX_DEPTH: usize = 32;
