//! Search error types.

use gridpath_core::Pos;

/// Internal consistency defects surfaced by a search.
///
/// Cancellation and "no path found" are *not* errors — both yield an empty
/// path. These variants only fire when the parent-pointer tree is corrupt,
/// which indicates a bug, never a property of the input grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The parent chain from the end node hit a node with no parent before
    /// reaching the start node.
    #[error("parent chain broken at {at}: no link back to the start node")]
    BrokenParentChain { at: Pos },

    /// The parent chain exceeded rows × cols steps, implying a cycle.
    #[error("parent chain exceeded {limit} steps during path reconstruction")]
    ParentChainTooLong { limit: usize },
}
