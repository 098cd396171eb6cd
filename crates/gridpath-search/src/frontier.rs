//! Frontier bookkeeping shared by the priority-queue searches, plus the
//! common path-reconstruction walk.

use gridpath_core::{Grid, Pos};

use crate::error::SearchError;

/// Reference into the grid's node storage, ordered by `f` for use in a
/// `BinaryHeap`.
///
/// Scores are `f64` because the Euclidean heuristic is fractional; ordering
/// uses `total_cmp`. Duplicate entries for the same node are expected — the
/// search skips entries whose node was already finalized (lazy deletion).
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl PartialEq for FrontierRef {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq()
    }
}

impl Eq for FrontierRef {}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Ties are
        // broken by heap order, i.e. arbitrarily.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Follow parent links backward from `end` to `start` and return the path
/// in start → end order, both endpoints included.
///
/// The walk is bounded by the node count: a chain that runs out of links or
/// exceeds the bound means the reconstruction tree is corrupt, and that is
/// surfaced as an error rather than looping forever.
pub(crate) fn reconstruct_path(
    grid: &Grid,
    start_idx: usize,
    end_idx: usize,
) -> Result<Vec<Pos>, SearchError> {
    let limit = grid.len();
    let mut path = Vec::new();
    let mut current = end_idx;

    while current != start_idx {
        path.push(grid.pos_at(current));
        if path.len() > limit {
            log::warn!("path reconstruction exceeded {limit} steps, aborting");
            return Err(SearchError::ParentChainTooLong { limit });
        }
        current = match grid.node_at(current).parent() {
            Some(parent) => parent,
            None => {
                let at = grid.pos_at(current);
                log::warn!("parent chain broken at {at} before reaching start");
                return Err(SearchError::BrokenParentChain { at });
            }
        };
    }

    path.push(grid.pos_at(start_idx));
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_smallest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierRef { idx: 0, f: 3.5 });
        heap.push(FrontierRef { idx: 1, f: 1.0 });
        heap.push(FrontierRef { idx: 2, f: 2.25 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn reconstruct_walks_parent_links() {
        let grid = Grid::new(1, 4);
        // 0 <- 1 <- 2 <- 3
        for i in 1..4 {
            grid.node_at(i).set_parent(Some(i - 1));
        }
        let path = reconstruct_path(&grid, 0, 3).unwrap();
        assert_eq!(
            path,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3)
            ]
        );
    }

    #[test]
    fn broken_chain_is_an_error() {
        let grid = Grid::new(1, 3);
        grid.node_at(2).set_parent(Some(1));
        // Node 1 has no parent; start is node 0.
        let err = reconstruct_path(&grid, 0, 2).unwrap_err();
        assert_eq!(
            err,
            SearchError::BrokenParentChain {
                at: Pos::new(0, 1)
            }
        );
    }

    #[test]
    fn cyclic_chain_is_bounded() {
        let grid = Grid::new(1, 3);
        grid.node_at(2).set_parent(Some(1));
        grid.node_at(1).set_parent(Some(2));
        let err = reconstruct_path(&grid, 0, 2).unwrap_err();
        assert_eq!(err, SearchError::ParentChainTooLong { limit: 3 });
    }
}
