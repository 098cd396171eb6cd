//! The closed set of search algorithms and their common entry point.

use gridpath_core::{Grid, Pos};

use crate::context::Context;
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::{astar, bfs, dijkstra};

/// A grid search algorithm.
///
/// A fixed, small set — plain enum variants selected by index, not an open
/// plugin registry. All variants share one contract, documented on
/// [`Algorithm::search`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
}

impl Algorithm {
    /// All algorithms, in cycling order.
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Dijkstra, Algorithm::Bfs];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
        }
    }

    /// Run this algorithm from `start` to `end` on `grid`.
    ///
    /// Preconditions the caller is responsible for: `start` and `end` are
    /// marked with their display states, and the grid's neighbor lists are
    /// freshly rebuilt ([`Grid::update_all_neighbors`]). The heuristic is
    /// consulted only by A*.
    ///
    /// The cancellation context is polled once at the top of every main
    /// loop iteration; `on_visit` fires once per node finalized from the
    /// frontier (never for the goal pop itself).
    ///
    /// Returns the start → end path inclusive, or an empty vector when the
    /// frontier is exhausted, the context is cancelled, start equals end,
    /// or either endpoint is out of bounds. `Err` only on an internal
    /// consistency defect in the reconstruction tree.
    pub fn search(
        self,
        grid: &Grid,
        start: Pos,
        end: Pos,
        heuristic: Heuristic,
        ctx: &Context,
        on_visit: Option<&mut dyn FnMut()>,
    ) -> Result<Vec<Pos>, SearchError> {
        let (Some(start_idx), Some(end_idx)) = (grid.index_of(start), grid.index_of(end)) else {
            return Ok(Vec::new());
        };
        if start_idx == end_idx {
            return Ok(Vec::new());
        }

        log::debug!("{} search {start} -> {end}", self.name());

        match self {
            Algorithm::AStar => astar::search(grid, start_idx, end_idx, heuristic, ctx, on_visit),
            Algorithm::Dijkstra => dijkstra::search(grid, start_idx, end_idx, ctx, on_visit),
            Algorithm::Bfs => bfs::search(grid, start_idx, end_idx, ctx, on_visit),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
