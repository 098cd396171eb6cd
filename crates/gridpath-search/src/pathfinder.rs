//! The [`PathFinder`] — current algorithm/heuristic selection and dispatch.

use gridpath_core::{Grid, Pos};

use crate::algorithm::Algorithm;
use crate::context::Context;
use crate::error::SearchError;
use crate::heuristic::Heuristic;

/// Session-scoped selection of one algorithm and one heuristic, each
/// cyclable through its fixed list.
///
/// The shell must not cycle while a search worker is alive; that guard
/// lives with the caller, not here.
#[derive(Debug, Default, Clone)]
pub struct PathFinder {
    algorithm_index: usize,
    heuristic_index: usize,
}

impl PathFinder {
    /// Start with the first algorithm (A*) and heuristic (Manhattan).
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected algorithm.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::ALL[self.algorithm_index]
    }

    /// The currently selected heuristic.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        Heuristic::ALL[self.heuristic_index]
    }

    /// Advance to the next algorithm, wrapping around.
    pub fn cycle_algorithm(&mut self) {
        self.algorithm_index = (self.algorithm_index + 1) % Algorithm::ALL.len();
    }

    /// Advance to the next heuristic, wrapping around.
    pub fn cycle_heuristic(&mut self) {
        self.heuristic_index = (self.heuristic_index + 1) % Heuristic::ALL.len();
    }

    /// Dispatch a run to the current selection. See [`Algorithm::search`]
    /// for the contract.
    pub fn run(
        &self,
        grid: &Grid,
        start: Pos,
        end: Pos,
        ctx: &Context,
        on_visit: Option<&mut dyn FnMut()>,
    ) -> Result<Vec<Pos>, SearchError> {
        self.algorithm()
            .search(grid, start, end, self.heuristic(), ctx, on_visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::NodeState;

    #[test]
    fn cycling_wraps_modulo_list_length() {
        let mut pf = PathFinder::new();
        assert_eq!(pf.algorithm(), Algorithm::AStar);
        for _ in 0..Algorithm::ALL.len() {
            pf.cycle_algorithm();
        }
        assert_eq!(pf.algorithm(), Algorithm::AStar);

        assert_eq!(pf.heuristic(), Heuristic::Manhattan);
        for _ in 0..Heuristic::ALL.len() {
            pf.cycle_heuristic();
        }
        assert_eq!(pf.heuristic(), Heuristic::Manhattan);
    }

    #[test]
    fn display_names_are_stable() {
        let mut pf = PathFinder::new();
        assert_eq!(pf.algorithm().name(), "A*");
        pf.cycle_algorithm();
        assert_eq!(pf.algorithm().name(), "Dijkstra");
        pf.cycle_algorithm();
        assert_eq!(pf.algorithm().name(), "BFS");
        assert_eq!(pf.heuristic().name(), "Manhattan");
    }

    #[test]
    fn run_dispatches_to_the_selection() {
        let grid = Grid::new(5, 5);
        let start = Pos::new(0, 0);
        let end = Pos::new(4, 4);
        grid[start].set_state(NodeState::Start);
        grid[end].set_state(NodeState::End);
        grid.update_all_neighbors();

        let mut pf = PathFinder::new();
        pf.cycle_algorithm();
        pf.cycle_algorithm(); // BFS
        let path = pf.run(&grid, start, end, &Context::new(), None).unwrap();
        assert_eq!(path.len(), 9);
    }
}
