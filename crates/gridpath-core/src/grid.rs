//! The [`Grid`] type — a fixed-size 2D collection of [`Node`]s.
//!
//! Nodes are stored flat in row-major order and addressed either by
//! [`Pos`] or by flat index (the handle type used for parent links and
//! neighbor lists). The grid is `Sync`: share it with `Arc` between the
//! render loop and a search worker. Tearing a grid down (or calling
//! [`Grid::reset`]) while a worker is alive is a contract violation —
//! cancel and join first.

use std::ops::Index;

use crate::geom::Pos;
use crate::node::{Node, NodeState};

/// A rows × cols grid of [`Node`]s, created once at a fixed size.
#[derive(Debug)]
pub struct Grid {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
}

impl Grid {
    /// Create a new grid with every node `Empty`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let mut nodes = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node::new(Pos::new(row, col)));
            }
        }
        Self { rows, cols, nodes }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether (row, col) lies inside the grid. Pure range check.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Pos) -> Option<usize> {
        if !self.in_bounds(p.row, p.col) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Convert a flat index back to a position.
    ///
    /// # Panics
    /// Panics if `idx` is out of range.
    #[inline]
    pub fn pos_at(&self, idx: usize) -> Pos {
        assert!(idx < self.nodes.len());
        Pos::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.index_of(p).map(|i| &self.nodes[i])
    }

    /// The node at a flat index.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Iterate over all nodes in row-major order. Restartable: each call
    /// yields a fresh iterator over the full grid.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Rebuild every node's neighbor list from the current obstacle
    /// placement: 4-directional, in-bounds, non-obstacle.
    ///
    /// The result depends only on which nodes are currently `Obstacle`,
    /// never on prior neighbor state. O(rows × cols). Must be called
    /// before each search, since obstacles may have changed.
    pub fn update_all_neighbors(&self) {
        for node in self.iter() {
            let mut neighbors = Vec::with_capacity(4);
            for np in node.position().neighbors_4() {
                if let Some(ni) = self.index_of(np) {
                    if !self.nodes[ni].is_obstacle() {
                        neighbors.push(ni);
                    }
                }
            }
            node.set_neighbors(neighbors);
        }
    }

    /// Full reset: discard all nodes and allocate fresh `Empty` ones.
    ///
    /// Requires exclusive access — join any running search worker first.
    pub fn reset(&mut self) {
        *self = Grid::new(self.rows, self.cols);
    }

    /// Search-only reset: nodes in `Visited`/`Path` revert to `Empty`
    /// (parent and neighbors cleared), every other node keeps its state
    /// but loses its neighbor list. `Obstacle`/`Start`/`End` survive.
    ///
    /// Idempotent: a second call is a no-op.
    pub fn reset_search(&self) {
        for node in self.iter() {
            match node.state() {
                NodeState::Visited | NodeState::Path => node.reset(),
                _ => node.clear_neighbors(),
            }
            node.set_parent(None);
        }
    }
}

impl Index<Pos> for Grid {
    type Output = Node;

    /// # Panics
    /// Panics if `p` is out of bounds; use [`Grid::node`] for checked
    /// access.
    fn index(&self, p: Pos) -> &Node {
        self.node(p).expect("position out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(grid: &Grid, row: i32, col: i32) {
        grid[Pos::new(row, col)].set_state(NodeState::Obstacle);
    }

    fn neighbor_positions(grid: &Grid, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::new();
        grid[p].neighbors_into(&mut buf);
        buf.into_iter().map(|i| grid.pos_at(i)).collect()
    }

    #[test]
    fn in_bounds_rejects_out_of_range() {
        let grid = Grid::new(3, 4);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(2, 3));
        assert!(!grid.in_bounds(3, 0));
        assert!(!grid.in_bounds(0, 4));
        assert!(!grid.in_bounds(-1, 0));
    }

    #[test]
    fn index_round_trip_is_row_major() {
        let grid = Grid::new(4, 7);
        let p = Pos::new(2, 5);
        let idx = grid.index_of(p).unwrap();
        assert_eq!(idx, 2 * 7 + 5);
        assert_eq!(grid.pos_at(idx), p);
        assert_eq!(grid.index_of(Pos::new(4, 0)), None);
    }

    #[test]
    fn iteration_is_row_major_and_restartable() {
        let grid = Grid::new(2, 2);
        let order: Vec<Pos> = grid.iter().map(|n| n.position()).collect();
        assert_eq!(
            order,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1)
            ]
        );
        // Second call starts over.
        assert_eq!(grid.iter().count(), 4);
    }

    #[test]
    fn neighbors_exclude_obstacles_and_out_of_bounds() {
        let grid = Grid::new(3, 3);
        obstacle(&grid, 1, 0);
        grid.update_all_neighbors();

        // Corner: two in-bounds neighbours, one of them an obstacle.
        let ns = neighbor_positions(&grid, Pos::new(0, 0));
        assert_eq!(ns, vec![Pos::new(0, 1)]);

        // Obstacles never appear in any neighbor list.
        let obstacle_idx = grid.index_of(Pos::new(1, 0)).unwrap();
        for node in grid.iter() {
            let mut buf = Vec::new();
            node.neighbors_into(&mut buf);
            assert!(!buf.contains(&obstacle_idx));
        }
    }

    #[test]
    fn update_all_neighbors_is_order_independent() {
        let grid = Grid::new(3, 3);
        obstacle(&grid, 1, 1);
        grid.update_all_neighbors();
        let first = neighbor_positions(&grid, Pos::new(0, 1));

        // Rebuilding from the same obstacle placement gives the same
        // result, regardless of the stale lists in between.
        grid[Pos::new(0, 1)].set_neighbors(vec![0, 1, 2, 3]);
        grid.update_all_neighbors();
        assert_eq!(neighbor_positions(&grid, Pos::new(0, 1)), first);
    }

    #[test]
    fn reset_search_is_idempotent_and_preserves_markers() {
        let grid = Grid::new(3, 3);
        grid[Pos::new(0, 0)].set_state(NodeState::Start);
        grid[Pos::new(2, 2)].set_state(NodeState::End);
        obstacle(&grid, 1, 1);
        grid[Pos::new(0, 1)].set_state(NodeState::Visited);
        grid[Pos::new(0, 2)].set_state(NodeState::Path);

        grid.reset_search();
        grid.reset_search();

        assert_eq!(grid[Pos::new(0, 0)].state(), NodeState::Start);
        assert_eq!(grid[Pos::new(2, 2)].state(), NodeState::End);
        assert_eq!(grid[Pos::new(1, 1)].state(), NodeState::Obstacle);
        assert_eq!(grid[Pos::new(0, 1)].state(), NodeState::Empty);
        assert_eq!(grid[Pos::new(0, 2)].state(), NodeState::Empty);
    }

    #[test]
    fn reset_search_clears_all_neighbor_lists() {
        let grid = Grid::new(2, 2);
        grid.update_all_neighbors();
        grid.reset_search();
        let mut buf = Vec::new();
        for node in grid.iter() {
            node.neighbors_into(&mut buf);
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn full_reset_discards_everything() {
        let mut grid = Grid::new(2, 2);
        obstacle(&grid, 0, 0);
        grid[Pos::new(1, 1)].set_state(NodeState::Start);
        grid.reset();
        for node in grid.iter() {
            assert_eq!(node.state(), NodeState::Empty);
        }
    }
}
