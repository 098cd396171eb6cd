//! Breadth-first search — unweighted, guarantees fewest edges.

use std::collections::VecDeque;

use gridpath_core::{Grid, NodeState, Pos};

use crate::context::Context;
use crate::error::SearchError;
use crate::frontier::reconstruct_path;

/// BFS with a strict FIFO frontier. Frontier membership is tracked in an
/// internal `seen` table so that re-asserting the Start/End display states
/// cannot re-admit those nodes to the queue.
pub(crate) fn search(
    grid: &Grid,
    start_idx: usize,
    end_idx: usize,
    ctx: &Context,
    mut on_visit: Option<&mut dyn FnMut()>,
) -> Result<Vec<Pos>, SearchError> {
    let mut seen = vec![false; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    seen[start_idx] = true;
    queue.push_back(start_idx);
    grid.node_at(start_idx).set_state(NodeState::Visited);

    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    while !ctx.is_done() {
        let Some(ci) = queue.pop_front() else {
            break;
        };

        if ci == end_idx {
            return reconstruct_path(grid, start_idx, end_idx);
        }

        grid.node_at(ci).neighbors_into(&mut nbuf);
        for &ni in &nbuf {
            if seen[ni] || grid.node_at(ni).is_obstacle() {
                continue;
            }
            grid.node_at(ni).set_parent(Some(ci));
            seen[ni] = true;
            grid.node_at(ni).set_state(NodeState::Visited);
            queue.push_back(ni);
        }

        grid.node_at(start_idx).set_state(NodeState::Start);
        grid.node_at(end_idx).set_state(NodeState::End);

        if let Some(cb) = on_visit.as_mut() {
            cb();
        }
    }

    Ok(Vec::new())
}
