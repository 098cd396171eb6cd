//! A* shortest-path search.

use std::collections::BinaryHeap;

use gridpath_core::{Grid, NodeState, Pos};

use crate::context::Context;
use crate::error::SearchError;
use crate::frontier::{FrontierRef, reconstruct_path};
use crate::heuristic::Heuristic;

/// A* over unit-cost 4-directional edges.
///
/// `g` is the best known distance from start, `f = g + h(end)`. The
/// frontier is a min-f binary heap with lazy deletion: every relaxation
/// attempt pushes the neighbor's current `f`, improved or not, and entries
/// whose node was already finalized are skipped on pop.
pub(crate) fn search(
    grid: &Grid,
    start_idx: usize,
    end_idx: usize,
    heuristic: Heuristic,
    ctx: &Context,
    mut on_visit: Option<&mut dyn FnMut()>,
) -> Result<Vec<Pos>, SearchError> {
    let len = grid.len();
    let end_pos = grid.pos_at(end_idx);

    let mut g = vec![f64::INFINITY; len];
    let mut f = vec![f64::INFINITY; len];
    let mut closed = vec![false; len];

    g[start_idx] = 0.0;
    f[start_idx] = heuristic.estimate(grid.pos_at(start_idx), end_pos);

    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
    open.push(FrontierRef {
        idx: start_idx,
        f: f[start_idx],
    });

    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    while !ctx.is_done() {
        let Some(current) = open.pop() else {
            break;
        };
        let ci = current.idx;

        // Stale duplicate of an already-finalized node.
        if closed[ci] {
            continue;
        }

        if ci == end_idx {
            return reconstruct_path(grid, start_idx, end_idx);
        }

        let current_g = g[ci];
        grid.node_at(ci).neighbors_into(&mut nbuf);

        for &ni in &nbuf {
            if closed[ni] {
                continue;
            }
            let tentative_g = current_g + 1.0;
            if tentative_g < g[ni] {
                grid.node_at(ni).set_parent(Some(ci));
                g[ni] = tentative_g;
                f[ni] = tentative_g + heuristic.estimate(grid.pos_at(ni), end_pos);
            }
            // Pushed whether or not the score improved; the closed check
            // above discards the extra entries later.
            open.push(FrontierRef { idx: ni, f: f[ni] });
        }

        closed[ci] = true;
        grid.node_at(ci).set_state(NodeState::Visited);
        // The start node's display state was just overwritten on its own
        // finalization; keep it marked.
        grid.node_at(start_idx).set_state(NodeState::Start);

        if let Some(cb) = on_visit.as_mut() {
            cb();
        }
    }

    // Frontier exhausted or cancelled.
    Ok(Vec::new())
}
