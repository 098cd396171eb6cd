//! Dijkstra shortest-path search.
//!
//! Mathematically A* with a zero heuristic, but implemented standalone for
//! clarity rather than by delegation.

use std::collections::BinaryHeap;

use gridpath_core::{Grid, NodeState, Pos};

use crate::context::Context;
use crate::error::SearchError;
use crate::frontier::{FrontierRef, reconstruct_path};

/// Dijkstra over unit-cost 4-directional edges. Same loop shape as A*,
/// with a single `dist` table and the frontier keyed by raw distance.
pub(crate) fn search(
    grid: &Grid,
    start_idx: usize,
    end_idx: usize,
    ctx: &Context,
    mut on_visit: Option<&mut dyn FnMut()>,
) -> Result<Vec<Pos>, SearchError> {
    let len = grid.len();

    let mut dist = vec![f64::INFINITY; len];
    let mut closed = vec![false; len];

    dist[start_idx] = 0.0;

    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
    open.push(FrontierRef {
        idx: start_idx,
        f: 0.0,
    });

    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    while !ctx.is_done() {
        let Some(current) = open.pop() else {
            break;
        };
        let ci = current.idx;

        if closed[ci] {
            continue;
        }

        if ci == end_idx {
            return reconstruct_path(grid, start_idx, end_idx);
        }

        let current_dist = dist[ci];
        grid.node_at(ci).neighbors_into(&mut nbuf);

        for &ni in &nbuf {
            if closed[ni] {
                continue;
            }
            let tentative = current_dist + 1.0;
            if tentative < dist[ni] {
                grid.node_at(ni).set_parent(Some(ci));
                dist[ni] = tentative;
            }
            open.push(FrontierRef {
                idx: ni,
                f: dist[ni],
            });
        }

        closed[ci] = true;
        grid.node_at(ci).set_state(NodeState::Visited);
        grid.node_at(start_idx).set_state(NodeState::Start);

        if let Some(cb) = on_visit.as_mut() {
            cb();
        }
    }

    Ok(Vec::new())
}
