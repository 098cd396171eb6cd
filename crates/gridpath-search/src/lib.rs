//! **gridpath-search** — search algorithms for the gridpath visualizer.
//!
//! This crate implements the pathfinding engine on top of
//! [`gridpath_core`]'s grid/node model:
//!
//! - **A\*** with a pluggable [`Heuristic`] (Manhattan, Euclidean,
//!   Chebyshev, Zero)
//! - **Dijkstra** (standalone, not A*-with-zero-heuristic by delegation)
//! - **BFS** unweighted shortest path
//!
//! All algorithms share one contract ([`Algorithm::search`]): cooperative
//! cancellation via [`Context`], a per-visit callback for animation pacing,
//! and an empty path for "no path", "cancelled" and degenerate inputs.
//! [`PathFinder`] holds the cyclable algorithm/heuristic selection the
//! interactive shell drives.

mod algorithm;
mod astar;
mod bfs;
mod context;
mod dijkstra;
mod error;
mod frontier;
mod heuristic;
mod pathfinder;

pub use algorithm::Algorithm;
pub use context::Context;
pub use error::SearchError;
pub use heuristic::Heuristic;
pub use pathfinder::PathFinder;
