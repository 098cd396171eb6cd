//! **gridpath-core** — grid/node model for the gridpath visualizer.
//!
//! This crate provides the data model the search engine and the visual
//! shell share: a fixed-size [`Grid`] of [`Node`]s, each holding a
//! positional identity ([`Pos`]), a concurrently readable display state
//! ([`NodeState`]), and worker-confined search links (parent, neighbors).

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::Pos;
pub use grid::Grid;
pub use node::{Node, NodeState};
