//! The [`Node`] type — a single grid cell with concurrently readable state.
//!
//! A node's display state (`Empty`, `Start`, `Obstacle`, ...) is stored in
//! an [`AtomicU8`] so a render loop may read it while a search worker
//! writes it, without tearing. Search bookkeeping (parent link, neighbor
//! list) lives behind a per-node mutex and is only touched by the worker
//! thread during a run.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::geom::Pos;

/// The display/search state of a [`Node`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum NodeState {
    #[default]
    Empty = 0,
    Start = 1,
    End = 2,
    Obstacle = 3,
    Visited = 4,
    Path = 5,
}

impl NodeState {
    #[inline]
    pub(crate) const fn from_u8(v: u8) -> NodeState {
        match v {
            1 => NodeState::Start,
            2 => NodeState::End,
            3 => NodeState::Obstacle,
            4 => NodeState::Visited,
            5 => NodeState::Path,
            _ => NodeState::Empty,
        }
    }
}

/// Worker-confined search bookkeeping.
#[derive(Debug, Default)]
struct Links {
    /// Back-reference into the grid's node storage, forming the
    /// reconstruction tree. Never an owning reference.
    parent: Option<usize>,
    /// Flat indices of in-bounds, non-obstacle cardinal neighbours.
    /// Recomputed before each search, not persisted.
    neighbors: Vec<usize>,
}

/// A single grid cell.
///
/// Identity is positional and immutable; everything else is interior
/// mutability so the grid can be shared (`Arc<Grid>`) between the render
/// loop and a search worker.
#[derive(Debug)]
pub struct Node {
    pos: Pos,
    state: AtomicU8,
    links: Mutex<Links>,
}

impl Node {
    pub(crate) fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: AtomicU8::new(NodeState::Empty as u8),
            links: Mutex::new(Links::default()),
        }
    }

    /// The (row, column) identity of this node.
    #[inline]
    pub fn position(&self) -> Pos {
        self.pos
    }

    /// Read the current state. Safe from any thread.
    #[inline]
    pub fn state(&self) -> NodeState {
        NodeState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// Replace the state. Safe from any thread; a concurrent reader sees
    /// either the old or the new value, never a mix.
    #[inline]
    pub fn set_state(&self, state: NodeState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.state() == NodeState::Obstacle
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.state() == NodeState::Visited
    }

    /// Reset to `Empty`, clearing the parent link and neighbor list.
    pub fn reset(&self) {
        self.set_state(NodeState::Empty);
        let mut links = self.links.lock().unwrap();
        links.parent = None;
        links.neighbors.clear();
    }

    /// The parent link, as a flat index into the grid's node storage.
    pub fn parent(&self) -> Option<usize> {
        self.links.lock().unwrap().parent
    }

    pub fn set_parent(&self, parent: Option<usize>) {
        self.links.lock().unwrap().parent = parent;
    }

    /// Copy this node's neighbor indices into `buf`, clearing it first.
    pub fn neighbors_into(&self, buf: &mut Vec<usize>) {
        buf.clear();
        buf.extend_from_slice(&self.links.lock().unwrap().neighbors);
    }

    /// Replace the neighbor list.
    pub fn set_neighbors(&self, neighbors: Vec<usize>) {
        self.links.lock().unwrap().neighbors = neighbors;
    }

    pub(crate) fn clear_neighbors(&self) {
        self.links.lock().unwrap().neighbors.clear();
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_atomic_storage() {
        let node = Node::new(Pos::new(2, 3));
        assert_eq!(node.state(), NodeState::Empty);
        node.set_state(NodeState::Obstacle);
        assert!(node.is_obstacle());
        node.set_state(NodeState::Visited);
        assert!(node.is_visited());
    }

    #[test]
    fn reset_clears_links_and_state() {
        let node = Node::new(Pos::ZERO);
        node.set_state(NodeState::Path);
        node.set_parent(Some(7));
        node.set_neighbors(vec![1, 2]);

        node.reset();

        assert_eq!(node.state(), NodeState::Empty);
        assert_eq!(node.parent(), None);
        let mut buf = vec![99];
        node.neighbors_into(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn equality_is_positional() {
        let a = Node::new(Pos::new(1, 2));
        let b = Node::new(Pos::new(1, 2));
        b.set_state(NodeState::Obstacle);
        assert_eq!(a, b);
        assert_ne!(a, Node::new(Pos::new(2, 1)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_state_round_trip() {
        let s = NodeState::Obstacle;
        let json = serde_json::to_string(&s).unwrap();
        let back: NodeState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
