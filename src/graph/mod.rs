//! The resolved graph data model: typed pins, nodes, edges, and the
//! composite [`Graph`] produced by the instantiation engine.

pub mod edge;
pub mod node;
pub mod pin;

pub use edge::*;
pub use node::*;
pub use pin::*;

use serde::Serialize;

/// The concrete node-and-wire structure produced by one instantiation.
///
/// Invariants: node ids are unique; every edge endpoint names a node in
/// `nodes`; every handle names a pin on the correct side of its node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
