//! The connection policy: incremental, rule-enforcing edits to a live edge
//! collection.
//!
//! The rules model a strict flow-graph execution discipline: a data input
//! reads from at most one wire, and an exec output drives at most one
//! downstream edge. The collection is single-owner by contract; all
//! mutation goes through [`EdgeSet`], and invocation is assumed to be
//! sequential (UI-event-driven). A multi-threaded host must add its own
//! mutual exclusion around the set and its node lookup.

use crate::graph::{Edge, Node, PinDefinition, PinDirection};

/// A pending connection between two already-resolved pin handles.
#[derive(Debug, Clone)]
pub struct Connection {
    pub source: String,
    pub source_handle: String,
    pub target: String,
    pub target_handle: String,
}

/// The single-owner mutable collection of live edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    next_id: u64,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an instantiated graph's edges as the starting state.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let next_id = edges.len() as u64;
        Self { edges, next_id }
    }

    /// Applies one more connection under the flow-graph rules:
    ///
    /// 1. the wire's color and weight come from the source pin's type;
    /// 2. a data (non-exec) target pin evicts any edge already terminating
    ///    at that exact handle;
    /// 3. an Exec source pin evicts any edge already originating at that
    ///    exact handle;
    /// 4. the new edge is appended.
    pub fn connect(&mut self, nodes: &[Node], connection: Connection) -> &Edge {
        let source_pin = find_pin(nodes, &connection.source, PinDirection::Output, &connection.source_handle);
        let target_pin = find_pin(nodes, &connection.target, PinDirection::Input, &connection.target_handle);

        let style = source_pin
            .map(|pin| pin.pin_type.wire_style())
            .unwrap_or_default();

        if let Some(target_pin) = target_pin {
            if !target_pin.pin_type.is_exec() {
                self.edges
                    .retain(|e| e.target_handle != connection.target_handle);
            }
        }

        if let Some(source_pin) = source_pin {
            if source_pin.pin_type.is_exec() {
                self.edges
                    .retain(|e| e.source_handle != connection.source_handle);
            }
        }

        let id = format!("link_{}", self.next_id);
        self.next_id += 1;

        self.edges.push(Edge {
            id,
            source: connection.source,
            target: connection.target,
            source_handle: connection.source_handle,
            target_handle: connection.target_handle,
            style: Some(style),
        });
        self.edges.last().expect("edge was just pushed")
    }

    /// Removes one edge by id. Returns whether anything was removed.
    pub fn disconnect(&mut self, edge_id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        self.edges.len() != before
    }

    /// Cascade-deletes every edge touching a node. Edges must not outlive
    /// the node set they reference; callers removing a node call this in
    /// the same edit. Returns the number of edges removed.
    pub fn remove_node(&mut self, node_id: &str) -> usize {
        let before = self.edges.len();
        self.edges
            .retain(|e| e.source != node_id && e.target != node_id);
        before - self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn find_pin<'a>(
    nodes: &'a [Node],
    node_id: &str,
    direction: PinDirection,
    handle: &str,
) -> Option<&'a PinDefinition> {
    nodes
        .iter()
        .find(|n| n.id == node_id)?
        .pins(direction)
        .iter()
        .find(|p| p.id == handle)
}
