//! Best-effort repair of free-form generator output.
//!
//! When the generator invents nodes instead of referencing catalog keys, the
//! resulting pins and handles are unreliable: casing drifts, handles go
//! missing, structurally required pins are omitted entirely. This module
//! first completes each node's pin set using a fixed, prioritized rule list,
//! then resolves each edge with heuristic handle matching. A bad edge is
//! dropped and reported, never fatal to the rest of the graph.

use crate::graph::{
    Edge, Graph, Node, NodeData, NodeType, PinDefinition, PinIdAllocator, PinType, Position,
};
use crate::plan::{AdHocEdge, AdHocNode, AdHocPin};
use ahash::AHashMap;
use tracing::warn;

/// Keywords marking a raw handle as a control-flow reference.
const EXEC_HINTS: [&str; 4] = ["exec", "then", "true", "out"];

/// Outcome summary of one healing pass. `dropped` must be surfaced to the
/// caller; dropped edges are never silently counted as success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealReport {
    pub healed: usize,
    pub dropped: usize,
}

/// Builds a concrete graph from ad hoc nodes and edges, healing what it can.
pub fn heal_graph(nodes: Vec<AdHocNode>, edges: Vec<AdHocEdge>) -> (Graph, HealReport) {
    let mut concrete: Vec<Node> = nodes.into_iter().map(materialize).collect();
    for node in &mut concrete {
        complete_pins(node);
    }

    let by_index: AHashMap<String, usize> = concrete
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    let mut report = HealReport::default();
    let mut healed_edges = Vec::with_capacity(edges.len());

    for (index, edge) in edges.iter().enumerate() {
        let (Some(&source_idx), Some(&target_idx)) =
            (by_index.get(&edge.source), by_index.get(&edge.target))
        else {
            warn!(
                source = %edge.source,
                target = %edge.target,
                "dropping edge with unknown endpoint node"
            );
            report.dropped += 1;
            continue;
        };

        let source = &concrete[source_idx];
        let target = &concrete[target_idx];

        let Some((source_handle, target_handle)) = heal_edge(
            source,
            target,
            edge.source_handle.as_deref(),
            edge.target_handle.as_deref(),
        ) else {
            warn!(
                source = %edge.source,
                target = %edge.target,
                "dropping edge that could not be healed on one side"
            );
            report.dropped += 1;
            continue;
        };

        let style = source
            .data
            .outputs
            .iter()
            .find(|p| p.id == source_handle)
            .map(|p| p.pin_type.wire_style());

        healed_edges.push(Edge {
            id: edge
                .id
                .clone()
                .unwrap_or_else(|| format!("edge_{}", index)),
            source: source.id.clone(),
            target: target.id.clone(),
            source_handle,
            target_handle,
            style,
        });
        report.healed += 1;
    }

    (
        Graph {
            nodes: concrete,
            edges: healed_edges,
        },
        report,
    )
}

/// Resolves both handles of one edge, independently per side.
///
/// Per side: an exact pin-id match wins; an exec-like raw handle (absent, or
/// containing one of the control-flow keywords) picks the first Exec pin,
/// falling back to the first pin of any type; anything else also falls back
/// to the first pin. A side with zero pins fails the whole edge.
pub fn heal_edge(
    source: &Node,
    target: &Node,
    raw_source_handle: Option<&str>,
    raw_target_handle: Option<&str>,
) -> Option<(String, String)> {
    let source_handle = heal_side(&source.data.outputs, raw_source_handle)?;
    let target_handle = heal_side(&target.data.inputs, raw_target_handle)?;
    Some((source_handle, target_handle))
}

fn heal_side(pins: &[PinDefinition], raw: Option<&str>) -> Option<String> {
    if pins.is_empty() {
        return None;
    }

    if let Some(raw) = raw {
        if let Some(pin) = pins.iter().find(|p| p.id == raw) {
            return Some(pin.id.clone());
        }
    }

    if is_exec_like(raw) {
        if let Some(pin) = pins.iter().find(|p| p.pin_type.is_exec()) {
            return Some(pin.id.clone());
        }
    }

    Some(pins[0].id.clone())
}

fn is_exec_like(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(raw) if raw.is_empty() => true,
        Some(raw) => {
            let lowered = raw.to_ascii_lowercase();
            EXEC_HINTS.iter().any(|hint| lowered.contains(hint))
        }
    }
}

/// Converts an ad hoc node into a concrete one, synthesizing ids for pins
/// that lack them and reserving the ones the generator supplied.
pub fn materialize(node: AdHocNode) -> Node {
    let mut allocator = PinIdAllocator::new();
    for pin in node.inputs.iter().chain(&node.outputs) {
        if let Some(id) = &pin.id {
            allocator.reserve(id);
        }
    }

    let node_id = node.id.clone();
    let to_pin = |pin: AdHocPin, allocator: &mut PinIdAllocator| {
        let pin_type = pin.pin_type.unwrap_or_else(|| infer_pin_type(&pin.name));
        PinDefinition {
            id: pin
                .id
                .unwrap_or_else(|| allocator.allocate(&node_id, &pin.name)),
            name: pin.name,
            pin_type,
            default_value: pin.default_value,
            value: pin.value,
        }
    };

    let inputs: Vec<PinDefinition> = node
        .inputs
        .into_iter()
        .map(|pin| to_pin(pin, &mut allocator))
        .collect();
    let outputs: Vec<PinDefinition> = node
        .outputs
        .into_iter()
        .map(|pin| to_pin(pin, &mut allocator))
        .collect();

    let node_type = node.node_type.unwrap_or(NodeType::Function);
    // Type-based purity derivation is useless here: the generator routinely
    // omits exec pins, which is exactly what completion repairs. Purity for
    // ad hoc nodes comes from the explicit flag or the getter heuristics.
    let pure = node.pure.unwrap_or_else(|| {
        node_type == NodeType::VariableGet || node.label.starts_with("Get ")
    });

    Node {
        id: node.id,
        data: NodeData {
            label: node.label,
            node_type,
            inputs,
            outputs,
            comment: node.comment,
            template_key: None,
            pure,
            style: None,
            description: None,
        },
        position: Position::default(),
    }
}

/// A pin missing its type is typed by its name: control-flow keywords make
/// it Exec, anything else an opaque object reference.
fn infer_pin_type(name: &str) -> PinType {
    if is_exec_like(Some(name)) {
        PinType::Exec
    } else {
        PinType::Object
    }
}

// --- Pin completion -------------------------------------------------------

struct CompletionRule {
    applies: fn(&Node) -> bool,
    fix: fn(&mut Node, &mut PinIdAllocator),
}

/// Label/keyword classification rules, evaluated in order; the first match
/// wins. The heuristics are best-effort by design: a function literally
/// named "Set Piece" will be classified as a setter, and that is accepted.
const COMPLETION_RULES: &[CompletionRule] = &[
    // Conditional: boolean gate with two exec branches.
    CompletionRule {
        applies: |node| node.data.label.eq_ignore_ascii_case("Branch"),
        fix: |node, alloc| {
            ensure_input(node, alloc, "execute", PinType::Exec, None);
            ensure_input(node, alloc, "Condition", PinType::Boolean, Some("true"));
            ensure_output(node, alloc, "then", PinType::Exec);
            ensure_output(node, alloc, "else", PinType::Exec);
        },
    },
    // Fan-out: one exec input driving N exec outputs.
    CompletionRule {
        applies: |node| node.data.label.eq_ignore_ascii_case("Sequence"),
        fix: |node, alloc| {
            ensure_input(node, alloc, "execute", PinType::Exec, None);
            let existing = node
                .data
                .outputs
                .iter()
                .filter(|p| p.pin_type.is_exec())
                .count();
            for i in existing..2 {
                ensure_output(node, alloc, &format!("then_{}", i), PinType::Exec);
            }
        },
    },
    // Loop macros.
    CompletionRule {
        applies: |node| {
            matches!(
                node.data.label.as_str(),
                "For Loop" | "ForLoop" | "For Each Loop" | "While Loop"
            )
        },
        fix: |node, alloc| {
            ensure_input(node, alloc, "execute", PinType::Exec, None);
            ensure_output(node, alloc, "LoopBody", PinType::Exec);
            ensure_output(node, alloc, "Completed", PinType::Exec);
        },
    },
    // Event sources: exec output only, never an exec input.
    CompletionRule {
        applies: |node| {
            node.data.label.starts_with("Event")
                || node.data.label.starts_with("On ")
                || matches!(
                    node.data.node_type,
                    NodeType::Event | NodeType::InputEvent
                )
        },
        fix: |node, alloc| {
            if !node.data.outputs.iter().any(|p| p.pin_type.is_exec()) {
                ensure_output(node, alloc, "then", PinType::Exec);
            }
        },
    },
    // Setters: exec passthrough.
    CompletionRule {
        applies: |node| {
            node.data.label.starts_with("Set ") || node.data.node_type == NodeType::VariableSet
        },
        fix: |node, alloc| {
            ensure_input(node, alloc, "execute", PinType::Exec, None);
            ensure_output(node, alloc, "then", PinType::Exec);
        },
    },
    // Getters: a value pin mistakenly listed among inputs moves to outputs.
    CompletionRule {
        applies: |node| {
            node.data.label.starts_with("Get ") || node.data.node_type == NodeType::VariableGet
        },
        fix: |node, _alloc| {
            if node.data.outputs.is_empty() {
                if let Some(pos) = node
                    .data
                    .inputs
                    .iter()
                    .position(|p| !p.pin_type.is_exec())
                {
                    let pin = node.data.inputs.remove(pos);
                    node.data.outputs.push(pin);
                }
            }
        },
    },
    // Comment bubbles carry no pins.
    CompletionRule {
        applies: |node| node.data.label.to_ascii_lowercase().starts_with("comment"),
        fix: |_node, _alloc| {},
    },
    // Generic fallback: any impure node takes part in the exec chain.
    CompletionRule {
        applies: |node| !node.data.pure,
        fix: |node, alloc| {
            if !node.data.inputs.iter().any(|p| p.pin_type.is_exec()) {
                ensure_input(node, alloc, "execute", PinType::Exec, None);
            }
            if !node.data.outputs.iter().any(|p| p.pin_type.is_exec()) {
                ensure_output(node, alloc, "then", PinType::Exec);
            }
        },
    },
];

/// Ensures structurally expected pins exist on an ad hoc node.
///
/// Runs once per node before edge healing so that the heuristic handle
/// matching has the pins it needs to aim at.
pub fn complete_pins(node: &mut Node) {
    let mut allocator = PinIdAllocator::new();
    for pin in node.data.inputs.iter().chain(&node.data.outputs) {
        allocator.reserve(&pin.id);
    }

    for rule in COMPLETION_RULES {
        if (rule.applies)(node) {
            (rule.fix)(node, &mut allocator);
            break;
        }
    }
}

fn ensure_input(
    node: &mut Node,
    allocator: &mut PinIdAllocator,
    name: &str,
    pin_type: PinType,
    default: Option<&str>,
) {
    if node
        .data
        .inputs
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(name))
    {
        return;
    }
    let node_id = node.id.clone();
    node.data.inputs.push(PinDefinition {
        id: allocator.allocate(&node_id, name),
        name: name.to_string(),
        pin_type,
        default_value: default.map(str::to_string),
        value: default.map(str::to_string),
    });
}

fn ensure_output(node: &mut Node, allocator: &mut PinIdAllocator, name: &str, pin_type: PinType) {
    if node
        .data
        .outputs
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(name))
    {
        return;
    }
    let node_id = node.id.clone();
    node.data.outputs.push(PinDefinition {
        id: allocator.allocate(&node_id, name),
        name: name.to_string(),
        pin_type,
        default_value: None,
        value: None,
    });
}
