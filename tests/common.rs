//! Common test utilities for building plans and ad hoc payloads.
use kairo::prelude::*;

/// Creates a bare node plan for a catalog template.
#[allow(dead_code)]
pub fn node_plan(id: &str, node_key: &str) -> NodePlan {
    NodePlan {
        id: id.to_string(),
        node_key: node_key.to_string(),
        label_override: None,
        comment: None,
        pin_values: None,
    }
}

/// Creates a node plan with literal pin value overrides.
#[allow(dead_code)]
pub fn node_plan_with_values(id: &str, node_key: &str, values: &[(&str, &str)]) -> NodePlan {
    let mut plan = node_plan(id, node_key);
    plan.pin_values = Some(
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    plan
}

/// Creates a symbolic edge plan between two named pins.
#[allow(dead_code)]
pub fn edge_plan(source_node: &str, source_pin: &str, target_node: &str, target_pin: &str) -> EdgePlan {
    EdgePlan {
        id: None,
        source: EndpointPlan {
            node: source_node.to_string(),
            pin: source_pin.to_string(),
        },
        target: EndpointPlan {
            node: target_node.to_string(),
            pin: target_pin.to_string(),
        },
    }
}

/// The three-node sample plan: entry event -> branch -> print.
#[allow(dead_code)]
pub fn sample_plan() -> (Vec<NodePlan>, Vec<EdgePlan>) {
    let nodes = vec![
        node_plan("E1", "CustomEvent"),
        node_plan("B1", "Branch"),
        node_plan("P1", "PrintString"),
    ];
    let edges = vec![
        edge_plan("E1", "then", "B1", "execute"),
        edge_plan("B1", "then", "P1", "execute"),
    ];
    (nodes, edges)
}

/// Creates an ad hoc node with free-form pins, as the generator invents
/// them in loose mode.
#[allow(dead_code)]
pub fn ad_hoc_node(id: &str, label: &str, inputs: Vec<AdHocPin>, outputs: Vec<AdHocPin>) -> AdHocNode {
    AdHocNode {
        id: id.to_string(),
        label: label.to_string(),
        node_type: None,
        inputs,
        outputs,
        comment: None,
        pure: None,
    }
}

/// Creates an untyped ad hoc pin, optionally with a preset id.
#[allow(dead_code)]
pub fn ad_hoc_pin(name: &str, id: Option<&str>, pin_type: Option<PinType>) -> AdHocPin {
    AdHocPin {
        id: id.map(str::to_string),
        name: name.to_string(),
        pin_type,
        default_value: None,
        value: None,
    }
}

/// Creates an ad hoc edge with optional raw handles.
#[allow(dead_code)]
pub fn ad_hoc_edge(
    source: &str,
    source_handle: Option<&str>,
    target: &str,
    target_handle: Option<&str>,
) -> AdHocEdge {
    AdHocEdge {
        id: None,
        source: source.to_string(),
        target: target.to_string(),
        source_handle: source_handle.map(str::to_string),
        target_handle: target_handle.map(str::to_string),
    }
}
