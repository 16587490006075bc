//! The graph instantiation engine: turns a symbolic plan into a concrete,
//! validated [`Graph`] against a template catalog.
//!
//! Instantiation is a pure function of its inputs. Identical plans against an
//! identical catalog yield byte-identical node ids, pin ids, and edge lists,
//! and any single failure aborts the whole operation with no partial graph
//! observable by the caller. Incremental, rule-enforcing edits to a live
//! graph are the connection policy's job, not this module's.

use crate::catalog::NodeCatalog;
use crate::error::GraphBuildError;
use crate::graph::{Edge, Graph, Node, NodeData, PinDefinition, PinDirection, PinIdAllocator, Position};
use crate::plan::{EdgePlan, EndpointPlan, NodePlan};
use ahash::AHashMap;
use itertools::Itertools;

/// Instantiates a full graph from node and edge plans.
///
/// Fails with [`GraphBuildError::EmptyPlan`] when no node plans are supplied,
/// [`GraphBuildError::UnknownTemplateKey`] when a plan references a missing
/// template, [`GraphBuildError::DanglingEdgeEndpoint`] when an edge names an
/// unknown node, and [`GraphBuildError::UnresolvedPin`] when a pin reference
/// does not resolve on the expected side.
pub fn instantiate(
    catalog: &NodeCatalog,
    node_plans: &[NodePlan],
    edge_plans: &[EdgePlan],
) -> Result<Graph, GraphBuildError> {
    if node_plans.is_empty() {
        return Err(GraphBuildError::EmptyPlan);
    }

    let mut nodes = Vec::with_capacity(node_plans.len());
    for plan in node_plans {
        nodes.push(instantiate_node(catalog, plan)?);
    }

    let by_id: AHashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut edges = Vec::with_capacity(edge_plans.len());
    for (index, plan) in edge_plans.iter().enumerate() {
        let source_node = lookup_endpoint(&by_id, &plan.source, index)?;
        let target_node = lookup_endpoint(&by_id, &plan.target, index)?;

        let source_handle = resolve_pin(source_node, &plan.source.pin, PinDirection::Output)?;
        let target_handle = resolve_pin(target_node, &plan.target.pin, PinDirection::Input)?;

        edges.push(Edge {
            id: plan
                .id
                .clone()
                .unwrap_or_else(|| format!("edge_{}", index)),
            source: source_node.id.clone(),
            target: target_node.id.clone(),
            source_handle,
            target_handle,
            style: None,
        });
    }

    Ok(Graph { nodes, edges })
}

/// Builds a single node from its plan: resolves the template, synthesizes
/// pin ids (inputs before outputs, in template order), and binds literal
/// values from the plan's overrides or the template defaults.
fn instantiate_node(catalog: &NodeCatalog, plan: &NodePlan) -> Result<Node, GraphBuildError> {
    let template = catalog.get(&plan.node_key)?;
    let mut allocator = PinIdAllocator::new();

    let inputs = template
        .inputs()
        .map(|pin| PinDefinition {
            id: allocator.allocate(&plan.id, &pin.name),
            name: pin.name.clone(),
            pin_type: pin.pin_type,
            default_value: pin.default_value.clone(),
            value: plan
                .pin_values
                .as_ref()
                .and_then(|values| values.get(&pin.name).cloned())
                .or_else(|| pin.default_value.clone()),
        })
        .collect();

    let outputs = template
        .outputs()
        .map(|pin| PinDefinition {
            id: allocator.allocate(&plan.id, &pin.name),
            name: pin.name.clone(),
            pin_type: pin.pin_type,
            default_value: None,
            value: None,
        })
        .collect();

    Ok(Node {
        id: plan.id.clone(),
        data: NodeData {
            label: plan
                .label_override
                .clone()
                .unwrap_or_else(|| template.label.clone()),
            node_type: template.node_type,
            inputs,
            outputs,
            comment: plan.comment.clone(),
            template_key: Some(template.key.clone()),
            pure: template.pure,
            style: Some(template.style.clone()),
            description: Some(template.description.clone()),
        },
        position: Position::default(),
    })
}

fn lookup_endpoint<'a>(
    by_id: &AHashMap<&str, &'a Node>,
    endpoint: &EndpointPlan,
    edge_index: usize,
) -> Result<&'a Node, GraphBuildError> {
    by_id
        .get(endpoint.node.as_str())
        .copied()
        .ok_or_else(|| GraphBuildError::DanglingEdgeEndpoint {
            edge_index,
            missing_node_id: endpoint.node.clone(),
        })
}

/// Resolves a symbolic pin reference to its synthesized handle, reporting
/// the available pin names on failure for diagnostics.
fn resolve_pin(
    node: &Node,
    requested: &str,
    direction: PinDirection,
) -> Result<String, GraphBuildError> {
    node.find_pin(direction, requested)
        .map(|pin| pin.id.clone())
        .ok_or_else(|| GraphBuildError::UnresolvedPin {
            node_id: node.id.clone(),
            requested: requested.to_string(),
            direction,
            available: node.pins(direction).iter().map(|p| p.name.as_str()).join(", "),
        })
}
