//! Unit tests for the graph instantiation engine.
mod common;
use common::*;
use kairo::prelude::*;

#[test]
fn test_instantiate_single_node() {
    let catalog = standard_catalog();
    let graph = instantiate(catalog, &[node_plan("N1", "PrintString")], &[]).unwrap();

    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());

    let node = &graph.nodes[0];
    assert_eq!(node.id, "N1");
    assert_eq!(node.data.label, "Print String");
    assert_eq!(node.data.node_type, NodeType::Function);
    assert_eq!(node.data.template_key.as_deref(), Some("PrintString"));
    assert!(!node.data.pure);
}

#[test]
fn test_pin_ids_are_prefixed_and_unique() {
    let catalog = standard_catalog();
    let graph = instantiate(catalog, &[node_plan("P1", "PrintString")], &[]).unwrap();
    let node = &graph.nodes[0];

    let mut all_ids: Vec<&str> = node
        .data
        .inputs
        .iter()
        .chain(&node.data.outputs)
        .map(|p| p.id.as_str())
        .collect();

    assert!(all_ids.iter().all(|id| id.starts_with("P1_")));

    let total = all_ids.len();
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), total, "pin ids must be unique within a node");
}

#[test]
fn test_pin_ids_strip_non_alphanumerics() {
    let catalog = standard_catalog();
    let graph = instantiate(catalog, &[node_plan("T1", "EventTick")], &[]).unwrap();
    let node = &graph.nodes[0];

    // "Delta Seconds" loses its space in the synthesized id.
    assert!(node.data.outputs.iter().any(|p| p.id == "T1_DeltaSeconds"));
    assert!(node.data.outputs.iter().any(|p| p.id == "T1_then"));
}

#[test]
fn test_template_defaults_bind_as_values() {
    let catalog = standard_catalog();
    let graph = instantiate(catalog, &[node_plan("B1", "Branch")], &[]).unwrap();
    let condition = graph.nodes[0]
        .data
        .inputs
        .iter()
        .find(|p| p.name == "Condition")
        .unwrap();

    assert_eq!(condition.pin_type, PinType::Boolean);
    assert_eq!(condition.default_value.as_deref(), Some("true"));
    assert_eq!(condition.value.as_deref(), Some("true"));
}

#[test]
fn test_pin_value_overrides_beat_defaults() {
    let catalog = standard_catalog();
    let plan = node_plan_with_values("P1", "PrintString", &[("InString", "Hi")]);
    let graph = instantiate(catalog, &[plan], &[]).unwrap();
    let node = &graph.nodes[0];

    let in_string = node.data.inputs.iter().find(|p| p.name == "InString").unwrap();
    assert_eq!(in_string.value.as_deref(), Some("Hi"));
    assert_eq!(in_string.default_value.as_deref(), Some("Hello"));

    // Untouched pins keep their template defaults.
    let duration = node.data.inputs.iter().find(|p| p.name == "Duration").unwrap();
    assert_eq!(duration.value.as_deref(), Some("2.000000"));
}

#[test]
fn test_label_override_and_comment() {
    let catalog = standard_catalog();
    let mut plan = node_plan("E1", "EventBeginPlay");
    plan.label_override = Some("Game Start".to_string());
    plan.comment = Some("entry point".to_string());

    let graph = instantiate(catalog, &[plan], &[]).unwrap();
    assert_eq!(graph.nodes[0].data.label, "Game Start");
    assert_eq!(graph.nodes[0].data.comment.as_deref(), Some("entry point"));
}

#[test]
fn test_edge_resolution_by_pin_name() {
    let catalog = standard_catalog();
    let (nodes, edges) = sample_plan();
    let graph = instantiate(catalog, &nodes, &edges).unwrap();

    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 2);

    let first = &graph.edges[0];
    assert_eq!(first.id, "edge_0");
    assert_eq!(first.source, "E1");
    assert_eq!(first.target, "B1");
    assert_eq!(first.source_handle, "E1_then");
    assert_eq!(first.target_handle, "B1_execute");

    let second = &graph.edges[1];
    assert_eq!(second.id, "edge_1");
    assert_eq!(second.source_handle, "B1_then");
    assert_eq!(second.target_handle, "P1_execute");
}

#[test]
fn test_edge_resolution_is_case_insensitive() {
    let catalog = standard_catalog();
    let nodes = vec![node_plan("E1", "EventBeginPlay"), node_plan("P1", "PrintString")];
    let edges = vec![edge_plan("E1", "THEN", "P1", "Execute")];

    let graph = instantiate(catalog, &nodes, &edges).unwrap();
    assert_eq!(graph.edges[0].source_handle, "E1_then");
    assert_eq!(graph.edges[0].target_handle, "P1_execute");
}

#[test]
fn test_edge_resolution_accepts_pin_id_fallback() {
    let catalog = standard_catalog();
    let nodes = vec![node_plan("E1", "EventBeginPlay"), node_plan("P1", "PrintString")];
    let edges = vec![edge_plan("E1", "E1_then", "P1", "P1_execute")];

    let graph = instantiate(catalog, &nodes, &edges).unwrap();
    assert_eq!(graph.edges[0].source_handle, "E1_then");
    assert_eq!(graph.edges[0].target_handle, "P1_execute");
}

#[test]
fn test_explicit_edge_id_is_kept() {
    let catalog = standard_catalog();
    let nodes = vec![node_plan("E1", "EventBeginPlay"), node_plan("P1", "PrintString")];
    let mut edge = edge_plan("E1", "then", "P1", "execute");
    edge.id = Some("wire-7".to_string());

    let graph = instantiate(catalog, &nodes, &[edge]).unwrap();
    assert_eq!(graph.edges[0].id, "wire-7");
}

#[test]
fn test_instantiation_is_deterministic() {
    let catalog = standard_catalog();
    let (nodes, edges) = sample_plan();

    let first = instantiate(catalog, &nodes, &edges).unwrap();
    let second = instantiate(catalog, &nodes, &edges).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_empty_plan_fails() {
    let catalog = standard_catalog();
    let result = instantiate(catalog, &[], &[]);
    assert_eq!(result.unwrap_err(), GraphBuildError::EmptyPlan);
}

#[test]
fn test_unknown_template_key_fails() {
    let catalog = standard_catalog();
    let result = instantiate(catalog, &[node_plan("N1", "NoSuchTemplate")], &[]);
    assert_eq!(
        result.unwrap_err(),
        GraphBuildError::UnknownTemplateKey("NoSuchTemplate".to_string())
    );
}

#[test]
fn test_dangling_edge_endpoint_fails() {
    let catalog = standard_catalog();
    let nodes = vec![node_plan("E1", "EventBeginPlay")];
    let edges = vec![edge_plan("E1", "then", "Ghost", "execute")];

    let err = instantiate(catalog, &nodes, &edges).unwrap_err();
    assert_eq!(
        err,
        GraphBuildError::DanglingEdgeEndpoint {
            edge_index: 0,
            missing_node_id: "Ghost".to_string(),
        }
    );
}

#[test]
fn test_unresolved_pin_fails_with_available_names() {
    let catalog = standard_catalog();
    let nodes = vec![node_plan("E1", "EventBeginPlay"), node_plan("B1", "Branch")];
    let edges = vec![edge_plan("E1", "then", "B1", "bogus")];

    let err = instantiate(catalog, &nodes, &edges).unwrap_err();
    match err {
        GraphBuildError::UnresolvedPin {
            node_id,
            requested,
            direction,
            available,
        } => {
            assert_eq!(node_id, "B1");
            assert_eq!(requested, "bogus");
            assert_eq!(direction, PinDirection::Input);
            assert_eq!(available, "execute, Condition");
        }
        other => panic!("expected UnresolvedPin, got {:?}", other),
    }
}

#[test]
fn test_failure_yields_no_partial_graph() {
    let catalog = standard_catalog();
    // A valid first edge followed by a broken one: the whole call must fail.
    let (nodes, mut edges) = sample_plan();
    edges.push(edge_plan("B1", "else", "Ghost", "execute"));

    assert!(instantiate(catalog, &nodes, &edges).is_err());
}

#[test]
fn test_pure_nodes_have_no_exec_pins() {
    let catalog = standard_catalog();
    let graph = instantiate(catalog, &[node_plan("A1", "Add_IntInt")], &[]).unwrap();
    let node = &graph.nodes[0];

    assert!(node.data.pure);
    assert!(
        node.data
            .inputs
            .iter()
            .chain(&node.data.outputs)
            .all(|p| !p.pin_type.is_exec())
    );
}
