//! Unit tests for the template catalog.
use kairo::prelude::*;

#[test]
fn test_standard_catalog_contains_core_templates() {
    let catalog = standard_catalog();
    for key in ["EventBeginPlay", "Branch", "Sequence", "PrintString", "GetHealth"] {
        assert!(catalog.contains(key), "missing template {}", key);
    }
    assert!(!catalog.contains("NotATemplate"));
}

#[test]
fn test_get_unknown_key_is_an_error() {
    let err = standard_catalog().get("NotATemplate").unwrap_err();
    assert_eq!(err, GraphBuildError::UnknownTemplateKey("NotATemplate".to_string()));
}

#[test]
fn test_purity_is_derived_from_structure() {
    let catalog = standard_catalog();
    assert!(catalog.get("GetHealth").unwrap().pure);
    assert!(catalog.get("Add_IntInt").unwrap().pure);
    assert!(!catalog.get("SetHealth").unwrap().pure);
    assert!(!catalog.get("PrintString").unwrap().pure);
    assert!(!catalog.get("Branch").unwrap().pure);
}

#[test]
fn test_templates_carry_type_palette() {
    let catalog = standard_catalog();
    let event = catalog.get("EventBeginPlay").unwrap();
    assert_eq!(event.style.header_color.as_deref(), Some("#8F0000"));

    let getter = catalog.get("GetHealth").unwrap();
    assert_eq!(getter.style.header_color.as_deref(), Some("#376F37"));
    assert_eq!(getter.style.border_color.as_deref(), Some("#8f8"));

    // Setters render in the neutral wire color, not the getter green.
    let setter = catalog.get("SetHealth").unwrap();
    assert_eq!(setter.style.header_color.as_deref(), Some("#9ca3af"));
    assert_eq!(setter.style.border_color.as_deref(), Some("#9ca3af"));
}

#[test]
fn test_insert_replaces_in_place() {
    let mut catalog = NodeCatalog::new();
    catalog.insert(NodeTemplate::new(
        "A",
        "First A",
        NodeType::Function,
        "",
        vec![],
    ));
    catalog.insert(NodeTemplate::new(
        "B",
        "B",
        NodeType::Function,
        "",
        vec![],
    ));
    catalog.insert(NodeTemplate::new(
        "A",
        "Second A",
        NodeType::Function,
        "",
        vec![],
    ));

    assert_eq!(catalog.len(), 2);
    let keys: Vec<&str> = catalog.keys().collect();
    assert_eq!(keys, vec!["A", "B"]);
    assert_eq!(catalog.get("A").unwrap().label, "Second A");
}

#[test]
fn test_summary_line_format() {
    let catalog = NodeCatalog::new().with_template(NodeTemplate::new(
        "Branch",
        "Branch",
        NodeType::FlowControl,
        "",
        vec![
            TemplatePin::input("execute", PinType::Exec),
            TemplatePin::input("Condition", PinType::Boolean).with_default("true"),
            TemplatePin::output("then", PinType::Exec),
            TemplatePin::output("else", PinType::Exec),
        ],
    ));

    assert_eq!(
        catalog.summary(),
        "- Branch: \"Branch\" (flow_control) Pins: In execute (exec), In Condition (boolean), Out then (exec), Out else (exec)"
    );
}

#[test]
fn test_summary_is_deterministic() {
    let catalog = standard_catalog();
    let first = catalog.summary();
    let second = catalog.summary();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), catalog.len());
}

#[test]
fn test_keys_follow_definition_order() {
    let catalog = standard_catalog();
    let keys: Vec<&str> = catalog.keys().collect();
    assert_eq!(keys[0], "EventBeginPlay");

    let branch_pos = keys.iter().position(|k| *k == "Branch").unwrap();
    let print_pos = keys.iter().position(|k| *k == "PrintString").unwrap();
    assert!(branch_pos < print_pos);
}
