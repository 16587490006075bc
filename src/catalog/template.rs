use crate::graph::{NodeStyle, NodeType, PinDirection, PinType};

/// A pin as declared on a template: named and typed, but without a
/// synthesized id (ids only exist on instantiated nodes).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePin {
    pub name: String,
    pub pin_type: PinType,
    pub direction: PinDirection,
    pub default_value: Option<String>,
}

impl TemplatePin {
    pub fn input(name: &str, pin_type: PinType) -> Self {
        Self {
            name: name.to_string(),
            pin_type,
            direction: PinDirection::Input,
            default_value: None,
        }
    }

    pub fn output(name: &str, pin_type: PinType) -> Self {
        Self {
            name: name.to_string(),
            pin_type,
            direction: PinDirection::Output,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }
}

/// An immutable blueprint for one reusable node kind.
///
/// Many templates may share a label; the catalog key disambiguates them.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub key: String,
    pub label: String,
    pub node_type: NodeType,
    pub description: String,
    pub pure: bool,
    pub pins: Vec<TemplatePin>,
    pub style: NodeStyle,
}

impl NodeTemplate {
    /// Builds a template, deriving `pure` and the per-category palette.
    ///
    /// A template is pure iff it is a variable getter or declares no Exec
    /// pin at all.
    pub fn new(
        key: &str,
        label: &str,
        node_type: NodeType,
        description: &str,
        pins: Vec<TemplatePin>,
    ) -> Self {
        let pure = node_type == NodeType::VariableGet
            || !pins.iter().any(|pin| pin.pin_type.is_exec());
        Self {
            key: key.to_string(),
            label: label.to_string(),
            node_type,
            description: description.to_string(),
            pure,
            pins,
            style: palette(node_type),
        }
    }

    pub fn inputs(&self) -> impl Iterator<Item = &TemplatePin> {
        self.pins
            .iter()
            .filter(|pin| pin.direction == PinDirection::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &TemplatePin> {
        self.pins
            .iter()
            .filter(|pin| pin.direction == PinDirection::Output)
    }
}

/// Header/border accents per node category.
fn palette(node_type: NodeType) -> NodeStyle {
    let (header, border) = match node_type {
        NodeType::Event | NodeType::InputEvent => ("#8F0000", "#ff6b6b"),
        NodeType::FlowControl | NodeType::Macro => ("#505050", "#aaaaaa"),
        NodeType::VariableGet => ("#376F37", "#8f8"),
        NodeType::VariableSet => ("#9ca3af", "#9ca3af"),
        NodeType::Function => ("#19457E", "#5c9aff"),
    };
    NodeStyle {
        header_color: Some(header.to_string()),
        border_color: Some(border.to_string()),
    }
}
