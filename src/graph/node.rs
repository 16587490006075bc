use super::pin::{PinDefinition, PinDirection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic category of a node, mirroring the classes of an executable
/// flow-graph editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Event,
    InputEvent,
    Function,
    Macro,
    FlowControl,
    VariableGet,
    VariableSet,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Event => "event",
            NodeType::InputEvent => "input_event",
            NodeType::Function => "function",
            NodeType::Macro => "macro",
            NodeType::FlowControl => "flow_control",
            NodeType::VariableGet => "variable_get",
            NodeType::VariableSet => "variable_set",
        };
        f.write_str(name)
    }
}

/// Visual accent colors rendered by the node widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Canvas coordinates, filled in by the external layout collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Everything a renderer needs to draw one node. Immutable after
/// instantiation within one generation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub node_type: NodeType,
    pub inputs: Vec<PinDefinition>,
    pub outputs: Vec<PinDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_key: Option<String>,
    pub pure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A concrete node in the resolved graph. `position` is the only field that
/// mutates after construction (the layout step owns it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn pins(&self, direction: PinDirection) -> &[PinDefinition] {
        match direction {
            PinDirection::Input => &self.data.inputs,
            PinDirection::Output => &self.data.outputs,
        }
    }

    /// Resolves a symbolic pin reference on one side of the node.
    ///
    /// Matching is case-insensitive and prefers the human-facing pin name;
    /// a synthesized pin id is accepted as a fallback.
    pub fn find_pin(&self, direction: PinDirection, needle: &str) -> Option<&PinDefinition> {
        let pins = self.pins(direction);
        pins.iter()
            .find(|p| p.name.eq_ignore_ascii_case(needle))
            .or_else(|| pins.iter().find(|p| p.id.eq_ignore_ascii_case(needle)))
    }
}
