use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of value kinds a pin can carry.
///
/// `Exec` pins model control flow; every other variant is a data pin.
/// Data pins currently require an exact type match on both ends of a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinType {
    Exec,
    Boolean,
    Integer,
    Float,
    String,
    Vector,
    Rotator,
    Object,
    Class,
    Struct,
    Byte,
    Name,
    Text,
    Delegate,
}

impl PinType {
    pub fn is_exec(self) -> bool {
        matches!(self, PinType::Exec)
    }

    /// Fixed wire palette, keyed by the source pin's type.
    pub fn wire_color(self) -> &'static str {
        match self {
            PinType::Exec => "#FFFFFF",
            PinType::Boolean => "#8C0000",
            PinType::Integer => "#00E5CA",
            PinType::Float => "#35D039",
            PinType::String => "#E900EB",
            PinType::Vector => "#FDC31F",
            PinType::Rotator => "#9999FF",
            PinType::Object => "#00A8F6",
            PinType::Class => "#5800A5",
            PinType::Struct => "#005090",
            PinType::Byte => "#006575",
            PinType::Name => "#C671FF",
            PinType::Text => "#E27294",
            PinType::Delegate => "#FF3838",
        }
    }

    /// The stroke styling a wire sourced from a pin of this type receives.
    /// Exec wires render thicker than data wires.
    pub fn wire_style(self) -> WireStyle {
        WireStyle {
            stroke: self.wire_color(),
            stroke_width: if self.is_exec() { 2.5 } else { 2.0 },
        }
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PinType::Exec => "exec",
            PinType::Boolean => "boolean",
            PinType::Integer => "integer",
            PinType::Float => "float",
            PinType::String => "string",
            PinType::Vector => "vector",
            PinType::Rotator => "rotator",
            PinType::Object => "object",
            PinType::Class => "class",
            PinType::Struct => "struct",
            PinType::Byte => "byte",
            PinType::Name => "name",
            PinType::Text => "text",
            PinType::Delegate => "delegate",
        };
        f.write_str(name)
    }
}

/// Which side of a node a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    Input,
    Output,
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinDirection::Input => f.write_str("input"),
            PinDirection::Output => f.write_str("output"),
        }
    }
}

/// A resolved, directional connection point on an instantiated node.
///
/// `name` is the human-facing label used for symbolic matching; `id` is
/// synthesized by [`PinIdAllocator`] and is unique within its node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: PinType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Stroke styling attached to an edge at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStyle {
    pub stroke: &'static str,
    pub stroke_width: f32,
}

impl Default for WireStyle {
    fn default() -> Self {
        WireStyle {
            stroke: "#9ca3af",
            stroke_width: 2.0,
        }
    }
}

/// Synthesizes pin ids that are deterministic and unique within one node.
///
/// The rule is shared by the instantiation engine and the healing path:
/// strip all non-alphanumeric characters from the raw pin name (an empty
/// result becomes the literal `Pin`), prefix with `{node_id}_`, and append
/// `_1`, `_2`, ... until the candidate is unused. Because allocation is
/// order-dependent, enumerating the same pin list twice yields byte-identical
/// ids.
#[derive(Debug, Default)]
pub struct PinIdAllocator {
    used: AHashSet<String>,
}

impl PinIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, node_id: &str, raw_name: &str) -> String {
        let sanitized: String = raw_name.chars().filter(char::is_ascii_alphanumeric).collect();
        let base = if sanitized.is_empty() {
            format!("{}_Pin", node_id)
        } else {
            format!("{}_{}", node_id, sanitized)
        };

        let mut attempt = base.clone();
        let mut suffix = 1;
        while self.used.contains(&attempt) {
            attempt = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.used.insert(attempt.clone());
        attempt
    }

    /// Marks an externally supplied id as taken so later allocations avoid it.
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }
}
