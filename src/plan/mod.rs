//! The plan model: symbolic, unresolved descriptions of nodes and edges as
//! produced by the upstream generator (or a hand-written sample).
//!
//! Everything in this module is untrusted input. Plans reference templates
//! by catalog key and pins by human-facing name; nothing here carries a
//! synthesized identifier. Conversion into a validated [`crate::graph::Graph`]
//! is the instantiation engine's job.

use crate::graph::{NodeType, PinType};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single node instantiation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePlan {
    /// Unique node identifier referenced by edge plans.
    pub id: String,
    /// Catalog key of the template to instantiate.
    pub node_key: String,
    /// Optional override for the display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_override: Option<String>,
    /// Optional node-level comment bubble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Optional map of pin name to literal value overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_values: Option<AHashMap<String, String>>,
}

/// One side of a symbolic edge: a node id plus a pin name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointPlan {
    pub node: String,
    pub pin: String,
}

/// A symbolic connection request between two planned nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: EndpointPlan,
    pub target: EndpointPlan,
}

/// The loosely-structured record a generator response parses into.
///
/// Every field is defaulted because the generator routinely omits parts of
/// the schema. This type is deliberately distinct from the validated graph:
/// its contents mean nothing until the instantiation engine (or the healing
/// path) has checked them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    #[serde(default)]
    pub target_class: Option<String>,
    #[serde(default)]
    pub cpp_code: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "nodes")]
    pub node_plan: Vec<NodePlan>,
    #[serde(default)]
    pub edges: Vec<EdgePlan>,
    #[serde(default)]
    pub variables: Vec<serde_json::Value>,
    #[serde(default)]
    pub functions: Vec<serde_json::Value>,
    #[serde(default)]
    pub sources: Vec<serde_json::Value>,
}

/// A free-form pin description on an invented (non-catalog) node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdHocPin {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub pin_type: Option<PinType>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// A node the generator invented instead of referencing a catalog key.
///
/// These only flow through the loose healing path; the strict engine never
/// sees them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdHocNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub node_type: Option<NodeType>,
    #[serde(default)]
    pub inputs: Vec<AdHocPin>,
    #[serde(default)]
    pub outputs: Vec<AdHocPin>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub pure: Option<bool>,
}

/// An edge referencing ad hoc nodes, with whatever handles the generator
/// chose to emit (possibly none).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdHocEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}
