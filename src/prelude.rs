//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and entry points so downstream
//! code can `use kairo::prelude::*;` instead of importing each item
//! individually.

// Catalog
pub use crate::catalog::{NodeCatalog, NodeTemplate, TemplatePin, standard_catalog};

// Plan model (untrusted input)
pub use crate::plan::{
    AdHocEdge, AdHocNode, AdHocPin, EdgePlan, EndpointPlan, GeneratedPlan, NodePlan,
};

// Resolved graph model
pub use crate::graph::{
    Edge, Graph, Node, NodeData, NodeStyle, NodeType, PinDefinition, PinDirection, PinIdAllocator,
    PinType, Position, WireStyle,
};

// Core operations
pub use crate::engine::instantiate;
pub use crate::heal::{HealReport, complete_pins, heal_edge, heal_graph, materialize};
pub use crate::normalize::{extract_json, normalize, parse_json};
pub use crate::policy::{Connection, EdgeSet};

// Error types
pub use crate::error::{GraphBuildError, NormalizeError};
