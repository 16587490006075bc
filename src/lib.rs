//! # Kairo - Node-Graph Construction and Validation Engine
//!
//! **Kairo** turns a symbolic *plan* - a list of node instantiations plus a
//! list of edges referencing nodes and pins by name - into a fully resolved,
//! validated graph of typed nodes and typed wires, the way an executable
//! flow-graph editor would build it. The plan usually comes from an
//! unreliable upstream text generator, so the crate also ships the
//! deterministic repair layers that make such input usable: a response
//! normalizer for the raw text, and a healing pass for invented,
//! non-catalog nodes.
//!
//! ## Core Workflow
//!
//! 1. **Catalog**: node templates (named, typed, directional pins with
//!    defaults) live in an immutable [`catalog::NodeCatalog`], loaded once
//!    per process.
//! 2. **Normalize**: raw generator text goes through [`normalize::normalize`],
//!    which strips fences and prose, repairs trailing commas, and parses the
//!    payload into an untrusted [`plan::GeneratedPlan`].
//! 3. **Instantiate**: [`engine::instantiate`] resolves the plan against the
//!    catalog - synthesizing deterministic pin ids, binding literal values,
//!    and validating every edge endpoint - into a [`graph::Graph`].
//!    Construction is all-or-nothing.
//! 4. **Edit**: further interactive connections go through
//!    [`policy::EdgeSet`], which enforces the single-consumer-per-data-input
//!    and single-successor-per-exec-output rules incrementally.
//!
//! ## Quick Start
//!
//! ```rust
//! use kairo::prelude::*;
//!
//! fn main() -> Result<(), GraphBuildError> {
//!     let catalog = standard_catalog();
//!
//!     let nodes = vec![
//!         NodePlan {
//!             id: "Entry".to_string(),
//!             node_key: "EventBeginPlay".to_string(),
//!             label_override: None,
//!             comment: None,
//!             pin_values: None,
//!         },
//!         NodePlan {
//!             id: "Hello".to_string(),
//!             node_key: "PrintString".to_string(),
//!             label_override: None,
//!             comment: None,
//!             pin_values: None,
//!         },
//!     ];
//!     let edges = vec![EdgePlan {
//!         id: None,
//!         source: EndpointPlan {
//!             node: "Entry".to_string(),
//!             pin: "then".to_string(),
//!         },
//!         target: EndpointPlan {
//!             node: "Hello".to_string(),
//!             pin: "execute".to_string(),
//!         },
//!     }];
//!
//!     let graph = instantiate(catalog, &nodes, &edges)?;
//!     assert_eq!(graph.nodes.len(), 2);
//!     assert_eq!(graph.edges.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod graph;
pub mod heal;
pub mod normalize;
pub mod plan;
pub mod policy;
pub mod prelude;
