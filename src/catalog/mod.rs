//! The template catalog: an immutable registry of node blueprints, loaded
//! once at process start and keyed by a stable string.

pub mod library;
pub mod template;

pub use template::*;

use crate::error::GraphBuildError;
use crate::graph::PinDirection;
use ahash::AHashMap;
use itertools::Itertools;
use once_cell::sync::Lazy;

/// An insertion-ordered, read-only registry of [`NodeTemplate`]s.
///
/// Key order is stable so that downstream consumers (prompt construction in
/// particular) are deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct NodeCatalog {
    templates: AHashMap<String, NodeTemplate>,
    order: Vec<String>,
}

impl NodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the built-in standard library of templates.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for template in library::standard_templates() {
            catalog.insert(template);
        }
        catalog
    }

    /// Registers a template, replacing any previous entry with the same key
    /// while keeping that key's original position in the ordering.
    pub fn insert(&mut self, template: NodeTemplate) {
        if !self.templates.contains_key(&template.key) {
            self.order.push(template.key.clone());
        }
        self.templates.insert(template.key.clone(), template);
    }

    /// Builder-style registration for extending an owned catalog.
    pub fn with_template(mut self, template: NodeTemplate) -> Self {
        self.insert(template);
        self
    }

    pub fn get(&self, key: &str) -> Result<&NodeTemplate, GraphBuildError> {
        self.templates
            .get(key)
            .ok_or_else(|| GraphBuildError::UnknownTemplateKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Keys in catalog definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Renders the plain-text per-template pin listing handed to the
    /// upstream generator as part of its instruction prompt. The output is
    /// deterministic: one line per template, in catalog order.
    pub fn summary(&self) -> String {
        self.order
            .iter()
            .map(|key| {
                let template = &self.templates[key];
                let pin_summary = template
                    .pins
                    .iter()
                    .map(|pin| {
                        let side = match pin.direction {
                            PinDirection::Input => "In",
                            PinDirection::Output => "Out",
                        };
                        format!("{} {} ({})", side, pin.name, pin.pin_type)
                    })
                    .join(", ");
                format!(
                    "- {}: \"{}\" ({}) Pins: {}",
                    key, template.label, template.node_type, pin_summary
                )
            })
            .join("\n")
    }
}

static STANDARD_CATALOG: Lazy<NodeCatalog> = Lazy::new(NodeCatalog::standard);

/// The process-wide immutable standard catalog. Built on first use and never
/// mutated afterwards, so no generation cycle can contaminate another.
pub fn standard_catalog() -> &'static NodeCatalog {
    &STANDARD_CATALOG
}
