use crate::graph::PinDirection;
use thiserror::Error;

/// Errors that can occur while instantiating a plan into a concrete graph.
///
/// Instantiation is all-or-nothing: any of these aborts the whole operation
/// and no partial graph is observable by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphBuildError {
    #[error("Unknown node template key: '{0}'")]
    UnknownTemplateKey(String),

    #[error("No nodes provided in the graph plan")]
    EmptyPlan,

    #[error("Edge {edge_index} references node '{missing_node_id}', which is not part of the plan")]
    DanglingEdgeEndpoint {
        edge_index: usize,
        missing_node_id: String,
    },

    #[error(
        "Pin '{requested}' not found among the {direction} pins of node '{node_id}'. Available: {available}"
    )]
    UnresolvedPin {
        node_id: String,
        requested: String,
        direction: PinDirection,
        available: String,
    },
}

/// Errors that can occur while extracting a JSON plan from raw generator text.
///
/// Both variants are fatal to the generation attempt but retryable by the
/// caller (the user may simply re-prompt the generator).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("No JSON object found in the response text")]
    NoJsonObjectFound,

    #[error("Response JSON is malformed: {message} (near: {excerpt:?})")]
    MalformedJson { message: String, excerpt: String },
}
