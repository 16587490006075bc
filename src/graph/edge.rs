use super::pin::WireStyle;
use serde::Serialize;

/// A resolved wire between two synthesized pin handles.
///
/// An edge is valid exactly when both referenced nodes exist and each handle
/// names a real pin on the correct side. Edges never outlive the node set
/// they reference; deleting a node cascade-deletes its edges through the
/// connection policy layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: String,
    pub target_handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<WireStyle>,
}
