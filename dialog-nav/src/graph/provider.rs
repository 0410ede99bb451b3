//! Graph provider seam.

use super::Node;

/// Read-only access to a dialog graph.
///
/// Node structures are immutable and shared for the lifetime of a conversation.
///
/// **Interaction**: Held by `Navigator` as `Arc<dyn DialogGraphProvider>`. Implemented by
/// `DialogGraph`; hosts with their own graph representation implement it directly.
pub trait DialogGraphProvider: Send + Sync {
    /// Looks up a node by id.
    fn node_by_id(&self, id: &str) -> Option<&Node>;

    /// Entry node of the graph, if it has one.
    fn root(&self) -> Option<&Node>;
}
