//! Navigation error types.
//!
//! Returned by `Navigator::current_node`, `Navigator::next_node` and `Navigator::reset`.
//! "No matching scenario", "no steps" and "no ancestor next" are normal outcomes
//! (`Ok(None)` from `next_node`), never errors.

use thiserror::Error;

use crate::condition::ConditionError;
use crate::state::StateStoreError;

/// Navigation error.
///
/// Every variant stops the turn: when `next_node` fails, the stored position is left untouched.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A node id (stored position, `next`, `parent`, step or scenario target) does not
    /// resolve through the graph provider.
    #[error("node not found: {0}")]
    NodeResolution(String),

    /// The graph cannot be navigated at all (no root, cyclic parent chain).
    #[error("graph configuration: {0}")]
    GraphConfiguration(String),

    /// A scenario condition failed to evaluate. Traversal stops instead of skipping the scenario.
    #[error("condition `{condition}` at node {node_id} failed: {source}")]
    ConditionEvaluation {
        node_id: String,
        condition: String,
        #[source]
        source: ConditionError,
    },

    /// `next_node` was called before any position was stored for the conversation.
    #[error("conversation {0} has no current node")]
    NotStarted(String),

    /// Reading or writing the current-node slot failed.
    #[error("state store: {0}")]
    StateStore(#[from] StateStoreError),
}
