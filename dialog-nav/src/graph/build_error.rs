//! Graph build error.
//!
//! Returned by `DialogGraph::from_nodes` and `DialogGraphBuilder::build` when the node list
//! is not a navigable graph.

use thiserror::Error;

/// Error when assembling a dialog graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphBuildError {
    /// Two nodes share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// A node refers (through `field`) to an id that is not in the graph.
    #[error("node {from} has {field} reference to unknown node {to}")]
    UnknownReference {
        from: String,
        field: &'static str,
        to: String,
    },

    /// An edge (`field`) was declared on a node that was never added.
    #[error("{field} declared on unknown node {id}")]
    UnknownNode { id: String, field: &'static str },

    /// The root id is not in the graph.
    #[error("root node not found: {0}")]
    UnknownRoot(String),

    /// A scenario has neither a target node nor any step.
    #[error("scenario {index} of node {node} has no target node and no steps")]
    EmptyScenario { node: String, index: usize },

    /// Following `parent` links from this node returns to a node already visited.
    #[error("parent chain starting at {0} is cyclic")]
    ParentCycle(String),

    /// A node was claimed as a child by two different parents.
    #[error("node {node} already has parent {existing}, cannot attach to {requested}")]
    ConflictingParent {
        node: String,
        existing: String,
        requested: String,
    },
}
