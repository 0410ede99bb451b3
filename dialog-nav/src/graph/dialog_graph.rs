//! In-memory dialog graph: an arena of nodes keyed by id.
//!
//! Built by `DialogGraph::from_nodes` (a host parser's output) or `DialogGraphBuilder`.
//! Validation guarantees every reference resolves, so navigation over a `DialogGraph`
//! only fails on stored positions that came from elsewhere.

use std::collections::{HashMap, HashSet};

use super::build_error::GraphBuildError;
use super::{DialogGraphProvider, Node, ScenarioTarget};

/// Immutable dialog graph. Implements [`DialogGraphProvider`].
///
/// A graph without a root is valid to build; the navigator reports it at first access.
#[derive(Debug, Clone, Default)]
pub struct DialogGraph {
    nodes: HashMap<String, Node>,
    root: Option<String>,
}

impl DialogGraph {
    /// Validates `nodes` and assembles the graph.
    ///
    /// Fails on duplicate ids, a missing root, references to unknown nodes, scenarios with
    /// no target, and cyclic parent chains.
    pub fn from_nodes(
        root: Option<String>,
        nodes: impl IntoIterator<Item = Node>,
    ) -> Result<Self, GraphBuildError> {
        let mut map = HashMap::new();
        for node in nodes {
            if map.contains_key(&node.id) {
                return Err(GraphBuildError::DuplicateNode(node.id));
            }
            map.insert(node.id.clone(), node);
        }

        if let Some(root_id) = &root {
            if !map.contains_key(root_id) {
                return Err(GraphBuildError::UnknownRoot(root_id.clone()));
            }
        }

        for node in map.values() {
            for (field, to) in node.references() {
                if !map.contains_key(to) {
                    return Err(GraphBuildError::UnknownReference {
                        from: node.id.clone(),
                        field,
                        to: to.to_string(),
                    });
                }
            }
            for (index, scenario) in node.scenarios.iter().enumerate() {
                if matches!(&scenario.target, ScenarioTarget::Steps(s) if s.is_empty()) {
                    return Err(GraphBuildError::EmptyScenario {
                        node: node.id.clone(),
                        index,
                    });
                }
            }
        }

        check_parent_chains(&map)?;

        Ok(Self { nodes: map, root })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_id(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Iterates over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }
}

/// Every parent chain must end. Nodes whose chain is known to terminate are remembered
/// so each node is walked at most once overall.
fn check_parent_chains(nodes: &HashMap<String, Node>) -> Result<(), GraphBuildError> {
    let mut terminated: HashSet<&str> = HashSet::new();
    for start in nodes.keys() {
        let mut path: HashSet<&str> = HashSet::new();
        let mut cursor = Some(start.as_str());
        while let Some(id) = cursor {
            if terminated.contains(id) {
                break;
            }
            if !path.insert(id) {
                return Err(GraphBuildError::ParentCycle(start.clone()));
            }
            cursor = nodes.get(id).and_then(Node::parent);
        }
        terminated.extend(path);
    }
    Ok(())
}

impl DialogGraphProvider for DialogGraph {
    fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn root(&self) -> Option<&Node> {
        self.root.as_deref().and_then(|id| self.nodes.get(id))
    }
}
