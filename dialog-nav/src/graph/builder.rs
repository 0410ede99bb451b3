//! Fluent graph builder: declare nodes and edges, then `build`.
//!
//! Parents are derived from the declared structure: a step's parent is the node it was
//! added under, and the steps of a scenario belong to the node owning the scenario.

use std::collections::HashMap;

use super::build_error::GraphBuildError;
use super::{DialogGraph, Node, Scenario, ScenarioTarget};

/// Dialog graph builder.
///
/// Every method returns `&mut Self` for chaining. Nothing is validated until
/// [`build`](Self::build), which reports the first problem as a [`GraphBuildError`].
///
/// ```rust
/// use dialog_nav::graph::{DialogGraphBuilder, DialogGraphProvider};
///
/// let mut b = DialogGraphBuilder::new();
/// b.add_node("root")
///     .add_node("greet")
///     .add_node("bye")
///     .add_step("root", "greet")
///     .add_step("root", "bye")
///     .set_root("root");
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_by_id("greet").unwrap().parent(), Some("root"));
/// ```
#[derive(Debug, Default)]
pub struct DialogGraphBuilder {
    nodes: Vec<String>,
    steps: Vec<(String, String)>,
    scenarios: Vec<(String, Scenario)>,
    next: Vec<(String, String)>,
    root: Option<String>,
}

impl DialogGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node; ids must be unique.
    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.nodes.push(id.into());
        self
    }

    /// Appends `child` to the steps of `parent` and makes `parent` its parent.
    pub fn add_step(&mut self, parent: impl Into<String>, child: impl Into<String>) -> &mut Self {
        self.steps.push((parent.into(), child.into()));
        self
    }

    /// Adds a scenario on `owner` that jumps to `target` when `condition` holds.
    pub fn add_scenario_node(
        &mut self,
        owner: impl Into<String>,
        condition: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Self {
        self.scenarios
            .push((owner.into(), Scenario::to_node(condition, target)));
        self
    }

    /// Adds a scenario on `owner` that enters `steps` when `condition` holds.
    /// The steps get `owner` as parent.
    pub fn add_scenario_steps<I, S>(
        &mut self,
        owner: impl Into<String>,
        condition: impl Into<String>,
        steps: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scenarios
            .push((owner.into(), Scenario::to_steps(condition, steps)));
        self
    }

    /// Sets the fall-through edge of `from`. A later call for the same node wins.
    pub fn set_next(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.next.push((from.into(), to.into()));
        self
    }

    pub fn set_root(&mut self, id: impl Into<String>) -> &mut Self {
        self.root = Some(id.into());
        self
    }

    /// Resolves the declarations into nodes and validates them with [`DialogGraph::from_nodes`].
    pub fn build(self) -> Result<DialogGraph, GraphBuildError> {
        let mut order: Vec<String> = Vec::with_capacity(self.nodes.len());
        let mut nodes: HashMap<String, Node> = HashMap::with_capacity(self.nodes.len());
        for id in self.nodes {
            if nodes.contains_key(&id) {
                return Err(GraphBuildError::DuplicateNode(id));
            }
            nodes.insert(id.clone(), Node::new(id.clone()));
            order.push(id);
        }

        for (parent, child) in self.steps {
            attach_parent(&mut nodes, &child, &parent, "step")?;
            node_mut(&mut nodes, &parent, "step")?.steps.push(child);
        }

        for (owner, scenario) in self.scenarios {
            if let ScenarioTarget::Steps(steps) = &scenario.target {
                for step in steps {
                    attach_parent(&mut nodes, step, &owner, "scenario")?;
                }
            }
            node_mut(&mut nodes, &owner, "scenario")?
                .scenarios
                .push(scenario);
        }

        for (from, to) in self.next {
            let node = node_mut(&mut nodes, &from, "next")?;
            node.next = Some(to);
        }

        let ordered = order.into_iter().filter_map(|id| nodes.remove(&id));
        DialogGraph::from_nodes(self.root, ordered)
    }
}

/// Looks up the node an edge starts from.
fn node_mut<'a>(
    nodes: &'a mut HashMap<String, Node>,
    id: &str,
    field: &'static str,
) -> Result<&'a mut Node, GraphBuildError> {
    nodes.get_mut(id).ok_or_else(|| GraphBuildError::UnknownNode {
        id: id.to_string(),
        field,
    })
}

fn attach_parent(
    nodes: &mut HashMap<String, Node>,
    child: &str,
    parent: &str,
    field: &'static str,
) -> Result<(), GraphBuildError> {
    let node = nodes
        .get_mut(child)
        .ok_or_else(|| GraphBuildError::UnknownReference {
            from: parent.to_string(),
            field,
            to: child.to_string(),
        })?;
    match &node.parent {
        Some(existing) if existing != parent => Err(GraphBuildError::ConflictingParent {
            node: child.to_string(),
            existing: existing.clone(),
            requested: parent.to_string(),
        }),
        _ => {
            node.parent = Some(parent.to_string());
            Ok(())
        }
    }
}
