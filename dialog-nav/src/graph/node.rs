//! Dialog node: one vertex of the dialog graph.

use serde::{Deserialize, Serialize};

use super::Scenario;

/// One vertex of the dialog graph.
///
/// `steps` run in order under this node; `scenarios` are conditional branches checked
/// before the steps; `next` is where to fall through when neither applies; `parent` is the
/// back-reference used for upward fallback. All references are node ids.
///
/// **Interaction**: Stored in `DialogGraph`; returned by `DialogGraphProvider` lookups and
/// by `Navigator::current_node` / `Navigator::next_node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

impl Node {
    /// Creates a node with no steps, scenarios, next or parent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: Vec::new(),
            scenarios: Vec::new(),
            next: None,
            parent: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the first step, if any.
    pub fn first_step(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Every node id this node refers to, paired with the field it came from.
    pub(crate) fn references(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let steps = self.steps.iter().map(|s| ("step", s.as_str()));
        let scenarios = self
            .scenarios
            .iter()
            .flat_map(|sc| sc.target.ids().map(|id| ("scenario", id)));
        let next = self.next.iter().map(|n| ("next", n.as_str()));
        let parent = self.parent.iter().map(|p| ("parent", p.as_str()));
        steps.chain(scenarios).chain(next).chain(parent)
    }
}
