//! Scenario: a conditional branch attached to a node.

use serde::{Deserialize, Serialize};

/// Where a scenario leads when its condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioTarget {
    /// Jump to an existing node.
    Node(String),
    /// Enter the first of these steps.
    Steps(Vec<String>),
}

impl ScenarioTarget {
    pub(crate) fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            ScenarioTarget::Node(id) => Box::new(std::iter::once(id.as_str())),
            ScenarioTarget::Steps(steps) => Box::new(steps.iter().map(String::as_str)),
        }
    }
}

/// Conditional branch: an opaque condition expression plus a target.
///
/// The expression is never interpreted here; it is handed to the `ConditionEvaluator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub condition: String,
    pub target: ScenarioTarget,
}

impl Scenario {
    /// Scenario leading to an explicit node.
    pub fn to_node(condition: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            target: ScenarioTarget::Node(node_id.into()),
        }
    }

    /// Scenario entering a sequence of steps.
    pub fn to_steps<I, S>(condition: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            condition: condition.into(),
            target: ScenarioTarget::Steps(steps.into_iter().map(Into::into).collect()),
        }
    }

    /// Node entered when this scenario is taken: the target node, otherwise the first step.
    pub fn entry(&self) -> Option<&str> {
        match &self.target {
            ScenarioTarget::Node(id) => Some(id.as_str()),
            ScenarioTarget::Steps(steps) => steps.first().map(String::as_str),
        }
    }
}
