//! Navigator: current node and next node of a conversation in a dialog graph.
//!
//! Stateless apart from its collaborators. The position of each conversation is the
//! current-node id kept in the conversation's `StateStore` under `NavigatorConfig::state_slot`.
//!
//! Next-node rules, first rule producing a candidate wins:
//!
//! 1. **Scenarios**: every scenario of the current node is evaluated in order; the *last*
//!    one whose condition holds gives the candidate (its target node, else its first step).
//! 2. **First step** of the current node.
//! 3. **Ancestors**: the `next` of the current node, else of its parent, and so on up.
//!
//! When no rule applies the graph is exhausted and the position is cleared.

use std::collections::HashSet;
use std::sync::Arc;

use crate::condition::ConditionEvaluator;
use crate::config::NavigatorConfig;
use crate::conversation::{Conversation, ConversationData};
use crate::error::NavigationError;
use crate::graph::logging::{
    log_current_node, log_exhausted, log_navigation_error, log_reset, log_root_initialized,
    log_scenario_matched, log_transition,
};
use crate::graph::{DialogGraphProvider, Node};

/// Dialog-graph navigator.
///
/// Holds shared, immutable collaborators only, so one navigator serves any number of
/// conversations. Calls for the same conversation must be serialized by the host.
///
/// **Interaction**: Reads nodes through `DialogGraphProvider`, evaluates scenario
/// conditions through `ConditionEvaluator`, reads and writes the position through the
/// `Conversation`'s `StateStore`.
#[derive(Clone)]
pub struct Navigator {
    graph: Arc<dyn DialogGraphProvider>,
    evaluator: Arc<dyn ConditionEvaluator>,
    config: NavigatorConfig,
}

impl Navigator {
    /// Creates a navigator with the default config.
    pub fn new(
        graph: Arc<dyn DialogGraphProvider>,
        evaluator: Arc<dyn ConditionEvaluator>,
    ) -> Self {
        Self {
            graph,
            evaluator,
            config: NavigatorConfig::default(),
        }
    }

    /// Replaces the config (builder style).
    pub fn with_config(self, config: NavigatorConfig) -> Self {
        Self { config, ..self }
    }

    pub fn graph(&self) -> &Arc<dyn DialogGraphProvider> {
        &self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Returns the conversation's current node.
    ///
    /// On first access (no stored position) the root becomes the current node and its id
    /// is stored. Afterwards the call is read-only and returns the same node until
    /// [`next_node`](Self::next_node) moves the position.
    ///
    /// Errors: `GraphConfiguration` when the graph has no root at first access;
    /// `NodeResolution` when the stored id no longer resolves (the position is not reset).
    pub fn current_node(&self, conversation: &Conversation) -> Result<&Node, NavigationError> {
        self.current_node_inner(conversation).map_err(|e| {
            log_navigation_error(conversation.id(), &e);
            e
        })
    }

    fn current_node_inner(&self, conversation: &Conversation) -> Result<&Node, NavigationError> {
        match self.stored_id(conversation)? {
            Some(id) => {
                let node = self.resolve(&id)?;
                log_current_node(conversation.id(), node.id());
                Ok(node)
            }
            None => {
                let root = self.graph.root().ok_or_else(|| {
                    NavigationError::GraphConfiguration("dialog graph has no root node".into())
                })?;
                self.store_id(conversation, Some(root.id()))?;
                log_root_initialized(conversation.id(), root.id());
                Ok(root)
            }
        }
    }

    /// Computes the next node from the current position and stores it as the new position.
    ///
    /// Returns `Ok(None)` when the graph is exhausted from here; the stored position is then
    /// cleared, so the next [`current_node`](Self::current_node) starts over at the root.
    ///
    /// Errors: `NotStarted` without a stored position; `NodeResolution` when the stored id
    /// or the computed next id does not resolve; `ConditionEvaluation` when any scenario
    /// condition fails; `GraphConfiguration` on a cyclic parent chain. On error the stored
    /// position is unchanged.
    pub fn next_node(
        &self,
        conversation: &Conversation,
    ) -> Result<Option<&Node>, NavigationError> {
        self.next_node_inner(conversation).map_err(|e| {
            log_navigation_error(conversation.id(), &e);
            e
        })
    }

    fn next_node_inner(
        &self,
        conversation: &Conversation,
    ) -> Result<Option<&Node>, NavigationError> {
        let current_id = self
            .stored_id(conversation)?
            .ok_or_else(|| NavigationError::NotStarted(conversation.id().to_string()))?;
        let current = self.resolve(&current_id)?;

        let candidate = match self.select_scenario(current, conversation.data())? {
            Some(id) => Some(id),
            None => current.first_step(),
        };
        let next_id = match candidate {
            Some(id) => Some(id),
            None => self.ancestor_next(current)?,
        };

        // Resolve before storing: the position must always name a real node.
        let next = next_id.map(|id| self.resolve(id)).transpose()?;
        self.store_id(conversation, next.map(Node::id))?;

        match next {
            Some(n) => log_transition(conversation.id(), current.id(), n.id()),
            None => log_exhausted(conversation.id(), current.id()),
        }
        Ok(next)
    }

    /// Clears the stored position so the conversation restarts at the root.
    ///
    /// This is the explicit recovery path for a position that no longer resolves.
    pub fn reset(&self, conversation: &Conversation) -> Result<(), NavigationError> {
        self.store_id(conversation, None)?;
        log_reset(conversation.id());
        Ok(())
    }

    /// Evaluates all scenarios of `node`; the last true one wins.
    ///
    /// A true scenario without an entry still replaces an earlier match and leaves no candidate.
    fn select_scenario<'n>(
        &self,
        node: &'n Node,
        data: &ConversationData,
    ) -> Result<Option<&'n str>, NavigationError> {
        let mut selected = None;
        for (index, scenario) in node.scenarios.iter().enumerate() {
            let matched = self
                .evaluator
                .evaluate(data, &scenario.condition)
                .map_err(|source| NavigationError::ConditionEvaluation {
                    node_id: node.id().to_string(),
                    condition: scenario.condition.clone(),
                    source,
                })?;
            if matched {
                log_scenario_matched(node.id(), index, &scenario.condition);
                selected = Some(scenario.entry());
            }
        }
        Ok(selected.flatten())
    }

    /// Walks from `node` up the parent chain and returns the first `next` found.
    fn ancestor_next<'n>(&'n self, node: &'n Node) -> Result<Option<&'n str>, NavigationError> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut cursor = node;
        loop {
            if !visited.insert(cursor.id()) {
                return Err(NavigationError::GraphConfiguration(format!(
                    "parent chain of {} is cyclic at {}",
                    node.id(),
                    cursor.id()
                )));
            }
            if let Some(next) = cursor.next() {
                return Ok(Some(next));
            }
            match cursor.parent() {
                Some(parent_id) => cursor = self.resolve(parent_id)?,
                None => return Ok(None),
            }
        }
    }

    fn resolve(&self, id: &str) -> Result<&Node, NavigationError> {
        self.graph
            .node_by_id(id)
            .ok_or_else(|| NavigationError::NodeResolution(id.to_string()))
    }

    fn stored_id(&self, conversation: &Conversation) -> Result<Option<String>, NavigationError> {
        Ok(conversation
            .store()
            .get(conversation.id(), &self.config.state_slot)?)
    }

    fn store_id(
        &self,
        conversation: &Conversation,
        id: Option<&str>,
    ) -> Result<(), NavigationError> {
        conversation
            .store()
            .set(conversation.id(), &self.config.state_slot, id)?;
        Ok(())
    }
}
