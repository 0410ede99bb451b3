//! Logging utilities for navigation.
//!
//! Structured `tracing` events for position lookups, scenario matches, transitions and
//! failures. The crate never installs a subscriber; the host decides where events go.

use crate::error::NavigationError;

/// Log a current-node lookup for a conversation with a stored position.
pub fn log_current_node(conversation_id: &str, node_id: &str) {
    tracing::debug!(conversation_id, node_id, "Current node");
}

/// Log first access: the conversation starts at the root.
pub fn log_root_initialized(conversation_id: &str, root_id: &str) {
    tracing::debug!(conversation_id, root_id, "Conversation position initialized at root");
}

/// Log a scenario whose condition evaluated true.
///
/// Several can match on one node; the last one logged is the one taken.
pub fn log_scenario_matched(node_id: &str, index: usize, condition: &str) {
    tracing::debug!(node_id, index, condition, "Scenario condition matched");
}

/// Log a completed transition.
pub fn log_transition(conversation_id: &str, current_id: &str, next_id: &str) {
    tracing::info!(conversation_id, current = current_id, next = next_id, "Next node");
}

/// Log that no next node exists from `current_id`; the stored position is cleared.
pub fn log_exhausted(conversation_id: &str, current_id: &str) {
    tracing::info!(conversation_id, current = current_id, "Dialog graph exhausted");
}

/// Log an explicit position reset by the host.
pub fn log_reset(conversation_id: &str) {
    tracing::info!(conversation_id, "Conversation position reset");
}

/// Log a navigation failure.
pub fn log_navigation_error(conversation_id: &str, error: &NavigationError) {
    match error {
        NavigationError::ConditionEvaluation { .. } | NavigationError::StateStore(_) => {
            tracing::error!(conversation_id, %error, "Navigation failed")
        }
        _ => tracing::warn!(conversation_id, %error, "Navigation failed"),
    }
}
