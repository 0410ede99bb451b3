//! Navigator config: where the current-node id is kept in the state store.

use serde::Deserialize;

/// Default slot name for the current-node id.
pub const DEFAULT_STATE_SLOT: &str = "current_node_id";

/// Env var overriding [`NavigatorConfig::state_slot`] in [`NavigatorConfig::from_env`].
pub const STATE_SLOT_ENV: &str = "DIALOG_NAV_STATE_SLOT";

/// Navigator config.
///
/// **Interaction**: Passed to `Navigator::with_config`; `state_slot` keys every read and
/// write of the current-node id in the conversation's `StateStore`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Slot holding the current-node id. Hosts sharing one store between several dialog
    /// graphs give each navigator its own slot.
    pub state_slot: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            state_slot: DEFAULT_STATE_SLOT.to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Fills config from env vars. `DIALOG_NAV_STATE_SLOT` optional; empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(slot) = std::env::var(STATE_SLOT_ENV) {
            let slot = slot.trim();
            if !slot.is_empty() {
                config.state_slot = slot.to_string();
            }
        }
        config
    }

    /// Sets the state slot (builder style).
    pub fn with_state_slot(mut self, slot: impl Into<String>) -> Self {
        self.state_slot = slot.into();
        self
    }
}
