//! Conversation handle: id, state store and accumulated data for one conversation.

use std::fmt;
use std::sync::Arc;

use crate::state::StateStore;

/// Accumulated key/value facts about a conversation. Read-only for the navigator;
/// passed verbatim to the condition evaluator.
pub type ConversationData = serde_json::Map<String, serde_json::Value>;

/// One conversation as seen by the navigator.
///
/// The store is shared (many conversations may use the same backend); the id keys this
/// conversation's slots in it. The host owns `data` and updates it between turns.
///
/// **Interaction**: Passed by reference to every `Navigator` call.
#[derive(Clone)]
pub struct Conversation {
    id: String,
    store: Arc<dyn StateStore>,
    data: ConversationData,
}

impl Conversation {
    /// Creates a conversation with empty data.
    pub fn new(id: impl Into<String>, store: Arc<dyn StateStore>) -> Self {
        Self {
            id: id.into(),
            store,
            data: ConversationData::new(),
        }
    }

    /// Replaces the conversation data (builder style).
    pub fn with_data(mut self, data: ConversationData) -> Self {
        self.data = data;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    pub fn data(&self) -> &ConversationData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ConversationData {
        &mut self.data
    }
}

impl fmt::Debug for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversation")
            .field("id", &self.id)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
