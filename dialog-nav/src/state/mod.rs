//! # State: per-conversation slots
//!
//! The navigator's only mutable state is the current-node id of each conversation. It is
//! kept in a [`StateStore`] keyed by `(conversation_id, slot)`, where the slot name comes
//! from `NavigatorConfig::state_slot`.
//!
//! | Type                  | Persistence | Use case                | Feature  |
//! |-----------------------|-------------|-------------------------|----------|
//! | [`InMemoryStateStore`]| In-memory   | Dev, tests, single host | —        |
//! | [`SqliteStateStore`]  | SQLite file | Survives restarts       | `sqlite` |

mod in_memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use in_memory::InMemoryStateStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStateStore;

use thiserror::Error;

/// Error for state store operations.
///
/// Callers do not depend on backend error types; messages are opaque.
#[derive(Debug, Error)]
pub enum StateStoreError {
    /// Backend storage error (e.g. DB I/O, poisoned lock).
    #[error("storage: {0}")]
    Storage(String),
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StateStoreError {
    fn from(e: rusqlite::Error) -> Self {
        StateStoreError::Storage(e.to_string())
    }
}

/// Per-conversation string slots that survive across turns.
///
/// Implementations use interior mutability so one store can be shared by many conversations.
///
/// **Interaction**: Reached through `Conversation::store`; read and written by `Navigator`.
pub trait StateStore: Send + Sync {
    /// Returns the slot value, or `None` when it was never set or has been deleted.
    fn get(&self, conversation_id: &str, slot: &str) -> Result<Option<String>, StateStoreError>;

    /// Sets the slot, replacing any previous value.
    fn put(&self, conversation_id: &str, slot: &str, value: &str) -> Result<(), StateStoreError>;

    /// Removes the slot. Deleting an absent slot is not an error.
    fn delete(&self, conversation_id: &str, slot: &str) -> Result<(), StateStoreError>;

    /// Writes `Some(value)` or clears the slot on `None`.
    fn set(
        &self,
        conversation_id: &str,
        slot: &str,
        value: Option<&str>,
    ) -> Result<(), StateStoreError> {
        match value {
            Some(v) => self.put(conversation_id, slot, v),
            None => self.delete(conversation_id, slot),
        }
    }
}
