//! In-memory state store. Not persistent; for dev, tests and single-process hosts.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{StateStore, StateStoreError};

/// In-memory state store. Key: `(conversation_id, slot)`.
///
/// Cheap to clone; clones share the same map.
///
/// **Interaction**: Used as `Arc<dyn StateStore>` in `Conversation::new`.
#[derive(Clone, Default)]
pub struct InMemoryStateStore {
    inner: Arc<RwLock<HashMap<(String, String), String>>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored slots across all conversations. Counts through a poisoned lock.
    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(guard) => guard.len(),
            Err(poison) => poison.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StateStoreError {
    StateStoreError::Storage("state lock poisoned".into())
}

impl StateStore for InMemoryStateStore {
    fn get(&self, conversation_id: &str, slot: &str) -> Result<Option<String>, StateStoreError> {
        let guard = self.inner.read().map_err(poisoned)?;
        Ok(guard
            .get(&(conversation_id.to_string(), slot.to_string()))
            .cloned())
    }

    fn put(&self, conversation_id: &str, slot: &str, value: &str) -> Result<(), StateStoreError> {
        let mut guard = self.inner.write().map_err(poisoned)?;
        guard.insert(
            (conversation_id.to_string(), slot.to_string()),
            value.to_string(),
        );
        Ok(())
    }

    fn delete(&self, conversation_id: &str, slot: &str) -> Result<(), StateStoreError> {
        let mut guard = self.inner.write().map_err(poisoned)?;
        guard.remove(&(conversation_id.to_string(), slot.to_string()));
        Ok(())
    }
}
