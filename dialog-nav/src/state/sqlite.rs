//! SQLite-backed state store (SqliteStateStore). Persistent across process restarts.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};

use super::{StateStore, StateStoreError};

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// SQLite-backed state store. Key: `(conversation_id, slot)`; value stored as text.
///
/// Opens a connection per operation.
///
/// **Interaction**: Used as `Arc<dyn StateStore>` in `Conversation::new`.
pub struct SqliteStateStore {
    db_path: PathBuf,
}

impl SqliteStateStore {
    /// Creates the store and ensures the table exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StateStoreError> {
        let db_path = path.as_ref().to_path_buf();
        let conn = Connection::open(&db_path)?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS conversation_state (
                conversation_id TEXT NOT NULL,
                slot TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (conversation_id, slot)
            )
            "#,
            [],
        )?;
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection, StateStoreError> {
        Ok(Connection::open(&self.db_path)?)
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, conversation_id: &str, slot: &str) -> Result<Option<String>, StateStoreError> {
        let conn = self.open()?;
        let value = conn
            .query_row(
                "SELECT value FROM conversation_state WHERE conversation_id = ?1 AND slot = ?2",
                params![conversation_id, slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, conversation_id: &str, slot: &str, value: &str) -> Result<(), StateStoreError> {
        let conn = self.open()?;
        conn.execute(
            "INSERT OR REPLACE INTO conversation_state (conversation_id, slot, value, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![conversation_id, slot, value, now_millis()],
        )?;
        Ok(())
    }

    fn delete(&self, conversation_id: &str, slot: &str) -> Result<(), StateStoreError> {
        let conn = self.open()?;
        conn.execute(
            "DELETE FROM conversation_state WHERE conversation_id = ?1 AND slot = ?2",
            params![conversation_id, slot],
        )?;
        Ok(())
    }
}
