//! Keyed store abstraction
//!
//! Everything persisted is one of three records keyed by an opaque user
//! identifier: the bank connection, the transaction cache, and the chat log.
//! The accessor and engine only ever see this trait, never a storage
//! mechanism. `MemoryStore` backs tests and the demo path; `JsonStore` backs
//! the CLI with a single snapshot file. Neither promises multi-writer
//! consistency, which is a stated non-goal.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::history::ChatLog;
use crate::models::{Connection, TransactionCache};

/// Keyed get/put over the three per-user record types
pub trait Store: Send + Sync {
    fn connection(&self, user_id: &str) -> Result<Option<Connection>>;
    fn put_connection(&self, user_id: &str, connection: Connection) -> Result<()>;

    fn transaction_cache(&self, user_id: &str) -> Result<Option<TransactionCache>>;
    fn put_transaction_cache(&self, user_id: &str, cache: TransactionCache) -> Result<()>;

    fn chat_log(&self, user_id: &str) -> Result<Option<ChatLog>>;
    fn put_chat_log(&self, user_id: &str, log: ChatLog) -> Result<()>;
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStore {
    connections: RwLock<HashMap<String, Connection>>,
    caches: RwLock<HashMap<String, TransactionCache>>,
    chat_logs: RwLock<HashMap<String, ChatLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::Store("store lock poisoned".to_string())
}

impl Store for MemoryStore {
    fn connection(&self, user_id: &str) -> Result<Option<Connection>> {
        Ok(self
            .connections
            .read()
            .map_err(|_| poisoned())?
            .get(user_id)
            .cloned())
    }

    fn put_connection(&self, user_id: &str, connection: Connection) -> Result<()> {
        self.connections
            .write()
            .map_err(|_| poisoned())?
            .insert(user_id.to_string(), connection);
        Ok(())
    }

    fn transaction_cache(&self, user_id: &str) -> Result<Option<TransactionCache>> {
        Ok(self
            .caches
            .read()
            .map_err(|_| poisoned())?
            .get(user_id)
            .cloned())
    }

    fn put_transaction_cache(&self, user_id: &str, cache: TransactionCache) -> Result<()> {
        self.caches
            .write()
            .map_err(|_| poisoned())?
            .insert(user_id.to_string(), cache);
        Ok(())
    }

    fn chat_log(&self, user_id: &str) -> Result<Option<ChatLog>> {
        Ok(self
            .chat_logs
            .read()
            .map_err(|_| poisoned())?
            .get(user_id)
            .cloned())
    }

    fn put_chat_log(&self, user_id: &str, log: ChatLog) -> Result<()> {
        self.chat_logs
            .write()
            .map_err(|_| poisoned())?
            .insert(user_id.to_string(), log);
        Ok(())
    }
}

/// On-disk snapshot backing the JSON store
#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonStoreData {
    #[serde(default)]
    connections: HashMap<String, Connection>,
    #[serde(default)]
    caches: HashMap<String, TransactionCache>,
    #[serde(default)]
    chat_logs: HashMap<String, ChatLog>,
}

/// Single-file JSON store
///
/// Loads the whole snapshot on open and rewrites it on every put.
/// Single-writer by assumption.
pub struct JsonStore {
    path: PathBuf,
    data: Mutex<JsonStoreData>,
}

impl JsonStore {
    /// Open a store file, creating an empty one in memory if it doesn't
    /// exist yet (the file appears on first put)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            JsonStoreData::default()
        };

        debug!(path = %path.display(), "Opened JSON store");

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    fn flush(&self, data: &JsonStoreData) -> Result<()> {
        let raw = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn connection(&self, user_id: &str) -> Result<Option<Connection>> {
        Ok(self
            .data
            .lock()
            .map_err(|_| poisoned())?
            .connections
            .get(user_id)
            .cloned())
    }

    fn put_connection(&self, user_id: &str, connection: Connection) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| poisoned())?;
        data.connections.insert(user_id.to_string(), connection);
        self.flush(&data)
    }

    fn transaction_cache(&self, user_id: &str) -> Result<Option<TransactionCache>> {
        Ok(self
            .data
            .lock()
            .map_err(|_| poisoned())?
            .caches
            .get(user_id)
            .cloned())
    }

    fn put_transaction_cache(&self, user_id: &str, cache: TransactionCache) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| poisoned())?;
        data.caches.insert(user_id.to_string(), cache);
        self.flush(&data)
    }

    fn chat_log(&self, user_id: &str) -> Result<Option<ChatLog>> {
        Ok(self
            .data
            .lock()
            .map_err(|_| poisoned())?
            .chat_logs
            .get(user_id)
            .cloned())
    }

    fn put_chat_log(&self, user_id: &str, log: ChatLog) -> Result<()> {
        let mut data = self.data.lock().map_err(|_| poisoned())?;
        data.chat_logs.insert(user_id.to_string(), log);
        self.flush(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_transactions;
    use crate::history::ChatMessage;

    #[test]
    fn test_memory_store_cache_round_trip() {
        let store = MemoryStore::new();
        assert!(store.transaction_cache("user_1").unwrap().is_none());

        let cache = TransactionCache::new(demo_transactions());
        store.put_transaction_cache("user_1", cache.clone()).unwrap();

        let loaded = store.transaction_cache("user_1").unwrap().unwrap();
        assert_eq!(loaded.transactions, cache.transactions);
        // Other users are unaffected
        assert!(store.transaction_cache("user_2").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_chat_log() {
        let store = MemoryStore::new();
        let mut log = ChatLog::default();
        log.push(ChatMessage::user("what's my balance?"));
        store.put_chat_log("user_1", log).unwrap();

        let loaded = store.chat_log("user_1").unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("quid.json")).unwrap();
        assert!(store.connection("user_1").unwrap().is_none());
        assert!(store.transaction_cache("user_1").unwrap().is_none());
    }

    #[test]
    fn test_json_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quid.json");

        {
            let store = JsonStore::open(&path).unwrap();
            store
                .put_transaction_cache("user_1", TransactionCache::new(demo_transactions()))
                .unwrap();
        }

        let reopened = JsonStore::open(&path).unwrap();
        let cache = reopened.transaction_cache("user_1").unwrap().unwrap();
        assert_eq!(cache.transactions.len(), 20);
    }

    #[test]
    fn test_json_store_rejects_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quid.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonStore::open(&path).is_err());
    }
}
