use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use serde_json::Value;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryRepository keeps documents in process memory. Clones share the same documents,
// which lets tests inspect or corrupt what a store has written.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    documents: Arc<Mutex<HashMap<String, Value>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // makes every following write fail with a database error until reset
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn document(&self, name: &str) -> Option<Value> {
        self.documents.lock().ok().and_then(|docs| docs.get(name).cloned())
    }

    pub(crate) fn put(&self, name: &str, value: Value) {
        if let Ok(mut docs) = self.documents.lock() {
            docs.insert(name.to_string(), value);
        }
    }
}

fn poisoned() -> LibraryError {
    LibraryError::runtime("memory repository lock poisoned", None)
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn read(&self, name: &str) -> LibraryResult<Option<Value>> {
        let docs = self.documents.lock().map_err(|_| poisoned())?;
        Ok(docs.get(name).cloned())
    }

    async fn write(&self, batch: &[(String, Value)]) -> LibraryResult<usize> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LibraryError::database("memory repository rejected write", Some("injected".to_string()), true));
        }
        let mut docs = self.documents.lock().map_err(|_| poisoned())?;
        for (name, value) in batch {
            docs.insert(name.to_string(), value.clone());
        }
        Ok(batch.len())
    }
}
