//! Nullable ledger store — thread-safe in-memory documents for testing.

use examtoken_store::{DocumentKey, LedgerStore, StoreError, WriteBatch};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory document store for testing.
///
/// Commits apply every write in the batch under one lock, mirroring the
/// all-or-nothing contract real backends must honor.
pub struct NullLedgerStore {
    documents: Mutex<HashMap<&'static str, Vec<u8>>>,
}

impl NullLedgerStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
        }
    }

    /// Seed a document directly, bypassing the batch path.
    pub fn seed<T: Serialize>(&self, key: DocumentKey, value: &T) {
        let bytes = serde_json::to_vec(value).expect("seed value must serialize");
        self.documents.lock().unwrap().insert(key.as_str(), bytes);
    }

    /// Raw bytes of a document, if present.
    pub fn raw(&self, key: DocumentKey) -> Option<Vec<u8>> {
        self.documents.lock().unwrap().get(key.as_str()).cloned()
    }
}

impl Default for NullLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullLedgerStore {
    fn get(&self, key: DocumentKey) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.documents.lock().unwrap().get(key.as_str()).cloned())
    }

    fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let mut documents = self.documents.lock().unwrap();
        for (key, bytes) in batch.into_writes() {
            documents.insert(key.as_str(), bytes);
        }
        Ok(())
    }
}
