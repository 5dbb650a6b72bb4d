//! In-memory record store
//!
//! Backs the HTTP integration tests and the `memory` config backend. Holds
//! the same contract as the MongoDB adapter: identifiers are minted here,
//! not by callers, and replace keeps the stored identifier intact.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::error::{StoreError, StoreResult};
use super::record::{Record, RecordId};
use super::RecordStore;

/// Process-local store: collection name -> records
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Query("lock poisoned".to_string())
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, collection: &str) -> StoreResult<Vec<Record>> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Record>> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| r.id == Some(*id)).cloned()))
    }

    async fn insert(&self, collection: &str, record: &Record) -> StoreResult<RecordId> {
        let id = RecordId::generate();
        let mut stored = record.clone();
        stored.id = Some(id);

        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn replace(
        &self,
        collection: &str,
        id: &RecordId,
        record: &Record,
    ) -> StoreResult<bool> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let Some(records) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match records.iter_mut().find(|r| r.id == Some(*id)) {
            Some(slot) => {
                let mut replacement = record.clone();
                replacement.id = Some(*id);
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, collection: &str, id: &RecordId) -> StoreResult<bool> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let Some(records) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match records.iter().position(|r| r.id == Some(*id)) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
