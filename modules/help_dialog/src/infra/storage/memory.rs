//! In-memory configuration store

use crate::contract::{ConfigRecord, Scope};
use crate::domain::repository::ConfigStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Configuration store held in process memory
///
/// Records are keyed by `(scope, id)` so listing a scope yields ids in order.
#[derive(Default)]
pub struct InMemoryConfigStore {
    records: RwLock<BTreeMap<(Scope, u64), ConfigRecord>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (Scope, u64, ConfigRecord)>,
    {
        let records = records
            .into_iter()
            .map(|(scope, id, record)| ((scope, id), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records across all scopes
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn load(&self, scope: Scope, id: u64) -> Result<Option<ConfigRecord>> {
        Ok(self.records.read().get(&(scope, id)).cloned())
    }

    async fn save(&self, scope: Scope, id: u64, record: &ConfigRecord) -> Result<()> {
        self.records.write().insert((scope, id), record.clone());
        Ok(())
    }

    async fn list(&self, scope: Scope) -> Result<Vec<(u64, ConfigRecord)>> {
        Ok(self
            .records
            .read()
            .range((scope, 0)..=(scope, u64::MAX))
            .map(|((_, id), record)| (*id, record.clone()))
            .collect())
    }

    async fn delete(&self, scope: Scope, id: u64) -> Result<bool> {
        Ok(self.records.write().remove(&(scope, id)).is_some())
    }
}
