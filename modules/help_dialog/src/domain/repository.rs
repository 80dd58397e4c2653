//! Repository traits for configuration persistence
//!
//! Implementations live in infra/storage.

use crate::contract::{ConfigRecord, Scope};
use anyhow::Result;
use async_trait::async_trait;

/// Id under which the single global record is stored
pub const GLOBAL_RECORD_ID: u64 = 0;

/// Store of configuration records keyed by scope and id
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load one record
    async fn load(&self, scope: Scope, id: u64) -> Result<Option<ConfigRecord>>;

    /// Create or replace one record
    async fn save(&self, scope: Scope, id: u64, record: &ConfigRecord) -> Result<()>;

    /// All records of a scope ordered by id
    async fn list(&self, scope: Scope) -> Result<Vec<(u64, ConfigRecord)>>;

    /// Delete one record; returns whether it existed
    async fn delete(&self, scope: Scope, id: u64) -> Result<bool>;
}
