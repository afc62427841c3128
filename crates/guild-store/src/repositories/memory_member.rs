//! In-memory member repository for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use guild_core::{MemberRecord, MemberRepository, StoreError, StoreResult};

/// Member repository backed by a process-local map.
///
/// Mirrors the Redis store's semantics (last writer wins, unordered
/// enumeration) so handler tests see the same behavior.
#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    records: RwLock<HashMap<String, MemberRecord>>,
}

impl MemoryMemberRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the repository holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn get(&self, discord_id: &str) -> StoreResult<Option<MemberRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::backend("member map poisoned"))?;
        Ok(records.get(discord_id).cloned())
    }

    async fn put(&self, record: &MemberRecord) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::backend("member map poisoned"))?;
        records.insert(record.discord_id.clone(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<MemberRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::backend("member map poisoned"))?;
        Ok(records.values().cloned().collect())
    }
}
