//! Redis-backed member record storage.
//!
//! One JSON value per member under `member:{discord_id}`. No TTL, no CAS:
//! records live forever and the last writer wins. Enumeration walks the
//! prefix with SCAN and offers no snapshot guarantee across keys.

use async_trait::async_trait;
use guild_core::{MemberRecord, MemberRepository, StoreError, StoreResult};
use tracing::warn;

use crate::pool::RedisPool;

/// Key prefix for member records
pub const MEMBER_KEY_PREFIX: &str = "member:";

/// Member repository backed by Redis
#[derive(Debug, Clone)]
pub struct RedisMemberRepository {
    pool: RedisPool,
}

impl RedisMemberRepository {
    /// Create a new repository on an existing pool
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Build the storage key for a Discord user id
    fn key(discord_id: &str) -> String {
        format!("{MEMBER_KEY_PREFIX}{discord_id}")
    }

    /// Parse a stored value, degrading corrupt entries to absent
    fn parse(key: &str, raw: &str) -> Option<MemberRecord> {
        match serde_json::from_str(raw) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(%key, %error, "Skipping unparseable member record");
                None
            }
        }
    }
}

#[async_trait]
impl MemberRepository for RedisMemberRepository {
    async fn get(&self, discord_id: &str) -> StoreResult<Option<MemberRecord>> {
        let key = Self::key(discord_id);
        let raw = self
            .pool
            .get_raw(&key)
            .await
            .map_err(StoreError::backend)?;
        Ok(raw.and_then(|value| Self::parse(&key, &value)))
    }

    async fn put(&self, record: &MemberRecord) -> StoreResult<()> {
        let key = Self::key(&record.discord_id);
        self.pool
            .set(&key, record)
            .await
            .map_err(StoreError::backend)?;
        tracing::debug!(discord_id = %record.discord_id, ign = %record.ign, "Stored member record");
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<MemberRecord>> {
        let pattern = format!("{MEMBER_KEY_PREFIX}*");
        let keys = self
            .pool
            .scan_keys(&pattern, 100)
            .await
            .map_err(StoreError::backend)?;

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            // A key may disappear between SCAN and GET; skip it
            match self.pool.get_raw(&key).await {
                Ok(Some(raw)) => {
                    if let Some(record) = Self::parse(&key, &raw) {
                        records.push(record);
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(%key, %error, "Skipping member record after fetch failure");
                }
            }
        }

        Ok(records)
    }
}
