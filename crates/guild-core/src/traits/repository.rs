//! Member repository trait - the port the storage layer implements
//!
//! The domain layer defines what it needs; the infrastructure layer
//! (guild-store) provides the implementation.

use async_trait::async_trait;

use crate::entities::MemberRecord;
use crate::error::StoreError;

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value access to member records.
///
/// One record per Discord user id, last writer wins. There are no
/// transactions: each record is independent, and `list_all` is a
/// best-effort collection rather than a consistent snapshot.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Fetch the record for a Discord user id.
    ///
    /// A stored value that fails to parse is treated as absent (logged at
    /// the point of use); transport failures propagate as `StoreError`.
    async fn get(&self, discord_id: &str) -> StoreResult<Option<MemberRecord>>;

    /// Persist a record keyed by its Discord user id. No atomic check
    /// against the previous value.
    async fn put(&self, record: &MemberRecord) -> StoreResult<()>;

    /// Enumerate every member record, skipping individually unparseable
    /// entries.
    async fn list_all(&self) -> StoreResult<Vec<MemberRecord>>;
}
