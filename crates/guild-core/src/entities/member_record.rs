//! Member record entity - the guild directory entry for one Discord user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Ign;

/// Persisted guild member record, keyed by Discord user id.
///
/// Field names are serialized in camelCase to stay compatible with the
/// records already present in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Discord user id, unique per record
    pub discord_id: String,
    /// In-game name, validated at write time
    pub ign: String,
    /// Discord display name cached at last write; may go stale
    pub username: String,
    /// First registration time, immutable after creation
    pub registered_at: DateTime<Utc>,
    /// Time of the most recent write, equals `registered_at` on creation
    pub updated_at: DateTime<Utc>,
}

impl MemberRecord {
    /// Create a brand-new record; `registered_at` and `updated_at` both
    /// stamp to `now`.
    pub fn new(
        discord_id: impl Into<String>,
        ign: &Ign,
        username: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            discord_id: discord_id.into(),
            ign: ign.as_str().to_string(),
            username: username.into(),
            registered_at: now,
            updated_at: now,
        }
    }

    /// Build the successor record for a re-registration. The original
    /// `registered_at` survives, everything else refreshes.
    pub fn reregistered(&self, ign: &Ign, username: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            discord_id: self.discord_id.clone(),
            ign: ign.as_str().to_string(),
            username: username.into(),
            registered_at: self.registered_at,
            updated_at: now,
        }
    }

    /// Whether the record was written within the trailing `days` window.
    pub fn updated_within_days(&self, now: DateTime<Utc>, days: i64) -> bool {
        now.signed_duration_since(self.updated_at) <= chrono::Duration::days(days)
    }
}
