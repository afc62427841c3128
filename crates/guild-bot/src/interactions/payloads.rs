//! Inbound interaction payloads
//!
//! Only the subset of the Discord interaction object the bot actually reads.
//! Unknown fields are ignored on deserialization.

use std::collections::HashMap;

use serde::Deserialize;

/// Interaction kinds the gateway distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    /// Liveness probe, answered with a pong
    Ping,
    /// Slash command invocation
    ApplicationCommand,
    /// Anything else; rejected at the gateway
    Unknown,
}

/// An inbound interaction payload
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: Option<CommandData>,
    pub member: Option<GuildMemberInfo>,
}

impl Interaction {
    /// Classify the raw `type` discriminant
    #[must_use]
    pub fn interaction_type(&self) -> InteractionType {
        match self.kind {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            _ => InteractionType::Unknown,
        }
    }
}

/// Slash-command invocation data
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    pub resolved: Option<ResolvedData>,
}

impl CommandData {
    /// Look up a string option by name
    #[must_use]
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.as_ref())
            .and_then(serde_json::Value::as_str)
    }

    /// Resolved member metadata for a user option value, when Discord
    /// included it in the payload
    #[must_use]
    pub fn resolved_member(&self, user_id: &str) -> Option<&ResolvedMember> {
        self.resolved
            .as_ref()
            .and_then(|resolved| resolved.members.get(user_id))
    }
}

/// A single command option as sent by Discord
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: Option<serde_json::Value>,
}

/// Resolved objects attached to a command invocation
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedData {
    #[serde(default)]
    pub members: HashMap<String, ResolvedMember>,
}

/// Partial guild member carried in `data.resolved`
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedMember {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The invoking guild member
#[derive(Debug, Clone, Deserialize)]
pub struct GuildMemberInfo {
    pub user: UserInfo,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The invoking user
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}
