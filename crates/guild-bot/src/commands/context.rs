//! Bot context - dependency container for command handlers
//!
//! Holds the member repository, the outbound webhook client, and the
//! configuration slices handlers need. Built once at startup and threaded
//! into every invocation; no ambient globals.

use std::sync::Arc;

use guild_core::MemberRepository;

use crate::webhook::WebhookClient;

/// Dependencies shared by all command handlers
#[derive(Clone)]
pub struct BotContext {
    members: Arc<dyn MemberRepository>,
    webhooks: WebhookClient,
    carry_webhook: Option<String>,
    officer_role_id: Option<String>,
}

impl BotContext {
    /// Create a new context
    pub fn new(
        members: Arc<dyn MemberRepository>,
        webhooks: WebhookClient,
        carry_webhook: Option<String>,
        officer_role_id: Option<String>,
    ) -> Self {
        Self {
            members,
            webhooks,
            carry_webhook,
            officer_role_id,
        }
    }

    /// The member record store
    pub fn members(&self) -> &dyn MemberRepository {
        self.members.as_ref()
    }

    /// The outbound webhook client
    pub fn webhooks(&self) -> &WebhookClient {
        &self.webhooks
    }

    /// Carry-channel webhook URL, when forwarding is configured
    pub fn carry_webhook(&self) -> Option<&str> {
        self.carry_webhook.as_deref()
    }

    /// Role id that earns the cosmetic officer badge
    pub fn officer_role_id(&self) -> Option<&str> {
        self.officer_role_id.as_deref()
    }
}
