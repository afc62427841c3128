//! `/needcarry` - broadcast a boss carry request
//!
//! The composed message goes to the carry channel webhook when one is
//! configured; otherwise (or when delivery fails) it echoes back as the
//! visible command reply. Delivery gets one attempt, never a retry.

use chrono::Utc;
use tracing::warn;

use crate::interactions::{Interaction, InteractionResponse};

use super::{BotContext, HandlerResult};

pub(super) async fn handle(ctx: &BotContext, interaction: &Interaction) -> HandlerResult {
    let Some(member) = interaction.member.as_ref() else {
        return Ok(InteractionResponse::ephemeral(
            "This command can only be used from a server.",
        ));
    };

    let data = interaction.data.as_ref();
    let Some(boss) = data.and_then(|d| d.option_str("boss")) else {
        return Ok(InteractionResponse::ephemeral(
            "Please specify which boss you need help with!",
        ));
    };
    // An empty notes string reads the same as omitted
    let notes = data
        .and_then(|d| d.option_str("notes"))
        .filter(|notes| !notes.is_empty())
        .unwrap_or("None");

    let Some(record) = ctx.members().get(member.user.id.as_str()).await? else {
        return Ok(InteractionResponse::ephemeral(
            "Please register your IGN first using `/register [your_ign]`!",
        ));
    };

    let content = format!(
        "🆘 **Carry Request**\n\n\
         **Player:** {username} (IGN: **{ign}**)\n\
         **Boss:** {boss}\n\
         **Notes:** {notes}\n\
         **Requested:** <t:{unix}:R>\n\n\
         React with ✋ to help out!",
        username = member.user.username,
        ign = record.ign,
        unix = Utc::now().timestamp(),
    );

    if let Some(url) = ctx.carry_webhook() {
        match ctx.webhooks().post_content(url, &content).await {
            Ok(()) => {
                return Ok(InteractionResponse::ephemeral(
                    "✅ Your carry request has been posted to the carry channel!",
                ));
            }
            Err(error) => {
                warn!(%error, "Carry webhook delivery failed, echoing inline");
            }
        }
    }

    // Fallback: respond in the current channel
    Ok(InteractionResponse::message(format!(
        "✅ Carry request created!\n\n{content}"
    )))
}
