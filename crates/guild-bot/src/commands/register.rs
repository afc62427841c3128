//! `/register` - create or update the caller's guild directory entry

use chrono::Utc;
use guild_core::{Ign, IgnError, MemberRecord};
use tracing::info;

use crate::interactions::{Embed, Interaction, InteractionResponse};

use super::{BotContext, HandlerResult};

const COLOR_SUCCESS: u32 = 0x2E_CC71;

pub(super) async fn handle(ctx: &BotContext, interaction: &Interaction) -> HandlerResult {
    let Some(member) = interaction.member.as_ref() else {
        return Ok(InteractionResponse::ephemeral(
            "This command can only be used from a server.",
        ));
    };

    let raw_ign = interaction
        .data
        .as_ref()
        .and_then(|data| data.option_str("ign"));
    let Some(raw_ign) = raw_ign else {
        return Ok(InteractionResponse::ephemeral(
            "Please provide your MapleStory IGN!",
        ));
    };

    let ign = match Ign::parse(raw_ign) {
        Ok(ign) => ign,
        Err(IgnError::InvalidLength(len)) => {
            return Ok(InteractionResponse::ephemeral(format!(
                "IGN must be between 2-12 characters, got {len}!"
            )));
        }
        Err(IgnError::InvalidCharacters) => {
            return Ok(InteractionResponse::ephemeral(
                "IGN may only contain letters and digits!",
            ));
        }
    };

    let user_id = member.user.id.as_str();
    let username = member.user.username.as_str();

    let existing = ctx.members().get(user_id).await?;
    let now = Utc::now();
    let record = match &existing {
        Some(previous) => previous.reregistered(&ign, username, now),
        None => MemberRecord::new(user_id, &ign, username, now),
    };
    ctx.members().put(&record).await?;

    info!(discord_id = %user_id, ign = %ign, updated = existing.is_some(), "Member registered");

    let mut embed = match &existing {
        Some(_) => Embed::new("Guild Registration")
            .description(format!("✅ Successfully updated your IGN to **{ign}**!"))
            .color(COLOR_SUCCESS),
        None => Embed::new("Guild Registration")
            .description(format!("✅ Successfully registered your IGN as **{ign}**!"))
            .color(COLOR_SUCCESS),
    };

    if let Some(previous) = existing.as_ref().filter(|prev| prev.ign != record.ign) {
        embed = embed.field("Previous IGN", previous.ign.clone(), true);
    }

    Ok(InteractionResponse::embed(embed))
}
