//! `/whois` - look up another member's directory entry. Read-only.

use crate::interactions::{Embed, Interaction, InteractionResponse};

use super::{BotContext, HandlerResult};

const COLOR_INFO: u32 = 0x34_98DB;

pub(super) async fn handle(ctx: &BotContext, interaction: &Interaction) -> HandlerResult {
    let data = interaction.data.as_ref();
    let target_id = data.and_then(|d| d.option_str("user"));
    let Some(target_id) = target_id else {
        return Ok(InteractionResponse::ephemeral(
            "Please specify a user to look up!",
        ));
    };

    let Some(record) = ctx.members().get(target_id).await? else {
        return Ok(InteractionResponse::ephemeral(
            "User not found in guild directory! They can join with `/register [ign]`.",
        ));
    };

    // Cosmetic badge only: the target carries the configured officer role in
    // the resolved payload metadata. Never used for access control, and the
    // lookup succeeds regardless of whether the metadata is present.
    let is_officer = match (ctx.officer_role_id(), data) {
        (Some(officer_role), Some(data)) => data
            .resolved_member(target_id)
            .is_some_and(|member| member.roles.iter().any(|role| role == officer_role)),
        _ => false,
    };

    let title = if is_officer {
        format!("⭐ {} (Officer)", record.username)
    } else {
        record.username.clone()
    };

    let embed = Embed::new(title)
        .color(COLOR_INFO)
        .field("MapleStory IGN", format!("**{}**", record.ign), true)
        .field("Discord", format!("<@{}>", record.discord_id), true)
        .field(
            "Registered",
            record.registered_at.format("%Y-%m-%d").to_string(),
            true,
        );

    Ok(InteractionResponse::embed(embed))
}
