//! `/guildlist` - render the guild member directory
//!
//! Best-effort aggregate over the member prefix: sorted case-insensitively
//! by IGN, capped at 20 rendered entries, with summary statistics in the
//! embed fields.

use chrono::Utc;
use guild_core::MemberRecord;

use crate::interactions::{Embed, Interaction, InteractionResponse};

use super::{BotContext, HandlerResult};

const COLOR_DIRECTORY: u32 = 0xF1_C40F;

/// Cap on rendered entries; beyond it only a remainder count is shown
const MAX_LISTED_MEMBERS: usize = 20;

pub(super) async fn handle(ctx: &BotContext, _interaction: &Interaction) -> HandlerResult {
    let mut members = ctx.members().list_all().await?;

    if members.is_empty() {
        return Ok(InteractionResponse::message(
            "No guild members registered yet! Use `/register [ign]` to be the first!",
        ));
    }

    members.sort_by_key(|member| member.ign.to_lowercase());

    let mut listing = String::new();
    for (index, member) in members.iter().take(MAX_LISTED_MEMBERS).enumerate() {
        listing.push_str(&format!(
            "{}. **{}** - <@{}>\n",
            index + 1,
            member.ign,
            member.discord_id
        ));
    }
    if members.len() > MAX_LISTED_MEMBERS {
        listing.push_str(&format!(
            "\n*... and {} more members*",
            members.len() - MAX_LISTED_MEMBERS
        ));
    }

    let embed = Embed::new(format!("📋 Guild Member Directory ({})", members.len()))
        .description(listing)
        .color(COLOR_DIRECTORY)
        .field("Members", members.len().to_string(), true)
        .field("Guild age", format!("{} days", guild_age_days(&members)), true)
        .field("Newest member", newest_member_ign(&members), true)
        .field(
            "Active this week",
            recently_updated(&members).to_string(),
            true,
        )
        .footer("Use /whois @user to look up specific members");

    Ok(InteractionResponse::embed(embed))
}

/// Days since the earliest registration
fn guild_age_days(members: &[MemberRecord]) -> i64 {
    members
        .iter()
        .map(|member| member.registered_at)
        .min()
        .map(|earliest| Utc::now().signed_duration_since(earliest).num_days())
        .unwrap_or(0)
}

/// IGN of the most recent registrant
fn newest_member_ign(members: &[MemberRecord]) -> String {
    members
        .iter()
        .max_by_key(|member| member.registered_at)
        .map(|member| member.ign.clone())
        .unwrap_or_default()
}

/// Records written within the trailing week
fn recently_updated(members: &[MemberRecord]) -> usize {
    let now = Utc::now();
    members
        .iter()
        .filter(|member| member.updated_within_days(now, 7))
        .count()
}
