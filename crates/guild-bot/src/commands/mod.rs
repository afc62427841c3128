//! Command dispatch
//!
//! Maps an exact command-name string to its handler. Unknown names get a
//! plain "unknown command" reply; handler failures are caught here, logged
//! server-side, and converted to a generic apology with no detail leaked.

mod context;
mod guildlist;
mod needcarry;
mod register;
mod whois;

pub use context::BotContext;

use guild_core::StoreError;
use tracing::error;

use crate::interactions::{Interaction, InteractionResponse};

/// Errors a handler can surface to the dispatch boundary.
///
/// Input validation and not-found conditions never appear here; handlers
/// resolve those locally as ephemeral replies.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for command handlers
pub type HandlerResult = Result<InteractionResponse, HandlerError>;

/// Dispatch a command interaction to its handler
pub async fn dispatch(ctx: &BotContext, interaction: &Interaction) -> InteractionResponse {
    let Some(data) = interaction.data.as_ref() else {
        return InteractionResponse::ephemeral("Malformed command payload.");
    };

    let result = match data.name.as_str() {
        "register" => register::handle(ctx, interaction).await,
        "whois" => whois::handle(ctx, interaction).await,
        "needcarry" => needcarry::handle(ctx, interaction).await,
        "guildlist" => guildlist::handle(ctx, interaction).await,
        _ => return InteractionResponse::message("Unknown command!"),
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            error!(command = %data.name, error = %err, "Command handler failed");
            InteractionResponse::message("Sorry, something went wrong!")
        }
    }
}
