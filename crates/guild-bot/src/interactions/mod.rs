//! Discord interaction wire types and reply builders

mod payloads;
mod response;

pub use payloads::{
    CommandData, CommandOption, GuildMemberInfo, Interaction, InteractionType, ResolvedData,
    ResolvedMember, UserInfo,
};
pub use response::{Embed, EmbedField, EmbedFooter, InteractionResponse, EPHEMERAL_FLAG};
