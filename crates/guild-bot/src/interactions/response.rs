//! Interaction reply builders
//!
//! The two reply shapes Discord accepts from an interactions endpoint:
//! a plain-content message and a rich embed, each optionally ephemeral.

use serde::Serialize;

/// Discord message flag bit for ephemeral visibility
pub const EPHEMERAL_FLAG: u64 = 64;

/// Response type 1: pong (liveness acknowledgement)
const RESPONSE_TYPE_PONG: u8 = 1;

/// Response type 4: channel message with source
const RESPONSE_TYPE_MESSAGE: u8 = 4;

/// An outbound interaction response body
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<u64>,
}

impl InteractionResponse {
    /// Acknowledgement for a liveness ping
    #[must_use]
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_TYPE_PONG,
            data: None,
        }
    }

    /// Visible plain-text reply
    #[must_use]
    pub fn message(content: impl Into<String>) -> Self {
        Self::text(content.into(), false)
    }

    /// Plain-text reply visible only to the invoker
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::text(content.into(), true)
    }

    /// Visible embed reply
    #[must_use]
    pub fn embed(embed: Embed) -> Self {
        Self::rich(embed, false)
    }

    /// Embed reply visible only to the invoker
    #[must_use]
    pub fn ephemeral_embed(embed: Embed) -> Self {
        Self::rich(embed, true)
    }

    fn text(content: String, ephemeral: bool) -> Self {
        Self {
            kind: RESPONSE_TYPE_MESSAGE,
            data: Some(ResponseData {
                content: Some(content),
                embeds: None,
                flags: ephemeral.then_some(EPHEMERAL_FLAG),
            }),
        }
    }

    fn rich(embed: Embed, ephemeral: bool) -> Self {
        Self {
            kind: RESPONSE_TYPE_MESSAGE,
            data: Some(ResponseData {
                content: None,
                embeds: Some(vec![embed]),
                flags: ephemeral.then_some(EPHEMERAL_FLAG),
            }),
        }
    }

    /// Whether this reply carries the ephemeral flag
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|d| d.flags)
            .is_some_and(|flags| flags & EPHEMERAL_FLAG != 0)
    }

    /// The plain content, when present (used by tests)
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.content.as_deref())
    }

    /// The first embed, when present (used by tests)
    #[must_use]
    pub fn first_embed(&self) -> Option<&Embed> {
        self.data
            .as_ref()
            .and_then(|d| d.embeds.as_ref())
            .and_then(|e| e.first())
    }
}

/// A rich embed, limited to the fields the handlers render
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

impl Embed {
    /// Start a new embed with a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the accent color
    #[must_use]
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer text
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }
}

/// A single name/value pair in an embed
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Embed footer text
#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}
