//! Discord webhook message types.
//!
//! A notification is delivered as a single rich embed wrapped in the
//! webhook envelope `{"embeds": [...]}`. Embeds are built fresh per event
//! and never mutated after the send.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A rich embed delivered to the Discord webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    /// Title line
    pub title: String,
    /// Optional body text under the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent color as a 24-bit RGB integer
    pub color: u32,
    /// RFC 3339 UTC timestamp taken when the embed was built
    pub timestamp: String,
    /// Ordered name/value fields
    pub fields: Vec<EmbedField>,
    /// Optional URL the title links to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Optional footer line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

impl Embed {
    /// Create an embed with the current UTC wall-clock time.
    ///
    /// The timestamp is always the formatting time, not the event's own
    /// timestamp (the source event may lack one).
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            timestamp: Utc::now().to_rfc3339(),
            fields: Vec::new(),
            url: None,
            footer: None,
        }
    }
}

/// Key-value field on an embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Footer line on an embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl EmbedFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: None,
        }
    }
}

/// Webhook envelope: Discord expects the embed inside an `embeds` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

impl WebhookMessage {
    /// Wrap a single embed in the envelope.
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}
