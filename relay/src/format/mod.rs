//! Event formatting module.
//!
//! Maps provider webhook payloads into Discord embeds.
//!
//! ## Formatting flow
//!
//! ```text
//! (Provider, payload) → format_event() → FormattedEvent
//! ```
//!
//! Routing is a match over the provider and its event key with a fallback
//! arm on every level, so an unrecognized event shape still produces a
//! best-effort notification instead of being dropped.

pub mod generic;
pub mod huggingface;
pub mod vercel;

use std::fmt;

use serde_json::Value;
use tracing::info;

use crate::discord::Embed;

pub use generic::format_generic;
pub use huggingface::format_huggingface;
pub use vercel::format_vercel;

// Embed accent colors (24-bit RGB).
pub const COLOR_GOLD: u32 = 0xFFD700;
pub const COLOR_ORANGE: u32 = 0xE67E22;
pub const COLOR_INDIGO: u32 = 0x4B0082;
pub const COLOR_GREEN: u32 = 0x2ECC71;
pub const COLOR_BLUE: u32 = 0x3498DB;
pub const COLOR_PURPLE: u32 = 0x9B59B6;
pub const COLOR_RED: u32 = 0xE74C3C;
pub const COLOR_GRAY: u32 = 0x95A5A6;

/// Maximum length of any free-text preview field, in characters.
pub const PREVIEW_LIMIT: usize = 100;

/// Platforms whose events the relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Vercel,
    HuggingFace,
    Generic,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Vercel => "Vercel",
            Provider::HuggingFace => "Hugging Face",
            Provider::Generic => "Generic",
        };
        f.write_str(name)
    }
}

/// A formatted notification together with the classified event label
/// reported back to the calling platform in the acknowledgement.
#[derive(Debug, Clone)]
pub struct FormattedEvent {
    pub event_type: String,
    pub embed: Embed,
}

/// Format a provider payload into a Discord embed.
///
/// Never fails: every provider branch has a fallback template.
pub fn format_event(provider: Provider, payload: &Value) -> FormattedEvent {
    let formatted = match provider {
        Provider::Vercel => format_vercel(payload),
        Provider::HuggingFace => format_huggingface(payload),
        Provider::Generic => format_generic("Generic", payload),
    };

    info!(
        provider = %provider,
        event_type = %formatted.event_type,
        title = %formatted.embed.title,
        "event_formatted"
    );

    formatted
}

/// Cut a free-text preview to the fixed limit, appending an ellipsis marker
/// only when something was dropped. Counts characters, not bytes, so
/// multi-byte text never splits a boundary.
pub(crate) fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LIMIT {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(PREVIEW_LIMIT).collect();
    cut.push_str("...");
    cut
}

/// Shorten a commit sha to its leading characters.
pub(crate) fn short_sha(sha: &str, len: usize) -> &str {
    match sha.char_indices().nth(len) {
        Some((index, _)) => &sha[..index],
        None => sha,
    }
}
