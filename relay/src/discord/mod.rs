//! Outbound Discord webhook module.
//!
//! Value types for the embed envelope plus the one-shot sender.

pub mod sender;
pub mod types;

pub use sender::send_notification;
pub use types::{Embed, EmbedField, EmbedFooter, WebhookMessage};
