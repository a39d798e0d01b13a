//! Relay - webhook relay for deployment and repository notifications.
//!
//! Receives Vercel and Hugging Face webhooks, verifies their signatures,
//! normalizes each event into a Discord embed, and forwards it to a chat
//! webhook. Stateless and fire-and-forget: every request is one independent
//! pass with a single outbound POST, no queueing, persistence, or retry.
//!
//! ## Architecture
//!
//! ```text
//! Provider webhook → Web Server → Formatter → Discord webhook
//! ```

pub mod config;
pub mod discord;
pub mod format;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use discord::{send_notification, Embed, EmbedField, EmbedFooter, WebhookMessage};
pub use format::{format_event, FormattedEvent, Provider};
pub use web::{router, AppState};
