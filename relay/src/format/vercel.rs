//! Vercel deployment event formatting.
//!
//! Vercel posts `deployment.*` events with the deployment and project
//! objects inline. Each event kind maps to a fixed emoji, color, and title;
//! ready or succeeded deployments additionally get a clickable link.

use serde_json::Value;

use crate::discord::{Embed, EmbedField, EmbedFooter};
use crate::format::{
    short_sha, FormattedEvent, COLOR_BLUE, COLOR_GRAY, COLOR_GREEN, COLOR_RED,
};

/// Deployment event kinds the relay recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeploymentKind {
    Created,
    Succeeded,
    Failed,
    Ready,
    Canceled,
    Unknown,
}

impl DeploymentKind {
    /// Parse the `deployment.*` suffix of the event type.
    fn from_event_type(event_type: &str) -> Self {
        match event_type.strip_prefix("deployment.").unwrap_or(event_type) {
            "created" => Self::Created,
            "succeeded" => Self::Succeeded,
            "error" | "failed" => Self::Failed,
            "ready" => Self::Ready,
            "canceled" => Self::Canceled,
            _ => Self::Unknown,
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Self::Created => "🚀",
            Self::Succeeded | Self::Ready => "✅",
            Self::Failed => "❌",
            Self::Canceled => "🚫",
            Self::Unknown => "ℹ️",
        }
    }

    fn color(self) -> u32 {
        match self {
            Self::Created => COLOR_BLUE,
            Self::Succeeded | Self::Ready => COLOR_GREEN,
            Self::Failed => COLOR_RED,
            Self::Canceled | Self::Unknown => COLOR_GRAY,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Created => "Deployment Created",
            Self::Succeeded => "Deployment Succeeded",
            Self::Failed => "Deployment Failed",
            Self::Ready => "Deployment Ready",
            Self::Canceled => "Deployment Canceled",
            Self::Unknown => "Deployment Event",
        }
    }
}

/// Format a Vercel deployment event.
pub fn format_vercel(payload: &Value) -> FormattedEvent {
    let event_type = payload
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let kind = DeploymentKind::from_event_type(&event_type);

    let deployment = payload.get("deployment");
    let project = payload
        .pointer("/project/name")
        .and_then(Value::as_str)
        .unwrap_or("unknown project");
    let state = deployment
        .and_then(|d| d.get("state"))
        .and_then(Value::as_str);
    let target = deployment
        .and_then(|d| d.get("target"))
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let url = deployment.and_then(|d| d.get("url")).and_then(Value::as_str);

    let title = format!("{} {} - {}", kind.emoji(), project, kind.label());
    let mut embed = Embed::new(title, kind.color());

    embed.fields.push(EmbedField::new("Project", project, true));
    embed.fields.push(EmbedField::new("Environment", target, true));
    embed
        .fields
        .push(EmbedField::new("State", state.unwrap_or("unknown"), true));

    if let Some(sha) = deployment
        .and_then(|d| d.pointer("/meta/githubCommitSha"))
        .and_then(Value::as_str)
    {
        embed
            .fields
            .push(EmbedField::new("Commit", short_sha(sha, 8), true));
    }

    // The link is keyed on the deployment state; the event kind stands in
    // when the payload carries no state.
    let linkable = match state {
        Some(s) => s.eq_ignore_ascii_case("ready") || s.eq_ignore_ascii_case("succeeded"),
        None => matches!(kind, DeploymentKind::Ready | DeploymentKind::Succeeded),
    };

    if linkable {
        if let Some(url) = url {
            let link = format!("https://{}", url);
            embed
                .fields
                .push(EmbedField::new("Deployment", link.clone(), false));
            embed.url = Some(link);
        }
    }

    embed.footer = Some(EmbedFooter::new("Vercel"));

    FormattedEvent { event_type, embed }
}
