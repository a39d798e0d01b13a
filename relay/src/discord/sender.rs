//! Discord webhook delivery.
//!
//! Fire-and-forget: one POST per notification, no retry and no queueing.
//! A non-2xx response or transport error both map to `false`; the caller
//! decides whether to log or ignore. The shared client carries the request
//! timeout, the sender adds no policy of its own.

use reqwest::Client;
use tracing::{error, info};

use crate::discord::types::{Embed, WebhookMessage};

/// Deliver one embed to a Discord webhook URL.
///
/// Returns `true` on a 2xx response, `false` otherwise. Never returns an
/// error; delivery failure is a boolean outcome.
pub async fn send_notification(client: &Client, webhook_url: &str, embed: &Embed) -> bool {
    let message = WebhookMessage::single(embed.clone());

    info!(
        title = %embed.title,
        field_count = embed.fields.len(),
        "discord_send_starting"
    );

    match client.post(webhook_url).json(&message).send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let is_success = resp.status().is_success();

            if is_success {
                info!(status_code = status, "discord_send_complete");
            } else {
                error!(status_code = status, "discord_send_rejected");
            }

            is_success
        }
        Err(e) => {
            if e.is_timeout() {
                error!(error = %e, "discord_send_timeout");
            } else {
                error!(error = %e, "discord_send_error");
            }
            false
        }
    }
}
