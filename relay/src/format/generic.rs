//! Fallback formatting for providers without a dedicated template.

use serde_json::Value;

use crate::discord::{Embed, EmbedField};
use crate::format::{FormattedEvent, COLOR_GRAY};

/// Minimal best-effort template: provider label, event type, and whatever
/// repository or project name the payload carries.
pub fn format_generic(provider_label: &str, payload: &Value) -> FormattedEvent {
    let event_type = payload
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let mut embed = Embed::new(
        format!("{} Event: {}", provider_label, event_type),
        COLOR_GRAY,
    );

    let name = ["/repository/name", "/repo/name", "/project/name"]
        .iter()
        .find_map(|path| payload.pointer(path).and_then(Value::as_str));
    if let Some(name) = name {
        embed
            .fields
            .push(EmbedField::new("Repository", name, true));
    }

    embed
        .fields
        .push(EmbedField::new("Event", event_type.clone(), true));

    FormattedEvent { event_type, embed }
}
