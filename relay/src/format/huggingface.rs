//! Hugging Face repository event formatting.
//!
//! Events are keyed by the `(event.scope, event.action)` pair: pushes arrive
//! as `("repo.content", "update")`, repository lifecycle as `("repo", ...)`,
//! settings changes as `("repo.config", "update")`, and social activity under
//! the `discussion` scopes. Unrecognized pairs fall through to a generic
//! template so no event is dropped.

use serde_json::Value;

use crate::discord::{Embed, EmbedField, EmbedFooter};
use crate::format::{
    short_sha, truncate_preview, FormattedEvent, COLOR_BLUE, COLOR_GOLD, COLOR_GRAY,
    COLOR_GREEN, COLOR_INDIGO, COLOR_ORANGE, COLOR_PURPLE,
};

/// Format a Hugging Face repository event.
pub fn format_huggingface(payload: &Value) -> FormattedEvent {
    let scope = payload
        .pointer("/event/scope")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let action = payload
        .pointer("/event/action")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let event_type = format!("{}.{}", scope, action);

    let repo_name = payload
        .pointer("/repo/name")
        .and_then(Value::as_str)
        .unwrap_or("unknown repository");

    let mut embed = match (scope, action) {
        ("repo.content", "update") => push_embed(payload, repo_name),
        ("repo", "create" | "delete" | "update" | "move") => {
            lifecycle_embed(payload, repo_name, action)
        }
        ("repo.config", "update") => config_embed(payload, repo_name),
        ("discussion", _) => discussion_embed(payload, repo_name, action),
        ("discussion.comment", _) => comment_embed(payload, repo_name, action),
        _ => fallback_embed(repo_name, &event_type),
    };

    if let Some(web) = payload.pointer("/repo/url/web").and_then(Value::as_str) {
        embed.url = Some(web.to_string());
    }
    embed.footer = Some(EmbedFooter::new("Hugging Face"));

    FormattedEvent { event_type, embed }
}

/// `repo.content` update: a push of one or more refs.
fn push_embed(payload: &Value, repo_name: &str) -> Embed {
    let mut embed = Embed::new("New push to repository", COLOR_GOLD);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));

    let refs = payload.get("updatedRefs").and_then(Value::as_array);

    if let Some(sha) = refs.and_then(|refs| {
        refs.iter()
            .find_map(|r| r.get("newSha").and_then(Value::as_str))
    }) {
        embed
            .fields
            .push(EmbedField::new("Commit", short_sha(sha, 7), true));
    }

    if let Some(refs) = refs {
        let lines: Vec<String> = refs
            .iter()
            .map(|r| {
                let name = r.get("ref").and_then(Value::as_str).unwrap_or("unknown ref");
                let old_sha = r.get("oldSha").and_then(Value::as_str);
                let new_sha = r.get("newSha").and_then(Value::as_str);
                let tag = match (old_sha, new_sha) {
                    (None, Some(_)) => "created",
                    (Some(_), None) => "deleted",
                    _ => "updated",
                };
                format!("`{}` ({})", name, tag)
            })
            .collect();

        if !lines.is_empty() {
            embed
                .fields
                .push(EmbedField::new("Updated refs", lines.join("\n"), false));
        }
    }

    embed
}

/// `repo` scope: create, delete, update, or move of the repository itself.
fn lifecycle_embed(payload: &Value, repo_name: &str, action: &str) -> Embed {
    let repo_type = payload
        .pointer("/repo/type")
        .and_then(Value::as_str)
        .unwrap_or("repo");

    let mut embed = Embed::new(format!("Repository {}", action), COLOR_ORANGE);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));
    embed.fields.push(EmbedField::new("Type", repo_type, true));
    embed.fields.push(EmbedField::new("Action", action, true));
    embed
}

/// `repo.config` update: settings changed on the repository.
fn config_embed(payload: &Value, repo_name: &str) -> Embed {
    let mut embed = Embed::new("Configuration updated", COLOR_INDIGO);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));

    if let Some(config) = payload.get("updatedConfig").and_then(Value::as_object) {
        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        if !keys.is_empty() {
            embed
                .fields
                .push(EmbedField::new("Changed settings", keys.join(", "), false));
        }
    }

    embed
}

/// `discussion` scope: discussions and pull requests.
fn discussion_embed(payload: &Value, repo_name: &str, action: &str) -> Embed {
    let discussion = payload.get("discussion");
    let is_pull_request = discussion
        .and_then(|d| d.get("isPullRequest"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let noun = if is_pull_request {
        "Pull request"
    } else {
        "Discussion"
    };
    let color = if is_pull_request {
        COLOR_GREEN
    } else {
        COLOR_BLUE
    };

    let mut embed = Embed::new(format!("{} {}", noun, action), color);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));

    if let Some(title) = discussion
        .and_then(|d| d.get("title"))
        .and_then(Value::as_str)
    {
        embed.fields.push(EmbedField::new("Title", title, false));
    }

    embed
}

/// `discussion.comment` scope: a comment with a truncated content preview.
fn comment_embed(payload: &Value, repo_name: &str, action: &str) -> Embed {
    let mut embed = Embed::new(format!("Comment {}", action), COLOR_PURPLE);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));

    if let Some(title) = payload
        .pointer("/discussion/title")
        .and_then(Value::as_str)
    {
        embed
            .fields
            .push(EmbedField::new("Discussion", title, true));
    }

    if let Some(content) = payload.pointer("/comment/content").and_then(Value::as_str) {
        embed
            .fields
            .push(EmbedField::new("Comment", truncate_preview(content), false));
    }

    embed
}

/// Catch-all for unrecognized (scope, action) pairs.
fn fallback_embed(repo_name: &str, event_type: &str) -> Embed {
    let mut embed = Embed::new("Hugging Face event", COLOR_GRAY);
    embed
        .fields
        .push(EmbedField::new("Repository", repo_name, true));
    embed.fields.push(EmbedField::new("Event", event_type, true));
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_push_event() {
        let payload = json!({
            "event": {"scope": "repo.content", "action": "update"},
            "repo": {
                "type": "model",
                "name": "acme/bert-finetuned",
                "url": {"web": "https://huggingface.co/acme/bert-finetuned"}
            },
            "updatedRefs": [
                {"ref": "refs/heads/main", "oldSha": "aaaa111", "newSha": "0123456789abcdef"},
                {"ref": "refs/heads/dev", "oldSha": null, "newSha": "bbbb2222"},
                {"ref": "refs/heads/old", "oldSha": "cccc3333", "newSha": null}
            ]
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.event_type, "repo.content.update");
        assert_eq!(formatted.embed.title, "New push to repository");
        assert_eq!(formatted.embed.color, COLOR_GOLD);
        assert_eq!(
            formatted.embed.url,
            Some("https://huggingface.co/acme/bert-finetuned".to_string())
        );

        let commit = formatted
            .embed
            .fields
            .iter()
            .find(|f| f.name == "Commit")
            .unwrap();
        assert_eq!(commit.value, "0123456");

        let refs = formatted
            .embed
            .fields
            .iter()
            .find(|f| f.name == "Updated refs")
            .unwrap();
        assert!(refs.value.contains("`refs/heads/main` (updated)"));
        assert!(refs.value.contains("`refs/heads/dev` (created)"));
        assert!(refs.value.contains("`refs/heads/old` (deleted)"));
    }

    #[test]
    fn test_repo_lifecycle_event() {
        let payload = json!({
            "event": {"scope": "repo", "action": "create"},
            "repo": {"type": "dataset", "name": "acme/corpus"}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.event_type, "repo.create");
        assert_eq!(formatted.embed.title, "Repository create");
        assert_eq!(formatted.embed.color, COLOR_ORANGE);
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.name == "Type" && f.value == "dataset"));
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.name == "Action" && f.value == "create"));
    }

    #[test]
    fn test_config_update_lists_changed_settings() {
        let payload = json!({
            "event": {"scope": "repo.config", "action": "update"},
            "repo": {"type": "model", "name": "acme/bert"},
            "updatedConfig": {"private": false, "gated": "auto"}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.embed.title, "Configuration updated");
        assert_eq!(formatted.embed.color, COLOR_INDIGO);
        let settings = formatted
            .embed
            .fields
            .iter()
            .find(|f| f.name == "Changed settings")
            .unwrap();
        assert!(settings.value.contains("private"));
        assert!(settings.value.contains("gated"));
    }

    #[test]
    fn test_pull_request_discussion_is_green() {
        let payload = json!({
            "event": {"scope": "discussion", "action": "create"},
            "repo": {"name": "acme/bert"},
            "discussion": {"title": "Add ONNX weights", "isPullRequest": true}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.embed.title, "Pull request create");
        assert_eq!(formatted.embed.color, COLOR_GREEN);
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.name == "Title" && f.value == "Add ONNX weights"));
    }

    #[test]
    fn test_plain_discussion_is_blue() {
        let payload = json!({
            "event": {"scope": "discussion", "action": "update"},
            "repo": {"name": "acme/bert"},
            "discussion": {"title": "Question about tokenizer", "isPullRequest": false}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.embed.title, "Discussion update");
        assert_eq!(formatted.embed.color, COLOR_BLUE);
    }

    #[test]
    fn test_comment_preview_truncated() {
        let content = "x".repeat(150);
        let payload = json!({
            "event": {"scope": "discussion.comment", "action": "create"},
            "repo": {"name": "acme/bert"},
            "discussion": {"title": "Question"},
            "comment": {"content": content}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.embed.title, "Comment create");
        assert_eq!(formatted.embed.color, COLOR_PURPLE);
        let comment = formatted
            .embed
            .fields
            .iter()
            .find(|f| f.name == "Comment")
            .unwrap();
        assert_eq!(comment.value.chars().count(), 103);
        assert!(comment.value.ends_with("..."));
    }

    #[test]
    fn test_comment_preview_at_limit_unmodified() {
        let content = "y".repeat(100);
        let payload = json!({
            "event": {"scope": "discussion.comment", "action": "create"},
            "repo": {"name": "acme/bert"},
            "comment": {"content": content}
        });

        let formatted = format_huggingface(&payload);

        let comment = formatted
            .embed
            .fields
            .iter()
            .find(|f| f.name == "Comment")
            .unwrap();
        assert_eq!(comment.value, "y".repeat(100));
    }

    #[test]
    fn test_unrecognized_scope_falls_back_with_repo_name() {
        let payload = json!({
            "event": {"scope": "webhook", "action": "ping"},
            "repo": {"name": "acme/bert"}
        });

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.event_type, "webhook.ping");
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.name == "Repository" && f.value == "acme/bert"));
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.name == "Event" && f.value == "webhook.ping"));
    }

    #[test]
    fn test_missing_event_block_falls_back() {
        let payload = json!({"repo": {"name": "acme/bert"}});

        let formatted = format_huggingface(&payload);

        assert_eq!(formatted.event_type, "unknown.unknown");
        assert!(formatted
            .embed
            .fields
            .iter()
            .any(|f| f.value == "acme/bert"));
    }
}
