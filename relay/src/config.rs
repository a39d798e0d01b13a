//! Configuration module for environment variable parsing.

use std::env;

/// Application configuration loaded from environment variables.
///
/// Secrets are `Option`: an unset secret means signature verification is
/// skipped for that provider, which the handlers log explicitly.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Discord webhook URL notifications are delivered to
    pub discord_webhook_url: Option<String>,

    /// Vercel webhook secret for HMAC-SHA1 signature verification
    pub vercel_webhook_secret: Option<String>,

    /// Hugging Face webhook secret for HMAC-SHA256 signature verification
    pub hf_webhook_secret: Option<String>,

    /// Outbound HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL").ok(),

            vercel_webhook_secret: env::var("VERCEL_WEBHOOK_SECRET").ok(),

            hf_webhook_secret: env::var("HF_WEBHOOK_SECRET").ok(),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
