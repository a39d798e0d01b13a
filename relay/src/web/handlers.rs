//! Webhook endpoint handlers.
//!
//! Each handler runs a single pass over the request: validate the payload,
//! check configuration, verify the provider signature when a secret is
//! configured, format the event, and deliver it to Discord. Delivery failure
//! never changes the inbound response; the calling platform would otherwise
//! retry or alert on a non-2xx acknowledgement.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::discord::send_notification;
use crate::format::{format_event, Provider};
use crate::web::signature::{
    is_signature_verification_enabled, verify_signature, SignatureAlgorithm,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

// =============================================================================
// Responses and errors
// =============================================================================

/// Request rejections, mapped onto the HTTP response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request body is not a JSON object")]
    MalformedPayload,
    #[error("no Discord webhook URL is configured")]
    MissingConfiguration,
    #[error("webhook signature verification failed")]
    InvalidSignature,
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedPayload => StatusCode::BAD_REQUEST,
            Self::MissingConfiguration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "malformed_payload",
            Self::MissingConfiguration => "missing_configuration",
            Self::InvalidSignature => "invalid_signature",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.category(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

/// Acknowledgement returned for accepted events.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: &'static str,
    pub event: String,
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Webhook endpoints
// =============================================================================

/// A provider's signature header convention.
struct SignatureScheme<'a> {
    header: &'static str,
    algorithm: SignatureAlgorithm,
    secret: &'a Option<String>,
}

/// Vercel deployment webhook endpoint.
pub async fn vercel_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AckResponse>, RelayError> {
    info!(body_length = body.len(), "vercel_webhook_received");

    let scheme = SignatureScheme {
        header: "x-vercel-signature",
        algorithm: SignatureAlgorithm::Sha1,
        secret: &state.config.vercel_webhook_secret,
    };

    relay_event(&state, Provider::Vercel, &headers, &body, Some(scheme)).await
}

/// Hugging Face repository webhook endpoint.
pub async fn huggingface_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AckResponse>, RelayError> {
    info!(body_length = body.len(), "huggingface_webhook_received");

    let scheme = SignatureScheme {
        header: "x-webhook-signature",
        algorithm: SignatureAlgorithm::Sha256,
        secret: &state.config.hf_webhook_secret,
    };

    relay_event(&state, Provider::HuggingFace, &headers, &body, Some(scheme)).await
}

/// Catch-all webhook endpoint for providers without a signature convention.
pub async fn generic_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AckResponse>, RelayError> {
    info!(body_length = body.len(), "generic_webhook_received");

    relay_event(&state, Provider::Generic, &headers, &body, None).await
}

/// One pass over an inbound event: validate, verify, format, send, ack.
async fn relay_event(
    state: &AppState,
    provider: Provider,
    headers: &HeaderMap,
    body: &Bytes,
    signature: Option<SignatureScheme<'_>>,
) -> Result<Json<AckResponse>, RelayError> {
    // 1. The payload must be a JSON object.
    let payload: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            warn!(provider = %provider, error = %e, "webhook_payload_invalid_json");
            return Err(RelayError::MalformedPayload);
        }
    };
    if !payload.is_object() {
        warn!(provider = %provider, "webhook_payload_not_object");
        return Err(RelayError::MalformedPayload);
    }

    // 2. Without a Discord target there is nothing to relay.
    let webhook_url = state.config.discord_webhook_url.as_deref().ok_or_else(|| {
        error!(provider = %provider, "discord_webhook_url_missing");
        RelayError::MissingConfiguration
    })?;

    // 3. Verify the provider signature when a secret is configured.
    if let Some(scheme) = signature {
        if is_signature_verification_enabled(scheme.secret) {
            let secret = scheme.secret.as_deref().unwrap_or_default();
            let header_value = headers.get(scheme.header).and_then(|v| v.to_str().ok());

            if !verify_signature(body, header_value, secret, scheme.algorithm) {
                warn!(
                    provider = %provider,
                    header = scheme.header,
                    "webhook_signature_invalid"
                );
                return Err(RelayError::InvalidSignature);
            }
        } else {
            warn!(provider = %provider, "signature_verification_disabled");
        }
    }

    // 4. Classify and format; unrecognized shapes fall back, never reject.
    let formatted = format_event(provider, &payload);

    // 5. Fire-and-forget delivery; failure is logged, not surfaced.
    if !send_notification(&state.client, webhook_url, &formatted.embed).await {
        error!(
            provider = %provider,
            event_type = %formatted.event_type,
            "notification_delivery_failed"
        );
    }

    // 6. Acknowledge regardless of delivery outcome.
    info!(
        provider = %provider,
        event_type = %formatted.event_type,
        "webhook_acknowledged"
    );

    Ok(Json(AckResponse {
        status: "ok",
        event: formatted.event_type,
    }))
}
