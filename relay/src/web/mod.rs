//! Web server module for handling inbound webhooks.
//!
//! A thin axum surface: each provider endpoint validates the request,
//! verifies its signature, and relays one formatted notification to Discord
//! before acknowledging the caller.

pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{
    generic_webhook, health, huggingface_webhook, vercel_webhook, AckResponse, AppState,
    ErrorResponse, HealthResponse, RelayError,
};
pub use signature::{is_signature_verification_enabled, verify_signature, SignatureAlgorithm};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/vercel", post(vercel_webhook))
        .route("/webhooks/huggingface", post(huggingface_webhook))
        .route("/webhooks/generic", post(generic_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
