use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::handlers::HandlerRegistry;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Event identifiers this instance will accept callbacks for.
    pub events: Vec<String>,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(registry): State<Arc<HandlerRegistry>>) -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
        events: registry
            .events()
            .iter()
            .map(|e| e.as_str().to_string())
            .collect(),
    })
}
