use axum::extract::FromRef;
use std::sync::Arc;

use crate::handlers::HandlerRegistry;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<HandlerRegistry>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub registry: Arc<HandlerRegistry>,
}

impl AppState {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
