use axum::Router;
use shared_types::{AppError, AppErrorKind, CallbackRequest, CallbackResponse, CaseDetails};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::callback::handle_callback,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        CallbackRequest, CallbackResponse, CaseDetails,
        health::HealthResponse,
    )),
    tags(
        (name = "callbacks", description = "Case event callbacks from the case-data platform"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "General Application Decisions API",
        description = "Callback handlers for judicial decisions on general applications",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the callback API at `/cases/callbacks/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
