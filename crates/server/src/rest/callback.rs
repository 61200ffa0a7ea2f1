use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use shared_types::{AppError, CallbackRequest, CallbackResponse, CallbackType};

use crate::handlers::HandlerRegistry;

/// POST /cases/callbacks/{callback_type}
#[utoipa::path(
    post,
    path = "/cases/callbacks/{callback_type}",
    request_body = CallbackRequest,
    params(
        ("callback_type" = String, Path, description = "about-to-start, mid, about-to-submit or submitted")
    ),
    responses(
        (status = 200, description = "Callback handled", body = CallbackResponse),
        (status = 400, description = "Unknown callback type or malformed case data", body = AppError),
        (status = 404, description = "No handler for the event", body = AppError),
        (status = 502, description = "Notification or case data service failure", body = AppError)
    ),
    tag = "callbacks"
)]
pub async fn handle_callback(
    State(registry): State<Arc<HandlerRegistry>>,
    Path(callback_type): Path<String>,
    Json(body): Json<CallbackRequest>,
) -> Result<Json<CallbackResponse>, AppError> {
    let callback_type = CallbackType::from_str_opt(&callback_type).ok_or_else(|| {
        AppError::bad_request(format!("Invalid callback type: {}", callback_type))
    })?;

    let response = registry.dispatch(callback_type, &body).await?;
    Ok(Json(response))
}
