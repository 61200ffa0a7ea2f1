pub mod callback;

use axum::{routing::post, Router};
use crate::state::AppState;

/// Build the callback API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/cases/callbacks/{callback_type}", post(callback::handle_callback))
}
