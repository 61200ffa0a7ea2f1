use std::net::SocketAddr;
use std::sync::Arc;

use server::ccd::CoreCaseDataClient;
use server::config::{self, CcdSettings};
use server::handlers::default_registry;
use server::notification::MailgunRespondentNotifier;
use server::state::AppState;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    config::load_feature_flags();
    let flags = config::feature_flags();
    server::logging::init_logging(flags.json_logs);
    server::health::record_start_time();

    let settings = match CcdSettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Case data service is not configured");
            std::process::exit(1);
        }
    };

    let registry = match default_registry(
        Arc::new(CoreCaseDataClient::new(settings)),
        Arc::new(MailgunRespondentNotifier::new()),
    ) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build callback handler registry");
            std::process::exit(1);
        }
    };
    tracing::info!(events = ?registry.events(), "Callback handlers registered");

    let router = server::openapi::api_router(AppState::new(registry))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = SocketAddr::from(([0, 0, 0, 0], config::listen_port()));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "Listening");
    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
