use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookline::config::AppConfig;
use bookline::handlers;
use bookline::services::leads::HttpLeadSender;
use bookline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.lead_endpoint.is_empty() {
        tracing::info!("LEAD_ENDPOINT not set, leads will be logged only");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        leads: Box::new(HttpLeadSender::new()),
        sessions: Mutex::new(HashMap::new()),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/slots", get(handlers::slots::get_slots))
        .route("/api/validate", post(handlers::validate::validate))
        .route("/api/flows/:flow", get(handlers::flows::get_flow))
        .route(
            "/api/flows/:flow/sessions",
            post(handlers::flows::create_session),
        )
        .route("/api/sessions/:id", get(handlers::flows::get_session))
        .route(
            "/api/sessions/:id/slots",
            get(handlers::flows::get_session_slots),
        )
        .route(
            "/api/sessions/:id/advance",
            post(handlers::flows::advance_session),
        )
        .route("/api/sessions/:id/back", post(handlers::flows::back_session))
        .route("/api/sessions/:id/lead", post(handlers::leads::submit_lead))
        .route(
            "/api/sessions/:id/whatsapp",
            get(handlers::flows::get_whatsapp_link),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
