use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use chat_relay::state::AppState;
use chat_relay::{handlers, ChatRelay, Settings};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();
    let port = settings.port;
    tracing::info!(
        "Relay configured: mode {:?}, upstream {}, model {}",
        settings.relay_mode,
        settings.api_url,
        settings.model_name
    );

    // Create shared state
    let state = Arc::new(AppState {
        relay: ChatRelay::new(settings),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::HeaderName::from_static("content-type")]);

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .layer(cors)
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
