use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use quiz_backend::{
    config::{get_config, init_config},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let pages = Router::new()
        .route("/", get(routes::page::index))
        .route("/start", post(routes::page::start))
        .route("/submit", post(routes::page::submit));

    let api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/quiz/start", post(routes::quiz::start_test))
        .route("/api/quiz/status", get(routes::quiz::get_status))
        .route("/api/quiz/submit", post(routes::quiz::submit_test));

    let app = pages
        .merge(api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
