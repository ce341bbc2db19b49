use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use training_backend::{
    config::{get_config, init_config},
    middleware, routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/public/inscriptions",
            post(routes::inscription::submit_inscription),
        )
        .route(
            "/api/public/applications",
            post(routes::application::submit_application),
        )
        .route("/api/public/quiz", post(routes::quiz::start_quiz))
        .route("/api/public/quiz/:id", get(routes::quiz::get_quiz))
        .route("/api/public/quiz/:id/answer", post(routes::quiz::save_answer))
        .route("/api/public/quiz/:id/advance", post(routes::quiz::advance_quiz))
        .route("/api/public/quiz/:id/restart", post(routes::quiz::restart_quiz))
        .route("/api/public/quiz/:id/contact", post(routes::quiz::submit_contact))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    // 10 MiB: an oversized resume must still reach the handler so the workflow
    // can answer with a field error instead of a transport rejection.
    let app = base_routes
        .merge(public_api)
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
