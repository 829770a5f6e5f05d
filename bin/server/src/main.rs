use sentinel_ai::OllamaBackend;
use sentinel_server::config::ServerConfig;
use sentinel_server::routes;
use sentinel_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!(
        base_url = %config.ollama.base_url,
        model = %config.ollama.model,
        "Loaded configuration"
    );

    let backend = OllamaBackend::new(config.ollama.to_backend_config());
    let state = AppState::new(Arc::new(backend));
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await.expect("server error");
}
