use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use netia_backend::{config::Config, routes::create_router, state::AppState};

const LISTEN_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("netia_backend=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; upstream calls go out unauthenticated");
    }

    let state = Arc::new(AppState::new(config));
    let cors = CorsLayer::very_permissive();
    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    println!("✅ Netia AI server running at http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
