//! This server exposes a small JSON API over an in-memory collection of
//! notes and serves the static front-end bundle for every other path.
use std::{
    env,
    net::SocketAddr,
    sync::{Arc, RwLock},
};

use jot::{notes::routes::router, state::AppState};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The port the server listens on when PORT is unset.
const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // setup logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("server=debug,jot=debug,tower_http=debug")),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(RwLock::new(AppState::seed()));
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

    // Unmatched paths fall through to the front-end bundle.
    let app = router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("server running on port {}", port);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
