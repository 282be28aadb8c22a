use axum::http::HeaderValue;
use axum::Router;
use common::env::ensure_db_dir;
use configs::{AppConfig, CorsConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// `*` or no configured origins: mirror any caller. Otherwise only the listed origins.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.allows_any() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| StartupError::InvalidConfig(format!("cors origin {o:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for Ctrl+C");
        return;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: prepare storage, build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    ensure_db_dir(cfg.database.sqlite_file_path().as_deref()).await?;

    // DB connection + schema (create-all on first start)
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let state = ServerState::new(db);

    // Build router
    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(state, cors);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "starting dictionary server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
