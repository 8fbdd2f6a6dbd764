use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file first, then env vars; validated before anything binds.
fn load_config() -> Result<configs::AppConfig, StartupError> {
    configs::AppConfig::load().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging(LogFormat::from_env());

    let cfg = load_config()?;

    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;

    let state = AppState::new(db);
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting tricol server");
    axum::serve(listener, app).await?;
    Ok(())
}
