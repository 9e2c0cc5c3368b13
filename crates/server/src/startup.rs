use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StoreBackend};
use migration::MigratorTrait;
use service::pizza::{InMemoryPizzaRepository, PizzaRepository, SeaOrmPizzaRepository};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Any origin may call the API.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured store. Database stores get their schema created here.
pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn PizzaRepository>> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            info!(backend = "memory", "using in-process pizza list");
            Ok(Arc::new(InMemoryPizzaRepository::new()))
        }
        StoreBackend::Database => {
            common::env::ensure_sqlite_parent(&cfg.database.url).await?;
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg).await?;
            migration::Migrator::up(&db, None).await?;
            info!(backend = "database", url = %cfg.database.url, "pizza table ready");
            Ok(Arc::new(SeaOrmPizzaRepository::new(db)))
        }
    }
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}:{}: {e}", server.host, server.port)))
}

/// Build the app from an already-loaded config and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let pizzas = build_repository(&cfg).await?;
    let app: Router = routes::build_router(ServerState::new(pizzas), build_cors());

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, backend = ?cfg.store.backend, "starting pizza store");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
