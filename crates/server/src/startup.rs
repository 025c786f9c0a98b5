use std::{env, net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes::{self, ServerState};
use service::value::repository::SeaOrmValueRepository;
use service::value::service::ValueService;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Permissive CORS by default; honors `CORS_ORIGIN` when set.
pub fn build_cors() -> CorsLayer {
    match env::var("CORS_ORIGIN").ok().and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any),
        None => CorsLayer::very_permissive(),
    }
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(4000);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection; the schema is applied idempotently at boot
    let db = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            if cfg.database.validate().is_ok() {
                models::db::connect_with_config(&cfg.database).await?
            } else {
                models::db::connect().await?
            }
        }
        Err(_) => models::db::connect().await?,
    };
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmValueRepository { db });
    let state = ServerState { values: Arc::new(ValueService::new(repo)) };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting value api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
