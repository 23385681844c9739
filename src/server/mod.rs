//! HTTP surface: router, shared state and the serve loop.

mod handlers;
pub mod views;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::{Category, FetchStrategy, WeaponStore};
use crate::config::ServerConfig;

/// Per-process state shared by handlers. Holds no open connection;
/// each request opens its own.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: WeaponStore,
    pub static_root: Arc<PathBuf>,
    pub fetch_strategy: FetchStrategy,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: WeaponStore::new(config.database.clone()),
            static_root: Arc::new(config.static_root.clone()),
            fetch_strategy: config.fetch_strategy,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/weapon/:name", get(handlers::weapon_handler))
        .route("/search", get(handlers::search_handler));

    for category in Category::ALL {
        router = router.route(
            &category.path(),
            get(move |State(state): State<AppState>| handlers::category_handler(state, category)),
        );
    }

    router
        .fallback(handlers::not_found_handler)
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = build_router(AppState::new(&config));
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!(
        bind = %config.bind,
        database = ?config.database,
        static_root = ?config.static_root,
        strategy = ?config.fetch_strategy,
        "frontier-armory listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested");
        })
        .await
        .context("Server failed")
}
