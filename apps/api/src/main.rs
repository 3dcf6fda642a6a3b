mod config;
mod dataset;
mod engine;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dataset::BuiltinCatalog;
use crate::engine::catalog::{CatalogSource, JsonFileCatalog};
use crate::engine::skill_space::SkillSpace;
use crate::engine::RecommendEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Future-Self Recommendation API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Pick the catalog source: JSON file when configured, built-in dataset
    // otherwise.
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {path}");
            Box::new(JsonFileCatalog::new(path))
        }
        None => Box::new(BuiltinCatalog),
    };
    let items = source.load()?;

    // All engine state is validated here and immutable afterwards; a broken
    // catalog or lexicon aborts startup instead of failing per request.
    let skill_space = SkillSpace::new(dataset::skill_dimensions())?;
    let engine = RecommendEngine::new(skill_space, dataset::KEYWORD_MAPPINGS, items)?;
    info!(
        "Engine ready: {} items, {} skill dimensions, {} lexicon keywords",
        engine.catalog().len(),
        engine.skill_space().len(),
        dataset::KEYWORD_MAPPINGS.len()
    );

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
