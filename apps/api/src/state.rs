use std::sync::Arc;

use crate::engine::RecommendEngine;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The engine is immutable after construction, so handlers share it through
/// a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendEngine>,
}
