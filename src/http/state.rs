use std::sync::Arc;

use crate::config::Config;

/// Shared application state injected into route handlers via
/// axum::extract::State. The config is write-once at startup and read-only
/// afterwards, so Arc alone is enough; no lock.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
