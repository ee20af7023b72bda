pub mod playlist;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(playlist::playlist))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
