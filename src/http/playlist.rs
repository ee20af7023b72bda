use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::http::state::AppState;
use crate::media::playlist::PlaylistEntry;
use crate::media::scanner;

#[derive(Deserialize, Debug, Default)]
pub struct PlaylistQuery {
    /// Search keyword, matched case-insensitively against file base names.
    /// Absent or empty means "everything".
    pub k: Option<String>,
}

/// GET / with optional ?k=keyword. Every request is a full rescan of the
/// tree; nothing is cached. The response is always 200 with a JSON array,
/// empty when nothing matched or when the scan failed (the failure is
/// logged, not surfaced).
pub async fn playlist(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
) -> Json<Vec<PlaylistEntry>> {
    let config = Arc::clone(&state.config);
    let keyword = query.k.unwrap_or_default();

    // The walk is blocking filesystem I/O; keep it off the async workers.
    let entries = tokio::task::spawn_blocking(move || scanner::scan(&config, &keyword))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("scan task failed: {}", e);
            Vec::new()
        });

    Json(entries)
}

/// JSON error payload helper. No current route produces an error status
/// (scan failures still answer 200 with an empty array), but consumers of
/// the playlist schema expect errors in this shape when they do appear.
pub fn error_response(code: StatusCode, message: &str) -> Response {
    (code, Json(ErrorBody { error: message.to_string() })).into_response()
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}
