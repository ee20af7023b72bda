use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

use crate::config::Config;
use crate::media::playlist::PlaylistEntry;
use crate::media::urlpath;

/// The single media extension this server indexes. Matched case-sensitively
/// against the path extension, so "clip.MP4" is skipped.
pub const TARGET_EXTENSION: &str = "mp4";

/// Walk the scan root and return a playlist entry for every .mp4 file whose
/// base name contains `keyword` case-insensitively. An empty keyword matches
/// everything. Directories never produce entries.
///
/// Traversal failures (root missing, permission denied mid-walk) abort the
/// walk: the error is logged and whatever was accumulated so far is returned.
/// Callers always get a Vec, never an error; an unreadable root looks the
/// same as an empty one.
pub fn scan(config: &Config, keyword: &str) -> Vec<PlaylistEntry> {
    let start = Instant::now();
    let needle = keyword.to_uppercase();
    let mut entries = Vec::new();

    for entry in WalkDir::new(&config.root) {
        match entry {
            Err(e) => {
                tracing::error!("scan of {} aborted: {}", config.root.display(), e);
                break;
            }
            Ok(entry) if entry.file_type().is_file() => {
                if let Some(found) = match_file(config, entry.path(), &needle) {
                    entries.push(found);
                }
            }
            Ok(_) => {} // directories: walkdir recurses, nothing to emit
        }
    }

    tracing::info!(
        "matched {} files under {} in {:.1}s",
        entries.len(),
        config.root.display(),
        start.elapsed().as_secs_f64()
    );

    entries
}

/// Apply the selection predicate to one file. `needle` is the already
/// upper-cased keyword ("" matches unconditionally). Extension is checked
/// first; files that fail it are never compared against the keyword.
fn match_file(config: &Config, path: &Path, needle: &str) -> Option<PlaylistEntry> {
    if path.extension().and_then(|e| e.to_str()) != Some(TARGET_EXTENSION) {
        return None;
    }

    let title = path.file_name()?.to_string_lossy().into_owned();

    if !needle.is_empty() && !title.to_uppercase().contains(needle) {
        return None;
    }

    let file = urlpath::translate(config, path);
    tracing::debug!("matched {} -> {}", path.display(), file);
    Some(PlaylistEntry::new(file, title))
}
