use std::path::Path;

use crate::config::Config;

/// Translate an absolute filesystem path under the scan root into a
/// URL-escaped client path rooted at the public prefix.
///
/// Re-rooting strips the root prefix explicitly. The scanner only hands us
/// paths it found under the root, so the fallback (first-occurrence textual
/// replace, never global) exists for the degenerate case where the path and
/// root strings disagree, e.g. mixed trailing-slash spellings.
///
/// Escaping is deliberately two-pass: percent-encode the whole re-rooted
/// string (spaces, '#', '?', non-ASCII all become %XX), then restore the
/// literal '/' separators that were encoded along the way. Cannot fail.
pub fn translate(config: &Config, path: &Path) -> String {
    let raw = path.to_string_lossy();
    let root = config.root.to_string_lossy();

    let rerooted = match raw.strip_prefix(root.as_ref()) {
        Some(rest) => format!("{}{}", config.prefix, rest),
        None => {
            tracing::warn!(
                "path {} does not start with scan root {}, rewriting textually",
                raw,
                root
            );
            raw.replacen(root.as_ref(), &config.prefix, 1)
        }
    };

    urlencoding::encode(&rerooted).replace("%2F", "/")
}
