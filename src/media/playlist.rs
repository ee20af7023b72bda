use serde::Serialize;

/// One discovered media file, shaped for JW Player-style playlist consumers.
/// `image`, `description` and `mediaid` are carried for schema compatibility
/// and are always empty in this server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistEntry {
    /// URL-escaped client path to the media resource, rooted at the
    /// configured public prefix.
    pub file: String,
    /// Thumbnail URL. Always "" (no thumbnail support).
    pub image: String,
    /// File base name including extension, e.g. "movie.mp4".
    pub title: String,
    pub description: String,
    #[serde(rename = "mediaid")]
    pub media_id: String,
}

impl PlaylistEntry {
    pub fn new(file: String, title: String) -> Self {
        PlaylistEntry {
            file,
            image: String::new(),
            title,
            description: String::new(),
            media_id: String::new(),
        }
    }
}
