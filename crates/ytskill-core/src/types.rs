use serde::{Deserialize, Serialize};

/// Metadata for a single YouTube video, populated once from yt-dlp output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// Duration in seconds
    pub duration: u64,
    pub view_count: u64,
    pub url: String,
    pub thumbnail: Option<String>,
}
