use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtSkillError {
    #[error("Failed to fetch videos for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Skill extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, YtSkillError>;
