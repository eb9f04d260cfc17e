//! ytskill Core Library
//!
//! Core functionality for fetching YouTube metadata and subtitle transcripts,
//! extracting reusable skill documents with an AI assistant, and maintaining
//! the local skill library.

pub mod error;
pub mod extract;
pub mod format;
pub mod frontmatter;
pub mod naming;
pub mod store;
pub mod subtitles;
pub mod types;
pub mod youtube;

// Re-export commonly used items at crate root
pub use error::{Result, YtSkillError};
pub use extract::extract_skill;
pub use format::{format_duration, format_views};
pub use frontmatter::{add_frontmatter, extract_description};
pub use naming::skill_name_from_title;
pub use store::{default_skills_dir, list_skills, save_skill};
pub use subtitles::parse_vtt;
pub use types::VideoInfo;
pub use youtube::{get_channel_videos, get_transcript, get_video_info};
