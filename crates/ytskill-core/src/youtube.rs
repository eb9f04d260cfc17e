use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::{fs, process::Command};

use crate::{
    error::{Result, YtSkillError},
    subtitles::parse_vtt,
    types::VideoInfo,
};

/// Raw yt-dlp JSON metadata; only the fields we consume.
#[derive(Debug, Deserialize)]
struct RawVideoMeta {
    #[serde(default)]
    id: String,
    title: Option<String>,
    channel: Option<String>,
    uploader: Option<String>,
    duration: Option<f64>,
    view_count: Option<u64>,
    thumbnail: Option<String>,
}

impl RawVideoMeta {
    fn into_video_info(self, url: Option<String>) -> VideoInfo {
        let url =
            url.unwrap_or_else(|| format!("https://www.youtube.com/watch?v={}", self.id));
        VideoInfo {
            title: self.title.unwrap_or_else(|| "Unknown".to_string()),
            channel: self
                .channel
                .or(self.uploader)
                .unwrap_or_else(|| "Unknown".to_string()),
            duration: self.duration.unwrap_or(0.0).max(0.0) as u64,
            view_count: self.view_count.unwrap_or(0),
            thumbnail: self.thumbnail,
            id: self.id,
            url,
        }
    }
}

fn parse_video_lines(stdout: &str) -> Result<Vec<VideoInfo>> {
    let mut videos = Vec::new();
    for line in stdout.trim().lines() {
        if line.is_empty() {
            continue;
        }
        let raw: RawVideoMeta = serde_json::from_str(line)?;
        videos.push(raw.into_video_info(None));
    }
    Ok(videos)
}

/// List up to `limit` videos of a channel or playlist using yt-dlp.
pub async fn get_channel_videos(channel_url: &str, limit: usize) -> Result<Vec<VideoInfo>> {
    let output = Command::new("yt-dlp")
        .arg("--flat-playlist")
        .arg("--dump-json")
        .arg("--playlist-end")
        .arg(limit.to_string())
        .arg(channel_url)
        .output()
        .await?;

    if !output.status.success() {
        return Err(YtSkillError::FetchFailed {
            url: channel_url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    parse_video_lines(&String::from_utf8_lossy(&output.stdout))
}

/// Fetch metadata for a single video using yt-dlp.
pub async fn get_video_info(video_url: &str) -> Result<VideoInfo> {
    let output = Command::new("yt-dlp")
        .arg("--dump-json")
        .arg("--skip-download")
        .arg(video_url)
        .output()
        .await?;

    if !output.status.success() {
        return Err(YtSkillError::FetchFailed {
            url: video_url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let raw: RawVideoMeta = serde_json::from_str(stdout.trim())?;
    Ok(raw.into_video_info(Some(video_url.to_string())))
}

/// Fetch the English transcript for a video into `output_dir`.
///
/// Tries a manual subtitle track first, then auto-generated captions.
/// `Ok(None)` means no subtitle track exists for this video; that is a
/// normal outcome, not an error.
pub async fn get_transcript(video_url: &str, output_dir: &Path) -> Result<Option<String>> {
    fs::create_dir_all(output_dir).await?;
    let output_template = output_dir.join("transcript");

    fetch_subtitles(video_url, &output_template, "--write-sub").await?;
    let mut vtt = find_subtitle_file(output_dir).await?;

    if vtt.is_none() {
        fetch_subtitles(video_url, &output_template, "--write-auto-sub").await?;
        vtt = find_subtitle_file(output_dir).await?;
    }

    let Some(vtt_path) = vtt else {
        tracing::debug!(url = video_url, "no subtitle track available");
        return Ok(None);
    };

    let content = fs::read_to_string(&vtt_path).await?;
    Ok(Some(parse_vtt(&content)))
}

async fn fetch_subtitles(video_url: &str, output_template: &Path, sub_flag: &str) -> Result<()> {
    // yt-dlp exits non-zero for some videos even when a subtitle file was
    // written; only the presence of the file matters
    let output = Command::new("yt-dlp")
        .arg(sub_flag)
        .arg("--sub-lang")
        .arg("en")
        .arg("--skip-download")
        .arg("--output")
        .arg(output_template)
        .arg(video_url)
        .output()
        .await?;

    if !output.status.success() {
        tracing::debug!(
            url = video_url,
            flag = sub_flag,
            "yt-dlp subtitle call exited non-zero"
        );
    }

    Ok(())
}

async fn find_subtitle_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("transcript") && name.ends_with(".vtt") {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}
