use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use ytskill_core::{
    VideoInfo, default_skills_dir, extract_skill, format_duration, format_views,
    get_channel_videos, get_transcript, get_video_info, list_skills, save_skill,
    skill_name_from_title,
};

#[derive(Parser)]
#[command(name = "ytskill")]
#[command(about = "Fetch YouTube transcripts and extract reusable assistant skills")]
struct Cli {
    /// YouTube channel or video URL
    url: String,

    /// Maximum number of channel videos to process
    #[arg(short, long, default_value_t = 50)]
    limit: usize,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn is_single_video(url: &str) -> bool {
    url.contains("watch?v=") || url.contains("youtu.be/")
}

/// Best-effort channel name from the URL when metadata only says Unknown.
fn channel_name_from_url(url: &str) -> String {
    for marker in ["/@", "/c/"] {
        if let Some(rest) = url.split(marker).nth(1) {
            if let Some(name) = rest.split('/').next() {
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }
    "YouTube Channel".to_string()
}

fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() > max {
        let head: String = title.chars().take(max).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

async fn load_videos(url: &str, limit: usize) -> ytskill_core::Result<(Vec<VideoInfo>, String)> {
    if is_single_video(url) {
        let video = get_video_info(url).await?;
        let channel = video.channel.clone();
        return Ok((vec![video], channel));
    }

    let videos = get_channel_videos(url, limit).await?;
    let mut channel = videos
        .first()
        .map(|v| v.channel.clone())
        .unwrap_or_default();
    if channel.is_empty() || channel == "Unknown" {
        channel = channel_name_from_url(url);
    }
    Ok((videos, channel))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("ytskill").cyan().bold(),
        style("Learning from YouTube, one video at a time").dim()
    );

    let skills_root = default_skills_dir();
    let existing = list_skills(&skills_root).await?;
    println!(
        "{}",
        style(format!("Skill library: {} skills", existing.len())).dim()
    );

    // Load step: failures abort the load, not the process
    let spinner = create_spinner("Fetching videos...");
    let (videos, channel) = match load_videos(&cli.url, cli.limit).await {
        Ok(loaded) => {
            spinner.finish_and_clear();
            loaded
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return Ok(());
        }
    };

    if videos.is_empty() {
        println!("No videos found for {}", cli.url);
        return Ok(());
    }

    println!("{}", style(format!("Channel: {channel}")).cyan().bold());
    println!("{} videos to process\n", videos.len());
    for video in &videos {
        println!(
            "  {} {} {}",
            style("•").dim(),
            truncate_title(&video.title, 50),
            style(format!(
                "[{} | {} views]",
                format_duration(video.duration),
                format_views(video.view_count)
            ))
            .dim()
        );
    }
    println!();

    // Ctrl-C flips the stop flag; the loop checks it between videos, so an
    // in-flight fetch or extraction runs to completion first
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                stop.store(true, Ordering::SeqCst);
            }
        });
    }

    let tmp_dir = tempfile::tempdir()?;
    let total = videos.len();
    let mut completed = 0usize;
    let mut errors = 0usize;

    for (i, video) in videos.iter().enumerate() {
        if stop.load(Ordering::SeqCst) {
            println!("{}", style("Stopped by user.").yellow());
            break;
        }

        let index = i + 1;
        let short_title = truncate_title(&video.title, 40);

        let spinner = create_spinner(&format!(
            "[{index}/{total}] Fetching transcript: {short_title}"
        ));

        let transcript =
            match get_transcript(&video.url, &tmp_dir.path().join(&video.id)).await {
                Ok(transcript) => transcript,
                Err(e) => {
                    spinner.finish_with_message(format!(
                        "{} [{index}/{total}] Error: {e}",
                        style("✗").red().bold()
                    ));
                    errors += 1;
                    continue;
                }
            };

        let Some(transcript) = transcript else {
            spinner.finish_with_message(format!(
                "{} [{index}/{total}] No transcript available: {short_title}",
                style("✗").red().bold()
            ));
            errors += 1;
            continue;
        };

        spinner.set_message(format!(
            "[{index}/{total}] Extracting skill: {short_title}"
        ));

        let skill = match extract_skill(&transcript, &video.title, &video.channel).await {
            Ok(skill) => skill,
            Err(e) => {
                spinner.finish_with_message(format!(
                    "{} [{index}/{total}] Error: {e}",
                    style("✗").red().bold()
                ));
                errors += 1;
                continue;
            }
        };

        let Some(content) = skill else {
            spinner.finish_with_message(format!(
                "{} [{index}/{total}] No skill extracted from: {short_title}",
                style("✗").red().bold()
            ));
            errors += 1;
            continue;
        };

        let name = skill_name_from_title(&video.title);
        match save_skill(&skills_root, &content, &name).await {
            Ok(_) => {
                spinner.finish_with_message(format!(
                    "{} [{index}/{total}] Skill saved: {}",
                    style("✓").green().bold(),
                    style(&name).magenta()
                ));
                completed += 1;
            }
            Err(e) => {
                spinner.finish_with_message(format!(
                    "{} [{index}/{total}] Error: {e}",
                    style("✗").red().bold()
                ));
                errors += 1;
            }
        }
    }

    println!("\n{}", style("─".repeat(60)).dim());
    println!(
        "{} {completed} skills extracted, {errors} errors.",
        style("Done!").green().bold()
    );

    let library = list_skills(&skills_root).await?;
    println!(
        "{}",
        style(format!(
            "Skill library: {} skills at {}",
            library.len(),
            skills_root.display()
        ))
        .dim()
    );

    Ok(())
}
