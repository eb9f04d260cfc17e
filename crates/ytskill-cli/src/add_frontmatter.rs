//! One-shot migration: add YAML frontmatter to skills that lack it.

use anyhow::Result;
use console::style;
use tokio::fs;

use ytskill_core::{add_frontmatter, default_skills_dir};

#[tokio::main]
async fn main() -> Result<()> {
    let root = default_skills_dir();

    let mut entries = match fs::read_dir(&root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No skill library at {}", root.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut updated = 0usize;
    let mut skipped = 0usize;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        if add_frontmatter(&path).await? {
            println!(
                "{} Updated: {}",
                style("✓").green().bold(),
                entry.file_name().to_string_lossy()
            );
            updated += 1;
        } else {
            skipped += 1;
        }
    }

    println!("\nDone! Updated {updated} skills, skipped {skipped} (already had frontmatter)");

    Ok(())
}
