use std::path::Path;

use tokio::fs;

use crate::error::Result;

const FALLBACK_DESCRIPTION: &str = "A skill extracted from YouTube content.";

/// Derive a one-line description from a skill document body.
///
/// Takes the first paragraph after the `# ` title, joined into one line and
/// capped at roughly 200 characters. An existing frontmatter block is
/// skipped so re-derivation works on already-migrated files too.
pub fn extract_description(content: &str) -> String {
    let mut body = content;
    if body.starts_with("---") {
        let mut parts = body.splitn(3, "---");
        parts.next();
        if let (Some(_), Some(rest)) = (parts.next(), parts.next()) {
            body = rest;
        }
    }

    let mut description_lines = Vec::new();
    let mut in_description = false;

    for line in body.trim().lines() {
        if line.starts_with("# ") {
            in_description = true;
            continue;
        }
        if in_description {
            if line.starts_with('#') {
                break;
            }
            if line.trim().is_empty() && !description_lines.is_empty() {
                break;
            }
            if !line.trim().is_empty() {
                description_lines.push(line.trim());
            }
        }
    }

    let description = description_lines.join(" ");
    let description = if description.chars().count() > 200 {
        let head: String = description.chars().take(197).collect();
        format!("{head}...")
    } else {
        description
    };

    if description.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        description
    }
}

/// Prepend a `name`/`description` frontmatter header to a legacy skill.
///
/// Returns `Ok(false)` when the directory has no `SKILL.md` or the file
/// already carries frontmatter, so a second run is a no-op.
pub async fn add_frontmatter(skill_dir: &Path) -> Result<bool> {
    let skill_file = skill_dir.join("SKILL.md");
    let content = match fs::read_to_string(&skill_file).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if content.trim_start().starts_with("---") {
        return Ok(false);
    }

    let name = skill_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let description = extract_description(&content).replace('"', "\\\"");

    let new_content = format!("---\nname: {name}\ndescription: \"{description}\"\n---\n\n{content}");
    fs::write(&skill_file, new_content).await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_paragraph_after_title() {
        let content = "# My Skill\n\nDoes a thing,\nacross two lines.\n\n## Instructions\n\nStep 1.\n";
        assert_eq!(extract_description(content), "Does a thing, across two lines.");
    }

    #[test]
    fn stops_at_next_heading() {
        let content = "# My Skill\nShort description.\n## Instructions\nmore text\n";
        assert_eq!(extract_description(content), "Short description.");
    }

    #[test]
    fn skips_existing_frontmatter_block() {
        let content = "---\nname: old\n---\n\n# My Skill\n\nReal description.\n";
        assert_eq!(extract_description(content), "Real description.");
    }

    #[test]
    fn falls_back_when_no_paragraph_found() {
        assert_eq!(extract_description("# Title Only\n"), FALLBACK_DESCRIPTION);
        assert_eq!(extract_description(""), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let content = format!("# T\n\n{}\n", "word ".repeat(100));
        let description = extract_description(&content);
        assert_eq!(description.chars().count(), 200);
        assert!(description.ends_with("..."));
    }

    #[tokio::test]
    async fn adds_frontmatter_once() {
        let root = tempfile::tempdir().unwrap();
        let skill_dir = root.path().join("my-skill");
        fs::create_dir_all(&skill_dir).await.unwrap();
        fs::write(skill_dir.join("SKILL.md"), "# My Skill\n\nA description.\n")
            .await
            .unwrap();

        assert!(add_frontmatter(&skill_dir).await.unwrap());

        let content = fs::read_to_string(skill_dir.join("SKILL.md")).await.unwrap();
        assert!(content.starts_with("---\nname: my-skill\n"));
        assert!(content.contains("description: \"A description.\""));
        assert!(content.ends_with("# My Skill\n\nA description.\n"));

        // second run is a no-op
        assert!(!add_frontmatter(&skill_dir).await.unwrap());
    }

    #[tokio::test]
    async fn directory_without_skill_file_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let skill_dir = root.path().join("empty");
        fs::create_dir_all(&skill_dir).await.unwrap();
        assert!(!add_frontmatter(&skill_dir).await.unwrap());
    }

    #[tokio::test]
    async fn quotes_in_description_are_escaped() {
        let root = tempfile::tempdir().unwrap();
        let skill_dir = root.path().join("quoted");
        fs::create_dir_all(&skill_dir).await.unwrap();
        fs::write(
            skill_dir.join("SKILL.md"),
            "# Q\n\nUse the \"force\" wisely.\n",
        )
        .await
        .unwrap();

        assert!(add_frontmatter(&skill_dir).await.unwrap());
        let content = fs::read_to_string(skill_dir.join("SKILL.md")).await.unwrap();
        assert!(content.contains(r#"description: "Use the \"force\" wisely.""#));
    }
}
