use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::Result;

/// Default skill library root: `~/.claude/skills`
pub fn default_skills_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude")
        .join("skills")
}

/// Save a skill document under the library root.
///
/// Creates `<root>/<name>/` if needed and writes `SKILL.md` inside,
/// overwriting any existing content. No locking: concurrent saves to the
/// same name race and the last write wins.
pub async fn save_skill(root: &Path, content: &str, name: &str) -> Result<PathBuf> {
    let skill_dir = root.join(name);
    fs::create_dir_all(&skill_dir).await?;

    let skill_path = skill_dir.join("SKILL.md");
    fs::write(&skill_path, content).await?;

    Ok(skill_path)
}

/// List all skills in the library root, sorted ascending.
///
/// A skill is an immediate subdirectory containing a `SKILL.md` marker file;
/// anything else is ignored. A missing root is an empty library, not an
/// error.
pub async fn list_skills(root: &Path) -> Result<Vec<String>> {
    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut skills = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() && path.join("SKILL.md").exists() {
            skills.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    skills.sort();
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_list_returns_sorted_names() {
        let root = tempfile::tempdir().unwrap();
        save_skill(root.path(), "# B", "b-skill").await.unwrap();
        save_skill(root.path(), "# A", "a-skill").await.unwrap();

        let skills = list_skills(root.path()).await.unwrap();
        assert_eq!(skills, vec!["a-skill", "b-skill"]);
    }

    #[tokio::test]
    async fn directories_without_marker_file_are_ignored() {
        let root = tempfile::tempdir().unwrap();
        save_skill(root.path(), "# A", "a-skill").await.unwrap();
        fs::create_dir_all(root.path().join("not-a-skill"))
            .await
            .unwrap();
        fs::write(root.path().join("stray.txt"), "x").await.unwrap();

        let skills = list_skills(root.path()).await.unwrap();
        assert_eq!(skills, vec!["a-skill"]);
    }

    #[tokio::test]
    async fn missing_root_is_an_empty_library() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("does-not-exist");
        assert!(list_skills(&missing).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_overwrites_existing_document() {
        let root = tempfile::tempdir().unwrap();
        save_skill(root.path(), "first", "a-skill").await.unwrap();
        let path = save_skill(root.path(), "second", "a-skill").await.unwrap();

        let content = fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "second");
    }
}
