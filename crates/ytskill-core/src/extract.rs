use std::process::Stdio;
use std::time::Duration;

use tokio::{process::Command, time::timeout};

use crate::error::{Result, YtSkillError};

/// Keep the prompt within a sane context budget for long videos.
const MAX_TRANSCRIPT_CHARS: usize = 100_000;
const TRUNCATION_NOTICE: &str = "\n\n[Transcript truncated...]";

/// Long transcripts can take a while; anything past this is a lost cause.
const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(300);

/// Out-of-band "nothing to extract" signal the assistant is told to emit.
const NO_SKILL_SENTINEL: &str = "NO_SKILL_FOUND";

fn build_prompt(transcript: &str, title: &str, channel: &str) -> String {
    format!(
        r#"You are analyzing a YouTube video transcript to extract actionable skills, methodologies, and techniques that can be turned into a reusable assistant skill.

A skill is a markdown file (SKILL.md) that teaches an assistant how to perform a specific task. Skills should be:
- Actionable and specific
- Have clear step-by-step instructions
- Include examples where helpful
- Be reusable across different contexts

VIDEO TITLE: {title}
CHANNEL: {channel}

TRANSCRIPT:
{transcript}

---

Based on this video, extract the most valuable skill or methodology being taught. If the video covers multiple distinct skills, focus on the primary/most important one.

Output a complete SKILL.md file in this format:

```markdown
# [Skill Name]

[One paragraph description of what this skill does and when to use it]

## When to Use This Skill

- [Bullet points of scenarios when this skill applies]

## Instructions

[Step-by-step instructions to follow when using this skill. Be specific and actionable.]

### Step 1: [Step Name]
[Details]

### Step 2: [Step Name]
[Details]

[Continue as needed]

## Examples

[Optional: Include 1-2 concrete examples if they help clarify the skill]

## Tips

- [Any important tips, gotchas, or best practices mentioned in the video]
```

Only output the markdown content, nothing else. If the video doesn't contain any actionable skill or methodology worth extracting, output: {NO_SKILL_SENTINEL}"#
    )
}

/// Truncate a transcript to the prompt budget, marking the cut.
fn truncate_transcript(transcript: &str) -> String {
    match transcript.char_indices().nth(MAX_TRANSCRIPT_CHARS) {
        Some((byte_pos, _)) => {
            let mut truncated = transcript[..byte_pos].to_string();
            truncated.push_str(TRUNCATION_NOTICE);
            truncated
        }
        None => transcript.to_string(),
    }
}

/// Post-process assistant output into a skill document, or nothing.
fn clean_response(output: &str) -> Option<String> {
    let mut content = output.trim();

    if content.is_empty() || content.contains(NO_SKILL_SENTINEL) {
        return None;
    }

    // Strip a code fence the assistant may have wrapped the document in
    if let Some(rest) = content.strip_prefix("```markdown") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }

    Some(content.trim().to_string())
}

/// Extract a skill document from a video transcript using the claude CLI.
///
/// Returns `Ok(None)` when the assistant explicitly declines (the
/// NO_SKILL_FOUND sentinel) or produces no output. A non-zero exit or a
/// timeout is an [`YtSkillError::ExtractionFailed`].
pub async fn extract_skill(
    transcript: &str,
    title: &str,
    channel: &str,
) -> Result<Option<String>> {
    let transcript = truncate_transcript(transcript);
    let prompt = build_prompt(&transcript, title, channel);

    tracing::debug!(title, prompt_chars = prompt.len(), "invoking claude CLI");

    let child = Command::new("claude")
        .arg("-p")
        .arg(&prompt)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    // kill_on_drop terminates the child when the timeout drops the wait
    let output = match timeout(EXTRACTION_TIMEOUT, child.wait_with_output()).await {
        Ok(output) => output?,
        Err(_) => {
            tracing::warn!(title, "skill extraction timed out");
            return Err(YtSkillError::ExtractionFailed {
                reason: format!("timed out after {}s", EXTRACTION_TIMEOUT.as_secs()),
            });
        }
    };

    if !output.status.success() {
        return Err(YtSkillError::ExtractionFailed {
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(clean_response(&String::from_utf8_lossy(&output.stdout)))
}
