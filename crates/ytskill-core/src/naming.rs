use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(how to|how i|my|the|a|an)\s+").unwrap());
static TRAILING_FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(tutorial|guide|explained|walkthrough)$").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Generate a kebab-case skill name from a video title.
///
/// The stripping order (filler prefix, filler suffix, character-class strip,
/// hyphen collapse, trim, truncate) is load-bearing: reordering it changes
/// the derived names for existing libraries.
pub fn skill_name_from_title(title: &str) -> String {
    let name = title.to_lowercase();
    let name = LEADING_FILLER.replace(&name, "");
    let name = TRAILING_FILLER.replace(&name, "");
    let name = NON_WORD.replace_all(&name, "");
    let name = SEPARATOR_RUN.replace_all(&name, "-");
    let mut name = name.trim_matches('-').to_string();

    // Truncate at a hyphen boundary so a word is never split
    if name.chars().count() > 50 {
        let prefix: String = name.chars().take(50).collect();
        name = match prefix.rfind('-') {
            Some(pos) => prefix[..pos].to_string(),
            None => prefix,
        };
    }

    if name.is_empty() {
        "extracted-skill".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filler_prefix_and_suffix() {
        assert_eq!(
            skill_name_from_title("How to Build a REST API Tutorial"),
            "build-a-rest-api"
        );
        assert_eq!(skill_name_from_title("How I Built My App"), "built-my-app");
        assert_eq!(
            skill_name_from_title("The Borrow Checker Explained"),
            "borrow-checker"
        );
    }

    #[test]
    fn only_first_leading_filler_is_stripped() {
        assert_eq!(skill_name_from_title("My The Video"), "the-video");
    }

    #[test]
    fn suffix_needs_preceding_whitespace() {
        // "guide" standing alone is the whole name, not a suffix
        assert_eq!(skill_name_from_title("A Guide"), "guide");
    }

    #[test]
    fn falls_back_when_everything_is_stripped() {
        assert_eq!(skill_name_from_title("!!!"), "extracted-skill");
        assert_eq!(skill_name_from_title(""), "extracted-skill");
        assert_eq!(skill_name_from_title("---"), "extracted-skill");
    }

    #[test]
    fn collapses_punctuation_and_whitespace_runs() {
        assert_eq!(
            skill_name_from_title("Rust -- Async/Await  (in depth!)"),
            "rust-asyncawait-in-depth"
        );
    }

    #[test]
    fn truncates_at_hyphen_boundary() {
        let name = skill_name_from_title(
            "The Ultimate Comprehensive Introduction To Writing Parsers In Rust",
        );
        assert_eq!(name, "ultimate-comprehensive-introduction-to-writing");
        assert!(name.len() <= 50);
    }

    #[test]
    fn slug_invariants_hold_for_assorted_titles() {
        let pattern = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        let titles = [
            "How to Build a REST API Tutorial",
            "10 Tips for Faster Code",
            "!!!",
            "An Introduction to Databases",
            "Debugging: A Walkthrough",
            "   spaces   everywhere   ",
        ];
        for title in titles {
            let slug = skill_name_from_title(title);
            assert!(
                pattern.is_match(&slug) || slug == "extracted-skill",
                "bad slug {slug:?} for title {title:?}"
            );
            assert!(slug.chars().count() <= 50);
        }
    }
}
