//! Changelog document module
//!
//! Pure text transformations over a changelog document: duplicate
//! detection, date section insertion, and entry insertion. File I/O
//! stays in the CLI layer so these functions are testable on strings.

use crate::models::Entry;
use crate::renderer;

/// Result of applying an entry to a changelog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No document existed; a fresh one was rendered
    Created(String),
    /// The document was updated with the new entry
    Updated(String),
    /// The entry heading is already present; the document is unchanged
    Duplicate,
}

/// Apply a new entry to a changelog document.
///
/// `existing` is the current document text, or `None` when the file does
/// not exist yet. Entries are grouped under `date_heading` and prepended
/// within that section, so each section reads most-recent-first.
pub fn apply(existing: Option<&str>, date_heading: &str, entry: &Entry) -> Outcome {
    match existing {
        None => Outcome::Created(renderer::initial_changelog(date_heading, entry)),
        Some(content) => {
            if content.contains(&entry.heading) {
                return Outcome::Duplicate;
            }

            let content = ensure_date_section(content, date_heading);
            Outcome::Updated(insert_entry(&content, date_heading, &entry.block()))
        }
    }
}

/// Ensure the document contains `date_heading`.
///
/// If missing, the heading is inserted directly after a top-level title
/// line (a line starting with `# ` at the very start of the document),
/// whether or not that line carries a terminator. Without such a title,
/// a minimal `# Changelog` title plus the heading is synthesized at the
/// top.
fn ensure_date_section(content: &str, date_heading: &str) -> String {
    if content.contains(date_heading) {
        return content.to_string();
    }

    if content.starts_with("# ") {
        return match content.find('\n') {
            Some(line_end) => {
                let (title, rest) = content.split_at(line_end + 1);
                format!("{}\n{}\n\n{}", title, date_heading, rest.trim_start())
            }
            // The title line is the entire document
            None => format!("{}\n\n{}\n\n", content, date_heading),
        };
    }

    format!("# Changelog\n\n{}\n\n{}", date_heading, content)
}

/// Insert an entry block directly under `date_heading`.
///
/// The insertion point is past the heading's line terminator and any
/// immediately following blank lines, so the new entry lands before
/// every existing entry in the section. A heading that ends the file
/// without a line terminator gets the entry appended instead.
fn insert_entry(content: &str, date_heading: &str, block: &str) -> String {
    let Some(date_pos) = content.find(date_heading) else {
        // ensure_date_section ran first, so the heading is always present
        return content.to_string();
    };

    match content[date_pos..].find('\n') {
        Some(offset) => {
            let mut insert_pos = date_pos + offset + 1;

            // Skip whole blank lines only; the indentation of a following
            // content line stays with that line
            while insert_pos < content.len() {
                let line_end = content[insert_pos..]
                    .find('\n')
                    .map(|i| insert_pos + i + 1)
                    .unwrap_or(content.len());

                if content[insert_pos..line_end].trim().is_empty() {
                    insert_pos = line_end;
                } else {
                    break;
                }
            }

            format!(
                "{}{}{}",
                &content[..insert_pos],
                block,
                &content[insert_pos..]
            )
        }
        None => format!("{}\n\n{}", content, block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(heading: &str, body: &str) -> Entry {
        Entry {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }

    const DATE: &str = "## [2024-01-15]";

    #[test]
    fn test_apply_creates_fresh_document() {
        let outcome = apply(None, DATE, &entry("### ✨ feat: add thing", ""));

        match outcome {
            Outcome::Created(document) => {
                assert!(document.starts_with("# Changelog\n"));
                assert!(document.contains("will be documented in this file."));
                assert!(document.contains(DATE));
                assert!(document.contains("### ✨ feat: add thing"));
            }
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_detects_duplicate_heading() {
        let existing = "# Changelog\n\n## [2024-01-15]\n\n### ✨ feat: add thing\n\n";

        let outcome = apply(Some(existing), DATE, &entry("### ✨ feat: add thing", ""));

        assert_eq!(outcome, Outcome::Duplicate);
    }

    #[test]
    fn test_apply_duplicate_ignores_differing_body() {
        // Same heading with a different body still counts as a duplicate
        let existing =
            "# Changelog\n\n## [2024-01-15]\n\n### ✨ feat: add thing\n\nOld body.\n\n";

        let outcome = apply(
            Some(existing),
            DATE,
            &entry("### ✨ feat: add thing", "New body."),
        );

        assert_eq!(outcome, Outcome::Duplicate);
    }

    #[test]
    fn test_apply_prepends_within_existing_section() {
        let existing = "# Changelog\n\n## [2024-01-15]\n\n### 🐛 fix: old entry\n\n";

        let outcome = apply(Some(existing), DATE, &entry("### ✨ feat: new entry", ""));

        match outcome {
            Outcome::Updated(document) => {
                let new_pos = document.find("### ✨ feat: new entry").unwrap();
                let old_pos = document.find("### 🐛 fix: old entry").unwrap();
                assert!(new_pos < old_pos, "new entry must come first:\n{}", document);
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_inserts_date_section_after_title() {
        let existing = "# Changelog\n\nIntro text.\n\n## [2024-01-14]\n\n### 🐛 fix: old\n\n";

        let outcome = apply(Some(existing), DATE, &entry("### ✨ feat: new", ""));

        match outcome {
            Outcome::Updated(document) => {
                assert!(document.starts_with("# Changelog\n\n## [2024-01-15]\n\n"));
                let new_section = document.find(DATE).unwrap();
                let old_section = document.find("## [2024-01-14]").unwrap();
                assert!(new_section < old_section);
                assert!(document.contains("### 🐛 fix: old"));
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_synthesizes_title_when_missing() {
        let existing = "Some stray notes without a title.\n";

        let outcome = apply(Some(existing), DATE, &entry("### ✨ feat: new", ""));

        match outcome {
            Outcome::Updated(document) => {
                assert!(document.starts_with("# Changelog\n\n## [2024-01-15]\n\n"));
                assert!(document.contains("Some stray notes without a title."));
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_keeps_title_without_trailing_newline() {
        // A document that is nothing but a title line, without a terminator
        let existing = "# Release Notes";

        let outcome = apply(Some(existing), DATE, &entry("### ✨ feat: add thing", ""));

        match outcome {
            Outcome::Updated(document) => {
                assert!(document.starts_with("# Release Notes\n\n## [2024-01-15]\n\n"));
                assert!(document.contains("### ✨ feat: add thing"));
                assert!(!document.contains("# Changelog"));
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_date_section_noop_when_present() {
        let content = "# Changelog\n\n## [2024-01-15]\n\n";

        assert_eq!(ensure_date_section(content, DATE), content);
    }

    #[test]
    fn test_ensure_date_section_does_not_mistake_subheading_for_title() {
        // "## [...]" does not start with "# " followed by a space, so a
        // document whose first line is a date heading gets a synthesized title
        let content = "## [2024-01-14]\n\n### 🐛 fix: old\n\n";

        let result = ensure_date_section(content, DATE);

        assert!(result.starts_with("# Changelog\n\n## [2024-01-15]\n\n"));
    }

    #[test]
    fn test_insert_entry_skips_blank_lines_after_heading() {
        let content = "# Changelog\n\n## [2024-01-15]\n\n\n### 🐛 fix: old\n\n";

        let result = insert_entry(content, DATE, "### ✨ feat: new\n\n");

        assert!(result.contains("## [2024-01-15]\n\n\n### ✨ feat: new\n\n### 🐛 fix: old"));
    }

    #[test]
    fn test_insert_entry_keeps_indentation_of_following_line() {
        let content = "# Changelog\n\n## [2024-01-15]\n  indented text\n";

        let result = insert_entry(content, DATE, "### ✨ feat: new\n\n");

        assert!(result.contains("## [2024-01-15]\n### ✨ feat: new\n\n  indented text"));
    }

    #[test]
    fn test_insert_entry_blank_line_then_indented_line() {
        let content = "# Changelog\n\n## [2024-01-15]\n\n  indented text\n";

        let result = insert_entry(content, DATE, "### ✨ feat: new\n\n");

        assert!(result.contains("## [2024-01-15]\n\n### ✨ feat: new\n\n  indented text"));
    }

    #[test]
    fn test_insert_entry_heading_at_end_without_newline() {
        let content = "# Changelog\n\n## [2024-01-15]";

        let result = insert_entry(content, DATE, "### ✨ feat: new\n\n");

        assert_eq!(result, "# Changelog\n\n## [2024-01-15]\n\n### ✨ feat: new\n\n");
    }

    #[test]
    fn test_insert_entry_with_body_keeps_blank_line_separation() {
        let content = "# Changelog\n\n## [2024-01-15]\n\n";
        let block = "### ✨ feat(auth): add login flow\n\nSupports OAuth2.\n\n";

        let result = insert_entry(content, DATE, block);

        assert!(result.contains(
            "## [2024-01-15]\n\n### ✨ feat(auth): add login flow\n\nSupports OAuth2.\n\n"
        ));
    }
}
