//! Markdown renderer module
//!
//! Builds the Markdown fragments that make up a changelog: the
//! category symbol, the date heading, the entry heading, and the
//! initial document used when no changelog exists yet.

use chrono::NaiveDate;

use crate::models::{Entry, ParsedCommit};

/// Symbol shown before an unknown or absent commit type
const DEFAULT_SYMBOL: &str = "🔹";

/// Resolve the display symbol for a commit type
pub fn symbol_for(commit_type: Option<&str>) -> &'static str {
    match commit_type {
        Some("feat") => "✨",
        Some("fix") => "🐛",
        Some("docs") => "📚",
        Some("style") => "🎨",
        Some("refactor") => "♻️",
        Some("perf") => "⚡",
        Some("test") => "✅",
        Some("build") => "🏗️",
        Some("ci") => "👷",
        Some("chore") => "🔧",
        Some("revert") => "⏪",
        _ => DEFAULT_SYMBOL,
    }
}

/// Format the date section heading for a calendar date: `## [YYYY-MM-DD]`
pub fn date_heading(date: NaiveDate) -> String {
    format!("## [{}]", date.format("%Y-%m-%d"))
}

/// Build a changelog entry from a parsed commit.
///
/// The heading is `### {symbol} {type}{(scope)}: {description}`; the
/// scope parenthetical appears only when a scope was parsed. Without a
/// type the heading degrades to the default symbol plus the description.
pub fn render_entry(commit: &ParsedCommit) -> Entry {
    let symbol = symbol_for(commit.commit_type.as_deref());

    let heading = match &commit.commit_type {
        Some(commit_type) => {
            let scope_part = commit
                .scope
                .as_ref()
                .map(|scope| format!("({})", scope))
                .unwrap_or_default();

            format!(
                "### {} {}{}: {}",
                symbol, commit_type, scope_part, commit.description
            )
        }
        None => format!("### {} {}", symbol, commit.description),
    };

    Entry {
        heading,
        body: commit.body.clone(),
    }
}

/// Render a fresh changelog document containing a single entry
pub fn initial_changelog(date_heading: &str, entry: &Entry) -> String {
    format!(
        "# Changelog\n\nAll notable changes to this project will be documented in this file.\n\n{}\n\n{}",
        date_heading,
        entry.block()
    )
}
