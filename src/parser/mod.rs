//! Commit message parser module
//!
//! Pure parsing of a commit message string into subject parts:
//! `type(scope): description` plus an optional body. No I/O.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::ParsedCommit;

/// Conventional-commit subject pattern: `type(scope): description`
/// or `type: description`
static SUBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(?:\(([^)]+)\))?:\s*(.*)$").unwrap());

/// Parse a full commit message into its parts.
///
/// The first line (trimmed) is the subject, the remainder (trimmed) the
/// body. A subject that does not match the conventional pattern yields
/// no type/scope and the whole subject as description.
pub fn parse(message: &str) -> ParsedCommit {
    let (subject, body) = match message.split_once('\n') {
        Some((subject, rest)) => (subject.trim(), rest.trim()),
        None => (message.trim(), ""),
    };

    match SUBJECT_PATTERN.captures(subject) {
        Some(caps) => ParsedCommit {
            commit_type: Some(caps[1].to_lowercase()),
            scope: caps.get(2).map(|m| m.as_str().to_string()),
            description: caps[3].to_string(),
            body: body.to_string(),
        },
        None => ParsedCommit {
            commit_type: None,
            scope: None,
            description: subject.to_string(),
            body: body.to_string(),
        },
    }
}
