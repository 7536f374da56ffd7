use serde::{Deserialize, Serialize};

/// A commit message decomposed into its conventional-commit parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Commit type (e.g. "feat", "fix"), lowercased; absent when the
    /// subject does not follow the `type(scope): description` pattern
    pub commit_type: Option<String>,
    /// Optional parenthesized scope, verbatim
    pub scope: Option<String>,
    /// Subject description; falls back to the full subject when the
    /// pattern does not match
    pub description: String,
    /// Remaining message lines after the subject, trimmed (may be empty)
    pub body: String,
}
