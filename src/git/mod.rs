//! Git access module
//!
//! Reads the commit message from HEAD so entries can be recorded right
//! after `git commit` without retyping the message.

use git2::Repository;
use std::path::Path;

use crate::error::{ChangeloggerError, Result};

/// Read the full commit message of HEAD in the repository containing
/// `path` (discovery walks up parent directories like git itself)
pub fn head_message(path: &Path) -> Result<String> {
    let repo = Repository::discover(path)?;

    let head = repo.head().map_err(|e| {
        ChangeloggerError::Repository(format!(
            "Cannot resolve HEAD in '{}': {}",
            path.display(),
            e
        ))
    })?;

    let commit = head.peel_to_commit()?;

    commit
        .message()
        .map(str::to_string)
        .ok_or_else(|| {
            ChangeloggerError::Repository("HEAD commit message is not valid UTF-8".to_string())
        })
}
