use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog::{self, Outcome};
use crate::display;
use crate::error::{ChangeloggerError, Result};
use crate::git;
use crate::parser;
use crate::renderer;

/// Append a changelog entry from a commit message
pub fn run(
    message: Option<String>,
    path: PathBuf,
    from_head: bool,
    repo: PathBuf,
    dry_run: bool,
) -> Result<()> {
    // Resolve the commit message
    let message = match message {
        Some(message) => message,
        None if from_head => git::head_message(&repo)?,
        None => String::new(),
    };

    if message.trim().is_empty() {
        return Err(ChangeloggerError::EmptyMessage);
    }

    // Parse and render the entry
    let commit = parser::parse(&message);
    let entry = renderer::render_entry(&commit);

    // Today's date, local time, evaluated once per invocation
    let today = Local::now().date_naive();
    let date_heading = renderer::date_heading(today);

    // Read the existing document, if any
    let existing = if path.exists() {
        Some(fs::read_to_string(&path)?)
    } else {
        None
    };

    match changelog::apply(existing.as_deref(), &date_heading, &entry) {
        Outcome::Duplicate => {
            println!("Entry '{}' already exists.", entry.heading);
        }
        Outcome::Created(content) => {
            if dry_run {
                display::print_markdown(&content);
            } else {
                write_document(&path, &content)?;
                println!("Created new {} with initial entry.", path.display());
            }
        }
        Outcome::Updated(content) => {
            if dry_run {
                display::print_markdown(&content);
            } else {
                write_document(&path, &content)?;
                println!("Successfully updated {} with new entry.", path.display());
            }
        }
    }

    Ok(())
}

/// Write the full document back, overwriting the file
fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
