use thiserror::Error;

/// Changelogger error types
#[derive(Error, Debug)]
pub enum ChangeloggerError {
    #[error("No commit message provided")]
    EmptyMessage,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

/// Result type for changelogger operations
pub type Result<T> = std::result::Result<T, ChangeloggerError>;
