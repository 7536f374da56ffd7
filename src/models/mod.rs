//! Data models module
//!
//! Defines domain models for parsed commit messages and changelog entries.

pub mod commit;
pub mod entry;

pub use commit::ParsedCommit;
pub use entry::Entry;
