//! Command-line interface module
//!
//! Implements the single `add` operation: resolve the commit message,
//! parse it, and apply the resulting entry to the changelog file.

pub mod add;
