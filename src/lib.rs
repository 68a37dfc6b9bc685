//! Copies the commit history of a git repository into a new repository,
//! giving every commit a random timestamp within a chosen date range.
//!
//! Commit order, content, authors and messages are kept as they are. Only
//! the timing of the history changes.
//!
//! The pieces, in the order a run uses them:
//!
//! - [`replay::initialize`] recreates the target as an empty repository.
//! - [`replay::list_commits`] reads the source history, oldest first.
//! - [`dates::generate`] draws one ordered timestamp per commit.
//! - [`replay::replay`] moves each commit over and rewrites its timestamp.
//! - [`driver::Driver`] sequences all of the above.

pub mod config;
pub mod dates;
pub mod driver;
pub mod git;
pub mod logger;
pub mod replay;

mod error;
pub use error::{Error, Result};

#[cfg(test)]
mod test_support;
