//! Copies a commit history into a fresh repository.
//!
//! The three steps run in order: `initialize` the target, read the source
//! history with `list_commits`, then `replay` each commit with its new
//! timestamp.

mod commit;
pub use commit::{replay, ScratchPatch, PATCH_FILE_NAME};

mod history;
pub use history::list_commits;

mod init;
pub use init::initialize;
