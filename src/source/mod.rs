//! Where diff text comes from.
//!
//! The extraction core only needs "the diff of this file against that
//! revision". [`GitDiff`] runs `git diff`; tests supply their own
//! [`DiffSource`].

mod git;
mod version;

pub use git::{DEFAULT_DIFF_CONTEXT, GitDiff};
pub use version::{VERSION_FILE, resolve_version_tag, version_tag};

use anyhow::Result;

pub trait DiffSource {
    /// Unified diff of `file_name` between `revision` and the working tree.
    fn diff(&self, file_name: &str, revision: &str) -> Result<String>;
}

impl<T: DiffSource + ?Sized> DiffSource for &T {
    fn diff(&self, file_name: &str, revision: &str) -> Result<String> {
        (**self).diff(file_name, revision)
    }
}
