use std::{path::PathBuf, process::Command};

use anyhow::{Context, Result, bail};

use super::DiffSource;

/// Lines of context around each change. Wide enough that a whole paragraph
/// around an added comment is visible.
pub const DEFAULT_DIFF_CONTEXT: usize = 100;

/// Runs `git diff --histogram` in a documentation directory.
#[derive(Debug, Clone)]
pub struct GitDiff {
    root: PathBuf,
    context_lines: usize,
}

impl GitDiff {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            context_lines: DEFAULT_DIFF_CONTEXT,
        }
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    fn args(&self, file_name: &str, revision: &str) -> Vec<String> {
        vec![
            "diff".to_string(),
            "--no-color".to_string(),
            "--no-ext-diff".to_string(),
            "--histogram".to_string(),
            format!("-U{}", self.context_lines),
            revision.to_string(),
            "--".to_string(),
            file_name.to_string(),
        ]
    }
}

impl DiffSource for GitDiff {
    fn diff(&self, file_name: &str, revision: &str) -> Result<String> {
        let output = Command::new("git")
            .args(self.args(file_name, revision))
            .current_dir(&self.root)
            .output()
            .with_context(|| format!("Failed to run git diff for {}", file_name))?;

        if !output.status.success() {
            bail!(
                "git diff {} {} failed: {}",
                revision,
                file_name,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
