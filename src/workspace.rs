//! The documentation directory: which SGML files to process and where their
//! dictionaries go.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};

/// Sources one directory level deep, like `ref/select.sgml`.
pub const SOURCE_PATTERNS: &[&str] = &["*.sgml", "*/*.sgml"];

/// Aggregate files that only include other files.
pub const IGNORED_FILE_NAMES: &[&str] = &[
    "jpug-doc.sgml",
    "config0.sgml",
    "config1.sgml",
    "config2.sgml",
    "config3.sgml",
    "func0.sgml",
    "func1.sgml",
    "func2.sgml",
    "func3.sgml",
    "func4.sgml",
    "catalogs0.sgml",
    "catalogs1.sgml",
    "catalogs2.sgml",
    "catalogs3.sgml",
    "catalogs4.sgml",
];

pub const DEFAULT_DICT_DIR: &str = "./.jpug-doc-tool/";

/// Dictionary subdirectory mirroring `ref/` in the sources.
pub const REF_DIR: &str = "ref";

/// Result of scanning for target files.
pub struct ScanResult {
    /// Paths relative to the scanned directory, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn is_ignored_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_FILE_NAMES.contains(&name))
}

/// Finds every `*.sgml` in `base_dir` and its immediate subdirectories, minus
/// the fixed denylist and any `ignore_patterns` (matched against the relative
/// path).
pub fn scan_targets(base_dir: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut ignores: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => ignores.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let escaped_base = Pattern::escape(&base_dir.to_string_lossy());
    for source_pattern in SOURCE_PATTERNS {
        let full_pattern = Path::new(&escaped_base).join(source_pattern);
        let entries = match glob(&full_pattern.to_string_lossy()) {
            Ok(entries) => entries,
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid glob pattern '{}': {}",
                        "warning:".bold().yellow(),
                        source_pattern,
                        e
                    );
                }
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            if !path.is_file() || is_ignored_file_name(&path) {
                continue;
            }

            let relative = path.strip_prefix(base_dir).unwrap_or(&path);
            let relative = relative.to_string_lossy().into_owned();
            if ignores.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            files.push(relative);
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

/// True when `base_dir` directly contains SGML sources.
pub fn is_doc_dir(base_dir: &Path) -> bool {
    let pattern = Path::new(&Pattern::escape(&base_dir.to_string_lossy())).join("*.sgml");
    glob(&pattern.to_string_lossy())
        .map(|mut entries| entries.any(|entry| entry.is_ok()))
        .unwrap_or(false)
}

/// Creates the dictionary directory and its `ref/` subdirectory.
///
/// Returns the dictionary directory, or `None` when `base_dir` is not a
/// documentation directory (nothing is created then).
pub fn prepare_workspace(base_dir: &Path, dict_dir: &str) -> Result<Option<PathBuf>> {
    if !is_doc_dir(base_dir) {
        return Ok(None);
    }

    let dict_dir = base_dir.join(dict_dir);
    let ref_dir = dict_dir.join(REF_DIR);
    fs::create_dir_all(&ref_dir)
        .with_context(|| format!("Failed to create directory: {}", ref_dir.display()))?;

    Ok(Some(dict_dir))
}
