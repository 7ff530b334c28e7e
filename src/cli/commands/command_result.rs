use std::path::PathBuf;

use crate::core::Pair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Diff of each file against the release tag.
    Diff,
    /// The raw documents, paragraph by paragraph.
    Paragraph,
}

/// Pairs written for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtraction {
    pub file: String,
    pub pair_count: usize,
    /// Index-entry pairs among those extracted.
    pub index_term_count: usize,
    /// Pairs not written because a field contained a dictionary delimiter.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub mode: ExtractMode,
    /// Release tag the diffs were taken against (diff mode only).
    pub revision: Option<String>,
    pub dict_dir: PathBuf,
    pub files: Vec<FileExtraction>,
}

impl ExtractSummary {
    pub fn pair_count(&self) -> usize {
        self.files.iter().map(|f| f.pair_count).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.files.iter().map(|f| f.skipped_count).sum()
    }
}

/// A pair whose translation lacks the expected word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMismatch {
    pub file: String,
    pub pair: Pair,
}

#[derive(Debug)]
pub struct CheckWordSummary {
    pub original_word: String,
    pub translated_word: String,
    pub revision: String,
    pub file_count: usize,
    pub mismatches: Vec<WordMismatch>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a config file already existed.
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    CheckWord(CheckWordSummary),
    Init(InitSummary),
    /// No target files were found in the directory.
    NoTargets { dir: PathBuf },
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Mismatches, or an init that found a config already in place. Any
    /// count above zero exits with status 1.
    pub error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let error_count = match &summary {
            CommandSummary::CheckWord(s) => s.mismatches.len(),
            CommandSummary::Init(s) => usize::from(!s.created),
            CommandSummary::Extract(_) | CommandSummary::NoTargets { .. } => 0,
        };
        Self {
            summary,
            error_count,
        }
    }
}
