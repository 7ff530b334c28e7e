use std::path::Path;

use anyhow::Result;

use super::{CheckWordSummary, CommandContext, CommandResult, CommandSummary, WordMismatch};
use crate::{
    cli::args::CheckWordCommand,
    core::{extract_diff, find_mismatches},
    source::{DiffSource, GitDiff, resolve_version_tag},
};

pub fn check_word(cmd: CheckWordCommand, config_path: Option<&Path>) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common, config_path)?;
    let files = ctx.target_files(&cmd.files);
    if files.is_empty() {
        return Ok(CommandResult::new(CommandSummary::NoTargets {
            dir: ctx.root_dir,
        }));
    }

    let revision = resolve_version_tag(&ctx.root_dir)?;
    let git = GitDiff::new(&ctx.root_dir).with_context_lines(ctx.config.diff_context);
    let mismatches =
        collect_word_mismatches(&git, &revision, &files, &cmd.original, &cmd.translation)?;

    Ok(CommandResult::new(CommandSummary::CheckWord(CheckWordSummary {
        original_word: cmd.original,
        translated_word: cmd.translation,
        revision,
        file_count: files.len(),
        mismatches,
    })))
}

/// Mismatches across `files`, grouped by file in the given order.
pub fn collect_word_mismatches<S: DiffSource>(
    source: &S,
    revision: &str,
    files: &[String],
    original_word: &str,
    translated_word: &str,
) -> Result<Vec<WordMismatch>> {
    let mut mismatches = Vec::new();
    for file in files {
        let diff = source.diff(file, revision)?;
        let pairs = extract_diff(&diff);
        mismatches.extend(
            find_mismatches(&pairs, original_word, translated_word)
                .into_iter()
                .map(|pair| WordMismatch {
                    file: file.clone(),
                    pair: pair.clone(),
                }),
        );
    }
    Ok(mismatches)
}
