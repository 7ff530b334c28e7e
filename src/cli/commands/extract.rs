use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{
    CommandContext, CommandResult, CommandSummary, ExtractMode, ExtractSummary, FileExtraction,
};
use crate::{
    cli::args::ExtractCommand,
    core::{Pair, extract_diff, extract_paragraphs},
    dictionary::{dictionary_path, write_dictionary},
    source::{DiffSource, GitDiff, resolve_version_tag},
    workspace::prepare_workspace,
};

pub fn extract(cmd: ExtractCommand, config_path: Option<&Path>) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common, config_path)?;
    let files = ctx.target_files(&cmd.files);
    if files.is_empty() {
        return Ok(CommandResult::new(CommandSummary::NoTargets {
            dir: ctx.root_dir,
        }));
    }

    let dict_dir = prepare_workspace(&ctx.root_dir, &ctx.config.dict_dir)?
        .unwrap_or_else(|| ctx.dict_dir());

    let summary = if cmd.para {
        extract_paragraph_files(&ctx.root_dir, &files, &dict_dir)?
    } else {
        let revision = resolve_version_tag(&ctx.root_dir)?;
        let git = GitDiff::new(&ctx.root_dir).with_context_lines(ctx.config.diff_context);
        extract_diff_files(&git, &revision, &files, &dict_dir)?
    };

    Ok(CommandResult::new(CommandSummary::Extract(summary)))
}

/// Writes one dictionary per file from its diff against `revision`.
///
/// The first failing diff aborts the whole run.
pub fn extract_diff_files<S: DiffSource>(
    source: &S,
    revision: &str,
    files: &[String],
    dict_dir: &Path,
) -> Result<ExtractSummary> {
    let mut extracted = Vec::with_capacity(files.len());
    for file in files {
        let diff = source.diff(file, revision)?;
        let pairs = extract_diff(&diff);
        extracted.push(write_file_dictionary(dict_dir, file, &pairs)?);
    }

    Ok(ExtractSummary {
        mode: ExtractMode::Diff,
        revision: Some(revision.to_string()),
        dict_dir: dict_dir.to_path_buf(),
        files: extracted,
    })
}

/// Writes one dictionary per file from the document itself.
pub fn extract_paragraph_files(
    root_dir: &Path,
    files: &[String],
    dict_dir: &Path,
) -> Result<ExtractSummary> {
    let mut extracted = Vec::with_capacity(files.len());
    for file in files {
        let path = root_dir.join(file);
        let src = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let pairs = extract_paragraphs(&src);
        extracted.push(write_file_dictionary(dict_dir, file, &pairs)?);
    }

    Ok(ExtractSummary {
        mode: ExtractMode::Paragraph,
        revision: None,
        dict_dir: dict_dir.to_path_buf(),
        files: extracted,
    })
}

fn write_file_dictionary(dict_dir: &Path, file: &str, pairs: &[Pair]) -> Result<FileExtraction> {
    let path = dictionary_path(dict_dir, file);
    let written = write_dictionary(&path, pairs)?;
    Ok(FileExtraction {
        file: file.to_string(),
        pair_count: written.written,
        index_term_count: pairs.iter().filter(|pair| pair.is_index_term()).count(),
        skipped_count: written.skipped,
    })
}
