//! Report formatting and printing utilities.
//!
//! Results go to stdout, warnings to stderr. Every printer has a `_to`
//! variant taking a writer so output can be checked in tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckWordSummary, CommandResult, CommandSummary, ExtractMode, ExtractSummary, InitSummary,
    WordMismatch,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract_to(summary, verbose, &mut out);
            print_skipped_warning_to(summary.skipped_count(), verbose, &mut err);
        }
        CommandSummary::CheckWord(summary) => print_check_word_to(summary, &mut out),
        CommandSummary::Init(summary) => print_init_to(summary, &mut out, &mut err),
        CommandSummary::NoTargets { dir } => {
            print_no_targets_to(&dir.to_string_lossy(), &mut err)
        }
    }
}

/// Print the outcome of `extract`.
pub fn print_extract_to<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for file in &summary.files {
            let _ = write!(
                writer,
                "  {} {}",
                file.file.cyan(),
                plural(file.pair_count, "pair", "pairs")
            );
            if file.index_term_count > 0 {
                let _ = write!(
                    writer,
                    ", {}",
                    plural(file.index_term_count, "index term", "index terms")
                );
            }
            if file.skipped_count > 0 {
                let _ = write!(writer, " ({} skipped)", file.skipped_count);
            }
            let _ = writeln!(writer);
        }
    }

    let source = match (&summary.mode, &summary.revision) {
        (ExtractMode::Diff, Some(revision)) => format!("diff against {}", revision),
        (ExtractMode::Diff, None) => "diff".to_string(),
        (ExtractMode::Paragraph, _) => "documents".to_string(),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {} ({}) into {}",
            plural(summary.pair_count(), "pair", "pairs"),
            plural(summary.files.len(), "file", "files"),
            source,
            summary.dict_dir.display()
        )
        .green()
    );
}

/// Warn about pairs that could not be stored because of a delimiter.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} contained a dictionary delimiter and were not written{}",
        "warning:".bold().yellow(),
        plural(count, "pair", "pairs"),
        if verbose {
            String::new()
        } else {
            format!(" (use {} for details)", "-v".cyan())
        }
    );
}

/// Print every mismatch grouped by file, then a summary line.
pub fn print_check_word_to<W: Write>(summary: &CheckWordSummary, writer: &mut W) {
    let mut current_file: Option<&str> = None;
    for WordMismatch { file, pair } in &summary.mismatches {
        if current_file != Some(file.as_str()) {
            let _ = writeln!(writer, "{}", file.bold());
            current_file = Some(file.as_str());
        }
        let _ = writeln!(writer, "{}", pair.original.green());
        let _ = writeln!(writer, "{}", pair.translation);
        let _ = writeln!(writer);
    }

    if summary.mismatches.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} against {} - \"{}\" is always translated as \"{}\"",
                plural(summary.file_count, "file", "files"),
                summary.revision,
                summary.original_word,
                summary.translated_word
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Found {} with \"{}\" but no \"{}\" in the translation",
            FAILURE_MARK.red(),
            plural(summary.mismatches.len(), "pair", "pairs"),
            summary.original_word,
            summary.translated_word
        );
    }
}

pub fn print_no_targets_to<W: Write>(dir: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} No SGML files found in {}",
        "warning:".bold().yellow(),
        dir
    );
    let _ = writeln!(
        writer,
        "  {} run in the documentation source directory (doc/src/sgml) or pass {}",
        "hint:".bold(),
        "-C <DIR>".cyan()
    );
}

pub fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}

// ============================================================
// Tests
// ============================================================
