//! Dictionary files: the persisted pairs of one source document.
//!
//! One record per pair:
//!
//! ```text
//! ␝context␟original␟translation␞
//! ```
//!
//! The delimiters are the Unicode control pictures U+241D, U+241F and U+241E,
//! as in dictionaries written by earlier versions of the tool. Field content is
//! not escaped, so a pair containing a delimiter cannot be stored.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::Pair;

pub const RECORD_START: char = '\u{241D}';
pub const FIELD_SEPARATOR: char = '\u{241F}';
pub const RECORD_END: char = '\u{241E}';

pub const DICTIONARY_EXTENSION: &str = "t";

/// Dictionary path for a source file: `ref/select.sgml` maps to
/// `<dict_dir>/ref/select.sgml.t`.
pub fn dictionary_path(dict_dir: &Path, file_name: &str) -> PathBuf {
    dict_dir.join(format!("{}.{}", file_name, DICTIONARY_EXTENSION))
}

fn has_delimiter(field: &str) -> bool {
    field.contains([RECORD_START, FIELD_SEPARATOR, RECORD_END])
}

/// Formats one record, or `None` if a field contains a delimiter.
pub fn format_record(pair: &Pair) -> Option<String> {
    if has_delimiter(&pair.context)
        || has_delimiter(&pair.original)
        || has_delimiter(&pair.translation)
    {
        return None;
    }
    Some(format!(
        "{RECORD_START}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{RECORD_END}\n",
        pair.context, pair.original, pair.translation
    ))
}

/// Counts from writing one dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    /// Pairs refused because a field contained a delimiter.
    pub skipped: usize,
}

pub fn write_pairs<W: Write>(writer: &mut W, pairs: &[Pair]) -> std::io::Result<WriteSummary> {
    let mut summary = WriteSummary::default();
    for pair in pairs {
        match format_record(pair) {
            Some(record) => {
                writer.write_all(record.as_bytes())?;
                summary.written += 1;
            }
            None => summary.skipped += 1,
        }
    }
    Ok(summary)
}

/// Writes (replacing) the dictionary at `path`, creating parent directories.
pub fn write_dictionary(path: &Path, pairs: &[Pair]) -> Result<WriteSummary> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let summary = write_pairs(&mut writer, pairs)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(summary)
}

/// Parses dictionary content back into pairs, in file order. Malformed
/// records are skipped.
#[cfg(test)]
pub(crate) fn read_dictionary(content: &str) -> Vec<Pair> {
    content
        .split(RECORD_START)
        .skip(1)
        .filter_map(|record| {
            let record = record.trim_end_matches(['\n', '\r']).strip_suffix(RECORD_END)?;
            let mut fields = record.splitn(3, FIELD_SEPARATOR);
            let context = fields.next()?;
            let original = fields.next()?;
            let translation = fields.next()?;
            Some(Pair::new(context, original, translation))
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn load_dictionary(path: &Path) -> Result<Vec<Pair>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(read_dictionary(&content))
}
