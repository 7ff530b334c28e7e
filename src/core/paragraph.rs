//! Pair extraction from a full SGML document.
//!
//! The document is cut into blank-line separated blocks. A block shaped like
//!
//! ```text
//! <!--
//! English
//! -->
//! 日本語
//! ```
//!
//! gives a pair directly. Blocks that don't have that shape fall back to
//! pairing with a comment seen in an earlier block. Table rows are scanned in a
//! second, independent pass and appended at the end.

use std::borrow::Cow;

use super::pair::{Pair, normalize_original, original_candidate};
use super::patterns::{
    Terminator, collapse_whitespace, flatten_newlines, is_bare_delimiter, match_comment_pair,
    split_paragraphs, starts_comment, strip_entries, strip_list_items, table_rows,
};

/// Extracts pairs from raw document bytes. Invalid UTF-8 is replaced, never
/// rejected.
pub fn extract_paragraphs(src: &[u8]) -> Vec<Pair> {
    let src = String::from_utf8_lossy(src);

    let mut scan = ParagraphScan::default();
    for block in split_paragraphs(&src) {
        scan.block(block);
    }

    let mut pairs = scan.pairs;
    for row in table_rows(&src) {
        row_pairs(row, &mut pairs);
    }
    pairs
}

/// State of one paragraph pass.
#[derive(Debug, Default)]
struct ParagraphScan {
    /// Normalized original from a comment-only block, waiting for its translation.
    pending: String,
    pairs: Vec<Pair>,
}

impl ParagraphScan {
    fn block(&mut self, block: &str) {
        if block.trim().is_empty() {
            return;
        }

        let mut rest = Cow::Borrowed(block);
        loop {
            let Some(found) = match_comment_pair(&rest) else {
                self.fallback(&rest);
                return;
            };

            self.pairs.push(Pair::new(
                "",
                normalize_original(found.original),
                found.translation.trim(),
            ));

            let next = match found.terminator {
                Terminator::Comment => rest[found.terminator_start..].to_string(),
                Terminator::ItemizedList => strip_list_items(&rest[found.terminator_end..]),
                Terminator::End => return,
            };
            if next.trim().is_empty() {
                return;
            }
            rest = Cow::Owned(next);
        }
    }

    fn fallback(&mut self, text: &str) {
        if text.trim().is_empty() || is_bare_delimiter(text) {
            return;
        }

        // Only one original waits at a time; a second comment becomes the
        // translation of the first.
        if starts_comment(text) && self.pending.is_empty() {
            self.pending = original_candidate(text);
            return;
        }

        let original = std::mem::take(&mut self.pending);
        self.pairs.push(Pair::new("", original, text.trim()));
    }
}

/// Pairs from one `<row>` interior. Cell wrappers are dropped on both sides.
fn row_pairs(row: &str, pairs: &mut Vec<Pair>) {
    let mut rest = row;
    while let Some(found) = match_comment_pair(rest) {
        let original = strip_entries(found.original);
        let original = flatten_newlines(&original);
        let original = collapse_whitespace(&original).trim().to_string();
        let translation = strip_entries(found.translation).trim().to_string();

        if !translation.is_empty() {
            pairs.push(Pair::new("", original, translation));
        }

        match found.terminator {
            Terminator::Comment => rest = &rest[found.terminator_start..],
            Terminator::ItemizedList | Terminator::End => break,
        }
    }
}
