//! Pair extraction from `git diff` output.
//!
//! The diff compares a translated SGML file with the English release it was
//! based on, using a wide context window. Newly added comments hold the
//! English original, and the added lines that follow a comment are its
//! translation:
//!
//! ```text
//!  <para>
//! +<!--
//!  The foo function
//!  returns bar.
//! +-->
//! +foo関数はbarを返します。
//!  </para>
//! ```
//!
//! The scan is a single forward pass over physical lines through a small
//! state machine:
//!
//! | state                 | line                      | next                                    |
//! |-----------------------|---------------------------|-----------------------------------------|
//! | any                   | added `<!--`              | flush pending pair, `InOriginal`        |
//! | `InOriginal`          | added `-->`               | `AwaitingTranslation`                   |
//! | `InOriginal`          | added / unchanged         | append to original                      |
//! | `InOriginal`          | removed                   | skipped                                 |
//! | `AwaitingTranslation` | added                     | append to translation                   |
//! | `AwaitingTranslation` | anything else             | `Idle`, pair stays pending              |
//!
//! A block pair is only emitted when the next block starts or the input ends,
//! so index-term pairs found in between come first in the output.
//!
//! Index terms are tracked by a separate machine (see [`IndexState`]) that
//! runs on every line outside an added comment.

use super::pair::{Pair, normalize_original};
use super::patterns::{
    BlockEnd, BlockStart, diff_block_end, diff_block_start, is_diff_file_header, is_hunk_header,
    is_index_term_end, is_index_term_start, restore_hyphens,
};


/// Extracts pairs from the unified diff of one file.
pub fn extract_diff(diff: &str) -> Vec<Pair> {
    let mut scan = DiffScan::new();
    for line in diff.lines() {
        scan.feed_line(line);
    }
    scan.finish()
}

/// Classification of one physical diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Added,
    Removed,
    /// Unchanged line. Lines without a marker are treated the same way.
    Context,
    /// `\ No newline at end of file`
    NoNewline,
    /// File header before the first hunk.
    FileHeader,
    Hunk,
}

#[derive(Debug, Clone, Copy)]
pub struct DiffLine<'a> {
    pub kind: LineKind,
    pub raw: &'a str,
    /// The line without its marker.
    pub content: &'a str,
}

impl<'a> DiffLine<'a> {
    pub fn classify(raw: &'a str, seen_hunk: bool) -> Self {
        let (kind, content) = if !seen_hunk && is_diff_file_header(raw) {
            (LineKind::FileHeader, raw)
        } else if is_hunk_header(raw) {
            (LineKind::Hunk, raw)
        } else if let Some(rest) = raw.strip_prefix('+') {
            (LineKind::Added, rest)
        } else if let Some(rest) = raw.strip_prefix('-') {
            (LineKind::Removed, rest)
        } else if let Some(rest) = raw.strip_prefix(' ') {
            (LineKind::Context, rest)
        } else if raw.starts_with('\\') {
            (LineKind::NoNewline, raw)
        } else {
            (LineKind::Context, raw)
        };
        Self { kind, raw, content }
    }

    fn is_added(&self) -> bool {
        self.kind == LineKind::Added
    }
}

/// Where the scan is relative to an added comment block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Idle,
    /// Inside an added `<!-- ... -->`; lines are original text.
    InOriginal,
    /// The comment closed; added lines are its translation.
    AwaitingTranslation,
}

/// Index-term tracking, independent of [`BlockState`].
///
/// An original-side span (unchanged or removed lines) must be followed
/// directly by an added span for a pair to be emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexState {
    #[default]
    Idle,
    /// Collecting an original `<indexterm>` span.
    Original,
    /// A complete original span waiting for its added counterpart.
    OriginalClosed,
    /// Collecting the added span.
    Added,
}

/// Scan context for one diff. Owns every buffer and flag of the extraction.
#[derive(Debug, Default)]
pub struct DiffScan {
    block: BlockState,
    index: IndexState,
    seen_hunk: bool,
    /// The most recent line outside removed original text.
    pending_context: String,
    /// Context of the block currently being built.
    block_context: String,
    original: String,
    translation: String,
    index_original: String,
    index_translation: String,
    pairs: Vec<Pair>,
}

impl DiffScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_state(&self) -> BlockState {
        self.block
    }

    pub fn index_state(&self) -> IndexState {
        self.index
    }

    /// Pairs emitted so far. The last block pair is held until the next
    /// block starts or [`DiffScan::finish`] is called.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn feed_line(&mut self, raw: &str) {
        let line = DiffLine::classify(raw, self.seen_hunk);
        match line.kind {
            LineKind::FileHeader | LineKind::NoNewline => return,
            LineKind::Hunk => {
                self.seen_hunk = true;
                self.hunk_break();
                return;
            }
            LineKind::Added | LineKind::Removed | LineKind::Context => {}
        }

        if line.is_added() {
            if let Some(start) = diff_block_start(raw) {
                self.start_block(start);
                return;
            }
            if self.block == BlockState::InOriginal
                && let Some(end) = diff_block_end(raw)
            {
                self.end_block(end);
                return;
            }
        }

        match self.block {
            BlockState::InOriginal => {
                self.original_line(&line);
                return;
            }
            BlockState::AwaitingTranslation => {
                if line.is_added() {
                    push_line(&mut self.translation, line.content);
                } else {
                    self.block = BlockState::Idle;
                }
            }
            BlockState::Idle => {}
        }

        self.pending_context = raw.to_string();
        self.index_line(&line);
    }

    /// Flushes the last block and returns every pair in emission order.
    pub fn finish(mut self) -> Vec<Pair> {
        self.flush();
        self.pairs
    }

    fn start_block(&mut self, start: BlockStart<'_>) {
        if let Some(leading) = start.leading
            && self.block == BlockState::AwaitingTranslation
        {
            push_line(&mut self.translation, leading);
        }
        self.flush();
        self.drop_closed_index();

        self.block_context = self.pending_context.clone();
        self.block = BlockState::InOriginal;

        match start.rest.find("-->") {
            Some(close) => {
                push_line(&mut self.original, &restore_hyphens(&start.rest[..close]));
                self.block = BlockState::AwaitingTranslation;
                let after = start.rest[close + 3..].trim();
                if !after.is_empty() {
                    push_line(&mut self.translation, after);
                }
            }
            None => {
                if !start.rest.trim().is_empty() {
                    push_line(&mut self.original, &restore_hyphens(start.rest));
                }
            }
        }
    }

    fn end_block(&mut self, end: BlockEnd<'_>) {
        if let Some(leading) = end.leading {
            push_line(&mut self.original, &restore_hyphens(leading));
        }
        self.block = BlockState::AwaitingTranslation;

        let after = end.rest.trim();
        if !after.is_empty() {
            push_line(&mut self.translation, after);
        }
    }

    fn original_line(&mut self, line: &DiffLine<'_>) {
        match line.kind {
            LineKind::Added | LineKind::Context => {
                push_line(&mut self.original, &restore_hyphens(line.content));
                self.pending_context = restore_hyphens(line.raw).into_owned();
            }
            // Text that only exists in the old release.
            LineKind::Removed => {}
            LineKind::NoNewline | LineKind::FileHeader | LineKind::Hunk => {}
        }
    }

    /// A new hunk is not adjacent to the previous line: translation runs and
    /// index spans cannot continue across it.
    fn hunk_break(&mut self) {
        if self.block == BlockState::AwaitingTranslation {
            self.block = BlockState::Idle;
        }
        self.reset_index();
    }

    fn flush(&mut self) {
        let original = std::mem::take(&mut self.original);
        let translation = std::mem::take(&mut self.translation);
        let context = std::mem::take(&mut self.block_context);
        self.block = BlockState::Idle;

        let original = normalize_original(&original);
        if original.is_empty() {
            return;
        }
        self.pairs.push(Pair::new(
            context.trim_matches('\n'),
            original,
            translation.trim_matches('\n'),
        ));
    }

    fn index_line(&mut self, line: &DiffLine<'_>) {
        let opens = is_index_term_start(line.content);
        let closes = is_index_term_end(line.content);

        if line.is_added() {
            match self.index {
                IndexState::OriginalClosed if opens => {
                    self.index = IndexState::Added;
                    push_line(&mut self.index_translation, line.content);
                    if closes {
                        self.emit_index();
                    }
                }
                IndexState::Added => {
                    push_line(&mut self.index_translation, line.content);
                    if closes {
                        self.emit_index();
                    }
                }
                IndexState::OriginalClosed => self.reset_index(),
                // Added lines inside an unchanged span are not a separate span.
                IndexState::Original | IndexState::Idle => {}
            }
            return;
        }

        if opens {
            self.reset_index();
            push_line(&mut self.index_original, line.content);
            self.index = if closes {
                IndexState::OriginalClosed
            } else {
                IndexState::Original
            };
            return;
        }

        match self.index {
            IndexState::Original => {
                push_line(&mut self.index_original, line.content);
                if closes {
                    self.index = IndexState::OriginalClosed;
                }
            }
            IndexState::OriginalClosed | IndexState::Added => self.reset_index(),
            IndexState::Idle => {}
        }
    }

    fn emit_index(&mut self) {
        let context = std::mem::take(&mut self.index_original);
        let translation = std::mem::take(&mut self.index_translation);
        self.index = IndexState::Idle;
        self.pairs.push(Pair::index_term(
            context.trim_matches('\n'),
            translation.trim_matches('\n'),
        ));
    }

    fn drop_closed_index(&mut self) {
        if matches!(self.index, IndexState::OriginalClosed | IndexState::Added) {
            self.reset_index();
        }
    }

    fn reset_index(&mut self) {
        self.index = IndexState::Idle;
        self.index_original.clear();
        self.index_translation.clear();
    }
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}
