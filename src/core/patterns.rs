//! Text recognizers shared by the paragraph and diff extractors.
//!
//! Every function here is a pure function of one block or one line. Nothing is
//! guaranteed about the input: the SGML sources are edited by hand, so callers
//! always handle the "no match" case themselves.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One or more blank lines between paragraphs.
static PARAGRAPH_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

/// A table row; group 1 is the row interior.
static ROW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<row(?:\s[^>]*)?>(.*?)</row>").unwrap());

/// `<!-- original -->translation` up to the next comment, list or end of text.
static COMMENT_PAIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--(.*?)-->(.*?)(<!--|<itemizedlist>|\z)").unwrap()
});

static STARTS_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\s*<!--").unwrap());

pub(crate) static COMMENT_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--").unwrap());

pub(crate) static COMMENT_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-->").unwrap());

static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?entry(?:\s[^>]*)?>").unwrap());

static MULTI_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static MULTI_NEWLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

// Diff line recognizers. They see the physical line including its marker.
static DIFF_BLOCK_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\s*<!--(.*)$").unwrap());

static DIFF_BLOCK_START_WITH_CONTEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(.*?\S)\s*<!--(.*)$").unwrap());

static DIFF_BLOCK_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\s*-->(.*)$").unwrap());

static DIFF_BLOCK_END_WITH_CONTEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(.*?\S)\s*-->(.*)$").unwrap());

static INDEX_TERM_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<indexterm\b").unwrap());

static INDEX_TERM_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</indexterm\s*>").unwrap());

static DIFF_FILE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:diff |index |--- |\+\+\+ |new file mode|deleted file mode|similarity index|rename from |rename to |old mode|new mode|Binary files )",
    )
    .unwrap()
});

/// Stand-in for `-` inside SGML comments, where `--` is not allowed.
pub const SENTINEL_HYPHEN: char = '\u{2010}';

/// What ended the translation text of a comment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Another `<!--` follows directly.
    Comment,
    /// An `<itemizedlist>` wrapper follows.
    ItemizedList,
    End,
}

/// A `<!-- original -->translation` match inside a block.
#[derive(Debug, Clone, Copy)]
pub struct CommentPair<'a> {
    pub original: &'a str,
    pub translation: &'a str,
    pub terminator: Terminator,
    /// Byte offset of the terminator in the matched text.
    pub terminator_start: usize,
    /// Byte offset just past the terminator.
    pub terminator_end: usize,
}

/// Splits a document into blank-line separated blocks.
pub fn split_paragraphs(src: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_SEPARATOR_REGEX.split(src)
}

/// Yields the interior of every `<row>` element.
pub fn table_rows(src: &str) -> impl Iterator<Item = &str> {
    ROW_REGEX
        .captures_iter(src)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Finds the first comment followed by non-comment text.
///
/// A comment with nothing but whitespace after it is not a pair. When another
/// comment follows directly the search moves on to that one; otherwise there
/// is no match and the translation, if any, lives in the next block.
pub fn match_comment_pair(text: &str) -> Option<CommentPair<'_>> {
    let mut search_from = 0;
    loop {
        let caps = COMMENT_PAIR_REGEX.captures_at(text, search_from)?;
        let (Some(original), Some(translation), Some(terminator)) =
            (caps.get(1), caps.get(2), caps.get(3))
        else {
            return None;
        };

        let kind = match terminator.as_str() {
            "<!--" => Terminator::Comment,
            "<itemizedlist>" => Terminator::ItemizedList,
            _ => Terminator::End,
        };

        if translation.as_str().trim().is_empty() {
            if kind == Terminator::Comment {
                search_from = terminator.start();
                continue;
            }
            return None;
        }

        return Some(CommentPair {
            original: original.as_str(),
            translation: translation.as_str(),
            terminator: kind,
            terminator_start: terminator.start(),
            terminator_end: terminator.end(),
        });
    }
}

/// True when the block opens with `<!--`, ignoring leading whitespace.
pub fn starts_comment(text: &str) -> bool {
    STARTS_COMMENT_REGEX.is_match(text)
}

/// True when the text is nothing but a comment delimiter.
pub fn is_bare_delimiter(text: &str) -> bool {
    matches!(text.trim(), "<!--" | "-->" | "<!-- -->" | "<!---->")
}

/// Removes `<entry>` / `</entry>` table-cell wrappers.
pub fn strip_entries(text: &str) -> Cow<'_, str> {
    ENTRY_REGEX.replace_all(text, "")
}

/// Removes `<listitem>` openers left after an `<itemizedlist>` wrapper.
pub fn strip_list_items(text: &str) -> String {
    text.replace("<listitem>", "")
}

pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    MULTI_SPACE_REGEX.replace_all(text, " ")
}

pub fn flatten_newlines(text: &str) -> Cow<'_, str> {
    MULTI_NEWLINE_REGEX.replace_all(text, " ")
}

/// Puts back the literal hyphens that were written as U+2010 inside comments.
pub fn restore_hyphens(line: &str) -> Cow<'_, str> {
    if line.contains(SENTINEL_HYPHEN) {
        Cow::Owned(line.replace(SENTINEL_HYPHEN, "-"))
    } else {
        Cow::Borrowed(line)
    }
}

/// An added diff line that opens a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStart<'a> {
    /// Text before `<!--` on the same line (context variant only).
    pub leading: Option<&'a str>,
    /// Text after `<!--`.
    pub rest: &'a str,
}

/// An added diff line that closes a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEnd<'a> {
    /// Original text before `-->` on the same line (context variant only).
    pub leading: Option<&'a str>,
    /// Text after `-->`.
    pub rest: &'a str,
}

pub fn diff_block_start(line: &str) -> Option<BlockStart<'_>> {
    let line = line.trim_end();
    if let Some(caps) = DIFF_BLOCK_START_REGEX.captures(line) {
        return Some(BlockStart {
            leading: None,
            rest: caps.get(1).map_or("", |m| m.as_str()),
        });
    }
    let caps = DIFF_BLOCK_START_WITH_CONTEXT_REGEX.captures(line)?;
    Some(BlockStart {
        leading: caps.get(1).map(|m| m.as_str()),
        rest: caps.get(2).map_or("", |m| m.as_str()),
    })
}

pub fn diff_block_end(line: &str) -> Option<BlockEnd<'_>> {
    let line = line.trim_end();
    if let Some(caps) = DIFF_BLOCK_END_REGEX.captures(line) {
        return Some(BlockEnd {
            leading: None,
            rest: caps.get(1).map_or("", |m| m.as_str()),
        });
    }
    let caps = DIFF_BLOCK_END_WITH_CONTEXT_REGEX.captures(line)?;
    Some(BlockEnd {
        leading: caps.get(1).map(|m| m.as_str()),
        rest: caps.get(2).map_or("", |m| m.as_str()),
    })
}

pub fn is_index_term_start(line: &str) -> bool {
    INDEX_TERM_START_REGEX.is_match(line)
}

pub fn is_index_term_end(line: &str) -> bool {
    INDEX_TERM_END_REGEX.is_match(line)
}

pub fn is_diff_file_header(line: &str) -> bool {
    DIFF_FILE_HEADER_REGEX.is_match(line)
}

pub fn is_hunk_header(line: &str) -> bool {
    line.starts_with("@@")
}
