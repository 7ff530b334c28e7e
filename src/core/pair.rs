//! The extraction record shared by both extractors.

use serde::{Deserialize, Serialize};

use super::patterns::{COMMENT_END_REGEX, COMMENT_START_REGEX, collapse_whitespace};

/// One aligned fragment: original English text and its Japanese translation.
///
/// `context` carries whatever preceded the fragment in the source (the diff line
/// before an added comment, or the original `<indexterm>` markup of an index
/// entry) so that the same original can be told apart when it recurs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub context: String,
    pub original: String,
    pub translation: String,
}

impl Pair {
    pub fn new(
        context: impl Into<String>,
        original: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            original: original.into(),
            translation: translation.into(),
        }
    }

    /// A translated index entry. The original markup is kept as context and
    /// the original text is left empty.
    pub fn index_term(context: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            original: String::new(),
            translation: translation.into(),
        }
    }

    pub fn is_index_term(&self) -> bool {
        self.original.is_empty() && !self.context.is_empty()
    }
}

/// Normalizes original text: newlines become spaces, whitespace runs collapse
/// to a single space, both ends are trimmed.
///
/// Applying it twice yields the same string.
///
/// ```
/// use jpugdoc::core::normalize_original;
///
/// assert_eq!(normalize_original("\n  The <command>foo</command>\n  command.\n"), "The <command>foo</command> command.");
/// ```
pub fn normalize_original(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    collapse_whitespace(&flattened).trim().to_string()
}

/// Turns a block that opens a comment into a pending original: the comment
/// delimiters are removed and the rest is normalized.
pub fn original_candidate(block: &str) -> String {
    let without_start = COMMENT_START_REGEX.replace_all(block, "");
    let without_end = COMMENT_END_REGEX.replace_all(&without_start, "");
    normalize_original(&without_end)
}
