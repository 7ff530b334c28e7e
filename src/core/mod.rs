//! Pair extraction engine.
//!
//! Two extractors produce the same [`Pair`] records:
//!
//! - [`extract_paragraphs`]: from a full SGML document, block by block
//! - [`extract_diff`]: from `git diff` output, line by line
//!
//! Both are infallible. Markup that doesn't fit the expected shapes is
//! absorbed by fallbacks, never reported as an error.

pub mod diff;
pub mod pair;
pub mod paragraph;
pub mod patterns;
pub mod word;

pub use diff::{BlockState, DiffScan, IndexState, extract_diff};
pub use pair::{Pair, normalize_original, original_candidate};
pub use paragraph::extract_paragraphs;
pub use word::find_mismatches;
