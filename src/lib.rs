//! jpug-doc-tool - translation pair extraction for the PostgreSQL Japanese docs
//!
//! The translated documentation keeps each English paragraph in an SGML
//! comment followed by its Japanese translation. This crate recovers those
//! (original, translation) pairs and stores them as dictionary files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Pair extraction engine (paragraph and diff extractors)
//! - `dictionary`: Dictionary file format
//! - `source`: Diff source and release tag lookup
//! - `workspace`: Target file discovery and dictionary directory setup

pub mod cli;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod source;
pub mod workspace;
