//! # stripfix
//!
//! Spell correction for transcribed comic strip panel text.
//!
//! Transcribed dialogue is noisy: typos, OCR artifacts, fused words, and a
//! cast of proper nouns no general dictionary knows. This crate cleans one
//! column of a caret-delimited strip table by running every panel through a
//! two-pass corrector: a curated table of known transcription mistakes first,
//! then a frequency-weighted dictionary extended with the accepted-word and
//! character-name lists.
//!
//! ## Features
//!
//! - Two-pass panel correction (custom table, then dictionary suggestions)
//! - Frequency dictionary with edit-distance suggestion ranking
//! - Caret-delimited table and word-list file I/O
//! - Misspellings audit report for curating the accepted-words list
//! - Sequential or parallel batch runs over a whole table

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod error;
pub mod report;
pub mod spelling;
pub mod table;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
