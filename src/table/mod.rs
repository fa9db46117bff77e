//! Strip-table and word-list file I/O.
//!
//! The strip table is a caret-delimited tabular dataset with a header row;
//! one column stores each record's panel texts as a JSON array of strings.
//! Word lists are flat one-word-per-line files used for the accepted-words
//! and character-name sets.

pub mod strip_table;
pub mod wordlist;

// Re-export commonly used types
pub use strip_table::*;
pub use wordlist::*;
