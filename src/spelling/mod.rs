//! Spelling correction for comic strip panel transcriptions.
//!
//! This module provides the correction pipeline applied to each panel of
//! transcribed dialogue: a table of known transcription mistakes, a
//! frequency-weighted dictionary with edit-distance suggestions, and the
//! two-pass corrector that ties them together.

pub mod checker;
pub mod corrections;
pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use checker::*;
pub use corrections::*;
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
