//! Text analysis module for stripfix.
//!
//! This module provides the tokenization layer the correction passes are
//! built on: positioned word tokens and the tokenizer trait.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
