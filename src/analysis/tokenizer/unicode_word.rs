//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). Punctuation and whitespace segments are filtered
//! out; word-internal apostrophes are kept, so contractions like `don't`
//! survive as single tokens.
//!
//! # Examples
//!
//! ```
//! use stripfix::analysis::tokenizer::Tokenizer;
//! use stripfix::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Each produced token carries its byte offsets in the source text, computed
/// by walking the boundary segments cumulatively, so repeated words get their
/// own offsets rather than all pointing at the first occurrence.
///
/// # Examples
///
/// ```
/// use stripfix::analysis::tokenizer::Tokenizer;
/// use stripfix::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("can't stop").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "can't");
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut byte_offset = 0;
        let mut position = 0;

        for segment in text.split_word_bounds() {
            let start_offset = byte_offset;
            byte_offset += segment.len();

            // Only keep actual words (not whitespace or punctuation)
            if segment.chars().any(|c| c.is_alphanumeric()) {
                tokens.push(Token::with_offsets(
                    segment,
                    position,
                    start_offset,
                    byte_offset,
                ));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_token_positions_and_offsets() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("go dog go").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 2);

        // Repeated words keep their own offsets.
        assert_eq!(tokens[0].span(), (0, 2));
        assert_eq!(tokens[1].span(), (3, 6));
        assert_eq!(tokens[2].span(), (7, 9));
    }

    #[test]
    fn test_apostrophes_stay_inside_tokens() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("don't say's o'clock").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["don't", "say's", "o'clock"]);
    }

    #[test]
    fn test_fused_words_are_single_tokens() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("chompSnoopy runs").unwrap().collect();

        assert_eq!(tokens[0].text, "chompSnoopy");
        assert_eq!(tokens[1].text, "runs");
    }

    #[test]
    fn test_multibyte_offsets() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("isnìt här").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "isnìt");
        assert_eq!(tokens[0].span(), (0, 6));
        assert_eq!(tokens[1].text, "här");
        assert_eq!(tokens[1].span(), (7, 11));
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
    }
}
