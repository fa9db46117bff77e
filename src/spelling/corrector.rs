//! Two-pass spelling correction for a single panel's text.

use std::fmt;

use ahash::AHashSet;

use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;
use crate::spelling::checker::SpellChecker;
use crate::spelling::corrections::CorrectionTable;
use crate::util::text::replace_all;

/// Applies the correction policy to one unit of text.
///
/// Pass 1 applies the custom correction table, gated on tokens actually
/// present in the panel, then lowercases the string. Pass 2 flags every
/// remaining word the spell checker rejects and replaces each with its
/// top-ranked suggestion; words with no suggestions are left as written.
/// The result is always fully lowercase.
///
/// The corrector is read-only after construction and can be shared across
/// threads for batch runs.
pub struct PanelCorrector {
    table: CorrectionTable,
    checker: SpellChecker,
    tokenizer: Box<dyn Tokenizer>,
}

impl fmt::Debug for PanelCorrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCorrector")
            .field("table", &self.table)
            .field("tokenizer", &self.tokenizer.name())
            .finish_non_exhaustive()
    }
}

impl PanelCorrector {
    /// Create a corrector with the default Unicode word tokenizer.
    pub fn new(table: CorrectionTable, checker: SpellChecker) -> Self {
        PanelCorrector {
            table,
            checker,
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
        }
    }

    /// Create a corrector with a custom tokenizer.
    pub fn with_tokenizer(
        table: CorrectionTable,
        checker: SpellChecker,
        tokenizer: Box<dyn Tokenizer>,
    ) -> Self {
        PanelCorrector {
            table,
            checker,
            tokenizer,
        }
    }

    /// Correct one panel's text, returning a new string.
    pub fn correct(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        // Pass 1: custom corrections on the raw text, then case folding
        let custom = self.apply_custom_corrections(text)?;
        let lowered = custom.to_lowercase();

        // Pass 2: dictionary corrections. Suggestions may reintroduce
        // capitalization, so fold once more before returning.
        let checked = self.apply_dictionary_corrections(&lowered)?;
        Ok(checked.to_lowercase())
    }

    fn apply_custom_corrections(&self, text: &str) -> Result<String> {
        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(text)?
            .map(|token| token.text)
            .collect();
        let present: AHashSet<&str> = tokens.iter().map(String::as_str).collect();
        Ok(self.table.apply(text, &present))
    }

    fn apply_dictionary_corrections(&self, text: &str) -> Result<String> {
        let flagged = flag_misspellings(self.tokenizer.as_ref(), &self.checker, text)?;

        let mut corrected = text.to_string();
        for word in flagged {
            let suggestions = self.checker.suggest(&word);
            if let Some(best) = suggestions.first() {
                corrected = replace_all(&corrected, &word, &best.word);
            }
            // No suggestions means the word stays as written
        }
        Ok(corrected)
    }
}

/// Distinct words the checker rejects in `text`, in first-occurrence order.
/// Tokens without a single alphabetic character are never flagged.
///
/// Shared between the corrector's dictionary pass and the misspellings
/// audit report so both agree on what counts as a misspelling.
pub fn flag_misspellings(
    tokenizer: &dyn Tokenizer,
    checker: &SpellChecker,
    text: &str,
) -> Result<Vec<String>> {
    let mut seen = AHashSet::new();
    let mut flagged = Vec::new();

    for token in tokenizer.tokenize(text)? {
        if !token.text.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        if checker.is_correct(&token.text) {
            continue;
        }
        if seen.insert(token.text.clone()) {
            flagged.push(token.text);
        }
    }

    Ok(flagged)
}
