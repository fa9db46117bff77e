//! Spell checker combining the base dictionary with the accepted-word set.

use crate::spelling::dictionary::{SpellingDictionary, ValidWordSet};
use crate::spelling::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Configuration for building a [`SpellChecker`].
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum edit distance for suggestions.
    pub max_distance: usize,
    /// Maximum number of suggestions per word.
    pub max_suggestions: usize,
    /// Frequency assigned to accepted words merged into the dictionary.
    pub valid_word_frequency: u32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            max_distance: 2,
            max_suggestions: 5,
            valid_word_frequency: 1000,
        }
    }
}

/// Checks words against the extended dictionary and ranks corrections.
///
/// Accepted words are merged into a copy of the base dictionary at a fixed
/// frequency, which makes them both always correct and reachable as
/// suggestions: a misspelled character name can be pulled to the name itself
/// rather than to some unrelated dictionary word. Words already in the base
/// dictionary keep their corpus frequency.
///
/// Built once at setup; all methods take `&self`, so a checker can be shared
/// across threads during a batch run.
pub struct SpellChecker {
    engine: SuggestionEngine,
}

impl SpellChecker {
    /// Build a checker from a base dictionary and the accepted-word set.
    pub fn new(base: SpellingDictionary, valid_words: &ValidWordSet, config: CheckerConfig) -> Self {
        let mut dictionary = base;
        for word in valid_words.iter() {
            if !dictionary.contains(word) {
                dictionary.add_word(word.to_string(), config.valid_word_frequency);
            }
        }

        let suggestion_config = SuggestionConfig {
            max_distance: config.max_distance,
            max_suggestions: config.max_suggestions,
            ..Default::default()
        };

        SpellChecker {
            engine: SuggestionEngine::with_config(dictionary, suggestion_config),
        }
    }

    /// Build a checker with the default configuration.
    pub fn with_defaults(base: SpellingDictionary, valid_words: &ValidWordSet) -> Self {
        Self::new(base, valid_words, CheckerConfig::default())
    }

    /// Check whether a word is correctly spelled, ignoring case.
    pub fn is_correct(&self, word: &str) -> bool {
        self.engine.is_correct(word)
    }

    /// Ranked suggestions for a word, best first. Empty when nothing in the
    /// dictionary is close enough.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.engine.suggest(word)
    }

    /// Frequency of a word in the extended dictionary.
    pub fn word_frequency(&self, word: &str) -> u32 {
        self.engine.word_frequency(word)
    }

    /// Extended dictionary statistics as (word count, total frequency).
    pub fn dictionary_stats(&self) -> (usize, u64) {
        self.engine.dictionary_stats()
    }
}
