//! Spelling suggestion generation algorithms.

use std::cmp::Ordering;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::{LevenshteinMatcher, TypoPatterns};

/// A spelling suggestion with a score indicating confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Confidence score (higher is better, 0.0 to 1.0).
    pub score: f64,
    /// Edit distance from the original word.
    pub distance: usize,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64, distance: usize, frequency: u32) -> Self {
        Suggestion {
            word,
            score,
            distance,
            frequency,
        }
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores sort first; ties fall back to distance, frequency,
        // then the word itself so the ordering is fully deterministic.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.distance.cmp(&other.distance))
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Maximum edit distance to consider.
    pub max_distance: usize,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Minimum frequency threshold for suggestions.
    pub min_frequency: u32,
    /// Weight for edit distance in scoring (0.0 to 1.0).
    pub distance_weight: f64,
    /// Weight for word frequency in scoring (0.0 to 1.0).
    pub frequency_weight: f64,
    /// Whether to use keyboard distance for better typo detection.
    pub use_keyboard_distance: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_distance: 2,
            max_suggestions: 5,
            min_frequency: 1,
            distance_weight: 0.6,
            frequency_weight: 0.4,
            use_keyboard_distance: true,
        }
    }
}

/// Main spelling suggestion engine.
pub struct SuggestionEngine {
    dictionary: SpellingDictionary,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: SpellingDictionary) -> Self {
        SuggestionEngine {
            dictionary,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: SpellingDictionary, config: SuggestionConfig) -> Self {
        SuggestionEngine { dictionary, config }
    }

    /// Get suggestions for a potentially misspelled word, best first.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let word_lower = word.to_lowercase();

        // If the word is already in the dictionary, return it as the top suggestion
        if self.dictionary.contains(&word_lower) {
            let frequency = self.dictionary.frequency(&word_lower);
            return vec![Suggestion::new(word_lower, 1.0, 0, frequency)];
        }

        let matcher = LevenshteinMatcher::new(word_lower.clone());
        let candidates = self.generate_candidates(&word_lower);

        let mut suggestions = Vec::new();
        for candidate in candidates {
            if let Some(distance) = matcher.distance_threshold(&candidate, self.config.max_distance)
            {
                let frequency = self.dictionary.frequency(&candidate);

                if frequency >= self.config.min_frequency {
                    let score = self.calculate_score(&word_lower, &candidate, distance, frequency);
                    suggestions.push(Suggestion::new(candidate, score, distance, frequency));
                }
            }
        }

        suggestions.sort();
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }

    /// Generate candidate words for correction.
    fn generate_candidates(&self, word: &str) -> AHashSet<String> {
        let mut candidates = self.single_edits(word);

        if self.config.max_distance >= 2 {
            // Second-level edits for double typos
            let first_edits = self.single_edits(word);
            for edit in &first_edits {
                candidates.extend(self.single_edits(edit));
            }
        }

        // Prefix walk of the dictionary catches truncations and suffix damage
        let prefix: String = word.chars().take(3).collect();
        if !prefix.is_empty() {
            candidates.extend(self.dictionary.words_with_prefix(&prefix));
        }

        // Filter to only include dictionary words
        candidates.retain(|candidate| self.dictionary.contains(candidate));

        candidates
    }

    /// Generate all possible single edits of a word.
    fn single_edits(&self, word: &str) -> AHashSet<String> {
        let mut edits = AHashSet::new();
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        // Deletions
        for i in 0..len {
            let mut new_word = chars.clone();
            new_word.remove(i);
            edits.insert(new_word.into_iter().collect());
        }

        // Transpositions (swapping adjacent characters)
        for i in 0..len.saturating_sub(1) {
            let mut new_word = chars.clone();
            new_word.swap(i, i + 1);
            edits.insert(new_word.into_iter().collect());
        }

        // Replacements
        for i in 0..len {
            for ch in 'a'..='z' {
                if ch != chars[i] {
                    let mut new_word = chars.clone();
                    new_word[i] = ch;
                    edits.insert(new_word.into_iter().collect());
                }
            }
        }

        // Insertions
        for i in 0..=len {
            for ch in 'a'..='z' {
                let mut new_word = chars.clone();
                new_word.insert(i, ch);
                edits.insert(new_word.into_iter().collect());
            }
        }

        // If using keyboard distance, add keyboard-specific replacements
        if self.config.use_keyboard_distance {
            for i in 0..len {
                let nearby_keys = TypoPatterns::nearby_keys(chars[i]);
                for &nearby_char in &nearby_keys {
                    let mut new_word = chars.clone();
                    new_word[i] = nearby_char;
                    edits.insert(new_word.into_iter().collect());
                }
            }
        }

        edits
    }

    /// Calculate a confidence score for a suggestion.
    fn calculate_score(
        &self,
        original: &str,
        candidate: &str,
        distance: usize,
        frequency: u32,
    ) -> f64 {
        // Distance score (closer distance = higher score)
        let distance_score = if distance == 0 {
            1.0
        } else {
            1.0 / (1.0 + distance as f64)
        };

        // Frequency score (logarithmic scale to prevent domination by very common words)
        let frequency_score = if frequency == 0 {
            0.0
        } else {
            (frequency as f64).ln() / (self.dictionary.total_frequency() as f64).ln()
        };

        // Length similarity bonus
        let length_penalty = if original.chars().count() == candidate.chars().count() {
            1.0
        } else {
            0.9 // Small penalty for length differences
        };

        // Prefix bonus (words starting with the same letters are more likely correct)
        let prefix_bonus = self.calculate_prefix_bonus(original, candidate);

        // Keyboard distance bonus
        let keyboard_bonus = if self.config.use_keyboard_distance {
            let keyboard_dist = TypoPatterns::keyboard_distance(original, candidate);
            let regular_dist = distance as f64;
            if keyboard_dist < regular_dist {
                1.1 // 10% bonus for keyboard-friendly corrections
            } else {
                1.0
            }
        } else {
            1.0
        };

        // Combine scores
        let base_score = distance_score * self.config.distance_weight
            + frequency_score * self.config.frequency_weight;

        (base_score * length_penalty * prefix_bonus * keyboard_bonus).min(1.0)
    }

    /// Calculate bonus for common prefixes.
    fn calculate_prefix_bonus(&self, original: &str, candidate: &str) -> f64 {
        let orig_chars: Vec<char> = original.chars().collect();
        let cand_chars: Vec<char> = candidate.chars().collect();

        let common_prefix_len = orig_chars
            .iter()
            .zip(cand_chars.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let max_len = orig_chars.len().max(cand_chars.len());
        if max_len == 0 {
            return 1.0;
        }

        // Bonus ranges from 1.0 (no common prefix) to 1.2 (same prefix)
        1.0 + (common_prefix_len as f64 / max_len as f64) * 0.2
    }

    /// Get dictionary statistics as (word count, total frequency).
    pub fn dictionary_stats(&self) -> (usize, u64) {
        (
            self.dictionary.word_count(),
            self.dictionary.total_frequency(),
        )
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Get the frequency of a word in the dictionary.
    pub fn word_frequency(&self, word: &str) -> u32 {
        self.dictionary.frequency(word)
    }
}
