//! Word-frequency dictionary and the accepted-word set backing the spell checker.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::{Result, StripfixError};

/// Return true if `s` is usable as a dictionary word.
/// Apostrophes are allowed so contractions ("don't", "o'clock") survive loading.
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphabetic() || c == '\'')
}

/// A dictionary that stores words and their frequencies for spelling correction.
///
/// All entries are lowercase; lookups lowercase their input.
#[derive(Debug, Clone)]
pub struct SpellingDictionary {
    /// Words and their frequencies
    words: AHashMap<String, u32>,
    /// Total frequency count for probability calculations
    total_count: u64,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: AHashMap::new(),
            total_count: 0,
        }
    }

    /// Add a word to the dictionary with the given frequency.
    /// Re-adding a word replaces its frequency.
    pub fn add_word(&mut self, word: String, frequency: u32) {
        let normalized = word.to_lowercase();
        let old_freq = self.words.get(&normalized).copied().unwrap_or(0);
        self.words.insert(normalized, frequency);
        self.total_count = self.total_count - old_freq as u64 + frequency as u64;
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let normalized = word.to_lowercase();
        let current = self.words.get(&normalized).copied().unwrap_or(0);
        self.add_word(normalized, current + 1);
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the probability of a word (frequency / total count).
    pub fn probability(&self, word: &str) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total_count as f64
    }

    /// Get all words in the dictionary.
    pub fn words(&self) -> &AHashMap<String, u32> {
        &self.words
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Load a dictionary from a text file.
    ///
    /// Each data line is either `word<TAB>frequency` or a bare word (counted
    /// once per occurrence). Blank lines and `#` comments are skipped. A file
    /// that yields no usable words is a setup error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('\t') {
                Some((word, freq)) => {
                    let word = word.trim();
                    let frequency = freq.trim().parse::<u32>().map_err(|e| {
                        StripfixError::dictionary(format!("bad frequency for {word:?}: {e}"))
                    })?;
                    if is_word(word) {
                        dictionary.add_word(word.to_string(), frequency);
                    }
                }
                None => {
                    if is_word(line) {
                        dictionary.increment_word(line);
                    }
                }
            }
        }

        if dictionary.word_count() == 0 {
            return Err(StripfixError::dictionary(
                "dictionary file contains no usable words",
            ));
        }

        Ok(dictionary)
    }

    /// Create a dictionary from a corpus of text.
    pub fn from_corpus(text: &str) -> Self {
        let mut dictionary = SpellingDictionary::new();

        // Simple tokenization - split on non-word characters
        let words = text
            .split(|c: char| !(c.is_alphabetic() || c == '\''))
            .filter(|word| is_word(word))
            .map(|word| word.to_lowercase());

        for word in words {
            dictionary.increment_word(&word);
        }

        dictionary
    }

    /// Get words that start with the given prefix.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix_lower = prefix.to_lowercase();
        self.words
            .keys()
            .filter(|word| word.starts_with(&prefix_lower))
            .cloned()
            .collect()
    }
}

impl Default for SpellingDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable set of words that must always be treated as correctly spelled.
///
/// Holds the curated accepted-word list plus every known character name,
/// lowercased. Built once at setup and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct ValidWordSet {
    words: AHashSet<String>,
}

impl ValidWordSet {
    /// Build the set from any iterator of words. Entries are trimmed and
    /// lowercased; blanks are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        ValidWordSet { words }
    }

    /// Check whether a word belongs to the set, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over the (lowercase) words in the set.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The built-in lexicon used when no dictionary file is supplied.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create the built-in English dictionary.
    ///
    /// Frequencies are rough corpus estimates, tuned for transcribed dialogue:
    /// heavy on function words, spoken-register contractions, interjections,
    /// and the household/play vocabulary that dominates strip descriptions.
    pub fn english() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();

        let common_words = vec![
            ("the", 60000),
            ("i", 48000),
            ("a", 40000),
            ("to", 38000),
            ("you", 36000),
            ("and", 30000),
            ("it", 26000),
            ("of", 24000),
            ("in", 22000),
            ("is", 21000),
            ("that", 19000),
            ("my", 17000),
            ("he", 16000),
            ("this", 15000),
            ("what", 14000),
            ("me", 13500),
            ("on", 13000),
            ("for", 12500),
            ("going", 12000),
            ("have", 11500),
            ("be", 11000),
            ("we", 10500),
            ("do", 10000),
            ("don't", 9800),
            ("no", 9600),
            ("it's", 9400),
            ("your", 9200),
            ("i'm", 9000),
            ("are", 8800),
            ("not", 8600),
            ("can", 8400),
            ("all", 8200),
            ("was", 8000),
            ("his", 7900),
            ("but", 7800),
            ("so", 7600),
            ("with", 7400),
            ("just", 7200),
            ("like", 7000),
            ("get", 6800),
            ("know", 6600),
            ("here", 6400),
            ("there", 6200),
            ("out", 6000),
            ("at", 5800),
            ("up", 5600),
            ("she", 5400),
            ("her", 5200),
            ("they", 5000),
            ("that's", 4950),
            ("good", 4900),
            ("well", 4800),
            ("see", 4700),
            ("one", 4600),
            ("him", 4500),
            ("can't", 4450),
            ("never", 4400),
            ("how", 4300),
            ("about", 4200),
            ("think", 4100),
            ("if", 4000),
            ("will", 3900),
            ("when", 3800),
            ("why", 3700),
            ("who", 3600),
            ("come", 3500),
            ("now", 3400),
            ("then", 3300),
            ("them", 3200),
            ("i'll", 3180),
            ("say", 3100),
            ("says", 3000),
            ("said", 2950),
            ("little", 2900),
            ("you're", 2880),
            ("time", 2850),
            ("go", 2800),
            ("got", 2750),
            ("look", 2700),
            ("looks", 2650),
            ("he's", 2600),
            ("oh", 2550),
            ("yes", 2500),
            ("right", 2450),
            ("back", 2400),
            ("i've", 2380),
            ("over", 2350),
            ("down", 2300),
            ("want", 2250),
            ("tell", 2200),
            ("too", 2150),
            ("from", 2100),
            ("won't", 2080),
            ("been", 2050),
            ("or", 2000),
            ("as", 1980),
            ("what's", 1960),
            ("day", 1940),
            ("had", 1900),
            ("she's", 1890),
            ("has", 1860),
            ("did", 1820),
            ("didn't", 1780),
            ("very", 1750),
            ("doing", 1720),
            ("some", 1700),
            ("we're", 1680),
            ("because", 1660),
            ("an", 1620),
            ("i'd", 1600),
            ("doesn't", 1590),
            ("off", 1580),
            ("would", 1560),
            ("could", 1540),
            ("should", 1520),
            ("were", 1500),
            ("let", 1480),
            ("they're", 1470),
            ("make", 1460),
            ("need", 1440),
            ("really", 1420),
            ("thing", 1400),
            ("isn't", 1390),
            ("things", 1380),
            ("soon", 1360),
            ("way", 1340),
            ("even", 1320),
            ("first", 1310),
            ("last", 1300),
            ("wasn't", 1290),
            ("long", 1280),
            ("new", 1260),
            ("old", 1240),
            ("great", 1220),
            ("big", 1200),
            ("let's", 1190),
            ("nice", 1180),
            ("more", 1160),
            ("much", 1140),
            ("other", 1120),
            ("again", 1100),
            ("always", 1080),
            ("bad", 1060),
            ("away", 1040),
            ("around", 1020),
            ("any", 1010),
            ("every", 1000),
            ("everything", 980),
            ("something", 960),
            ("nothing", 940),
            ("anything", 920),
            ("boy", 900),
            ("better", 890),
            ("best", 880),
            ("girl", 860),
            ("still", 850),
            ("only", 840),
            ("maybe", 820),
            ("sure", 800),
            ("couldn't", 795),
            ("love", 790),
            ("life", 780),
            ("wouldn't", 775),
            ("there's", 770),
            ("help", 760),
            ("today", 750),
            ("tonight", 740),
            ("tomorrow", 730),
            ("yesterday", 720),
            ("night", 710),
            ("morning", 700),
            ("haven't", 695),
            ("before", 690),
            ("ha", 680),
            ("after", 675),
            ("school", 670),
            ("home", 660),
            ("house", 650),
            ("world", 640),
            ("grief", 630),
            ("happy", 620),
            ("sad", 610),
            ("mad", 600),
            ("ol", 590),
            ("glad", 580),
            ("kind", 570),
            ("stupid", 560),
            ("wrong", 550),
            ("rats", 545),
            ("crazy", 540),
            ("okay", 530),
            ("hey", 520),
            ("wow", 515),
            ("wait", 510),
            ("happened", 505),
            ("stop", 500),
            ("mail", 498),
            ("please", 495),
            ("thank", 490),
            ("thanks", 485),
            ("dog", 480),
            ("sigh", 475),
            ("dogs", 472),
            ("bird", 470),
            ("birds", 465),
            ("beagle", 460),
            ("hmm", 455),
            ("doghouse", 452),
            ("ball", 450),
            ("baseball", 445),
            ("comes", 442),
            ("game", 440),
            ("chomp", 435),
            ("team", 432),
            ("play", 430),
            ("older", 428),
            ("blockhead", 425),
            ("playing", 422),
            ("played", 420),
            ("pitch", 415),
            ("pitcher", 410),
            ("mound", 405),
            ("glove", 400),
            ("bat", 395),
            ("catch", 390),
            ("throw", 385),
            ("kite", 380),
            ("tree", 375),
            ("blanket", 370),
            ("thumb", 365),
            ("piano", 360),
            ("music", 355),
            ("song", 350),
            ("sing", 345),
            ("singing", 340),
            ("speak", 335),
            ("meal", 330),
            ("supper", 325),
            ("suppertime", 320),
            ("phooey", 315),
            ("dinner", 312),
            ("hee", 310),
            ("lunch", 308),
            ("ouch", 305),
            ("moved", 304),
            ("breakfast", 302),
            ("cookie", 300),
            ("o'clock", 298),
            ("cookies", 295),
            ("candy", 290),
            ("oops", 288),
            ("whew", 285),
            ("chocolate", 283),
            ("yawn", 282),
            ("bone", 280),
            ("dish", 275),
            ("sob", 272),
            ("milk", 270),
            ("sniff", 268),
            ("bread", 265),
            ("shake", 262),
            ("toast", 260),
            ("call", 258),
            ("pancakes", 255),
            ("ma'am", 252),
            ("pizza", 248),
            ("called", 245),
            ("aaugh", 242),
            ("waah", 241),
            ("rain", 240),
            ("raining", 235),
            ("snow", 230),
            ("boo", 228),
            ("greetings", 226),
            ("winter", 225),
            ("summer", 220),
            ("bleah", 215),
            ("spring", 213),
            ("sun", 210),
            ("moon", 205),
            ("stars", 200),
            ("sky", 195),
            ("grass", 190),
            ("flowers", 185),
            ("leaves", 180),
            ("security", 176),
            ("beach", 174),
            ("fussbudget", 172),
            ("wind", 170),
            ("letter", 168),
            ("write", 166),
            ("writing", 164),
            ("read", 162),
            ("slurp", 160),
            ("reading", 159),
            ("pant", 158),
            ("book", 156),
            ("books", 155),
            ("story", 154),
            ("paper", 152),
            ("tickle", 150),
            ("ruler", 149),
            ("picture", 148),
            ("skate", 147),
            ("pencil", 146),
            ("skating", 145),
            ("teacher", 144),
            ("worm", 143),
            ("class", 142),
            ("whistling", 141),
            ("draw", 140),
            ("whistle", 139),
            ("test", 138),
            ("blood", 137),
            ("grade", 136),
            ("recess", 135),
            ("camp", 134),
            ("walk", 132),
            ("walking", 130),
            ("run", 128),
            ("running", 126),
            ("jump", 124),
            ("lifts", 123),
            ("sleep", 122),
            ("sleeping", 120),
            ("ounces", 118),
            ("asleep", 117),
            ("dream", 116),
            ("choo", 115),
            ("dreams", 114),
            ("eat", 112),
            ("eating", 110),
            ("ate", 108),
            ("hungry", 106),
            ("tired", 104),
            ("cold", 102),
            ("hot", 100),
            ("face", 98),
            ("disturbance", 96),
            ("head", 95),
            ("hair", 94),
            ("eyes", 92),
            ("ears", 90),
            ("dum", 89),
            ("nose", 88),
            ("mouth", 86),
            ("beast", 85),
            ("hands", 84),
            ("hand", 82),
            ("feet", 80),
            ("arm", 78),
            ("legs", 76),
            ("heart", 74),
            ("smile", 72),
            ("laugh", 70),
            ("laughing", 68),
            ("cry", 66),
            ("wishy", 65),
            ("washy", 64),
            ("crying", 63),
            ("z", 62),
            ("zz", 61),
            ("scream", 60),
            ("kiss", 58),
            ("legionnaires", 56),
            ("winery", 54),
            ("forte", 52),
            ("hug", 50),
        ];

        for (word, freq) in common_words {
            dict.add_word(word.to_string(), freq);
        }

        dict
    }
}
