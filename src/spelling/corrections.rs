//! The curated table of custom corrections applied before dictionary checking.

use aho_corasick::{AhoCorasick, MatchKind};
use ahash::{AHashMap, AHashSet};

use crate::error::{Result, StripfixError};

/// A fixed mapping from known-bad tokens to their exact replacements.
///
/// The table covers what a general dictionary gets wrong or cannot reach:
/// character-name misspellings with one unambiguous fix, dialect and
/// onomatopoeic tokens that must be rewritten or protected, fused word pairs
/// repaired by inserting a space at the join point, and accented glyphs the
/// OCR misread in place of an apostrophe. Entries whose replacement equals
/// the key are deliberate no-ops protecting reviewed text.
///
/// Keys are matched case-sensitively on the raw text. All keys are compiled
/// into a single Aho-Corasick automaton with leftmost-longest semantics, so
/// one scan finds every occurrence and overlapping keys resolve to the
/// longest match regardless of insertion order.
#[derive(Debug, Clone)]
pub struct CorrectionTable {
    replacements: AHashMap<String, String>,
    patterns: Vec<String>,
    automaton: AhoCorasick,
}

impl CorrectionTable {
    /// Build a table from (bad token, replacement) pairs.
    ///
    /// A repeated key keeps the last-given replacement. Empty keys are
    /// rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut replacements = AHashMap::new();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                return Err(StripfixError::invalid_operation(
                    "correction key must not be empty",
                ));
            }
            replacements.insert(key, value.into());
        }

        let mut patterns: Vec<String> = replacements.keys().cloned().collect();
        patterns.sort();

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| StripfixError::Anyhow(anyhow::Error::from(e)))?;

        Ok(CorrectionTable {
            replacements,
            patterns,
            automaton,
        })
    }

    /// Look up the replacement for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.replacements.get(key).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Apply the table to one panel's text.
    ///
    /// The string is scanned once; a match is replaced only if its key also
    /// occurs in `present_tokens`, the set of words the tokenizer produced
    /// for this panel. A key that passes that gate is replaced at every
    /// occurrence, including occurrences embedded in longer runs. Matches are
    /// non-overlapping and replacement output is never rescanned.
    pub fn apply(&self, text: &str, present_tokens: &AHashSet<&str>) -> String {
        if text.is_empty() || self.replacements.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;

        for mat in self.automaton.find_iter(text) {
            let pattern = self.patterns[mat.pattern().as_usize()].as_str();
            if !present_tokens.contains(pattern) {
                continue;
            }
            let Some(replacement) = self.replacements.get(pattern) else {
                continue;
            };
            result.push_str(&text[last_end..mat.start()]);
            result.push_str(replacement);
            last_end = mat.end();
        }

        result.push_str(&text[last_end..]);
        result
    }

    /// The curated built-in table for transcribed strip text.
    pub fn builtin() -> Result<Self> {
        Self::from_pairs(BUILTIN_CORRECTIONS.iter().copied())
    }
}

/// Corrections assembled during manual review of the transcription corpus.
/// Identity entries keep text that review decided was accurate as written.
const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("Charie", "Charlie"),
    ("\u{ec}", "'"),
    ("\u{ed}", "'"),
    ("\u{ee}", "'"),
    ("say's", "says"),
    ("Salley", "Sally"),
    ("loks", "looks"),
    ("mealSuppertime", "meal Suppertime"),
    ("Beaglscout", "Beaglescout"),
    ("Bown", "Brown"),
    ("Lius", "Linus"),
    ("eys", "eyes"),
    ("lsat", "last"),
    ("ozzes", "ounces"),
    ("Charlei", "Charlie"),
    ("Linu", "Linus"),
    ("disterbense", "disturbance"),
    ("Luc", "Lucy"),
    ("Vioet", "Violet"),
    ("hom", "home"),
    ("son't", "don't"),
    ("blandet", "blanket"),
    ("Charle", "Charlie"),
    ("Salluy", "Sally"),
    ("legionaires", "legionnaires"),
    ("Patrcia", "Patrcia"),
    ("Suppertie", "Suppertime"),
    ("Barown", "Brown"),
    ("bBrown", "Brown"),
    ("Brownas", "Brown as"),
    ("ZBrown", "Brown"),
    ("Woodst", "Woodstock"),
    ("Beagscout", "Beaglescout"),
    ("Paty", "Patty"),
    ("Reun", "Rerun"),
    ("Bhown", "Brown"),
    ("Lcy", "Lucy"),
    ("Saly", "Sally"),
    ("Charli", "Charlie"),
    ("Mrcie", "Marcie"),
    ("VBrown", "Brown"),
    ("Beeth", "Beethoven"),
    ("Cameroun", "Cameroon"),
    ("Pepperiment", "Peppermint"),
    ("Sallu", "Sally"),
    ("Flinstone", "Flintstone"),
    ("Marce", "Marcie"),
    ("Rereun's", "Rerun's"),
    ("Lcu", "Lucy"),
    ("Patt", "Patty"),
    ("blockhed", "blockhead"),
    ("Greeings", "Greetings"),
    ("Schlabotnik", "Shlabotnik"),
    ("SCHLABOTNIK", "SHLABOTNIK"),
    ("Humperdink", "Humperdinck"),
    ("Peppent", "Peppermint"),
    ("Serman", "Shermy"),
    ("ZSNOOPY", "Z SNOOPY"),
    ("ZZMarcie", "ZZ Marcie"),
    ("chompSnoopy", "chomp Snoopy"),
    ("MMMMMMMMMCharlie", "MMMMMMMMM Charlie"),
    ("TickleSnoopy", "Tickle Snoopy"),
    ("thatSally", "that Sally"),
    ("rulerSally", "ruler Sally"),
    ("HELucy", "HE Lucy"),
    ("PHOOEYPatty", "PHOOEY Patty"),
    ("HEECharlie", "HEE Charlie"),
    ("soFrieda", "so Frieda"),
    ("Snoopylifts", "Snoopy lifts"),
    ("SLURPSnoopy", "SLURP Snoopy"),
    ("muchLydia", "much Lydia"),
    ("BALLCharlie", "BALL Charlie"),
    ("Snoopyt", "Snoopy"),
    ("Lucyhands", "Lucy hands"),
    ("todayPatty", "today Patty"),
    ("chooLinus", "choo Linus"),
    ("SnoopySnoopy", "Snoopy Snoopy"),
    ("happenedCharlie", "happened Charlie"),
    ("Pattycomes", "Patty comes"),
    ("PattyMarcie", "Patty Marcie"),
    ("bloodSnoopy", "blood Snoopy"),
    ("Linussays", "Linus says"),
    ("HmmCharlie", "Hmm Charlie"),
    ("SchroederWho", "Schroeder Who"),
    ("MeCharlie", "Me Charlie"),
    ("WAAHCharlie", "WAAH Charlie"),
    ("HASchroeder", "HA Schroeder"),
    ("WhewSnoopy", "Whew Snoopy"),
    ("wormWOODSTOCK", "worm WOODSTOCK"),
    ("whistlingCharlie", "whistling Charlie"),
    ("YAWNCharlie", "YAWN Charlie"),
    ("SchroederPatty", "Schroeder Patty"),
    ("girlSnoopy", "girl Snoopy"),
    ("badLUCY", "bad LUCY"),
    ("beastCharlie", "beast Charlie"),
    ("PANTCharlie", "PANT Charlie"),
    ("ol'Charlie", "ol' Charlie"),
    ("themMARCIE", "themMARCIE"),
    ("youSally", "you Sally"),
    ("mouthSALLY", "mouthSALLY"),
    ("DUMLUCY", "DUM LUCY"),
    ("CaliforniaLINUS", "California LINUS"),
    ("olderLucy", "older Lucy"),
    ("DaySally", "Day Sally"),
    ("rulerSNOOPY", "ruler SNOOPY"),
    ("CHOMPLucy", "CHOMP Lucy"),
    ("themLucy", "them Lucy"),
    ("notLucy", "not Lucy"),
    ("winerySNOOPY", "winery SNOOPY"),
    ("speakSNOOPY", "speak SNOOPY"),
    ("callSNOOPY", "call SNOOPY"),
    ("mailLucy", "mail Lucy"),
    ("BrownCharlie", "Brown Charlie"),
    ("o'clockWOODSTOCK", "o'clock WOODSTOCK"),
    ("MOVEDCharlie", "MOVED Charlie"),
    ("DSally", "DSally"),
    ("itCharlie", "it Charlie"),
    ("onSchroeder", "onSchroeder"),
    ("MMMMMSNOOPY", "MMMMM SNOOPY"),
    ("SHAKECharlie", "SHAKE Charlie"),
    ("NoJoseph", "No Joseph"),
    ("SIGHCharlie", "SIGH Charlie"),
    ("timeCharlie", "time Charlie"),
    ("forteCharlie", "forte Charlie"),
    ("sureCharlie", "sure Charlie"),
    ("meShermy", "me Shermy"),
    ("YawnLinus", "Yawn Linus"),
    ("moung", "mound"),
    ("Snooy", "Snoopy"),
    ("Marice", "Marcie"),
    ("Shroeder", "Schroeder"),
    ("CHarlie", "Charlie"),
    ("SNoopy", "Snoopy"),
    ("Chalrie", "Charlie"),
    ("Schroder", "Schroeder"),
    ("Borwn", "Brown"),
    ("Chrlie", "Charlie"),
    ("Charllie", "Charlie"),
    ("Chrarlie", "Charlie"),
    ("Charliee", "Charlie"),
    ("TCharlie", "Charlie"),
    ("Chralie", "Charlie"),
    ("Cahrlie", "Charlie"),
    ("Charlies", "Charlie"),
    ("Chalres", "Charlie"),
    ("Bronw", "Brown"),
    ("Brwon", "Brown"),
    ("Bropwn", "Brown"),
    ("Schreoder", "Schroeder"),
    ("Scxhroeder", "Schroeder"),
    ("Shroecder", "Schroeder"),
    ("Shcroeder", "Schroeder"),
    ("Schoreder", "Schroeder"),
    ("Schoeder", "Schroeder"),
    ("Scroeder", "Schroeder"),
    ("Schroder's", "Schroeder's"),
    ("Shroeder's", "Schroeder's"),
    ("Snooy's", "Snoopy's"),
    ("Snopy", "Snoopy"),
    ("Snoopt", "Snoopy"),
    ("Snnopy", "Snoopy"),
    ("Snoopu", "Snoopy"),
    ("Snooppy", "Snoopy"),
    ("Smnoopy", "Snoopy"),
    ("Soopy", "Snoopy"),
    ("Snooopy", "Snoopy"),
    ("Snoppy", "Snoopy"),
    ("Snoopys", "Snoopy"),
    ("Pepermint", "Peppermint"),
    ("Pepprmint", "Peppermint"),
    ("Peppermaint", "Peppermint"),
    ("Peppermiont", "Peppermint"),
    ("Pepppermint", "Peppermint"),
    ("Perppermint", "Peppermint"),
    ("Pepperint", "Peppermint"),
    ("Woodstaock", "Woodstock"),
    ("Woodsrock", "Woodstock"),
    ("Wookstock", "Woodstock"),
    ("Woodstack", "Woodstock"),
    ("Wodstock", "Woodstock"),
    ("Woostock", "Woodstock"),
    ("Woosdstock", "Woodstock"),
    ("Linuis", "Linus"),
    ("Liunus", "Linus"),
    ("Linmus", "Linus"),
    ("Linuys", "Linus"),
    ("Linu's", "Linus"),
    ("Luct", "Lucy"),
    ("Luicy", "Lucy"),
    ("Sallt", "Sally"),
    ("Rereun", "Rerun"),
    ("RErun", "Rerun"),
    ("Violt", "Violet"),
    ("Violeta", "Violet"),
    ("Tschaikousky", "Tchaikovsky"),
    ("Tschaikowsky", "Tchaikovsky"),
    ("Maarcie", "Marcie"),
    ("Sopphie", "Sophie"),
    ("Eurdora", "Eudora"),
    ("skake", "skate"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn token_set<'a>(tokens: &[&'a str]) -> AHashSet<&'a str> {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_last_write_wins() {
        let table =
            CorrectionTable::from_pairs([("Snooy", "Snoopy"), ("Snooy", "Woodstock")]).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Snooy"), Some("Woodstock"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(CorrectionTable::from_pairs([("", "x")]).is_err());
    }

    #[test]
    fn test_apply_requires_token_match() {
        let table = CorrectionTable::from_pairs([("loks", "looks")]).unwrap();

        // Key occurs as a standalone word: replaced
        let out = table.apply("she loks happy", &token_set(&["she", "loks", "happy"]));
        assert_eq!(out, "she looks happy");

        // Key occurs only inside another word: untouched
        let out = table.apply("sloks here", &token_set(&["sloks", "here"]));
        assert_eq!(out, "sloks here");
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let table = CorrectionTable::from_pairs([("Snooy", "Snoopy")]).unwrap();

        // Once gated in, embedded occurrences are replaced too
        let out = table.apply("Snooy likes Snooys", &token_set(&["Snooy", "likes", "Snooys"]));
        assert_eq!(out, "Snoopy likes Snoopys");
    }

    #[test]
    fn test_apply_longest_match_wins() {
        let table =
            CorrectionTable::from_pairs([("chompSnoopy", "chomp Snoopy"), ("Snoopy", "SNOOPY")])
                .unwrap();

        // The longer key wins at the shared position; its output is not rescanned
        let out = table.apply("chompSnoopy", &token_set(&["chompSnoopy"]));
        assert_eq!(out, "chomp Snoopy");
    }

    #[test]
    fn test_apply_is_case_sensitive() {
        let table = CorrectionTable::from_pairs([("Charie", "Charlie")]).unwrap();

        let out = table.apply("charie waves", &token_set(&["charie", "waves"]));
        assert_eq!(out, "charie waves");
    }

    #[test]
    fn test_apply_empty_text() {
        let table = CorrectionTable::builtin().unwrap();
        assert_eq!(table.apply("", &token_set(&[])), "");
    }

    #[test]
    fn test_builtin_table() {
        let table = CorrectionTable::builtin().unwrap();

        assert!(table.len() > 150);
        assert_eq!(table.get("CHarlie"), Some("Charlie"));
        assert_eq!(table.get("chompSnoopy"), Some("chomp Snoopy"));

        // Reviewed entries that keep the text as written
        assert_eq!(table.get("DSally"), Some("DSally"));
        assert_eq!(table.get("Patrcia"), Some("Patrcia"));

        let out = table.apply(
            "CHarlie waves at SNoopy",
            &token_set(&["CHarlie", "waves", "at", "SNoopy"]),
        );
        assert_eq!(out, "Charlie waves at Snoopy");
    }

    #[test]
    fn test_builtin_fused_word_repair() {
        let table = CorrectionTable::builtin().unwrap();

        let out = table.apply("chompSnoopy", &token_set(&["chompSnoopy"]));
        assert_eq!(out, "chomp Snoopy");
    }
}
