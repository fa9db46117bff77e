//! Misspellings audit report.
//!
//! A one-time batch job that scans every panel of every record with the base
//! dictionary only and compiles a review table of flagged words and their
//! suggestions. The report seeds the manually curated accepted-words list, so
//! it deliberately runs without that list: words the curator later accepts
//! must show up here first.

use std::path::{Path, PathBuf};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::{Result, StripfixError};
use crate::spelling::checker::SpellChecker;
use crate::spelling::corrector::flag_misspellings;
use crate::spelling::suggest::Suggestion;
use crate::table::strip_table::PanelTable;
use crate::table::wordlist;

/// Column names of the report table, in file order.
pub const REPORT_COLUMNS: [&str; 5] = [
    "source_id",
    "panel_index",
    "containing_text",
    "word",
    "suggestions",
];

/// One flagged word: where it occurred and what the checker proposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MisspellingRecord {
    /// Identifier of the source record (first table column, or the 1-based
    /// record number when the table has no identifying column).
    pub source_id: String,
    /// Zero-based index of the flagging panel within its record.
    pub panel_index: usize,
    /// The flagging panel's full text, as stored in the table.
    pub containing_text: String,
    /// The flagged word, in the form it appears in the panel.
    pub word: String,
    /// Ranked suggestions from the base dictionary, best first.
    pub suggestions: Vec<Suggestion>,
}

/// Options for compiling the report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Name of the panel-text column.
    pub text_column: String,
    /// Recompute even if the report file already exists.
    pub force: bool,
    /// Also write the distinct flagged words, one per line, to this file.
    pub word_list_path: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            text_column: "text_by_panels".to_string(),
            force: false,
            word_list_path: None,
        }
    }
}

/// What a [`MisspellingAuditor::compile`] run produced.
#[derive(Debug)]
pub struct ReportOutcome {
    /// The report rows, compiled or loaded from cache.
    pub records: Vec<MisspellingRecord>,
    /// True when an existing report file was loaded instead of recompiled.
    pub cached: bool,
    /// Table records scanned (zero for a cached report).
    pub records_scanned: usize,
    /// Panels scanned (zero for a cached report).
    pub panels_scanned: usize,
}

/// Scans strip tables for words the base dictionary rejects.
pub struct MisspellingAuditor {
    checker: SpellChecker,
    tokenizer: Box<dyn Tokenizer>,
}

impl MisspellingAuditor {
    /// Create an auditor with the default Unicode word tokenizer.
    ///
    /// The checker should be built without the accepted-words set; the report
    /// exists to curate that set.
    pub fn new(checker: SpellChecker) -> Self {
        MisspellingAuditor {
            checker,
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
        }
    }

    /// Create an auditor with a custom tokenizer.
    pub fn with_tokenizer(checker: SpellChecker, tokenizer: Box<dyn Tokenizer>) -> Self {
        MisspellingAuditor { checker, tokenizer }
    }

    /// Scan every panel of every record and return one row per flagged word.
    ///
    /// Within a panel each distinct word is reported once, in first-occurrence
    /// order; the same word recurring in another panel gets another row.
    pub fn scan_table(
        &self,
        table: &PanelTable,
        text_column: &str,
    ) -> Result<Vec<MisspellingRecord>> {
        let panels = table.panel_texts(text_column)?;
        self.scan_panels(table, text_column, &panels)
    }

    /// Compile the report for `table`, writing it to `output`.
    ///
    /// If `output` already exists the stored report is loaded and returned
    /// as-is, unless `options.force` is set. A freshly compiled report is
    /// written caret-delimited; with `options.word_list_path` set, the
    /// distinct flagged words are also written one per line for review.
    pub fn compile<P: AsRef<Path>>(
        &self,
        table: &PanelTable,
        output: P,
        options: &ReportOptions,
    ) -> Result<ReportOutcome> {
        let output = output.as_ref();
        if !options.force && output.exists() {
            let records = load_report(output)?;
            return Ok(ReportOutcome {
                records,
                cached: true,
                records_scanned: 0,
                panels_scanned: 0,
            });
        }

        let panels = table.panel_texts(&options.text_column)?;
        let panels_scanned = panels.iter().map(Vec::len).sum();
        let records = self.scan_panels(table, &options.text_column, &panels)?;

        write_report(output, &records)?;
        if let Some(word_list) = &options.word_list_path {
            wordlist::write_words(word_list, &distinct_words(&records))?;
        }

        Ok(ReportOutcome {
            records,
            cached: false,
            records_scanned: table.len(),
            panels_scanned,
        })
    }

    fn scan_panels(
        &self,
        table: &PanelTable,
        text_column: &str,
        panels: &[Vec<String>],
    ) -> Result<Vec<MisspellingRecord>> {
        // Records are identified by the first column unless the panel text
        // itself is stored there, in which case the 1-based row number is used.
        let source_ids: Option<Vec<&str>> = if table.column_index(text_column) == Some(0) {
            None
        } else {
            match table.columns().first() {
                Some(first) => Some(table.column(first)?),
                None => None,
            }
        };

        let mut records = Vec::new();
        for (row, record_panels) in panels.iter().enumerate() {
            let source_id = match &source_ids {
                Some(ids) => ids[row].to_string(),
                None => (row + 1).to_string(),
            };

            for (panel_index, panel) in record_panels.iter().enumerate() {
                let flagged = flag_misspellings(self.tokenizer.as_ref(), &self.checker, panel)?;
                for word in flagged {
                    let suggestions = self.checker.suggest(&word);
                    records.push(MisspellingRecord {
                        source_id: source_id.clone(),
                        panel_index,
                        containing_text: panel.clone(),
                        word,
                        suggestions,
                    });
                }
            }
        }

        Ok(records)
    }
}

/// Write report rows as a caret-delimited table, suggestions JSON-encoded.
pub fn write_report<P: AsRef<Path>>(path: P, records: &[MisspellingRecord]) -> Result<()> {
    let mut table = PanelTable::new(REPORT_COLUMNS);
    for record in records {
        table.push_record([
            record.source_id.clone(),
            record.panel_index.to_string(),
            record.containing_text.clone(),
            record.word.clone(),
            serde_json::to_string(&record.suggestions)?,
        ])?;
    }
    table.write(path)
}

/// Load a previously written report table.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Vec<MisspellingRecord>> {
    let table = PanelTable::read(path)?;
    let source_ids = table.column("source_id")?;
    let panel_indices = table.column("panel_index")?;
    let texts = table.column("containing_text")?;
    let words = table.column("word")?;
    let suggestion_cells = table.column("suggestions")?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let panel_index: usize = panel_indices[row].parse().map_err(|e| {
            StripfixError::table(format!("record {}: bad panel_index: {e}", row + 1))
        })?;
        let suggestions: Vec<Suggestion> =
            serde_json::from_str(suggestion_cells[row]).map_err(|e| {
                StripfixError::table(format!("record {}: bad suggestions: {e}", row + 1))
            })?;
        records.push(MisspellingRecord {
            source_id: source_ids[row].to_string(),
            panel_index,
            containing_text: texts[row].to_string(),
            word: words[row].to_string(),
            suggestions,
        });
    }

    Ok(records)
}

/// Distinct flagged words across the report, in first-appearance order.
pub fn distinct_words(records: &[MisspellingRecord]) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut words = Vec::new();
    for record in records {
        if seen.insert(record.word.as_str()) {
            words.push(record.word.clone());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::spelling::dictionary::{BuiltinDictionary, ValidWordSet};
    use crate::table::wordlist::read_words;

    fn base_auditor() -> MisspellingAuditor {
        // Base dictionary only, no accepted-words set
        let checker =
            SpellChecker::with_defaults(BuiltinDictionary::english(), &ValidWordSet::default());
        MisspellingAuditor::new(checker)
    }

    fn sample_table() -> PanelTable {
        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        table
            .push_record(["a.gif", r#"["the blanet is gong","the dog is happy"]"#])
            .unwrap();
        table.push_record(["b.gif", r#"["Snoopy"]"#]).unwrap();
        table
    }

    #[test]
    fn test_scan_flags_words_with_panel_context() {
        let auditor = base_auditor();
        let records = auditor.scan_table(&sample_table(), "text_by_panels").unwrap();

        assert_eq!(records.len(), 3);

        assert_eq!(records[0].source_id, "a.gif");
        assert_eq!(records[0].panel_index, 0);
        assert_eq!(records[0].containing_text, "the blanet is gong");
        assert_eq!(records[0].word, "blanet");
        assert_eq!(records[0].suggestions[0].word, "blanket");

        assert_eq!(records[1].word, "gong");
        assert_eq!(records[1].suggestions[0].word, "going");

        // Without the accepted-words set, character names are flagged; that
        // is what the report is for
        assert_eq!(records[2].source_id, "b.gif");
        assert_eq!(records[2].word, "Snoopy");
    }

    #[test]
    fn test_scan_reports_each_distinct_word_once_per_panel() {
        let auditor = base_auditor();
        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        table
            .push_record(["a.gif", r#"["blanet blanet gong"]"#])
            .unwrap();

        let records = auditor.scan_table(&table, "text_by_panels").unwrap();
        let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["blanet", "gong"]);
    }

    #[test]
    fn test_scan_falls_back_to_row_numbers_without_id_column() {
        let auditor = base_auditor();
        let mut table = PanelTable::new(["text_by_panels"]);
        table.push_record([r#"["blanet"]"#]).unwrap();
        table.push_record([r#"["gong"]"#]).unwrap();

        let records = auditor.scan_table(&table, "text_by_panels").unwrap();
        assert_eq!(records[0].source_id, "1");
        assert_eq!(records[1].source_id, "2");
    }

    #[test]
    fn test_report_write_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compiled_misspellings.csv");

        let auditor = base_auditor();
        let records = auditor.scan_table(&sample_table(), "text_by_panels").unwrap();

        write_report(&path, &records).unwrap();
        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_compile_uses_cache_unless_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compiled_misspellings.csv");
        let auditor = base_auditor();

        let first = auditor
            .compile(&sample_table(), &path, &ReportOptions::default())
            .unwrap();
        assert!(!first.cached);
        assert_eq!(first.records_scanned, 2);
        assert_eq!(first.panels_scanned, 3);

        // A different table, but the cached report wins
        let mut other = PanelTable::new(["filename", "text_by_panels"]);
        other.push_record(["c.gif", r#"["zzzqqq"]"#]).unwrap();

        let second = auditor
            .compile(&other, &path, &ReportOptions::default())
            .unwrap();
        assert!(second.cached);
        assert_eq!(second.records, first.records);

        let forced = auditor
            .compile(
                &other,
                &path,
                &ReportOptions {
                    force: true,
                    ..ReportOptions::default()
                },
            )
            .unwrap();
        assert!(!forced.cached);
        assert_eq!(forced.records.len(), 1);
        assert_eq!(forced.records[0].word, "zzzqqq");
    }

    #[test]
    fn test_compile_writes_distinct_word_list() {
        let dir = TempDir::new().unwrap();
        let report_path = dir.path().join("compiled_misspellings.csv");
        let list_path = dir.path().join("misspell_list.txt");

        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        table
            .push_record(["a.gif", r#"["blanet gong","blanet again"]"#])
            .unwrap();

        let auditor = base_auditor();
        auditor
            .compile(
                &table,
                &report_path,
                &ReportOptions {
                    word_list_path: Some(list_path.clone()),
                    ..ReportOptions::default()
                },
            )
            .unwrap();

        let words = read_words(&list_path).unwrap();
        assert_eq!(words, vec!["blanet".to_string(), "gong".to_string()]);
    }

    #[test]
    fn test_distinct_words_first_appearance_order() {
        let make = |word: &str| MisspellingRecord {
            source_id: "a.gif".to_string(),
            panel_index: 0,
            containing_text: String::new(),
            word: word.to_string(),
            suggestions: Vec::new(),
        };

        let records = vec![make("gong"), make("blanet"), make("gong")];
        assert_eq!(
            distinct_words(&records),
            vec!["gong".to_string(), "blanet".to_string()]
        );
    }
}
