//! Batch correction over a strip table.
//!
//! Drives the panel corrector across every panel of every record and appends
//! the corrected column. Records are independent, so the map is sequential by
//! default with an opt-in parallel mode.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::Result;
use crate::spelling::corrector::PanelCorrector;
use crate::table::strip_table::PanelTable;

/// Options for a batch correction run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Name of the panel-text column to read.
    pub text_column: String,
    /// Name of the corrected column to append.
    pub corrected_column: String,
    /// Records between progress reports.
    pub progress_interval: usize,
    /// Correct records in parallel.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            text_column: "text_by_panels".to_string(),
            corrected_column: "text_spell_corrected".to_string(),
            progress_interval: 100,
            parallel: false,
        }
    }
}

/// A progress report during a batch run.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress {
    /// 1-based record number.
    pub current: usize,
    /// Total records in the batch.
    pub total: usize,
}

/// Counts and timing from a completed batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Records corrected.
    pub record_count: usize,
    /// Panels corrected across all records.
    pub panel_count: usize,
    /// Panels whose corrected text differs from the input text.
    pub changed_panels: usize,
    /// Wall-clock time for the run.
    pub elapsed: Duration,
}

/// Correct every panel of every record and append the corrected column.
///
/// The progress callback fires before every `progress_interval`-th record in
/// sequential mode and on completion counts in parallel mode, where record
/// order is not deterministic.
pub fn correct_table(
    table: &mut PanelTable,
    corrector: &PanelCorrector,
    options: &BatchOptions,
    on_progress: Option<&(dyn Fn(BatchProgress) + Sync)>,
) -> Result<BatchSummary> {
    let start = Instant::now();
    let panels = table.panel_texts(&options.text_column)?;
    let total = panels.len();
    let interval = options.progress_interval.max(1);

    let corrected: Vec<Vec<String>> = if options.parallel {
        let completed = AtomicUsize::new(0);
        panels
            .par_iter()
            .map(|record_panels| {
                let result = correct_record(corrector, record_panels);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % interval == 0
                    && let Some(callback) = on_progress
                {
                    callback(BatchProgress {
                        current: done,
                        total,
                    });
                }
                result
            })
            .collect::<Result<_>>()?
    } else {
        let mut corrected = Vec::with_capacity(total);
        for (index, record_panels) in panels.iter().enumerate() {
            if index % interval == 0
                && let Some(callback) = on_progress
            {
                callback(BatchProgress {
                    current: index + 1,
                    total,
                });
            }
            corrected.push(correct_record(corrector, record_panels)?);
        }
        corrected
    };

    let panel_count = panels.iter().map(Vec::len).sum();
    let changed_panels = panels
        .iter()
        .flatten()
        .zip(corrected.iter().flatten())
        .filter(|(before, after)| before != after)
        .count();

    let mut cells = Vec::with_capacity(corrected.len());
    for record_panels in &corrected {
        cells.push(serde_json::to_string(record_panels)?);
    }
    table.append_column(&options.corrected_column, cells)?;

    Ok(BatchSummary {
        record_count: total,
        panel_count,
        changed_panels,
        elapsed: start.elapsed(),
    })
}

fn correct_record(corrector: &PanelCorrector, panels: &[String]) -> Result<Vec<String>> {
    panels.iter().map(|panel| corrector.correct(panel)).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::spelling::checker::SpellChecker;
    use crate::spelling::corrections::CorrectionTable;
    use crate::spelling::dictionary::{BuiltinDictionary, ValidWordSet};

    fn test_corrector() -> PanelCorrector {
        let names = ValidWordSet::from_words(["Snoopy", "Charlie", "Brown"]);
        let checker = SpellChecker::with_defaults(BuiltinDictionary::english(), &names);
        PanelCorrector::new(CorrectionTable::builtin().unwrap(), checker)
    }

    fn sample_table() -> PanelTable {
        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        table
            .push_record([
                "a.gif",
                r#"["CHarlie is gong to see Snooy","the dog is happy"]"#,
            ])
            .unwrap();
        table.push_record(["b.gif", r#"["chompSnoopy"]"#]).unwrap();
        table
    }

    #[test]
    fn test_correct_table_appends_corrected_column() {
        let corrector = test_corrector();
        let mut table = sample_table();

        let summary =
            correct_table(&mut table, &corrector, &BatchOptions::default(), None).unwrap();

        let corrected = table.panel_texts("text_spell_corrected").unwrap();
        assert_eq!(
            corrected[0],
            vec![
                "charlie is going to see snoopy".to_string(),
                "the dog is happy".to_string(),
            ]
        );
        assert_eq!(corrected[1], vec!["chomp snoopy".to_string()]);

        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.panel_count, 3);
        assert_eq!(summary.changed_panels, 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corrector = test_corrector();

        let mut sequential = sample_table();
        correct_table(
            &mut sequential,
            &corrector,
            &BatchOptions::default(),
            None,
        )
        .unwrap();

        let mut parallel = sample_table();
        correct_table(
            &mut parallel,
            &corrector,
            &BatchOptions {
                parallel: true,
                ..BatchOptions::default()
            },
            None,
        )
        .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_progress_reports_every_record_at_interval_one() {
        let corrector = test_corrector();
        let mut table = sample_table();
        let seen = Mutex::new(Vec::new());

        correct_table(
            &mut table,
            &corrector,
            &BatchOptions {
                progress_interval: 1,
                ..BatchOptions::default()
            },
            Some(&|progress: BatchProgress| {
                assert_eq!(progress.total, 2);
                seen.lock().unwrap().push(progress.current);
            }),
        )
        .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_progress_interval_skips_records() {
        let corrector = test_corrector();
        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        for name in ["a.gif", "b.gif", "c.gif"] {
            table.push_record([name, r#"["the dog is happy"]"#]).unwrap();
        }
        let seen = Mutex::new(Vec::new());

        correct_table(
            &mut table,
            &corrector,
            &BatchOptions {
                progress_interval: 2,
                ..BatchOptions::default()
            },
            Some(&|progress: BatchProgress| {
                seen.lock().unwrap().push(progress.current);
            }),
        )
        .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_empty_table_yields_zero_counts() {
        let corrector = test_corrector();
        let mut table = PanelTable::new(["filename", "text_by_panels"]);

        let summary =
            correct_table(&mut table, &corrector, &BatchOptions::default(), None).unwrap();

        assert_eq!(summary.record_count, 0);
        assert_eq!(summary.panel_count, 0);
        assert_eq!(summary.changed_panels, 0);
        assert!(
            table
                .columns()
                .contains(&"text_spell_corrected".to_string())
        );
    }

    #[test]
    fn test_malformed_panel_cell_aborts_the_run() {
        let corrector = test_corrector();
        let mut table = PanelTable::new(["filename", "text_by_panels"]);
        table.push_record(["a.gif", r#"["fine"]"#]).unwrap();
        table.push_record(["b.gif", "not json"]).unwrap();

        let err =
            correct_table(&mut table, &corrector, &BatchOptions::default(), None).unwrap_err();
        assert!(err.to_string().contains("record 2"));
    }
}
