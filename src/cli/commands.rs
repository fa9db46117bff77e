//! Command implementations for the stripfix CLI.

use std::path::Path;
use std::time::Instant;

use crate::batch::{self, BatchOptions, BatchProgress};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, StripfixError};
use crate::report::{MisspellingAuditor, ReportOptions, distinct_words};
use crate::spelling::checker::{CheckerConfig, SpellChecker};
use crate::spelling::corrections::CorrectionTable;
use crate::spelling::corrector::PanelCorrector;
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary, ValidWordSet};
use crate::table::strip_table::PanelTable;
use crate::table::wordlist;

/// Execute a CLI command.
pub fn execute_command(args: StripfixArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => run_correct(correct_args.clone(), &args),
        Command::Audit(audit_args) => run_audit(audit_args.clone(), &args),
    }
}

/// Spell-correct the panel-text column of a strip table.
fn run_correct(args: CorrectArgs, cli_args: &StripfixArgs) -> Result<()> {
    let start = Instant::now();

    if cli_args.verbosity() > 1 {
        println!("Correcting table: {}", args.table.display());
    }

    let corrector = build_corrector(&args, cli_args)?;
    let mut table = PanelTable::read(&args.table)?;

    let options = BatchOptions {
        text_column: args.text_column.clone(),
        corrected_column: args.corrected_column.clone(),
        progress_interval: args.progress_interval,
        parallel: args.parallel,
    };

    let show_progress = cli_args.verbosity() > 0;
    let progress = move |progress: BatchProgress| {
        if show_progress {
            let percent = 100.0 * (progress.current - 1) as f64 / progress.total as f64;
            println!(
                "Processing record {} of {} ({percent:.0}%)",
                progress.current, progress.total
            );
        }
    };

    let summary = batch::correct_table(&mut table, &corrector, &options, Some(&progress))?;
    table.write(&args.output)?;

    output_result(
        "Correction complete",
        &CorrectionRunResult {
            input: args.table.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            records: summary.record_count,
            panels: summary.panel_count,
            changed_panels: summary.changed_panels,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Compile the misspellings review table.
fn run_audit(args: AuditArgs, cli_args: &StripfixArgs) -> Result<()> {
    let start = Instant::now();

    if cli_args.verbosity() > 1 {
        println!("Auditing table: {}", args.table.display());
    }

    let base = load_dictionary(args.dictionary.as_deref(), cli_args)?;
    // Base dictionary only: the report exists to curate the accepted-words
    // list, so that list must not hide anything from it
    let checker = SpellChecker::with_defaults(base, &ValidWordSet::default());
    let auditor = MisspellingAuditor::new(checker);

    let table = PanelTable::read(&args.table)?;
    let options = ReportOptions {
        text_column: args.text_column.clone(),
        force: args.force,
        word_list_path: args.word_list.clone(),
    };

    let outcome = auditor.compile(&table, &args.output, &options)?;
    let message = if outcome.cached {
        "Loaded cached report"
    } else {
        "Audit complete"
    };

    output_result(
        message,
        &AuditRunResult {
            report: args.output.to_string_lossy().to_string(),
            cached: outcome.cached,
            records_scanned: outcome.records_scanned,
            panels_scanned: outcome.panels_scanned,
            flagged_words: outcome.records.len(),
            distinct_words: distinct_words(&outcome.records).len(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Build the corrector from the command's dictionary and word-list options.
///
/// Missing or unreadable word-list files abort the run; there is no partial
/// setup.
fn build_corrector(args: &CorrectArgs, cli_args: &StripfixArgs) -> Result<PanelCorrector> {
    let base = load_dictionary(args.dictionary.as_deref(), cli_args)?;

    let accepted = wordlist::read_words(&args.accepted_words).map_err(|e| {
        StripfixError::dictionary(format!(
            "failed to read accepted words {}: {e}",
            args.accepted_words.display()
        ))
    })?;
    let names = wordlist::read_words(&args.character_names).map_err(|e| {
        StripfixError::dictionary(format!(
            "failed to read character names {}: {e}",
            args.character_names.display()
        ))
    })?;

    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} accepted words and {} character names",
            accepted.len(),
            names.len()
        );
    }

    let valid_words = ValidWordSet::from_words(accepted.into_iter().chain(names));
    let config = CheckerConfig {
        max_distance: args.max_distance,
        ..CheckerConfig::default()
    };
    let checker = SpellChecker::new(base, &valid_words, config);
    let table = CorrectionTable::builtin()?;

    Ok(PanelCorrector::new(table, checker))
}

/// Load the dictionary file, or fall back to the built-in lexicon.
fn load_dictionary(path: Option<&Path>, cli_args: &StripfixArgs) -> Result<SpellingDictionary> {
    match path {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading dictionary: {}", path.display());
            }
            SpellingDictionary::load(path)
        }
        None => Ok(BuiltinDictionary::english()),
    }
}
