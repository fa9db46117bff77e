//! Command line argument parsing for the stripfix CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// stripfix - spell correction for comic strip transcription tables
#[derive(Parser, Debug, Clone)]
#[command(name = "stripfix")]
#[command(about = "Spell-corrects transcribed comic strip panel text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StripfixArgs {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StripfixArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2+=verbose)
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose + 1 }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell-correct the panel-text column of a strip table
    Correct(CorrectArgs),

    /// Compile the misspellings review table for curation
    Audit(AuditArgs),
}

/// Arguments for correcting a strip table
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Input table path (caret-delimited CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Output table path
    #[arg(short, long, default_value = "table_corrected.csv")]
    pub output: PathBuf,

    /// Name of the panel-text column
    #[arg(long, default_value = "text_by_panels")]
    pub text_column: String,

    /// Name of the appended corrected column
    #[arg(long, default_value = "text_spell_corrected")]
    pub corrected_column: String,

    /// Dictionary file, frequency or word-list format (built-in lexicon if omitted)
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Accepted-words list
    #[arg(long, value_name = "PATH", default_value = "valid_spell_list.txt")]
    pub accepted_words: PathBuf,

    /// Character-name list
    #[arg(long, value_name = "PATH", default_value = "character_names.txt")]
    pub character_names: PathBuf,

    /// Maximum suggestion edit distance
    #[arg(long, default_value = "2")]
    pub max_distance: usize,

    /// Records between progress messages
    #[arg(long, default_value = "100")]
    pub progress_interval: usize,

    /// Correct records in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for compiling the misspellings report
#[derive(Parser, Debug, Clone)]
pub struct AuditArgs {
    /// Input table path (caret-delimited CSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Report path
    #[arg(short, long, default_value = "compiled_misspellings.csv")]
    pub output: PathBuf,

    /// Name of the panel-text column
    #[arg(long, default_value = "text_by_panels")]
    pub text_column: String,

    /// Dictionary file, frequency or word-list format (built-in lexicon if omitted)
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Also write the distinct flagged words, one per line
    #[arg(long, value_name = "PATH")]
    pub word_list: Option<PathBuf>,

    /// Recompute even if the report file exists
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_correct_command_defaults() {
        let args = StripfixArgs::try_parse_from(["stripfix", "correct", "table.csv"]).unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.table, PathBuf::from("table.csv"));
            assert_eq!(correct_args.output, PathBuf::from("table_corrected.csv"));
            assert_eq!(correct_args.text_column, "text_by_panels");
            assert_eq!(correct_args.corrected_column, "text_spell_corrected");
            assert_eq!(correct_args.dictionary, None);
            assert_eq!(
                correct_args.accepted_words,
                PathBuf::from("valid_spell_list.txt")
            );
            assert_eq!(
                correct_args.character_names,
                PathBuf::from("character_names.txt")
            );
            assert_eq!(correct_args.max_distance, 2);
            assert_eq!(correct_args.progress_interval, 100);
            assert!(!correct_args.parallel);
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_correct_command_flags() {
        let args = StripfixArgs::try_parse_from([
            "stripfix",
            "correct",
            "strips.csv",
            "-o",
            "out.csv",
            "--text-column",
            "panels",
            "--max-distance",
            "1",
            "--progress-interval",
            "10",
            "--parallel",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.output, PathBuf::from("out.csv"));
            assert_eq!(correct_args.text_column, "panels");
            assert_eq!(correct_args.max_distance, 1);
            assert_eq!(correct_args.progress_interval, 10);
            assert!(correct_args.parallel);
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_audit_command() {
        let args = StripfixArgs::try_parse_from([
            "stripfix",
            "audit",
            "strips.csv",
            "--word-list",
            "misspell_list.txt",
            "--force",
        ])
        .unwrap();

        if let Command::Audit(audit_args) = args.command {
            assert_eq!(audit_args.table, PathBuf::from("strips.csv"));
            assert_eq!(
                audit_args.output,
                PathBuf::from("compiled_misspellings.csv")
            );
            assert_eq!(
                audit_args.word_list,
                Some(PathBuf::from("misspell_list.txt"))
            );
            assert!(audit_args.force);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = StripfixArgs::try_parse_from(["stripfix", "correct", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = StripfixArgs::try_parse_from(["stripfix", "-v", "correct", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Multiple verbose flags
        let args = StripfixArgs::try_parse_from(["stripfix", "-vvv", "correct", "t.csv"]).unwrap();
        assert_eq!(args.verbosity(), 4);

        // Quiet overrides verbose
        let args =
            StripfixArgs::try_parse_from(["stripfix", "--quiet", "-v", "correct", "t.csv"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            StripfixArgs::try_parse_from(["stripfix", "--format", "json", "correct", "t.csv"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
