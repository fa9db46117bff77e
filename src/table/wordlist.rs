//! Line-oriented word-list files.
//!
//! The accepted-words and character-name lists are flat text files with one
//! word per line. `#` lines carry curation notes and are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Read a word list: one word per line, trimmed, with blank lines and
/// `#` comment lines skipped. Order and casing are preserved.
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }

    Ok(words)
}

/// Write a word list, one word per line.
pub fn write_words<P: AsRef<Path>>(path: P, words: &[String]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;

    Ok(())
}
