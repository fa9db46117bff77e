//! Caret-delimited strip table reading and writing.
//!
//! One record per comic strip. The panel-text column holds a JSON array of
//! strings per cell; every other column is carried through untouched.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{Result, StripfixError};

/// Field delimiter used by strip tables.
pub const DELIMITER: u8 = b'^';

/// An in-memory strip table: a header row plus records, all cells as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelTable {
    /// Column names from the header row.
    columns: Vec<String>,
    /// Records in file order, one cell per column.
    records: Vec<Vec<String>>,
}

impl PanelTable {
    /// Create an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PanelTable {
            columns: columns.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// Read a table from a caret-delimited file with a header row.
    ///
    /// Ragged records (fewer or more fields than the header) are rejected
    /// with an error naming the offending record.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| StripfixError::table(format!("failed to open {}: {e}", path.display())))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_reader(BufReader::new(file));

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| {
                StripfixError::table(format!(
                    "{}: failed to read header row: {e}",
                    path.display()
                ))
            })?
            .iter()
            .map(|header| header.to_string())
            .collect();
        if columns.is_empty() {
            return Err(StripfixError::table(format!(
                "{}: header row is empty",
                path.display()
            )));
        }

        let mut records = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                StripfixError::table(format!("{}: record {}: {e}", path.display(), index + 1))
            })?;
            records.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(PanelTable { columns, records })
    }

    /// Write the table to a caret-delimited file with a header row.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            StripfixError::table(format!("failed to create {}: {e}", path.display()))
        })?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(BufWriter::new(file));

        writer.write_record(&self.columns)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records, one `Vec<String>` of cells per record.
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of records (excluding the header row).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All cells of one column, in record order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| StripfixError::table(format!("column '{name}' not found in table")))?;

        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                record.get(index).map(String::as_str).ok_or_else(|| {
                    StripfixError::table(format!("record {}: missing column '{name}'", row + 1))
                })
            })
            .collect()
    }

    /// Append a record. The field count must match the column count.
    pub fn push_record<I, S>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let record: Vec<String> = record.into_iter().map(Into::into).collect();
        if record.len() != self.columns.len() {
            return Err(StripfixError::table(format!(
                "record has {} fields but the table has {} columns",
                record.len(),
                self.columns.len()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// Decode the panel-text column: one JSON array of strings per record.
    pub fn panel_texts(&self, column: &str) -> Result<Vec<Vec<String>>> {
        let index = self
            .column_index(column)
            .ok_or_else(|| StripfixError::table(format!("column '{column}' not found in table")))?;

        let mut panels = Vec::with_capacity(self.records.len());
        for (row, record) in self.records.iter().enumerate() {
            let cell = record.get(index).ok_or_else(|| {
                StripfixError::table(format!("record {}: missing column '{column}'", row + 1))
            })?;
            let texts: Vec<String> = serde_json::from_str(cell).map_err(|e| {
                StripfixError::table(format!(
                    "record {}: column '{column}' is not a JSON array of strings: {e}",
                    row + 1
                ))
            })?;
            panels.push(texts);
        }

        Ok(panels)
    }

    /// Set a column's cells, appending the column if it does not exist yet.
    /// The cell count must match the record count.
    pub fn append_column(&mut self, name: &str, cells: Vec<String>) -> Result<()> {
        if cells.len() != self.records.len() {
            return Err(StripfixError::table(format!(
                "column '{name}' has {} cells for {} records",
                cells.len(),
                self.records.len()
            )));
        }

        if let Some(index) = self.column_index(name) {
            for (record, cell) in self.records.iter_mut().zip(cells) {
                record[index] = cell;
            }
        } else {
            self.columns.push(name.to_string());
            for (record, cell) in self.records.iter_mut().zip(cells) {
                record.push(cell);
            }
        }

        Ok(())
    }
}
