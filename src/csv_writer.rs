//! Buffered CSV file writing
//!
//! Writes records row by row through [`CsvEncoder`], so embedded
//! delimiters, quotes and newlines come out properly quoted.

use crate::csv::CsvEncoder;
use crate::error::{GridError, Result};
use crate::types::FieldValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV file writer with builder-style configuration
///
/// # Examples
///
/// ```no_run
/// use gridfeed::CsvWriter;
///
/// let mut writer = CsvWriter::new("feed.csv").unwrap();
/// writer.write_row(["name", "price"]).unwrap();
/// writer.write_row(["Burger", "10.99"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter {
    writer: BufWriter<File>,

    // State
    row_count: u64,
    buffer: Vec<u8>,

    // Configuration
    delimiter: u8,
    quote_char: u8,
    line_ending: &'static [u8],
}

impl CsvWriter {
    /// Create a new CSV writer for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| GridError::WriteError(format!("Failed to create CSV file: {}", e)))?;

        Ok(CsvWriter {
            writer: BufWriter::new(file),
            row_count: 0,
            buffer: Vec::with_capacity(4096),
            delimiter: b',',
            quote_char: b'"',
            line_ending: b"\n",
        })
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: u8) -> Self {
        self.quote_char = quote;
        self
    }

    /// Terminate rows with `\r\n` instead of `\n` (builder pattern)
    pub fn crlf(mut self, enabled: bool) -> Self {
        self.line_ending = if enabled { b"\r\n" } else { b"\n" };
        self
    }

    /// Write one row of string fields
    pub fn write_row<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buffer.clear();

        let encoder = CsvEncoder::new(self.delimiter, self.quote_char);
        encoder.encode_row(fields, &mut self.buffer);
        self.buffer.extend_from_slice(self.line_ending);

        self.writer
            .write_all(&self.buffer)
            .map_err(|e| GridError::WriteError(format!("Failed to write to file: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write one row of typed field values
    ///
    /// Values are converted with [`FieldValue::as_string`] before
    /// encoding.
    pub fn write_row_typed(&mut self, fields: &[FieldValue]) -> Result<()> {
        let strings: Vec<String> = fields.iter().map(|f| f.as_string()).collect();
        self.write_row(strings)
    }

    /// Write multiple rows at once
    pub fn write_rows<I, R, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Number of rows written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and close the file. Consumes the writer.
    pub fn save(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| GridError::WriteError(format!("Failed to flush file: {}", e)))?;
        Ok(())
    }
}
