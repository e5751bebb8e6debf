//! Buffered CSV file reading
//!
//! Reads plain CSV files record by record with an iterator pattern.
//! Quoted fields may span physical lines; the reader keeps pulling lines
//! until the open quote closes, so its output agrees with whole-blob
//! parsing via [`CsvParser::parse`](crate::csv::CsvParser::parse).

use crate::csv::CsvParser;
use crate::error::{GridError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// CSV file reader with builder-style configuration
///
/// # Examples
///
/// ```no_run
/// use gridfeed::CsvReader;
///
/// let mut reader = CsvReader::open("feed.csv").unwrap().has_header(true);
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
///
/// if let Some(headers) = reader.headers() {
///     println!("columns: {:?}", headers);
/// }
/// ```
pub struct CsvReader {
    reader: BufReader<File>,

    // Record assembly state
    record_buffer: String,
    record_count: u64,

    // Configuration
    delimiter: u8,
    quote_char: u8,
    has_header: bool,
    headers: Vec<String>,
}

impl CsvReader {
    /// Open a CSV file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| GridError::ReadError(format!("Failed to open CSV file: {}", e)))?;

        Ok(CsvReader {
            reader: BufReader::new(file),
            record_buffer: String::with_capacity(1024),
            record_count: 0,
            delimiter: b',',
            quote_char: b'"',
            has_header: false,
            headers: Vec::new(),
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

    /// Treat the first record as headers (builder pattern)
    ///
    /// When set, the first record is stored and accessible via
    /// [`headers`](Self::headers) and the row iterator skips it.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Get the header record if one has been read
    pub fn headers(&self) -> Option<&[String]> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }

    /// Read a single record
    ///
    /// Returns `Ok(None)` at end of file. A record spans multiple
    /// physical lines when a quoted field contains newlines.
    pub fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        self.record_buffer.clear();

        let bytes_read = self
            .reader
            .read_line(&mut self.record_buffer)
            .map_err(|e| GridError::ReadError(format!("Failed to read line: {}", e)))?;

        if bytes_read == 0 {
            return Ok(None); // EOF
        }

        let parser = CsvParser::new(self.delimiter, self.quote_char);

        // A quoted field may continue past the line terminator; keep
        // appending lines until quotes balance or the file ends.
        while parser.has_open_quote(&self.record_buffer) {
            let more = self
                .reader
                .read_line(&mut self.record_buffer)
                .map_err(|e| GridError::ReadError(format!("Failed to read line: {}", e)))?;
            if more == 0 {
                break;
            }
        }

        // Strip the record's own terminator (\n or \r\n)
        if self.record_buffer.ends_with('\n') {
            self.record_buffer.pop();
            if self.record_buffer.ends_with('\r') {
                self.record_buffer.pop();
            }
        }

        let fields = parser.parse_line(&self.record_buffer);

        if self.has_header && self.record_count == 0 {
            self.headers = fields.clone();
        }

        self.record_count += 1;
        Ok(Some(fields))
    }

    /// Iterate over data records
    ///
    /// When [`has_header`](Self::has_header) is set, the header record is
    /// consumed silently and not yielded.
    pub fn rows(&mut self) -> CsvRowIterator<'_> {
        CsvRowIterator { reader: self }
    }

    /// Number of records read so far (header included)
    pub fn record_count(&self) -> u64 {
        self.record_count
    }
}

/// Iterator over CSV data records
pub struct CsvRowIterator<'a> {
    reader: &'a mut CsvReader,
}

impl<'a> Iterator for CsvRowIterator<'a> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Some(row)) => {
                if self.reader.has_header && self.reader.record_count == 1 {
                    // That was the header; yield the next record instead
                    match self.reader.read_record() {
                        Ok(Some(next_row)) => Some(Ok(next_row)),
                        Ok(None) => None,
                        Err(e) => Some(Err(e)),
                    }
                } else {
                    Some(Ok(row))
                }
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_writer::CsvWriter;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().to_string()
    }

    #[test]
    fn test_read_plain_csv() -> Result<()> {
        let dir = TempDir::new()?;
        let path = temp_path(&dir, "plain.csv");
        {
            let mut writer = CsvWriter::new(&path)?;
            writer.write_row(["name", "price", "category"])?;
            writer.write_row(["Burger", "10.99", "mains"])?;
            writer.write_row(["Pizza", "12.99", "mains"])?;
            writer.save()?;
        }

        let mut reader = CsvReader::open(&path)?;
        let mut rows = vec![];
        for row_result in reader.rows() {
            rows.push(row_result?);
        }

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["name", "price", "category"]);
        assert_eq!(rows[1], vec!["Burger", "10.99", "mains"]);
        Ok(())
    }

    #[test]
    fn test_read_with_headers() -> Result<()> {
        let dir = TempDir::new()?;
        let path = temp_path(&dir, "headers.csv");
        {
            let mut writer = CsvWriter::new(&path)?;
            writer.write_row(["id", "name"])?;
            writer.write_row(["1", "Lobby screen"])?;
            writer.write_row(["2", "Menu board"])?;
            writer.save()?;
        }

        let mut reader = CsvReader::open(&path)?.has_header(true);
        assert_eq!(reader.headers(), None); // nothing read yet

        let mut rows = vec![];
        for row_result in reader.rows() {
            rows.push(row_result?);
        }

        assert_eq!(
            reader.headers(),
            Some(&["id".to_string(), "name".to_string()][..])
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["1", "Lobby screen"]);
        Ok(())
    }

    #[test]
    fn test_quoted_field_spans_lines() -> Result<()> {
        let dir = TempDir::new()?;
        let path = temp_path(&dir, "multiline.csv");
        std::fs::write(&path, "name,notes\nSpecial,\"line one\nline two\"\n")?;

        let mut reader = CsvReader::open(&path)?.has_header(true);
        let rows: Vec<_> = reader.rows().collect::<Result<Vec<_>>>()?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["Special", "line one\nline two"]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = CsvReader::open("definitely_not_here.csv");
        assert!(matches!(result, Err(GridError::ReadError(_))));
    }
}
