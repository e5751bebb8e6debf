//! CSV encoding with RFC 4180-like behavior

use super::ParseResult;

/// CSV encoder for writing properly quoted CSV data
pub struct CsvEncoder {
    delimiter: u8,
    quote_char: u8,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}

impl CsvEncoder {
    /// Create a new encoder with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Encode one record into the buffer (no line terminator)
    pub fn encode_row<I, S>(&self, fields: I, buffer: &mut Vec<u8>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    /// Encode a whole parsed document back to text, `\n`-terminated rows.
    /// Headers are written first when present.
    pub fn encode_document(&self, result: &ParseResult) -> String {
        let mut buffer = Vec::new();
        if !result.headers.is_empty() {
            self.encode_row(&result.headers, &mut buffer);
            buffer.push(b'\n');
        }
        for row in &result.rows {
            self.encode_row(row, &mut buffer);
            buffer.push(b'\n');
        }
        // Field content is preserved verbatim, so the buffer stays UTF-8
        String::from_utf8(buffer).unwrap_or_default()
    }

    /// Encode a single field with quoting/escaping as needed
    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if !self.needs_quoting(field) {
            buffer.extend_from_slice(field.as_bytes());
            return;
        }

        buffer.push(self.quote_char);
        for byte in field.bytes() {
            if byte == self.quote_char {
                // Escape by doubling: " -> ""
                buffer.push(self.quote_char);
            }
            buffer.push(byte);
        }
        buffer.push(self.quote_char);
    }

    /// A field needs quoting when it contains the delimiter, the quote
    /// character, or a line break
    fn needs_quoting(&self, field: &str) -> bool {
        field
            .bytes()
            .any(|b| b == self.delimiter || b == self.quote_char || b == b'\n' || b == b'\r')
    }
}
