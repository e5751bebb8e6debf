//! CSV tokenizing with RFC 4180-like behavior
//!
//! The tokenizer is a two-state machine (unquoted/quoted) with one
//! character of lookahead. Inside quotes the delimiter and newlines are
//! literal content and `""` stands for one literal quote. Malformed
//! quoting never fails: an unterminated quote consumes the remainder of
//! the input as field content.

/// A parsed CSV document: optional header names plus data rows.
///
/// Pure value, built once per parse. Row field counts are not validated
/// or padded against the header count; each row carries exactly the
/// fields found on its record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// Column names from the first record, empty when headers were
    /// disabled or the input was empty
    pub headers: Vec<String>,
    /// Data records, in input order
    pub rows: Vec<Vec<String>>,
}

impl ParseResult {
    /// Check whether the parse produced nothing at all
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Find the column index for a header name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Look up a field by row index and header name
    ///
    /// Returns `None` when the header is unknown or the row is short.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let col = self.column(name)?;
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }
}

/// CSV tokenizer with configurable delimiter and quote character
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
    has_headers: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}

impl CsvParser {
    /// Create a new parser with custom delimiter and quote character.
    /// The first record is treated as headers unless `has_headers(false)`.
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
            has_headers: true,
        }
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

    /// Treat the first record as column names (builder pattern)
    pub fn has_headers(mut self, has: bool) -> Self {
        self.has_headers = has;
        self
    }

    /// Parse a whole CSV blob into headers and rows.
    ///
    /// Recognizes both `\n` and `\r\n` as record terminators; a trailing
    /// terminator does not produce an extra empty row. Empty input yields
    /// an empty result. Never fails.
    pub fn parse(&self, input: &str) -> ParseResult {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        let mut records: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        // Tracks a bare opening quote so `"` at end of input still
        // flushes an (empty) field.
        let mut field_opened = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == quote {
                    if chars.peek() == Some(&quote) {
                        // Escaped quote ("") -> one literal quote
                        field.push(quote);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    // Delimiter and newlines are literal inside quotes
                    field.push(ch);
                }
            } else if ch == quote {
                in_quotes = true;
                field_opened = true;
            } else if ch == delimiter {
                row.push(std::mem::take(&mut field));
            } else if ch == '\n' || (ch == '\r' && chars.peek() == Some(&'\n')) {
                if ch == '\r' {
                    chars.next(); // consume the \n of \r\n
                }
                row.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut row));
                field_opened = false;
            } else {
                field.push(ch);
            }
        }

        // Flush the final record unless the input ended at a terminator
        if !field.is_empty() || !row.is_empty() || field_opened {
            row.push(field);
            records.push(row);
        }

        let mut result = ParseResult {
            headers: Vec::new(),
            rows: records,
        };
        if self.has_headers && !result.rows.is_empty() {
            result.headers = result.rows.remove(0);
        }
        result
    }

    /// Tokenize a single record (no terminator handling)
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes {
                    if chars.peek() == Some(&quote) {
                        field.push(quote);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            } else if ch == delimiter && !in_quotes {
                fields.push(std::mem::take(&mut field));
            } else {
                field.push(ch);
            }
        }

        fields.push(field);
        fields
    }

    /// True when `text` ends inside an unterminated quoted field.
    ///
    /// Used by the file reader to keep pulling physical lines until a
    /// quoted field closes.
    pub fn has_open_quote(&self, text: &str) -> bool {
        let quote = self.quote_char as char;
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes && chars.peek() == Some(&quote) {
                    chars.next(); // escaped pair stays inside
                } else {
                    in_quotes = !in_quotes;
                }
            }
        }
        in_quotes
    }
}

/// Parse a CSV blob with the defaults: comma delimiter, `"` quotes,
/// first record as headers.
///
/// ```
/// use gridfeed::parse_csv;
///
/// let result = parse_csv("name,price\nBurger,10.99");
/// assert_eq!(result.headers, vec!["name", "price"]);
/// assert_eq!(result.rows, vec![vec!["Burger", "10.99"]]);
/// ```
pub fn parse_csv(input: &str) -> ParseResult {
    CsvParser::default().parse(input)
}
