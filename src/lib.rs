//! # gridfeed
//!
//! CSV parsing, encoding and display formatting for dashboard data feeds.
//!
//! The core is an RFC 4180-style tokenizer that turns a raw text blob into
//! a header row plus data rows, with quoted fields, escaped quotes (`""`),
//! embedded delimiters/newlines and CRLF line endings handled in a single
//! pass. Around it sit a matching encoder, buffered file reader/writer, and
//! the field-typing and status-display helpers dashboard feeds need.
//!
//! # Quick Start
//!
//! ```
//! use gridfeed::parse_csv;
//!
//! let result = parse_csv("name,price\nBurger,10.99\nPizza,12.99");
//! assert_eq!(result.headers, vec!["name", "price"]);
//! assert_eq!(result.rows.len(), 2);
//! assert_eq!(result.get(0, "name"), Some("Burger"));
//! ```
//!
//! # Reading from a file
//!
//! ```no_run
//! use gridfeed::CsvReader;
//!
//! let mut reader = CsvReader::open("menu.csv").unwrap().has_header(true);
//! for row in reader.rows() {
//!     println!("{:?}", row.unwrap());
//! }
//! ```

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod format;
pub mod types;

pub use csv::{parse_csv, CsvEncoder, CsvParser, ParseResult};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{GridError, Result};
pub use format::{format_age, format_value, status_display, DeviceStatus, StatusDisplay};
pub use types::{DataSourceType, FieldDataType, FieldValue};
