//! CSV tokenizing and encoding with RFC 4180-like behavior

mod encoder;
mod parser;

pub use encoder::CsvEncoder;
pub use parser::{parse_csv, CsvParser, ParseResult};
