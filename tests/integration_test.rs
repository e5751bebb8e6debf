//! Integration tests for gridfeed

use gridfeed::types::{FieldDataType, FieldValue};
use gridfeed::{format_value, parse_csv, CsvParser, CsvReader, CsvWriter, ParseResult};
use tempfile::NamedTempFile;

#[test]
fn test_empty_input_is_not_an_error() {
    let result = parse_csv("");
    assert_eq!(result, ParseResult::default());
    assert!(result.headers.is_empty());
    assert!(result.rows.is_empty());
}

#[test]
fn test_basic_header_split() {
    let result = parse_csv("name,price\nBurger,10.99\nPizza,12.99");
    assert_eq!(result.headers, vec!["name", "price"]);
    assert_eq!(
        result.rows,
        vec![vec!["Burger", "10.99"], vec!["Pizza", "12.99"]]
    );
}

#[test]
fn test_delimiter_inside_quotes_is_literal() {
    let result = parse_csv("name,description\n\"Burger, Deluxe\",Great food");
    assert_eq!(result.rows, vec![vec!["Burger, Deluxe", "Great food"]]);
}

#[test]
fn test_escaped_quote_rule() {
    let result = parse_csv("name,quote\nItem,\"He said \"\"hello\"\"\"");
    assert_eq!(result.rows, vec![vec!["Item", "He said \"hello\""]]);
}

#[test]
fn test_crlf_matches_lf() {
    let crlf = parse_csv("name,price\r\nBurger,10.99\r\nPizza,12.99");
    let lf = parse_csv("name,price\nBurger,10.99\nPizza,12.99");
    assert_eq!(crlf, lf);
    assert_eq!(crlf.rows.len(), 2);
}

#[test]
fn test_without_headers() {
    let result = CsvParser::default()
        .has_headers(false)
        .parse("Burger,10.99\nPizza,12.99");
    assert!(result.headers.is_empty());
    assert_eq!(result.rows.len(), 2);
}

#[test]
fn test_semicolon_delimiter() {
    let result = CsvParser::default()
        .delimiter(b';')
        .parse("name;price\nBurger;10.99");
    assert_eq!(result.headers, vec!["name", "price"]);
    assert_eq!(result.rows, vec![vec!["Burger", "10.99"]]);
}

#[test]
fn test_row_count_matches_physical_lines() {
    // rows == physical lines minus the header, trailing terminator ignored
    let input = "h1,h2\na,b\nc,d\ne,f\n";
    assert_eq!(parse_csv(input).rows.len(), 3);
    assert_eq!(
        CsvParser::default().has_headers(false).parse(input).rows.len(),
        4
    );
}

#[test]
fn test_unterminated_quote_recovery() {
    // Rest of the input continues the open field
    let result = parse_csv("name,notes\nItem,\"oops\nstill going,more");
    assert_eq!(result.rows, vec![vec!["Item", "oops\nstill going,more"]]);
}

#[test]
fn test_file_roundtrip_preserves_awkward_fields() {
    let temp = NamedTempFile::new().unwrap();
    let path = temp.path().to_string_lossy().to_string();

    let awkward = vec![
        vec!["plain", "a,b", "He said \"hi\""],
        vec!["Line1\nLine2", "", "trailing space "],
    ];

    {
        let mut writer = CsvWriter::new(&path).unwrap();
        writer.write_row(["c1", "c2", "c3"]).unwrap();
        for row in &awkward {
            writer.write_row(row).unwrap();
        }
        writer.save().unwrap();
    }

    let mut reader = CsvReader::open(&path).unwrap().has_header(true);
    let rows: Vec<_> = reader.rows().collect::<Result<Vec<_>, _>>().unwrap();

    assert_eq!(
        reader.headers(),
        Some(&["c1".to_string(), "c2".to_string(), "c3".to_string()][..])
    );
    assert_eq!(rows, awkward);
}

#[test]
fn test_file_reader_agrees_with_blob_parse() {
    let temp = NamedTempFile::new().unwrap();
    let path = temp.path().to_string_lossy().to_string();
    let blob = "name,notes\nSpecial,\"line one\nline two\"\nPlain,ok\n";
    std::fs::write(&path, blob).unwrap();

    let parsed = parse_csv(blob);

    let mut reader = CsvReader::open(&path).unwrap().has_header(true);
    let rows: Vec<_> = reader.rows().collect::<Result<Vec<_>, _>>().unwrap();

    assert_eq!(rows, parsed.rows);
    assert_eq!(reader.headers().unwrap(), parsed.headers.as_slice());
}

#[test]
fn test_parse_then_format_pipeline() {
    let result = parse_csv("item,price,available\nBurger,10.99,true\nCombo,1250,false");

    let price_col = result.column("price").unwrap();
    let avail_col = result.column("available").unwrap();

    let formatted: Vec<(String, String)> = result
        .rows
        .iter()
        .map(|row| {
            let price = FieldValue::infer(&row[price_col]);
            let avail = FieldValue::infer(&row[avail_col]);
            (
                format_value(&price, FieldDataType::Currency),
                format_value(&avail, FieldDataType::Boolean),
            )
        })
        .collect();

    assert_eq!(
        formatted,
        vec![
            ("$10.99".to_string(), "Yes".to_string()),
            ("$1,250.00".to_string(), "No".to_string()),
        ]
    );
}
