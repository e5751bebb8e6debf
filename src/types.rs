//! Field typing for dashboard data feeds
//!
//! The dashboard describes its columns with a closed set of data types
//! and its feeds with a closed set of source types. Both live here as
//! enums with ordered name registries, alongside [`FieldValue`], the
//! tagged value a single CSV field resolves to.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::fmt;

/// Data types a dashboard column can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldDataType {
    /// Free-form text
    Text,
    /// Numeric value, integer or decimal
    Number,
    /// Monetary amount, displayed with grouping and two decimals
    Currency,
    /// Calendar date or timestamp
    Date,
    /// Yes/no flag
    Boolean,
}

impl FieldDataType {
    /// Wire name used by the dashboard configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::Text => "text",
            FieldDataType::Number => "number",
            FieldDataType::Currency => "currency",
            FieldDataType::Date => "date",
            FieldDataType::Boolean => "boolean",
        }
    }

    /// Resolve a wire name to a data type
    pub fn from_name(name: &str) -> Option<Self> {
        field_data_types().get(name).copied()
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered registry of field data types, keyed by wire name
pub fn field_data_types() -> IndexMap<&'static str, FieldDataType> {
    IndexMap::from([
        ("text", FieldDataType::Text),
        ("number", FieldDataType::Number),
        ("currency", FieldDataType::Currency),
        ("date", FieldDataType::Date),
        ("boolean", FieldDataType::Boolean),
    ])
}

/// Where a dashboard feed gets its rows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataSourceType {
    /// Rows entered by hand in the dashboard editor
    Manual,
    /// Rows imported from an uploaded CSV file
    Csv,
    /// Rows pulled from an external API
    Api,
    /// Rows queried from a connected database
    Database,
}

impl DataSourceType {
    /// Wire name used by the dashboard configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceType::Manual => "manual",
            DataSourceType::Csv => "csv",
            DataSourceType::Api => "api",
            DataSourceType::Database => "database",
        }
    }

    /// Resolve a wire name to a source type
    pub fn from_name(name: &str) -> Option<Self> {
        data_source_types().get(name).copied()
    }
}

impl fmt::Display for DataSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered registry of data source types, keyed by wire name
pub fn data_source_types() -> IndexMap<&'static str, DataSourceType> {
    IndexMap::from([
        ("manual", DataSourceType::Manual),
        ("csv", DataSourceType::Csv),
        ("api", DataSourceType::Api),
        ("database", DataSourceType::Database),
    ])
}

/// A single typed field value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Empty field
    Empty,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Decimal value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Date or timestamp value
    Date(NaiveDateTime),
}

impl FieldValue {
    /// Infer a typed value from a raw CSV field.
    ///
    /// Tried in order: empty, integer, decimal, boolean literal
    /// (`true`/`false`), ISO or `MM/DD/YYYY` date. Anything else stays
    /// text, so inference never loses data.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return FieldValue::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return FieldValue::Number(f);
        }
        match trimmed.to_lowercase().as_str() {
            "true" => return FieldValue::Bool(true),
            "false" => return FieldValue::Bool(false),
            _ => {}
        }
        if let Some(dt) = Self::parse_date(trimmed) {
            return FieldValue::Date(dt);
        }
        FieldValue::Text(raw.to_string())
    }

    fn parse_date(s: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Some(dt);
        }
        for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
            if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
                return d.and_hms_opt(0, 0, 0);
            }
        }
        None
    }

    /// Convert the value to its plain string form
    pub fn as_string(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Number(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Try to convert to integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            FieldValue::Number(f) => Some(*f as i64),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to convert to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(f) => Some(*f),
            FieldValue::Int(i) => Some(*i as f64),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Int(i) => Some(*i != 0),
            FieldValue::Text(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Try to convert to a date
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(s) => Self::parse_date(s.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Number(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
