//! Display formatting for dashboard fields and device status
//!
//! Pure helpers: a typed field value plus its declared column type map
//! to one display string, and a device heartbeat maps to a status with
//! a fixed color/label pair. No locale dependence; output is stable for
//! a given input.

use crate::types::{FieldDataType, FieldValue};
use chrono::{DateTime, Duration, Utc};

/// Heartbeat window within which a device counts as online
pub const ONLINE_WINDOW_SECS: i64 = 120;
/// Heartbeat window within which a late device only warns
pub const WARNING_WINDOW_SECS: i64 = 600;

/// Format a field value for display under its declared column type.
///
/// A value that does not fit the declared type falls back to its plain
/// string form rather than erroring.
///
/// ```
/// use gridfeed::{format_value, FieldDataType, FieldValue};
///
/// let price = FieldValue::Number(1234.5);
/// assert_eq!(format_value(&price, FieldDataType::Currency), "$1,234.50");
/// assert_eq!(format_value(&FieldValue::Bool(true), FieldDataType::Boolean), "Yes");
/// ```
pub fn format_value(value: &FieldValue, data_type: FieldDataType) -> String {
    if value.is_empty() {
        return String::new();
    }
    match data_type {
        FieldDataType::Text => value.as_string(),
        FieldDataType::Number => match value {
            FieldValue::Int(i) => {
                let mut buf = itoa::Buffer::new();
                buf.format(*i).to_string()
            }
            FieldValue::Number(f) => f.to_string(),
            other => other
                .as_f64()
                .map(|f| f.to_string())
                .unwrap_or_else(|| other.as_string()),
        },
        FieldDataType::Currency => value
            .as_f64()
            .map(format_currency)
            .unwrap_or_else(|| value.as_string()),
        FieldDataType::Date => value
            .as_date()
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| value.as_string()),
        FieldDataType::Boolean => value
            .as_bool()
            .map(|b| if b { "Yes" } else { "No" }.to_string())
            .unwrap_or_else(|| value.as_string()),
    }
}

/// Format a monetary amount: thousands grouping, two decimals
fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Insert `,` separators every three digits (non-negative input)
fn group_thousands(n: i64) -> String {
    let mut buf = itoa::Buffer::new();
    let digits = buf.format(n);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Playback device status derived from its heartbeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceStatus {
    /// Heartbeat within the online window
    Online,
    /// Heartbeat late but within the warning window
    Warning,
    /// Heartbeat past the warning window
    Offline,
    /// No heartbeat recorded
    Unknown,
}

impl DeviceStatus {
    /// Classify a heartbeat timestamp against `now`
    pub fn from_heartbeat(last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let Some(seen) = last_seen else {
            return DeviceStatus::Unknown;
        };
        let age = (now - seen).num_seconds().max(0);
        if age <= ONLINE_WINDOW_SECS {
            DeviceStatus::Online
        } else if age <= WARNING_WINDOW_SECS {
            DeviceStatus::Warning
        } else {
            DeviceStatus::Offline
        }
    }
}

/// Display color and label for a device status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Hex color for badges/indicators
    pub color: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Lookup table from status to display tuple.
///
/// `Unknown` doubles as the fallback entry for statuses that cannot be
/// classified.
pub fn status_display(status: DeviceStatus) -> StatusDisplay {
    match status {
        DeviceStatus::Online => StatusDisplay {
            color: "#22c55e",
            label: "Online",
        },
        DeviceStatus::Warning => StatusDisplay {
            color: "#f59e0b",
            label: "Warning",
        },
        DeviceStatus::Offline => StatusDisplay {
            color: "#ef4444",
            label: "Offline",
        },
        DeviceStatus::Unknown => StatusDisplay {
            color: "#9ca3af",
            label: "Unknown",
        },
    }
}

/// Format the age of a heartbeat as a short relative string:
/// "just now", "Nm ago", "Nh ago", "Nd ago".
pub fn format_age(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = (now - last_seen).max(Duration::zero());
    let secs = age.num_seconds();
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}
