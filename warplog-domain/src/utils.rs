use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::DomainError;

const SOURCE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp as emitted by the source. Offsets, when present, are
/// dropped: every time in the system is the source's local wall clock.
pub fn parse_source_time(value: &str) -> Result<NaiveDateTime, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::malformed("time", "empty timestamp"));
    }
    for format in SOURCE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local());
    }
    Err(DomainError::malformed(
        "time",
        format!("unrecognized timestamp '{}'", trimmed),
    ))
}

/// Banner bounds may be written as bare dates. A bare start date opens at
/// midnight and a bare end date closes at the last second of the day.
pub fn parse_window_bound(value: &str, closing: bool) -> Result<NaiveDateTime, DomainError> {
    if let Ok(date) = parse_date(value) {
        let time = if closing {
            NaiveTime::from_hms_opt(23, 59, 59)
        } else {
            NaiveTime::from_hms_opt(0, 0, 0)
        };
        if let Some(time) = time {
            return Ok(date.and_time(time));
        }
    }
    parse_source_time(value)
}

pub fn parse_date(date: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|err| DomainError::malformed("date", err.to_string()))
}

/// Accepts a JSON string or number and yields its textual form. Numbers keep
/// their exact digits.
pub fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
