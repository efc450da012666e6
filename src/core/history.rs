//! Execution history tracking.
//!
//! Every successful operation is appended to the history as an immutable
//! [`HistoryEntry`]. The log is append-only; the only removal is a full clear.

use super::number::Number;
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Format used when rendering history timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record of a single executed operation.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{HistoryEntry, Number};
///
/// let entry = HistoryEntry::now("add", vec![Number::Int(1), Number::Int(2)], Number::Int(3));
///
/// assert_eq!(entry.operation(), "add");
/// assert_eq!(entry.result(), Number::Int(3));
/// assert_eq!(entry.timestamp().len(), "2016-05-20 12:00:00".len());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(with = "timestamp_format")]
    executed_at: NaiveDateTime,
    operation: String,
    params: Vec<Number>,
    result: Number,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time, to the second.
    pub fn now(operation: impl Into<String>, params: Vec<Number>, result: Number) -> Self {
        Self::at(
            Local::now().naive_local().trunc_subsecs(0),
            operation,
            params,
            result,
        )
    }

    /// Create an entry with an explicit execution time.
    pub fn at(
        executed_at: NaiveDateTime,
        operation: impl Into<String>,
        params: Vec<Number>,
        result: Number,
    ) -> Self {
        Self {
            executed_at,
            operation: operation.into(),
            params,
            result,
        }
    }

    /// Execution time as `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        self.executed_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn executed_at(&self) -> NaiveDateTime {
        self.executed_at
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Params as validated at the call boundary.
    ///
    /// JSON integers beyond the `i64` range were accepted as floats, so they
    /// are stored here rounded to the nearest `f64`.
    pub fn params(&self) -> &[Number] {
        &self.params
    }

    pub fn result(&self) -> Number {
        self.result
    }
}

/// Ordered, append-only log of executed operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the log.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Stored result of the most recent entry.
    pub fn last_result(&self) -> Option<Number> {
        self.last().map(HistoryEntry::result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Time between the first and last entry.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.executed_at.signed_duration_since(first.executed_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
