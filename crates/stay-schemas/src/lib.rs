//! stay-schemas
//!
//! Wire and data types shared by the engine, the trip store and the CLI.
//!
//! Field names on the wire follow the JSON blobs kept in the remote cache
//! (`startDate`, `isSchengen`, ...). Dates inside a [`StayRecord`] stay as
//! the raw strings the store handed us; parsing is lenient and happens at the
//! point of use so a single bad record never poisons a whole list.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One contiguous period spent in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    /// Denormalized from the location registry when the record was created
    /// or last had its location edited.
    #[serde(
        rename = "isSchengen",
        alias = "isSchengenArea",
        default,
        deserialize_with = "null_as_default"
    )]
    pub is_schengen: bool,
    /// Inclusive, `YYYY-MM-DD`. `null` decodes as empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    /// Inclusive, `YYYY-MM-DD`. `null` decodes as empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub color: String,
}

impl StayRecord {
    pub fn new(
        id: i64,
        location: impl Into<String>,
        is_schengen: bool,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            location: location.into(),
            is_schengen,
            start_date: start_date.into(),
            end_date: end_date.into(),
            color: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Parsed start date, `None` when the stored string is not a date.
    pub fn start(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    /// Parsed end date, `None` when the stored string is not a date.
    pub fn end(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }
}

/// `null` becomes empty; numbers and bools keep their JSON text. The
/// engine then treats the field as unparseable instead of the whole list
/// failing to decode.
fn lenient_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Parse a calendar date leniently.
///
/// Accepts `YYYY-MM-DD` and ISO timestamps whose date part is `YYYY-MM-DD`
/// (anything after a `T` is ignored). Returns `None` for anything else.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let t = raw.trim();
    let date_part = t.split('T').next().unwrap_or(t);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Location registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    #[serde(
        rename = "isSchengen",
        alias = "isSchengenArea",
        default,
        deserialize_with = "null_as_default"
    )]
    pub is_schengen: bool,
    #[serde(default)]
    pub color: String,
}

impl Location {
    pub fn new(name: impl Into<String>, is_schengen: bool, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_schengen,
            color: color.into(),
        }
    }
}

/// One Schengen day and the rolling-window count ending on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchengenDay {
    pub date: NaiveDate,
    pub days_in_window: u32,
    pub is_over_limit: bool,
    pub location: String,
}

/// Output of the all-locations Schengen calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchengenReport {
    /// Number of samples produced; overlapping stays count once per stay.
    pub total_days: usize,
    #[serde(rename = "validDays")]
    pub samples: Vec<SchengenDay>,
}

impl SchengenReport {
    pub fn has_over_limit(&self) -> bool {
        self.samples.iter().any(|d| d.is_over_limit)
    }
}

/// Per-location rolling-window summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityLimit {
    pub total_days: usize,
    pub max_in_any_window: u32,
    pub has_over_limit: bool,
}

impl CityLimit {
    /// Days that would have to be cut from the worst window to get back to
    /// `limit_days`.
    pub fn excess_days(&self, limit_days: u32) -> u32 {
        self.max_in_any_window.saturating_sub(limit_days)
    }
}

/// Residency totals for one tax year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UkTaxYearStats {
    pub days_in_uk: u32,
    pub meets_requirement: bool,
    pub days_needed: u32,
}
