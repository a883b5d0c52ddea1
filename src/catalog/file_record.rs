use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid release date \"{0}\", expected an ISO 8601 date or date-time")]
pub struct InvalidReleaseDate(pub String);

/// Release date of a file as written in the data file.
///
/// Keeps the original text so it can be served back untouched, while
/// comparisons use the parsed instant. Date-only and naive date-time values
/// are read as UTC.
#[derive(Clone, Debug)]
pub struct ReleaseDate {
    raw: String,
    instant: DateTime<Utc>,
}

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Minute-precision timestamps with an offset, such as `2024-06-01T10:00+09:00`.
/// A trailing `Z` is rewritten to `+00:00` before matching.
const OFFSET_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M%#z";

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }

    let zulu_normalized = match raw.strip_suffix(['Z', 'z']) {
        Some(prefix) => format!("{}+00:00", prefix),
        None => raw.to_owned(),
    };
    if let Ok(date_time) = DateTime::parse_from_str(&zulu_normalized, OFFSET_DATE_TIME_FORMAT) {
        return Some(date_time.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

impl ReleaseDate {
    pub fn parse<T: AsRef<str>>(value: T) -> Result<ReleaseDate, InvalidReleaseDate> {
        let raw = value.as_ref().trim();
        match parse_instant(raw) {
            Some(instant) => Ok(ReleaseDate {
                raw: raw.to_owned(),
                instant,
            }),
            None => Err(InvalidReleaseDate(raw.to_owned())),
        }
    }

    /// Long-form date as shown on file cards, e.g. `2024年6月1日`. Uses the UTC calendar day.
    pub fn formatted(&self) -> String {
        self.instant.format("%Y年%-m月%-d日").to_string()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl PartialEq for ReleaseDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for ReleaseDate {}

impl PartialOrd for ReleaseDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleaseDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ReleaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ReleaseDate::parse(raw).map_err(de::Error::custom)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub title: String,
    pub version: String,
    pub release_date: ReleaseDate,

    /// Size in bytes.
    pub size: u64,
    pub category: String,
    pub description: String,
    pub download_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_file_ids: Option<Vec<String>>,
}

impl FileRecord {
    /// Explicitly linked ids, with a missing list read as empty.
    pub fn related_ids(&self) -> &[String] {
        self.related_file_ids.as_deref().unwrap_or(&[])
    }

    /// Size as shown on file cards: bytes, then KB and MB with two decimals.
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }

    pub fn formatted_release_date(&self) -> String {
        self.release_date.formatted()
    }
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}
