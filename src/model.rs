//! The `Book` record and its JSON wire format.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A bibliographic record. Field names on the wire are fixed by existing clients.
///
/// Missing fields decode to their zero value, so an absent row is represented by
/// `Book::default()` (ID 0, empty strings, no publish date).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "Publish_Date", with = "publish_date")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(rename = "Rating", serialize_with = "serialize_rating")]
    pub rating: f64,
    /// Opaque flag, stored and returned as-is.
    #[serde(rename = "Status")]
    pub status: bool,
}

impl Book {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Whole ratings go out as integers (`3`), fractional ones as decimals (`2.8`).
fn serialize_rating<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if rating.fract() == 0.0 && rating.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(*rating as i64)
    } else {
        serializer.serialize_f64(*rating)
    }
}

/// `""` or `null` means no date; otherwise RFC 3339, a naive timestamp (`T` or space separated, UTC), or `YYYY-MM-DD`.
pub mod publish_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse(s).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("Publish_Date: unrecognised date '{}'", s))
            }),
        }
    }

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
