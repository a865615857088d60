use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire format for flight dates: millisecond precision, no offset.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// A scheduled flight between two free-text locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Assigned by the store on insert; `None` until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
}

impl Flight {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: None,
            origin: origin.into(),
            destination: destination.into(),
            date,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn matches_origin(&self, origin: &str) -> bool {
        self.origin == origin
    }

    pub fn matches_destination(&self, destination: &str) -> bool {
        self.destination == destination
    }
}

mod date_format {
    use super::DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
