//! Wire formats for dates and times-of-day.
//!
//! The API serves times as `HH:MM`; `HH:MM:SS` is accepted on input.

use chrono::NaiveTime;

pub(crate) const TIME_FORMAT: &str = "%H:%M";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `HH:MM` or `HH:MM:SS`.
pub(crate) fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `#[serde(with = "hhmm")]` for `NaiveTime` fields.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(|e| de::Error::custom(format!("invalid time '{raw}': {e}")))
    }
}

/// `#[serde(with = "ymd")]` for `NaiveDate` fields.
pub(crate) mod ymd {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, super::DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds_forms() {
        let hm = parse_time("09:45").unwrap();
        let hms = parse_time("09:45:00").unwrap();
        assert_eq!(hm, hms);
        assert_eq!(format_time(hms), "09:45");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_time("9h45").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
