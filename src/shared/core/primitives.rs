// Time primitives shared by the core and the adapters.
//
// Timestamps
// - All instants are chrono::DateTime<Utc> truncated to millisecond precision, so that a value
//   written as ISO-8601 text and read back compares equal.
// - All durations are i64 milliseconds.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

pub type Millis = i64;

pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

/// Milliseconds from `start` to `end`, never negative.
pub fn duration_ms(start: DateTime<Utc>, end: DateTime<Utc>) -> Millis {
    (end - start).num_milliseconds().max(0)
}

pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_iso_string(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| truncate_to_millis(parsed.with_timezone(&Utc)))
}

/// serde adapter writing instants as millisecond ISO-8601 text.
pub mod iso_millis {
    use super::{parse_iso_string, to_iso_string};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_iso_string(*instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_iso_string(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use super::super::{parse_iso_string, to_iso_string};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            instant: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match instant {
                Some(instant) => serializer.serialize_str(&to_iso_string(*instant)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse_iso_string(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
                None => Ok(None),
            }
        }
    }
}

/// Formats a duration as `HH:MM:SS`. Sub-second remainders are dropped, hours do not wrap.
pub fn format_duration(milliseconds: Millis) -> String {
    let seconds = milliseconds.max(0) / 1000;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining_seconds = seconds % 60;
    format!("{hours:02}:{minutes:02}:{remaining_seconds:02}")
}
