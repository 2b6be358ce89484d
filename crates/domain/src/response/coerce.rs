//! Timestamp coercion for response fields.
//!
//! The API reports `createdAt` as an ISO-8601 string and `expiryTime` /
//! `createTime` as Unix epoch seconds. Both readers also accept the other
//! representation so that a value which was already coerced (and written
//! back out) decodes to the same instant.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{DomainError, DomainResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Seconds(i64),
    Fractional(f64),
    Text(String),
}

impl RawInstant {
    fn into_utc(self) -> DomainResult<DateTime<Utc>> {
        match self {
            Self::Seconds(seconds) => from_epoch_seconds(seconds),
            Self::Fractional(seconds) => from_fractional_seconds(seconds),
            Self::Text(text) => parse_iso8601(&text),
        }
    }
}

/// Parses an ISO-8601 timestamp. Offset-less timestamps are read as UTC.
pub(crate) fn parse_iso8601(text: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::InvalidTimestamp(text.to_string()))
}

pub(crate) fn from_epoch_seconds(seconds: i64) -> DomainResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DomainError::InvalidTimestamp(seconds.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn from_fractional_seconds(seconds: f64) -> DomainResult<DateTime<Utc>> {
    let invalid = || DomainError::InvalidTimestamp(seconds.to_string());
    if !seconds.is_finite() {
        return Err(invalid());
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).ok_or_else(invalid)
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawInstant>::deserialize(deserializer)?
        .map(RawInstant::into_utc)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// `createdAt`: RFC 3339 string with millisecond precision.
pub(crate) mod iso8601_option {
    use super::{DateTime, Deserializer, SecondsFormat, Serializer, Utc};

    #[allow(clippy::ref_option)]
    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => {
                serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_instant(deserializer)
    }
}

/// `expiryTime` / `createTime`: Unix epoch seconds.
pub(crate) mod epoch_seconds_option {
    use super::{DateTime, Deserializer, Serializer, Utc};

    #[allow(clippy::cast_precision_loss, clippy::ref_option)]
    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) if instant.timestamp_subsec_nanos() == 0 => {
                serializer.serialize_i64(instant.timestamp())
            }
            Some(instant) => serializer.serialize_f64(
                instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9,
            ),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize_instant(deserializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeconds {
    Whole(u64),
    Fractional(f64),
}

/// `ttl`: a whole number of seconds, also accepted as a float.
///
/// Fractional parts are dropped; negative or non-finite values are rejected.
pub(crate) mod seconds_option {
    use super::{Deserialize, Deserializer, RawSeconds, Serializer};

    #[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(seconds) => serializer.serialize_u64(*seconds),
            None => serializer.serialize_none(),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawSeconds>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawSeconds::Whole(seconds)) => Ok(Some(seconds)),
            Some(RawSeconds::Fractional(seconds)) if seconds.is_finite() && seconds >= 0.0 => {
                Ok(Some(seconds.trunc() as u64))
            }
            Some(RawSeconds::Fractional(seconds)) => Err(serde::de::Error::custom(format!(
                "invalid number of seconds: {seconds}"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_iso8601_with_zulu() {
        let instant = parse_iso8601("2015-01-02T21:30:57.714Z").unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2015, 1, 2, 21, 30, 57).unwrap()
                + chrono::Duration::milliseconds(714)
        );
    }

    #[test]
    fn test_parse_iso8601_with_offset_converts_to_utc() {
        let instant = parse_iso8601("2015-01-02T23:30:57+02:00").unwrap();
        assert_eq!(instant.hour(), 21);
    }

    #[test]
    fn test_parse_iso8601_without_offset() {
        let instant = parse_iso8601("2015-01-02T21:30:57").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 1, 2, 21, 30, 57).unwrap());
    }

    #[test]
    fn test_parse_iso8601_rejects_garbage() {
        assert!(matches!(
            parse_iso8601("yesterday"),
            Err(DomainError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_epoch_seconds() {
        let instant = from_epoch_seconds(1_420_320_657).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 1, 3, 21, 30, 57).unwrap());
    }

    #[test]
    fn test_fractional_epoch_seconds() {
        let instant = from_fractional_seconds(1_420_320_657.5).unwrap();
        assert_eq!(instant.timestamp(), 1_420_320_657);
        assert_eq!(instant.timestamp_subsec_millis(), 500);
        assert!(from_fractional_seconds(f64::NAN).is_err());
    }
}
