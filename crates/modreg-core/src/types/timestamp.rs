use crate::{traits::FieldValue, value::Value, value::ValueError};
use candid::CandidType;
use chrono::DateTime;
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// TimestampParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampParseError {
    #[error("timestamp parse error: {0}")]
    Format(String),

    #[error("timestamp before epoch: {0}")]
    BeforeEpoch(String),
}

///
/// Timestamp
/// (in milliseconds since the unix epoch)
///

#[derive(
    CandidType,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Construct from seconds (saturating).
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs.saturating_mul(1_000))
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| TimestampParseError::Format(e.to_string()))?;
        let ms = dt.timestamp_millis();
        if ms < 0 {
            return Err(TimestampParseError::BeforeEpoch(s.to_string()));
        }

        Ok(Self(ms as u64))
    }

    /// Accept either integer milliseconds or an RFC 3339 string.
    pub fn parse_flexible(s: &str) -> Result<Self, TimestampParseError> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self(n));
        }

        Self::parse_rfc3339(s)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FieldValue for Option<Timestamp> {
    fn to_value(&self) -> Value {
        self.map_or(Value::Null, Value::Timestamp)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            Value::Timestamp(ts) => Ok(Some(ts)),
            Value::Text(text) => Timestamp::parse_flexible(&text)
                .map(Some)
                .map_err(|err| ValueError::Malformed {
                    detail: err.to_string(),
                }),
            other => Err(ValueError::shape("timestamp", &other)),
        }
    }
}

///
/// TESTS
///
