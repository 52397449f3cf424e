//! JSON serialization for API responses and query results.
//!
//! Everything goes through `serde_json`; the types here cover values JSON
//! has no native form for. Binary data is written as lowercase hex, dates
//! and times as ISO-8601 strings, decimals as plain numbers and non-finite
//! floats as `null`.

use crate::HttpError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a value to a JSON string.
pub fn json_dumps<T: Serialize + ?Sized>(value: &T) -> Result<String, HttpError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse a JSON string.
pub fn json_loads<T: DeserializeOwned>(json: &str) -> Result<T, HttpError> {
    Ok(serde_json::from_str(json)?)
}

/// `#[serde(with = "hex_bytes")]` for byte buffers stored as hex strings.
pub mod hex_bytes {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as a lowercase hex string.
    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    /// Deserialize bytes from a hex string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(&text).map_err(D::Error::custom)
    }
}

/// An owned byte buffer that serializes as hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binary(#[serde(with = "hex_bytes")] pub Vec<u8>);

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Binary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A single cell of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// SQL `NULL`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Floating point; NaN and infinities serialize as `null`.
    Float(f64),
    /// Exact decimal, serialized as a JSON number.
    Decimal(Decimal),
    /// Text.
    Text(String),
    /// Raw bytes, serialized as hex.
    Binary(Vec<u8>),
    /// Calendar date, `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Time of day, `HH:MM:SS[.fff]`.
    Time(NaiveTime),
    /// Timestamp with offset, RFC 3339.
    DateTime(DateTime<FixedOffset>),
}

impl Serialize for ResultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            Self::Float(_) => serializer.serialize_none(),
            Self::Decimal(d) => match d.to_f64() {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.serialize_str(&d.to_string()),
            },
            Self::Text(s) => serializer.serialize_str(s),
            Self::Binary(bytes) => hex_bytes::serialize(bytes, serializer),
            Self::Date(date) => date.serialize(serializer),
            Self::Time(time) => time.serialize(serializer),
            Self::DateTime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for ResultValue {
    /// Results read back from JSON lose their original type: numbers become
    /// integers or floats and everything textual stays text.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        use serde_json::Value;

        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            other => {
                return Err(D::Error::custom(format!(
                    "expected a scalar result value, got {other}"
                )))
            }
        })
    }
}

impl From<bool> for ResultValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ResultValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for ResultValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Decimal> for ResultValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<&str> for ResultValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for ResultValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<NaiveDate> for ResultValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl<T: Into<Self>> From<Option<T>> for ResultValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
