//! JSON boundary.
//!
//! Thin wrappers over `serde_json` that produce and consume [`Value`]s.
//! Integers that fit in `i64` decode as [`Value::Int`]; every other number
//! decodes as [`Value::Float`]. Records encode as plain objects and so decode
//! back as maps.
//!
//! # Usage
//!
//! ```
//! use nested::codec;
//!
//! let value = codec::decode(r#"{"name": "Alice", "tags": ["a", "b"]}"#)?;
//! assert_eq!(value.get_str("tags[1]"), Some("b"));
//!
//! let text = codec::encode(&value)?;
//! assert_eq!(text, r#"{"name":"Alice","tags":["a","b"]}"#);
//!
//! let err = codec::decode_map("[1, 2]").unwrap_err();
//! assert!(err.is_shape_error());
//! # Ok::<(), nested::Error>(())
//! ```

use std::io::Read;

use crate::{
    Result,
    errors::CodecError,
    value::{Map, Value},
};

/// Encodes a value as compact JSON.
///
/// Non-finite floats have no JSON form and are written as `null`.
pub fn encode(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|source| CodecError::Encode { source }.into())
}

/// Encodes a value as indented JSON.
pub fn encode_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| CodecError::Encode { source }.into())
}

/// Decodes JSON text into a value.
pub fn decode(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| {
        tracing::debug!(error = %source, "failed to decode JSON text");
        CodecError::Decode { source }.into()
    })
}

/// Decodes JSON from a reader, such as a file or stdin.
pub fn decode_reader<R: Read>(reader: R) -> Result<Value> {
    serde_json::from_reader(reader).map_err(|source| {
        tracing::debug!(error = %source, "failed to decode JSON stream");
        CodecError::Decode { source }.into()
    })
}

/// Decodes JSON text whose top level must be an object.
pub fn decode_map(text: &str) -> Result<Map> {
    match decode(text)? {
        Value::Map(map) => Ok(map),
        other => {
            tracing::debug!(actual = other.type_name(), "decoded JSON is not a map");
            Err(CodecError::NotAMap {
                actual: other.type_name(),
            }
            .into())
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
            Value::Record(record) => serde_json::Value::Object(
                record
                    .fields()
                    .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Converts any serializable type into a value.
    ///
    /// Structs and maps become [`Value::Map`]; to keep a struct traversable
    /// only in general mode, implement [`ToRecord`](crate::ToRecord) instead.
    ///
    /// ```
    /// # use nested::Value;
    /// #[derive(serde::Serialize)]
    /// struct Config {
    ///     retries: u32,
    ///     hosts: Vec<String>,
    /// }
    ///
    /// let config = Config { retries: 3, hosts: vec!["a".into(), "b".into()] };
    /// let value = Value::from_serialize(&config)?;
    /// assert_eq!(value.get_int("retries"), Some(3));
    /// assert_eq!(value.get_str("hosts[1]"), Some("b"));
    /// # Ok::<(), nested::Error>(())
    /// ```
    pub fn from_serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value> {
        serde_json::to_value(value)
            .map(Value::from)
            .map_err(|source| CodecError::Encode { source }.into())
    }

    /// Deserializes this value into a concrete type.
    ///
    /// Useful for turning a resolved subtree back into a typed struct.
    pub fn deserialize_into<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(serde_json::Value::from(self))
            .map_err(|source| CodecError::Decode { source }.into())
    }
}
