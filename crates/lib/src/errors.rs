//! Error types for value conversion and the JSON codec boundary.
//!
//! Path traversal itself never produces an error: a path that does not
//! resolve is an ordinary `None`. The errors here cover the two places where
//! a failure carries information worth returning, narrowing a [`Value`]
//! through `TryFrom`, and decoding or encoding JSON text.
//!
//! [`Value`]: crate::Value

use thiserror::Error;

/// Errors raised when narrowing a [`Value`](crate::Value) to a concrete type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value exists but holds a different kind of data
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl ValueError {
    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

/// Errors raised at the JSON boundary.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input text is not valid JSON
    #[error("JSON decode failed: {source}")]
    Decode { source: serde_json::Error },

    /// A value could not be written as JSON
    #[error("JSON encode failed: {source}")]
    Encode { source: serde_json::Error },

    /// The input decoded fine but its top level is not a map
    #[error("JSON is not a map: top-level value is {actual}")]
    NotAMap { actual: &'static str },
}

impl CodecError {
    /// Check if this error is a syntax or I/O failure while decoding
    pub fn is_decode_error(&self) -> bool {
        matches!(self, CodecError::Decode { .. })
    }

    /// Check if this error is an encoding failure
    pub fn is_encode_error(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }

    /// Check if the decoded document had the wrong top-level shape
    pub fn is_shape_error(&self) -> bool {
        matches!(self, CodecError::NotAMap { .. })
    }

    /// Get the line and column of a decode error, if known
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            CodecError::Decode { source } if source.line() > 0 => {
                Some((source.line(), source.column()))
            }
            _ => None,
        }
    }
}

// Conversions into the crate-level Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}

impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
