//!
//! nested: read nested maps, lists and records through compact path expressions.
//!
//! Data of unknown shape, typically decoded from JSON, is hard to dig into
//! when every level needs its own type check. This library resolves a path
//! such as `"hello.that[0].try"` in one call and answers `None` when any link
//! is missing or has the wrong shape, instead of panicking.
//!
//! ## Core Concepts
//!
//! * **Values (`Value`)**: A closed tagged union of scalars, maps, lists and records.
//! * **Paths (`path::Path`)**: Expressions split on `.`, `[` and `]`. Parsing never fails.
//! * **Traversal (`Traverser`)**: Walks a value one path step at a time. Its `Mode`
//!   decides whether records can be stepped into.
//! * **Typed accessors (`get_str`, `get_int`, ...)**: Traversal plus one type check;
//!   "absent" and "wrong type" are both `None`.
//! * **Records (`Record`, `ToRecord`)**: Explicit opt-in for native structures to be
//!   traversed by field name.
//! * **Codec (`codec`)**: The JSON boundary, built on `serde_json`.
//!
//! ## Example
//!
//! ```
//! use nested::{Value, codec};
//!
//! let root = codec::decode(
//!     r#"{"hello": {"this": {"is": {"an": {"example": "hi"}}}}, "that": [{"try": "this"}]}"#,
//! )?;
//!
//! assert_eq!(root.get_str("hello.this.is.an.example"), Some("hi"));
//! assert_eq!(root.get_str("that[0].try"), Some("this"));
//! assert_eq!(root.get_str("hello.nope.x"), None);
//! assert_eq!(root.get_int("hello.this.is.an.example"), None);
//! assert!(root.has_value("that", &codec::decode(r#"{"try": "this"}"#)?));
//! # Ok::<(), nested::Error>(())
//! ```

pub mod codec;
pub mod convert;
pub mod errors;
pub mod path;
pub mod record;
pub mod traverse;
pub mod value;

pub use errors::{CodecError, ValueError};
pub use path::{Path, Segment};
pub use record::{Record, ToRecord};
pub use traverse::{Mode, Traverser};
pub use value::{Kind, List, Map, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured conversion errors from the value module
    #[error(transparent)]
    Value(ValueError),

    /// Structured errors from the JSON boundary
    #[error(transparent)]
    Codec(CodecError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Codec(_) => "codec",
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is codec-related.
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if this error is a JSON decode failure.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_decode_error(),
            _ => false,
        }
    }

    /// Check if this error is a JSON encode failure.
    pub fn is_encode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_encode_error(),
            _ => false,
        }
    }

    /// Check if decoded data had the wrong top-level shape.
    pub fn is_shape_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_shape_error(),
            _ => false,
        }
    }
}
