//! Named-field records for traversing native structures.
//!
//! Decoded JSON only ever contains maps and lists. Native in-memory
//! structures can take part in traversal too, by converting themselves into a
//! [`Record`] through [`ToRecord`]. This is an explicit opt-in: nothing is
//! discovered at runtime, and only the fields a type chooses to expose can be
//! reached by a path.
//!
//! # Usage
//!
//! ```
//! use nested::{Record, ToRecord, Traverser, Value};
//!
//! struct Server {
//!     host: String,
//!     port: i64,
//! }
//!
//! impl ToRecord for Server {
//!     fn to_record(&self) -> Record {
//!         Record::new("Server")
//!             .with("host", self.host.as_str())
//!             .with("port", self.port)
//!     }
//! }
//!
//! let root: Value = vec![Value::from_record(&Server {
//!     host: "localhost".to_string(),
//!     port: 8080,
//! })]
//! .into();
//!
//! assert_eq!(root.get_int("[0].port"), Some(8080));
//! // Restricted traversal only understands maps and lists
//! assert_eq!(Traverser::restricted().get_int(&root, "[0].port"), None);
//! ```

use std::fmt;

use serde::ser::SerializeMap;

use crate::value::Value;

/// An ordered set of named fields, tagged with the name of the type it came from.
///
/// Field order follows insertion order. Setting a field that already exists
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record for the named type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the type name this record was built from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder method to set a field and return self
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field, returning the previous value if the field already existed.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns an iterator over fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        if self.fields.is_empty() {
            write!(f, "}}")
        } else {
            write!(f, " }}")
        }
    }
}

// Records encode as plain objects; the type name is not part of the data.
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Opt-in for native types that want to be traversed by field name.
///
/// Implementors decide which fields are exposed and how each converts into a
/// [`Value`]. Nested structures can expose themselves recursively by
/// returning `Value::from_record(&self.child)` for a field.
pub trait ToRecord {
    /// Builds a record snapshot of this value.
    fn to_record(&self) -> Record;
}

impl ToRecord for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

impl Value {
    /// Wraps a native value's record snapshot.
    pub fn from_record<T: ToRecord + ?Sized>(value: &T) -> Value {
        Value::Record(value.to_record())
    }
}
