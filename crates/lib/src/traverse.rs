//! The traversal engine and the typed accessors built on it.
//!
//! A [`Traverser`] walks a root [`Value`] one path step at a time:
//!
//! - On a list, the step must be a non-negative integer below the list's
//!   length. A list is never searched by key.
//! - On a map, the step is looked up as a key. Digits are ordinary keys here.
//! - On a record, the step is looked up as a field name, if the traverser's
//!   [`Mode`] accepts records.
//! - Anything else ends the walk.
//!
//! Any failed step makes the whole lookup `None`. Nothing panics, however
//! malformed the path or mismatched the data.
//!
//! The typed accessors (`get_str`, `get_int`, ...) fold a type mismatch into
//! the same `None`, so callers never need to tell "absent" from "wrong type".
//!
//! # Examples
//!
//! ```
//! use nested::{Traverser, codec};
//!
//! let root = codec::decode(r#"{"servers": [{"host": "a", "port": 80}]}"#)?;
//!
//! assert_eq!(root.get_str("servers[0].host"), Some("a"));
//! assert_eq!(root.get_int("servers.0.port"), Some(80));
//! assert_eq!(root.get_str("servers[1].host"), None);
//! assert_eq!(root.get_int("servers[0].host"), None);
//!
//! let traverser = Traverser::restricted();
//! assert_eq!(traverser.get_int(&root, "servers[0].port"), Some(80));
//! # Ok::<(), nested::Error>(())
//! ```

use crate::{
    path::{Path, Segment},
    record::Record,
    value::{Kind, Map, Value},
};

/// Which container kinds a [`Traverser`] is able to step into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Maps and lists only, for pure decoded data.
    Restricted,
    /// Maps, lists and records, for native structures as well.
    #[default]
    General,
}

impl Mode {
    /// Returns true if this mode can step into the given kind
    pub const fn accepts(self, kind: Kind) -> bool {
        match kind {
            Kind::Map | Kind::List => true,
            Kind::Record => matches!(self, Mode::General),
        }
    }
}

/// Resolves path expressions against values.
///
/// A traverser holds no state besides its [`Mode`]; it is `Copy` and every
/// call is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Traverser {
    mode: Mode,
}

impl Traverser {
    /// Traverser over maps and lists only
    pub const RESTRICTED: Traverser = Traverser::new(Mode::Restricted);

    /// Traverser over maps, lists and records
    pub const GENERAL: Traverser = Traverser::new(Mode::General);

    /// Creates a traverser with the given mode
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Creates a traverser that only understands maps and lists
    pub const fn restricted() -> Self {
        Self::RESTRICTED
    }

    /// Creates a traverser that also understands records
    pub const fn general() -> Self {
        Self::GENERAL
    }

    /// Returns the mode of this traverser
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Resolves `path` against `root`.
    ///
    /// Returns the value the path points at, or `None` if any step fails.
    /// The empty path (or one made only of delimiters) returns `root`.
    pub fn get<'v>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<&'v Value> {
        let path = Path::parse(path.as_ref());
        let mut current = root;

        for (depth, segment) in path.steps().enumerate() {
            match self.step(current, segment) {
                Some(next) => current = next,
                None => {
                    tracing::trace!(
                        path = %path,
                        segment = %segment,
                        depth,
                        found = current.type_name(),
                        "path did not resolve"
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    fn step<'v>(&self, current: &'v Value, segment: Segment<'_>) -> Option<&'v Value> {
        let kind = current.kind()?;
        if !self.mode.accepts(kind) {
            return None;
        }

        match current {
            Value::List(items) => items.get(segment.as_index()?),
            Value::Map(map) => map.get(segment.as_key()),
            Value::Record(record) => record.field(segment.as_key()),
            _ => None,
        }
    }

    /// Resolves a path and converts the result using `TryFrom`.
    ///
    /// Returns `None` when the path does not resolve or the conversion fails.
    pub fn get_as<'v, T>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'v Value>,
    {
        T::try_from(self.get(root, path)?).ok()
    }

    /// Resolves a path to a map
    pub fn get_map<'v>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<&'v Map> {
        self.get(root, path)?.as_map()
    }

    /// Resolves a path to a list
    pub fn get_list<'v>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<&'v [Value]> {
        self.get(root, path)?.as_list()
    }

    /// Resolves a path to a string
    pub fn get_str<'v>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<&'v str> {
        self.get(root, path)?.as_text()
    }

    /// Resolves a path to an integer
    pub fn get_int(&self, root: &Value, path: impl AsRef<str>) -> Option<i64> {
        self.get(root, path)?.as_int()
    }

    /// Resolves a path to a float. Integers are not widened.
    pub fn get_float(&self, root: &Value, path: impl AsRef<str>) -> Option<f64> {
        self.get(root, path)?.as_float()
    }

    /// Resolves a path to a boolean
    pub fn get_bool(&self, root: &Value, path: impl AsRef<str>) -> Option<bool> {
        self.get(root, path)?.as_bool()
    }

    /// Resolves a path to a record
    pub fn get_record<'v>(&self, root: &'v Value, path: impl AsRef<str>) -> Option<&'v Record> {
        self.get(root, path)?.as_record()
    }

    /// Returns true if the container at `path` directly holds a value equal to `target`.
    ///
    /// Maps have their values scanned, lists their elements. Only one level
    /// is searched: a nested container matches only if it equals `target`
    /// as a whole. Unresolved paths and non-container values give `false`.
    ///
    /// ```
    /// # use nested::{Value, codec};
    /// let root = codec::decode(r#"{"tags": ["a", "b"], "nested": [["a"]]}"#)?;
    ///
    /// assert!(root.has_value("tags", &Value::from("b")));
    /// assert!(!root.has_value("nested", &Value::from("a")));
    /// assert!(root.has_value("nested", &Value::from(vec!["a"])));
    /// assert!(!root.has_value("missing", &Value::from("a")));
    /// # Ok::<(), nested::Error>(())
    /// ```
    pub fn has_value(&self, root: &Value, path: impl AsRef<str>, target: &Value) -> bool {
        match self.get(root, path) {
            Some(Value::Map(map)) => map.values().any(|value| value == target),
            Some(Value::List(items)) => items.iter().any(|value| value == target),
            _ => false,
        }
    }
}

/// Path access in [`Mode::General`].
impl Value {
    /// Resolves `path` against this value.
    ///
    /// ```
    /// # use nested::codec;
    /// let root = codec::decode(r#"{"a": {"b": [10, 20]}}"#)?;
    ///
    /// assert_eq!(root.get("a.b[1]"), Some(&20.into()));
    /// assert_eq!(root.get(""), Some(&root));
    /// assert_eq!(root.get("a.b[2]"), None);
    /// # Ok::<(), nested::Error>(())
    /// ```
    pub fn get(&self, path: impl AsRef<str>) -> Option<&Value> {
        Traverser::GENERAL.get(self, path)
    }

    /// Resolves a path and converts the result using `TryFrom`.
    pub fn get_as<'v, T>(&'v self, path: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'v Value>,
    {
        Traverser::GENERAL.get_as(self, path)
    }

    /// Resolves a path to a map
    pub fn get_map(&self, path: impl AsRef<str>) -> Option<&Map> {
        Traverser::GENERAL.get_map(self, path)
    }

    /// Resolves a path to a list
    pub fn get_list(&self, path: impl AsRef<str>) -> Option<&[Value]> {
        Traverser::GENERAL.get_list(self, path)
    }

    /// Resolves a path to a string
    pub fn get_str(&self, path: impl AsRef<str>) -> Option<&str> {
        Traverser::GENERAL.get_str(self, path)
    }

    /// Resolves a path to an integer
    pub fn get_int(&self, path: impl AsRef<str>) -> Option<i64> {
        Traverser::GENERAL.get_int(self, path)
    }

    /// Resolves a path to a float
    pub fn get_float(&self, path: impl AsRef<str>) -> Option<f64> {
        Traverser::GENERAL.get_float(self, path)
    }

    /// Resolves a path to a boolean
    pub fn get_bool(&self, path: impl AsRef<str>) -> Option<bool> {
        Traverser::GENERAL.get_bool(self, path)
    }

    /// Resolves a path to a record
    pub fn get_record(&self, path: impl AsRef<str>) -> Option<&Record> {
        Traverser::GENERAL.get_record(self, path)
    }

    /// See [`Traverser::has_value`].
    pub fn has_value(&self, path: impl AsRef<str>, target: &Value) -> bool {
        Traverser::GENERAL.has_value(self, path, target)
    }
}
