//! Attribute model: closed value variants and an insertion-ordered mapping

use std::fmt;
use std::sync::Arc;

/// How many chained lazy values are resolved before the attribute degrades
/// to [`AttrValue::Absent`].
const MAX_LAZY_DEPTH: usize = 8;

/// A single attribute value.
///
/// The closed set of shapes an attribute can take. `Bool(true)` renders the
/// bare attribute name, `Bool(false)` and `Absent` omit the attribute
/// entirely, `Text` renders a quoted, escaped value (or an event handler body
/// for `on*` keys), and `Lazy` defers evaluation to serialization time.
#[derive(Clone)]
pub enum AttrValue {
    /// Boolean attribute: `true` emits ` key`, `false` emits nothing.
    Bool(bool),
    /// Plain text. Escaped when serialized as a regular attribute; taken
    /// verbatim as the handler body for event attributes.
    Text(String),
    /// Evaluated when the element is built; the result is handled as if it
    /// had been passed directly.
    Lazy(Arc<dyn Fn() -> AttrValue + Send + Sync>),
    /// Omitted from the output entirely.
    Absent,
}

impl AttrValue {
    /// Wrap a closure for lazy evaluation.
    pub fn lazy<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<AttrValue>,
    {
        AttrValue::Lazy(Arc::new(move || f().into()))
    }

    /// Collapse lazy chains into a concrete value.
    ///
    /// Chains longer than `MAX_LAZY_DEPTH` degrade to `Absent` rather than
    /// looping.
    pub(crate) fn resolve(&self) -> AttrValue {
        let mut value = self.clone();
        for _ in 0..MAX_LAZY_DEPTH {
            match value {
                AttrValue::Lazy(f) => value = f(),
                concrete => return concrete,
            }
        }
        match value {
            AttrValue::Lazy(_) => AttrValue::Absent,
            concrete => concrete,
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "Bool({b})"),
            AttrValue::Text(t) => write!(f, "Text({t:?})"),
            AttrValue::Lazy(_) => write!(f, "Lazy(..)"),
            AttrValue::Absent => write!(f, "Absent"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl<V> From<Option<V>> for AttrValue
where
    V: Into<AttrValue>,
{
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => AttrValue::Absent,
        }
    }
}

/// An ordered attribute mapping with unique keys.
///
/// Serialization order is insertion order. Setting an existing key replaces
/// its value in place, keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Attrs {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Fluent form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up an attribute by key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
