use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

/// Truthiness predicate used to decide whether a flag turns its class on.
///
/// `false`, zero, `NaN`, the empty string, `None` and JSON `null` are falsy.
/// Everything else is truthy, including empty arrays and objects.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(false, |f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            // Containers are only tested, never walked.
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// A value that expands to zero or more class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    Empty,
    /// A literal fragment, possibly holding several space-separated classes.
    Atom(String),
    /// Class names switched on or off, kept in insertion order.
    Flags(IndexMap<String, bool>),
}

impl ClassValue {
    /// Build a flag map from `(name, flag)` pairs.
    ///
    /// Names are stringified with `Display`. A repeated name keeps the
    /// position of its first occurrence and takes the last flag.
    pub fn flags<K, V, I>(entries: I) -> Self
    where
        K: fmt::Display,
        V: Truthy,
        I: IntoIterator<Item = (K, V)>,
    {
        let map = entries
            .into_iter()
            .map(|(name, flag)| (name.to_string(), flag.is_truthy()))
            .collect();
        ClassValue::Flags(map)
    }

    /// True for values that are skipped outright: `Empty` and the empty atom.
    ///
    /// A flag map is never an empty marker, even when none of its flags is set.
    pub fn is_empty_marker(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Atom(s) => s.is_empty(),
            ClassValue::Flags(_) => false,
        }
    }

    /// Append this value's contribution, each piece followed by one space.
    pub(crate) fn append_to(&self, out: &mut String) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Atom(s) if s.is_empty() => {}
            ClassValue::Atom(s) => {
                out.push_str(s);
                out.push(' ');
            }
            ClassValue::Flags(map) => {
                for (name, _) in map.iter().filter(|(_, on)| **on) {
                    out.push_str(name);
                    out.push(' ');
                }
            }
        }
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::merge(std::iter::once(self)))
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Atom(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Atom(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Atom(s.clone())
    }
}

/// Booleans are empty markers whatever their value.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Empty
    }
}

impl From<&ClassValue> for ClassValue {
    fn from(value: &ClassValue) -> Self {
        value.clone()
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<K: fmt::Display, V: Truthy> From<IndexMap<K, V>> for ClassValue {
    fn from(map: IndexMap<K, V>) -> Self {
        ClassValue::flags(map)
    }
}

impl<K: fmt::Display, V: Truthy, const N: usize> From<[(K, V); N]> for ClassValue {
    fn from(entries: [(K, V); N]) -> Self {
        ClassValue::flags(entries)
    }
}

impl<K: fmt::Display, V: Truthy> From<Vec<(K, V)>> for ClassValue {
    fn from(entries: Vec<(K, V)>) -> Self {
        ClassValue::flags(entries)
    }
}

/// Untyped documents follow the same rules as the typed constructors.
///
/// Numbers carry no class names, so they are always empty. Arrays are
/// treated as maps keyed by their stringified index.
impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => ClassValue::Empty,
            Value::String(s) if s.is_empty() => ClassValue::Empty,
            Value::String(s) => ClassValue::Atom(s),
            Value::Object(map) => ClassValue::flags(map),
            Value::Array(items) => ClassValue::flags(items.into_iter().enumerate()),
        }
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ClassValue::from)
    }
}

impl Serialize for ClassValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ClassValue::Empty => serializer.serialize_none(),
            ClassValue::Atom(s) if s.is_empty() => serializer.serialize_none(),
            ClassValue::Atom(s) => serializer.serialize_str(s),
            ClassValue::Flags(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (name, on) in map {
                    state.serialize_entry(name, on)?;
                }
                state.end()
            }
        }
    }
}
