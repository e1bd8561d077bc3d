//! Decoded values.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Value produced by a converter.
///
/// Converters of different base types can be combined (lists, variants),
/// so decoding yields a self-describing value instead of a static type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value: an empty optional, or a soft failure of a non-strict converter.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Items of a list cardinality, in input order.
    Array(Vec<Value>),
    /// Fixed-size group, e.g. `(index, text)` of an indexed choice.
    Tuple(Vec<Value>),
    /// Member of an enumeration type. `data` is the member's payload, if any.
    Tagged {
        tag: String,
        data: Option<Box<Value>>,
    },
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Tagged member value of an enumeration type.
    pub fn tagged(tag: impl Into<String>, data: impl Into<Value>) -> Self {
        Self::Tagged {
            tag: tag.into(),
            data: Some(Box::new(data.into())),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) | Value::Tuple(items) => serializer.collect_seq(items),
            Value::Tagged { tag, data } => {
                let len = if data.is_some() { 2 } else { 1 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("$tag", tag)?;
                if let Some(d) = data {
                    map.serialize_entry("$data", d)?;
                }
                map.end()
            }
        }
    }
}
