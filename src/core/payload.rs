//! Message payloads: scalar text, mappings and sequences

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Anything that can be logged.
///
/// Mappings keep their keys sorted so expanded output is stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessagePayload {
    Scalar(String),
    Mapping(BTreeMap<String, MessagePayload>),
    Sequence(Vec<MessagePayload>),
}

impl MessagePayload {
    pub fn scalar(text: impl Into<String>) -> Self {
        MessagePayload::Scalar(text.into())
    }

    /// Build a mapping from key/value pairs
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MessagePayload>,
    {
        MessagePayload::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn sequence<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<MessagePayload>,
    {
        MessagePayload::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, MessagePayload::Scalar(_))
    }
}

/// Single-line rendering, used when a payload is not expanded.
impl fmt::Display for MessagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagePayload::Scalar(s) => write!(f, "{}", s),
            MessagePayload::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", key, value)?;
                }
                write!(f, "}}")
            }
            MessagePayload::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<String> for MessagePayload {
    fn from(s: String) -> Self {
        MessagePayload::Scalar(s)
    }
}

impl From<&str> for MessagePayload {
    fn from(s: &str) -> Self {
        MessagePayload::Scalar(s.to_string())
    }
}

impl From<&String> for MessagePayload {
    fn from(s: &String) -> Self {
        MessagePayload::Scalar(s.clone())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessagePayload {
                fn from(value: $ty) -> Self {
                    MessagePayload::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

impl<T: Into<MessagePayload>> From<Vec<T>> for MessagePayload {
    fn from(items: Vec<T>) -> Self {
        MessagePayload::sequence(items)
    }
}

impl<T: Into<MessagePayload>> From<Option<T>> for MessagePayload {
    fn from(value: Option<T>) -> Self {
        value
            .map(Into::into)
            .unwrap_or_else(|| MessagePayload::scalar("None"))
    }
}

impl<K: Into<String>, V: Into<MessagePayload>> From<BTreeMap<K, V>> for MessagePayload {
    fn from(map: BTreeMap<K, V>) -> Self {
        MessagePayload::mapping(map)
    }
}

impl<K: Into<String>, V: Into<MessagePayload>> From<HashMap<K, V>> for MessagePayload {
    fn from(map: HashMap<K, V>) -> Self {
        MessagePayload::mapping(map)
    }
}

impl From<serde_json::Value> for MessagePayload {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => MessagePayload::scalar("None"),
            Value::String(s) => MessagePayload::Scalar(s),
            Value::Array(items) => MessagePayload::sequence(items),
            Value::Object(map) => MessagePayload::mapping(map),
            other => MessagePayload::Scalar(other.to_string()),
        }
    }
}

/// Any JSON shape is accepted; scalars keep their JSON text.
impl<'de> Deserialize<'de> for MessagePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(MessagePayload::from)
    }
}
