//! Host record capability
//!
//! The logger never reflects over host objects. Anything placeholders should
//! resolve against implements [`RecordLike`].

use std::fmt;

/// Shaped value of a record field, as the templater needs it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Already encoded human-readable display text
    Text(String),
    /// Descriptions of every linked record
    Links(Vec<String>),
    /// Attachment fields carry no inline text
    Attachment,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Links(links) => write!(f, "{}", links.join(", ")),
            FieldValue::Attachment => write!(f, "<attachment>"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Why a field could not be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    #[error("field not found")]
    NotFound,
    #[error("field has no type metadata")]
    Untyped,
}

/// A record placeholders can be resolved against.
pub trait RecordLike {
    /// Look up a field by name.
    fn field(&self, name: &str) -> Result<FieldValue, LookupFailure>;

    /// Name of the owning application, used by the default instance label.
    fn application_name(&self) -> Option<String> {
        None
    }

    /// Name of the form (record type), used by the default instance label.
    fn form_name(&self) -> Option<String> {
        None
    }

    /// Identity shown by alert sinks that need to tell records apart.
    fn identity(&self) -> Option<String> {
        None
    }
}

impl<T: RecordLike + ?Sized> RecordLike for &T {
    fn field(&self, name: &str) -> Result<FieldValue, LookupFailure> {
        (**self).field(name)
    }

    fn application_name(&self) -> Option<String> {
        (**self).application_name()
    }

    fn form_name(&self) -> Option<String> {
        (**self).form_name()
    }

    fn identity(&self) -> Option<String> {
        (**self).identity()
    }
}
