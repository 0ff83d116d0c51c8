//! Error types for the debug logger
//!
//! None of these reach the caller of `log`/`alert`: the façade turns every
//! failure into a best-effort text line or a stderr report. They surface only
//! from configuration loading and from the collaborator traits.

use super::record::LookupFailure;

pub type Result<T> = std::result::Result<T, DebugError>;

#[derive(Debug, thiserror::Error)]
pub enum DebugError {
    /// A `{field}` placeholder could not be resolved against the record
    #[error("Invalid field name '{field}': {reason}")]
    FieldLookup {
        field: String,
        #[source]
        reason: LookupFailure,
    },

    /// Recursive expansion of a payload failed
    #[error("Error formatting {label}: {message}")]
    Format { label: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A debug or alert sink refused a line
    #[error("Sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },

    /// Table metadata source failure
    #[error("Metadata query failed: {0}")]
    Metadata(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DebugError {
    /// Create a field lookup error
    pub fn field_lookup(field: impl Into<String>, reason: LookupFailure) -> Self {
        DebugError::FieldLookup {
            field: field.into(),
            reason,
        }
    }

    /// Create a formatting error
    pub fn format(label: impl Into<String>, message: impl Into<String>) -> Self {
        DebugError::Format {
            label: label.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        DebugError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        DebugError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }

    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        DebugError::Metadata(msg.into())
    }
}
