//! In-memory record backed by a field map

use crate::core::{FieldValue, LookupFailure, RecordLike};
use std::collections::HashMap;

/// A record whose fields live in a `HashMap`.
///
/// A field stored as `None` exists but has no type metadata, which is how
/// hosts report half-configured fields.
///
/// # Example
///
/// ```
/// use record_debug_logger::records::MemoryRecord;
/// use record_debug_logger::core::{FieldValue, RecordLike};
///
/// let record = MemoryRecord::new()
///     .with_text("TITLE", "Pump failure")
///     .with_links("OWNERS", ["Alice", "Bob"]);
///
/// assert_eq!(record.field("TITLE"), Ok(FieldValue::Text("Pump failure".into())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    fields: HashMap<String, Option<FieldValue>>,
    application: Option<String>,
    form: Option<String>,
    identity: Option<String>,
}

impl MemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application and form names used by default labels
    pub fn with_names(mut self, application: impl Into<String>, form: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self.form = Some(form.into());
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Add a plain text field
    pub fn with_text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.set(name, FieldValue::Text(text.into()));
        self
    }

    /// Add a link field holding the linked records' descriptions
    pub fn with_links<I, S>(mut self, name: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(name, FieldValue::Links(links.into_iter().map(Into::into).collect()));
        self
    }

    /// Add an attachment field
    pub fn with_attachment(mut self, name: impl Into<String>) -> Self {
        self.set(name, FieldValue::Attachment);
        self
    }

    /// Add a field that exists but has no type metadata
    pub fn with_untyped(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), None);
        self
    }

    /// Set a field (mutable version)
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), Some(value));
    }

    pub fn remove(&mut self, name: &str) {
        self.fields.remove(name);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl RecordLike for MemoryRecord {
    fn field(&self, name: &str) -> Result<FieldValue, LookupFailure> {
        match self.fields.get(name) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(LookupFailure::Untyped),
            None => Err(LookupFailure::NotFound),
        }
    }

    fn application_name(&self) -> Option<String> {
        self.application.clone()
    }

    fn form_name(&self) -> Option<String> {
        self.form.clone()
    }

    fn identity(&self) -> Option<String> {
        self.identity.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_record_lookup() {
        let record = MemoryRecord::new()
            .with_text("NUMBER", "42")
            .with_attachment("FILES")
            .with_untyped("LEGACY");

        assert_eq!(record.field("NUMBER"), Ok(FieldValue::Text("42".into())));
        assert_eq!(record.field("FILES"), Ok(FieldValue::Attachment));
        assert_eq!(record.field("LEGACY"), Err(LookupFailure::Untyped));
        assert_eq!(record.field("MISSING"), Err(LookupFailure::NotFound));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_memory_record_names() {
        let record = MemoryRecord::new()
            .with_names("Quality", "Incident")
            .with_identity("INC-7");

        assert_eq!(record.application_name().as_deref(), Some("Quality"));
        assert_eq!(record.form_name().as_deref(), Some("Incident"));
        assert_eq!(record.identity().as_deref(), Some("INC-7"));
    }

    #[test]
    fn test_memory_record_set_and_remove() {
        let mut record = MemoryRecord::new();
        assert!(record.is_empty());

        record.set("TITLE", "Leak".into());
        assert_eq!(record.field("TITLE"), Ok(FieldValue::Text("Leak".into())));

        record.remove("TITLE");
        assert_eq!(record.field("TITLE"), Err(LookupFailure::NotFound));
    }
}
