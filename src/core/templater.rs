//! `{field}` placeholder resolution against a record
//!
//! The template is scanned once, left to right. Substituted values are
//! appended to the output and never scanned again, so field content that
//! itself contains braces cannot trigger further lookups.

use super::error::DebugError;
use super::record::{FieldValue, RecordLike};
use std::collections::HashMap;

/// Text substituted for a link field with no links.
pub const NO_LINKS: &str = "No Links";

/// Default separator between linked-record descriptions.
pub const DEFAULT_LINK_SEPARATOR: &str = ", ";

/// Result of resolving a template, with the lookups that failed.
#[derive(Debug)]
pub struct Resolution {
    pub text: String,
    pub failures: Vec<DebugError>,
}

#[derive(Debug, Clone)]
pub struct Templater {
    link_separator: String,
}

impl Templater {
    pub fn new() -> Self {
        Self {
            link_separator: DEFAULT_LINK_SEPARATOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_link_separator(mut self, separator: impl Into<String>) -> Self {
        self.link_separator = separator.into();
        self
    }

    pub fn link_separator(&self) -> &str {
        &self.link_separator
    }

    /// Resolve placeholders, discarding lookup failures.
    pub fn resolve(&self, template: &str, record: Option<&dyn RecordLike>) -> String {
        self.resolve_detailed(template, record).text
    }

    /// Resolve placeholders and report every failed lookup.
    ///
    /// Without a record the template comes back unchanged. Candidates that
    /// are empty or contain `:` or `,` are treated as literal text (inline
    /// mappings, JSON) and are not looked up.
    pub fn resolve_detailed(&self, template: &str, record: Option<&dyn RecordLike>) -> Resolution {
        let mut failures = Vec::new();
        let Some(record) = record else {
            return Resolution {
                text: template.to_string(),
                failures,
            };
        };

        let mut out = String::with_capacity(template.len());
        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find(['{', '}']) {
                Some(end) if after.as_bytes()[end] == b'}' => {
                    let name = &after[..end];
                    let placeholder = &rest[open..open + end + 2];

                    if Self::is_field_name(name) {
                        let replacement = match resolved.get(name) {
                            Some(text) => text.clone(),
                            None => {
                                let text = match self.field_text(name, record) {
                                    Ok(Some(text)) => text,
                                    Ok(None) => placeholder.to_string(),
                                    Err(err) => {
                                        failures.push(err);
                                        placeholder.to_string()
                                    }
                                };
                                resolved.insert(name, text.clone());
                                text
                            }
                        };
                        out.push_str(&replacement);
                    } else {
                        out.push_str(placeholder);
                    }
                    rest = &after[end + 1..];
                }
                // Unclosed, or another `{` comes first: this brace is literal.
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        Resolution {
            text: out,
            failures,
        }
    }

    fn is_field_name(candidate: &str) -> bool {
        !candidate.is_empty() && !candidate.contains([':', ','])
    }

    /// Display text for one field. `Ok(None)` keeps the placeholder literal.
    fn field_text(&self, name: &str, record: &dyn RecordLike) -> Result<Option<String>, DebugError> {
        let value = record
            .field(name)
            .map_err(|reason| DebugError::field_lookup(name, reason))?;

        Ok(match value {
            FieldValue::Text(text) => Some(text),
            FieldValue::Links(links) if links.is_empty() => Some(NO_LINKS.to_string()),
            FieldValue::Links(links) => Some(links.join(&self.link_separator)),
            FieldValue::Attachment => None,
        })
    }
}

impl Default for Templater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::LookupFailure;
    use crate::records::MemoryRecord;

    fn record() -> MemoryRecord {
        MemoryRecord::new()
            .with_text("TITLE", "Pump failure")
            .with_text("NUMBER", "42")
            .with_text("TRICKY", "{NUMBER}")
            .with_links("OWNERS", ["Alice", "Bob"])
            .with_links("PARENTS", Vec::<String>::new())
            .with_attachment("FILES")
            .with_untyped("LEGACY")
    }

    #[test]
    fn test_no_record_is_identity() {
        let templater = Templater::new();
        assert_eq!(templater.resolve("{TITLE} #{NUMBER}", None), "{TITLE} #{NUMBER}");
    }

    #[test]
    fn test_resolves_text_fields() {
        let record = record();
        let templater = Templater::new();
        assert_eq!(
            templater.resolve("{TITLE} #{NUMBER}", Some(&record)),
            "Pump failure #42"
        );
    }

    #[test]
    fn test_link_fields() {
        let record = record();
        let templater = Templater::new();
        assert_eq!(templater.resolve("{OWNERS}", Some(&record)), "Alice, Bob");
        assert_eq!(templater.resolve("{PARENTS}", Some(&record)), "No Links");

        let templater = Templater::new().with_link_separator(" | ");
        assert_eq!(templater.resolve("{OWNERS}", Some(&record)), "Alice | Bob");
    }

    #[test]
    fn test_attachment_kept_literal() {
        let record = record();
        let resolution = Templater::new().resolve_detailed("see {FILES}", Some(&record));
        assert_eq!(resolution.text, "see {FILES}");
        assert!(resolution.failures.is_empty());
    }

    #[test]
    fn test_lookup_failures_reported() {
        let record = record();
        let resolution =
            Templater::new().resolve_detailed("{MISSING} {LEGACY} {TITLE}", Some(&record));
        assert_eq!(resolution.text, "{MISSING} {LEGACY} Pump failure");
        assert_eq!(resolution.failures.len(), 2);
        assert!(matches!(
            resolution.failures[1],
            DebugError::FieldLookup {
                reason: LookupFailure::Untyped,
                ..
            }
        ));
    }

    #[test]
    fn test_structured_text_untouched() {
        let record = record();
        let templater = Templater::new();
        assert_eq!(
            templater.resolve("payload {'a': 1} {x,y} {TITLE}", Some(&record)),
            "payload {'a': 1} {x,y} Pump failure"
        );
        let resolution = templater.resolve_detailed("{} {a:b}", Some(&record));
        assert_eq!(resolution.text, "{} {a:b}");
        assert!(resolution.failures.is_empty());
    }

    #[test]
    fn test_no_rescan_of_values() {
        let record = record();
        assert_eq!(Templater::new().resolve("{TRICKY}", Some(&record)), "{NUMBER}");
    }

    #[test]
    fn test_unbalanced_braces() {
        let record = record();
        let templater = Templater::new();
        assert_eq!(templater.resolve("a { b {TITLE}", Some(&record)), "a { b Pump failure");
        assert_eq!(templater.resolve("{TITLE", Some(&record)), "{TITLE");
        assert_eq!(templater.resolve("} {NUMBER}}", Some(&record)), "} 42}");
    }

    #[test]
    fn test_repeated_placeholder_looked_up_once() {
        let record = record();
        let resolution = Templater::new().resolve_detailed("{MISSING}/{MISSING}", Some(&record));
        assert_eq!(resolution.text, "{MISSING}/{MISSING}");
        assert_eq!(resolution.failures.len(), 1);
    }
}
