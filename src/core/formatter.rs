//! Turns payloads into text lines
//!
//! Without expansion every payload becomes one `label: value` line. With
//! expansion, mappings get a `--label--` banner followed by one line per
//! entry, and sequences get one `label - index:value` line per element.

use super::error::{DebugError, Result};
use super::payload::MessagePayload;

/// Nesting limit for expanded payloads.
pub const MAX_EXPAND_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a payload into lines. Never fails: an expansion error becomes
    /// the only line of the result, still carrying the label.
    pub fn format(payload: &MessagePayload, label: Option<&str>, expand: bool) -> Vec<String> {
        if !expand {
            return vec![Self::labeled(label, &payload.to_string())];
        }

        let mut lines = Vec::new();
        match Self::expand_into(payload, label, 0, &mut lines) {
            Ok(()) => lines,
            Err(err) => vec![Self::labeled(label, &err.to_string())],
        }
    }

    fn labeled(label: Option<&str>, text: &str) -> String {
        match label {
            Some(label) => format!("{}: {}", label, text),
            None => text.to_string(),
        }
    }

    fn expand_into(
        payload: &MessagePayload,
        label: Option<&str>,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        if depth > MAX_EXPAND_DEPTH {
            return Err(DebugError::format(
                "multiple message",
                format!("nesting deeper than {} levels", MAX_EXPAND_DEPTH),
            ));
        }

        match payload {
            MessagePayload::Scalar(text) => lines.push(Self::labeled(label, text)),
            MessagePayload::Mapping(map) => {
                if let Some(label) = label {
                    lines.push(format!("--{}--", label));
                }
                for (key, value) in map {
                    Self::expand_into(value, Some(key.as_str()), depth + 1, lines)?;
                }
            }
            MessagePayload::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_label = match label {
                        Some(label) => format!("{} - {}", label, index),
                        None => index.to_string(),
                    };
                    match item {
                        MessagePayload::Scalar(text) => {
                            lines.push(format!("{}:{}", item_label, text));
                        }
                        nested => Self::expand_into(nested, Some(item_label.as_str()), depth + 1, lines)?,
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scalar() {
        let lines = MessageFormatter::format(&"plain".into(), Some("L"), false);
        assert_eq!(lines, vec!["L: plain"]);

        let lines = MessageFormatter::format(&"plain".into(), None, false);
        assert_eq!(lines, vec!["plain"]);
    }

    #[test]
    fn test_expand_scalar_same_as_plain() {
        let lines = MessageFormatter::format(&"plain".into(), Some("L"), true);
        assert_eq!(lines, vec!["L: plain"]);
    }

    #[test]
    fn test_empty_mapping_banner_only() {
        let payload = MessagePayload::mapping(Vec::<(String, String)>::new());
        let lines = MessageFormatter::format(&payload, Some("X"), true);
        assert_eq!(lines, vec!["--X--"]);
    }

    #[test]
    fn test_sequence_lines() {
        let payload = MessagePayload::sequence([10, 20]);
        let lines = MessageFormatter::format(&payload, Some("L"), true);
        assert_eq!(lines, vec!["L - 0:10", "L - 1:20"]);
    }

    #[test]
    fn test_mapping_lines() {
        let payload = MessagePayload::mapping([
            ("status", MessagePayload::scalar("open")),
            ("tags", MessagePayload::sequence(["a", "b"])),
        ]);
        let lines = MessageFormatter::format(&payload, Some("Record"), true);
        assert_eq!(
            lines,
            vec!["--Record--", "status: open", "tags - 0:a", "tags - 1:b"]
        );
    }

    #[test]
    fn test_unexpanded_mapping_is_one_line() {
        let payload = MessagePayload::mapping([("a", 1)]);
        let lines = MessageFormatter::format(&payload, Some("M"), false);
        assert_eq!(lines, vec!["M: {'a': 1}"]);
    }

    #[test]
    fn test_depth_limit_yields_single_line() {
        let mut payload = MessagePayload::scalar("leaf");
        for _ in 0..(MAX_EXPAND_DEPTH + 5) {
            payload = MessagePayload::Sequence(vec![payload]);
        }
        let lines = MessageFormatter::format(&payload, Some("deep"), true);
        assert_eq!(
            lines,
            vec!["deep: Error formatting multiple message: nesting deeper than 32 levels"]
        );

        let lines = MessageFormatter::format(&payload, None, true);
        assert!(lines[0].starts_with("Error formatting multiple message:"));
    }
}
