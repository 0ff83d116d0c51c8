//! Log level definitions and the alias registry
//!
//! Every level owns a set of lower-case aliases. The alias sets are disjoint,
//! so any string maps to at most one level. Strings that match nothing
//! normalize to [`LogLevel::Debug`] so a typo never hides output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", from = "String")]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
    /// Suppresses all output, whatever the message level
    None,
}

/// One row of the level table.
#[derive(Debug)]
pub struct LevelSpec {
    pub level: LogLevel,
    pub display: &'static str,
    pub aliases: &'static [&'static str],
}

/// Canonical levels in rank order, most verbose first.
pub static LEVELS: [LevelSpec; 5] = [
    LevelSpec {
        level: LogLevel::Debug,
        display: "DEBUG",
        aliases: &["debug", "dbg", "trace", "verbose", "all"],
    },
    LevelSpec {
        level: LogLevel::Info,
        display: "INFO",
        aliases: &["info", "information", "notice"],
    },
    LevelSpec {
        level: LogLevel::Warning,
        display: "WARNING",
        aliases: &["warning", "warn"],
    },
    LevelSpec {
        level: LogLevel::Error,
        display: "ERROR",
        aliases: &["error", "err", "critical", "fatal"],
    },
    LevelSpec {
        level: LogLevel::None,
        display: "NONE",
        aliases: &["none", "off", "silent", "disabled"],
    },
];

impl LogLevel {
    /// Map any level string to its canonical level.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unknown strings fall back to `Debug`.
    pub fn normalize(input: &str) -> Self {
        let wanted = input.trim().to_lowercase();
        LEVELS
            .iter()
            .find(|spec| spec.aliases.contains(&wanted.as_str()))
            .map(|spec| spec.level)
            .unwrap_or(LogLevel::Debug)
    }

    /// Position in the canonical ordered table.
    pub fn rank(self) -> usize {
        LEVELS
            .iter()
            .position(|spec| spec.level == self)
            .unwrap_or(0)
    }

    fn spec(self) -> &'static LevelSpec {
        &LEVELS[self.rank()]
    }

    pub fn to_str(self) -> &'static str {
        self.spec().display
    }

    pub fn aliases(self) -> &'static [&'static str] {
        self.spec().aliases
    }

    /// Level gate: `None` as minimum suppresses everything, otherwise the
    /// message passes when it ranks at or above the minimum.
    pub fn should_emit(message: LogLevel, min_level: LogLevel) -> bool {
        if min_level == LogLevel::None {
            return false;
        }
        message.rank() >= min_level.rank()
    }

    /// Gate with string inputs, normalizing both sides first.
    pub fn should_emit_str(message: &str, min_level: &str) -> bool {
        Self::should_emit(Self::normalize(message), Self::normalize(min_level))
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::None => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Strict parsing: only known aliases are accepted.
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LEVELS
            .iter()
            .find(|spec| spec.aliases.contains(&wanted.as_str()))
            .map(|spec| spec.level)
            .ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        LogLevel::normalize(s)
    }
}

impl From<String> for LogLevel {
    fn from(s: String) -> Self {
        LogLevel::normalize(&s)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_lowercase()
    }
}
