//! Console sink implementation

use crate::core::{DebugSink, LogLevel, Result};
use chrono::Local;
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: None,
        }
    }

    /// Prefix every line with a local timestamp in a strftime-compatible format
    ///
    /// # Examples
    ///
    /// ```
    /// use record_debug_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_timestamps("%H:%M:%S%.3f");
    /// ```
    #[must_use]
    pub fn with_timestamps(mut self, format_str: &str) -> Self {
        self.timestamp_format = Some(format_str.to_string());
        self
    }

    fn render(&self, level: LogLevel, line: &str) -> String {
        let line = self.colorize(level, line);
        match &self.timestamp_format {
            Some(format_str) => format!("{} {}", Local::now().format(format_str), line),
            None => line,
        }
    }

    /// Colour the leading `[LEVEL]` tag, leaving the rest untouched
    #[cfg(feature = "console")]
    fn colorize(&self, level: LogLevel, line: &str) -> String {
        let tag = format!("[{}]", level.to_str());
        match line.strip_prefix(&tag) {
            Some(rest) if self.use_colors => {
                format!("{}{}", tag.color(level.color_code()), rest)
            }
            _ => line.to_string(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, _level: LogLevel, line: &str) -> String {
        line.to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugSink for ConsoleSink {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()> {
        println!("{}", self.render(level, line));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
