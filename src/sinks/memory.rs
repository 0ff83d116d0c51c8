//! In-memory sinks
//!
//! Clones share one buffer, so a host can hand one clone to the logger and
//! read lines back through another (debug panes, tests).

use crate::core::{AlertSink, DebugSink, LogLevel, RecordLike, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub line: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every captured line, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|c| c.line.clone()).collect()
    }

    pub fn entries(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DebugSink for MemorySink {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()> {
        self.lines.lock().push(CapturedLine {
            level,
            line: line.to_string(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// A warning captured by [`MemoryAlertSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Identity of the target record, when it has one
    pub record: Option<String>,
    pub line: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAlertSink {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl MemoryAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl AlertSink for MemoryAlertSink {
    fn add_warning(&mut self, target: &dyn RecordLike, line: &str) -> Result<()> {
        self.warnings.lock().push(Warning {
            record: target.identity(),
            line: line.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory-alert"
    }
}
