//! Sink traits for finished log lines

use super::{error::Result, log_level::LogLevel, record::RecordLike};

/// Destination for debug lines (console, debug pane, channel).
pub trait DebugSink: Send + Sync {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Destination for user-visible warnings scoped to a record.
pub trait AlertSink: Send + Sync {
    fn add_warning(&mut self, target: &dyn RecordLike, line: &str) -> Result<()>;

    fn name(&self) -> &str;
}
