//! Per-call options for a log or alert
//!
//! Provides a builder over the call parameters: label, expansion, level,
//! forcing, caller display and a record override.

use super::caller::CallerFrame;
use super::log_level::LogLevel;
use super::logger::DebugLogger;
use super::payload::MessagePayload;
use super::record::RecordLike;
use std::panic::Location;

/// Builder for one log call
///
/// # Example
///
/// ```
/// use record_debug_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = DebugLogger::builder().label("orders").min_level("debug").sink(sink.clone()).build();
///
/// let details = MessagePayload::mapping([("status", "open"), ("owner", "ada")]);
/// logger.message(details).label("order").expand().hide_caller().log();
///
/// assert_eq!(
///     sink.lines(),
///     vec!["--[DEBUG] orders :: order--", "owner: ada", "status: open"]
/// );
/// ```
#[must_use = "a log request does nothing until `log` or `alert` is called"]
pub struct LogRequest<'a> {
    logger: &'a DebugLogger,
    pub(crate) payload: MessagePayload,
    pub(crate) label: Option<String>,
    pub(crate) expand: bool,
    pub(crate) level: LogLevel,
    pub(crate) force: bool,
    pub(crate) show_caller: bool,
    pub(crate) frame: Option<CallerFrame>,
    pub(crate) record: Option<&'a dyn RecordLike>,
}

impl<'a> LogRequest<'a> {
    pub fn new(logger: &'a DebugLogger, payload: MessagePayload) -> Self {
        Self {
            logger,
            payload,
            label: None,
            expand: false,
            level: LogLevel::Debug,
            force: false,
            show_caller: true,
            frame: None,
            record: None,
        }
    }

    /// Label appended to the header with ` :: `
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render mappings and sequences as one line per entry
    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn expand_if(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Message level; strings are normalized, unknown ones mean debug
    pub fn level(mut self, level: impl Into<LogLevel>) -> Self {
        self.level = level.into();
        self
    }

    /// Bypass the level gate for this call
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Attach an explicit caller frame, usually from [`caller!`](crate::caller)
    pub fn caller(mut self, frame: CallerFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Leave caller information out of the header
    pub fn hide_caller(mut self) -> Self {
        self.show_caller = false;
        self
    }

    /// Resolve placeholders against this record instead of the bound one
    pub fn record(mut self, record: &'a dyn RecordLike) -> Self {
        self.record = Some(record);
        self
    }

    /// Emit to the debug sinks
    #[track_caller]
    pub fn log(self) {
        let location = Location::caller();
        let logger = self.logger;
        logger.emit_log(self, location);
    }

    /// Emit to the alert sinks, scoped to `target`; no-op without one
    pub fn alert(self, target: Option<&dyn RecordLike>) {
        let logger = self.logger;
        logger.emit_alert(self, target);
    }
}
