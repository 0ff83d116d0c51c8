//! Debug logger façade
//!
//! Owns the per-instance configuration and ties the pieces together: the
//! level gate decides whether a call produces output, the formatter shapes
//! the payload into lines, the templater fills in record fields, and the
//! sinks receive the result. Nothing in here returns an error to the caller.

use super::{
    caller::CallerFrame,
    config::LoggerConfig,
    environment::{default_min_level, EnvVarEnvironment, EnvironmentInfo},
    formatter::MessageFormatter,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    payload::MessagePayload,
    record::RecordLike,
    request::LogRequest,
    sink::{AlertSink, DebugSink},
    templater::Templater,
};
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::Arc;

/// A record shared between the host and a logger.
pub type SharedRecord = Arc<dyn RecordLike + Send + Sync>;

pub struct DebugLogger {
    /// Instance label, already resolved against the bound record
    label: String,
    min_level: LogLevel,
    force: bool,
    record: Option<SharedRecord>,
    templater: Templater,
    sinks: Mutex<Vec<Box<dyn DebugSink>>>,
    alert_sinks: Mutex<Vec<Box<dyn AlertSink>>>,
    metrics: LoggerMetrics,
}

impl DebugLogger {
    /// Logger configured from defaults and the process environment, without sinks
    #[must_use]
    pub fn new() -> Self {
        DebugLoggerBuilder::new().build()
    }

    /// Create a builder for DebugLogger
    ///
    /// # Example
    /// ```
    /// use record_debug_logger::prelude::*;
    ///
    /// let logger = DebugLogger::builder()
    ///     .label("Orders")
    ///     .min_level("info")
    ///     .sink(ConsoleSink::new())
    ///     .build();
    /// assert_eq!(logger.min_level(), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn builder() -> DebugLoggerBuilder {
        DebugLoggerBuilder::new()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Replace the minimum level for all later calls
    pub fn set_min_level(&mut self, level: impl Into<LogLevel>) {
        self.min_level = level.into();
    }

    pub fn is_forced(&self) -> bool {
        self.force
    }

    pub fn record(&self) -> Option<&SharedRecord> {
        self.record.as_ref()
    }

    pub fn templater(&self) -> &Templater {
        &self.templater
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn add_sink(&mut self, sink: Box<dyn DebugSink>) {
        self.sinks.lock().push(sink);
    }

    pub fn add_alert_sink(&mut self, sink: Box<dyn AlertSink>) {
        self.alert_sinks.lock().push(sink);
    }

    /// Whether a call at `level` passes the gate without forcing
    pub fn enabled_for(&self, level: impl Into<LogLevel>) -> bool {
        self.force || LogLevel::should_emit(level.into(), self.min_level)
    }

    /// Start a log call with options
    ///
    /// # Example
    ///
    /// ```
    /// use record_debug_logger::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = DebugLogger::builder().label("app").min_level("debug").sink(sink.clone()).build();
    ///
    /// logger
    ///     .message(vec![10, 20])
    ///     .label("values")
    ///     .expand()
    ///     .level("info")
    ///     .hide_caller()
    ///     .log();
    ///
    /// assert_eq!(
    ///     sink.lines(),
    ///     vec!["[INFO] app :: values - 0:10", "[INFO] app :: values - 1:20"]
    /// );
    /// ```
    pub fn message(&self, payload: impl Into<MessagePayload>) -> LogRequest<'_> {
        LogRequest::new(self, payload.into())
    }

    /// Log at debug level with default options
    #[track_caller]
    pub fn log(&self, payload: impl Into<MessagePayload>) {
        self.message(payload).log();
    }

    /// Log at debug level under a label
    #[track_caller]
    pub fn log_labeled(&self, payload: impl Into<MessagePayload>, label: impl Into<String>) {
        self.message(payload).label(label).log();
    }

    /// Show a warning on `target`; does nothing without a target
    pub fn alert(&self, payload: impl Into<MessagePayload>, target: Option<&dyn RecordLike>) {
        self.message(payload).alert(target);
    }

    fn header(&self, level: LogLevel, frame: Option<&CallerFrame>) -> String {
        let mut header = format!("[{}]", level.to_str());
        if !self.label.is_empty() {
            header.push(' ');
            header.push_str(&self.label);
        }
        if let Some(frame) = frame {
            header.push_str(" | ");
            header.push_str(&frame.to_string());
        }
        header
    }

    fn passes_gate(&self, request: &LogRequest<'_>) -> bool {
        if request.force || self.enabled_for(request.level) {
            return true;
        }
        self.metrics.record_suppressed();
        false
    }

    pub(crate) fn emit_log(&self, request: LogRequest<'_>, location: &'static Location<'static>) {
        if !self.passes_gate(&request) {
            return;
        }

        let frame = if request.show_caller {
            Some(
                request
                    .frame
                    .clone()
                    .unwrap_or_else(|| CallerFrame::from_location(location)),
            )
        } else {
            None
        };
        let header = self.header(request.level, frame.as_ref());
        let label = match &request.label {
            Some(label) => format!("{} :: {}", header, label),
            None => header.clone(),
        };

        let record: Option<&dyn RecordLike> = match request.record {
            Some(record) => Some(record),
            None => self.record.as_deref().map(|r| r as &dyn RecordLike),
        };

        for line in MessageFormatter::format(&request.payload, Some(label.as_str()), request.expand) {
            // The header is final: the label was resolved at build time and
            // caller arguments are captured values.
            let (prefix, body) = line.split_at(header_len(&line, &header));
            let resolution = self.templater.resolve_detailed(body, record);
            if !resolution.failures.is_empty() {
                self.metrics.record_lookup_failures(resolution.failures.len());
                // Written directly so the note is never resolved itself.
                let note_header = self.header(request.level, None);
                for failure in &resolution.failures {
                    self.write_line(request.level, &format!("{} :: field lookup: {}", note_header, failure));
                }
            }
            self.write_line(request.level, &format!("{}{}", prefix, resolution.text));
        }
    }

    pub(crate) fn emit_alert(&self, request: LogRequest<'_>, target: Option<&dyn RecordLike>) {
        let Some(target) = target else {
            return;
        };
        if !self.passes_gate(&request) {
            return;
        }

        let header = self.header(request.level, None);
        let label = match &request.label {
            Some(label) => format!("{} :: {}", header, label),
            None => header,
        };

        for line in MessageFormatter::format(&request.payload, Some(label.as_str()), request.expand) {
            self.write_alert(target, &line);
        }
    }

    /// Deliver one line to every debug sink, isolating failures per sink
    fn write_line(&self, level: LogLevel, line: &str) {
        let mut sinks = self.sinks.lock();
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| sink.write(level, line)));
            has_error |= self.report_sink_result(idx, sink.name(), result);
        }

        if !has_error && !sinks.is_empty() {
            self.metrics.record_line();
        }
    }

    fn write_alert(&self, target: &dyn RecordLike, line: &str) {
        let mut sinks = self.alert_sinks.lock();
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| sink.add_warning(target, line)));
            has_error |= self.report_sink_result(idx, sink.name(), result);
        }

        if !has_error && !sinks.is_empty() {
            self.metrics.record_alert();
        }
    }

    /// Report a failed or panicked sink call on stderr; true when it failed
    fn report_sink_result(
        &self,
        idx: usize,
        name: &str,
        result: std::thread::Result<super::error::Result<()>>,
    ) -> bool {
        match result {
            Ok(Ok(())) => false,
            Ok(Err(e)) => {
                self.metrics.record_sink_failure();
                eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, name, e);
                true
            }
            Err(payload) => {
                self.metrics.record_sink_failure();
                eprintln!(
                    "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                     Other sinks continue to function.",
                    idx,
                    name,
                    panic_message(payload.as_ref())
                );
                true
            }
        }
    }

    /// Flush every debug sink, reporting failures on stderr
    pub fn flush(&self) {
        let mut sinks = self.sinks.lock();
        for (idx, sink) in sinks.iter_mut().enumerate() {
            let result = panic::catch_unwind(AssertUnwindSafe(|| sink.flush()));
            self.report_sink_result(idx, sink.name(), result);
        }
    }
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the header at the start of a formatted line, banner dashes included
fn header_len(line: &str, header: &str) -> usize {
    if line.starts_with(header) {
        header.len()
    } else if line.strip_prefix("--").is_some_and(|rest| rest.starts_with(header)) {
        header.len() + 2
    } else {
        0
    }
}

/// Text of a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing DebugLogger with a fluent API
///
/// # Example
/// ```
/// use record_debug_logger::prelude::*;
///
/// let record = MemoryRecord::new()
///     .with_names("Quality", "Incident")
///     .with_text("NUMBER", "17");
///
/// let logger = DebugLogger::builder()
///     .record(record)
///     .environment(StaticEnvironment::production())
///     .build();
///
/// assert_eq!(logger.label(), "Quality - Incident #17");
/// assert_eq!(logger.min_level(), LogLevel::Error);
/// ```
pub struct DebugLoggerBuilder {
    config: LoggerConfig,
    record: Option<SharedRecord>,
    environment: Option<Box<dyn EnvironmentInfo>>,
    sinks: Vec<Box<dyn DebugSink>>,
    alert_sinks: Vec<Box<dyn AlertSink>>,
}

impl DebugLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            record: None,
            environment: None,
            sinks: Vec::new(),
            alert_sinks: Vec::new(),
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the instance label template
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Set the minimum level explicitly, bypassing the environment policy
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: impl Into<LogLevel>) -> Self {
        let level: LogLevel = level.into();
        self.config.min_level = Some(String::from(level));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn force(mut self, force: bool) -> Self {
        self.config.force = force;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn link_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.link_separator = separator.into();
        self
    }

    /// Bind the record placeholders resolve against
    #[must_use = "builder methods return a new value"]
    pub fn record<R: RecordLike + Send + Sync + 'static>(mut self, record: R) -> Self {
        self.record = Some(Arc::new(record));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_record(mut self, record: SharedRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Override the environment used for the default minimum level
    ///
    /// Without this the builder reads the variables named by the
    /// configuration's environment policy.
    #[must_use = "builder methods return a new value"]
    pub fn environment<E: EnvironmentInfo + 'static>(mut self, environment: E) -> Self {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Add a debug sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: DebugSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Add an alert sink
    #[must_use = "builder methods return a new value"]
    pub fn alert_sink<S: AlertSink + 'static>(mut self, sink: S) -> Self {
        self.alert_sinks.push(Box::new(sink));
        self
    }

    /// Build the DebugLogger
    pub fn build(self) -> DebugLogger {
        let config = self.config;

        let min_level = match &config.min_level {
            Some(level) => LogLevel::normalize(level),
            None if !config.enabled => LogLevel::None,
            None => {
                let environment = self.environment.unwrap_or_else(|| {
                    Box::new(EnvVarEnvironment::from_env(&config.environment))
                });
                default_min_level(environment.as_ref())
            }
        };

        let templater = Templater::new().with_link_separator(config.link_separator.clone());
        let record = self.record.as_deref().map(|r| r as &dyn RecordLike);

        let template = config.label.clone().or_else(|| {
            record.map(|r| {
                format!(
                    "{} - {} #{{{}}}",
                    r.application_name().unwrap_or_else(|| "?".to_string()),
                    r.form_name().unwrap_or_else(|| "?".to_string()),
                    config.record_number_field
                )
            })
        });

        let metrics = LoggerMetrics::new();
        let label = match template {
            Some(template) => {
                let resolution = templater.resolve_detailed(&template, record);
                metrics.record_lookup_failures(resolution.failures.len());
                resolution.text
            }
            None => String::new(),
        };

        DebugLogger {
            label,
            min_level,
            force: config.force,
            record: self.record,
            templater,
            sinks: Mutex::new(self.sinks),
            alert_sinks: Mutex::new(self.alert_sinks),
            metrics,
        }
    }
}

impl Default for DebugLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
