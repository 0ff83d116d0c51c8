//! # Record Debug Logger
//!
//! Contextual debug logging for record-centric applications.
//!
//! ## Features
//!
//! - **Level Gating**: Aliased severity levels with an environment-aware default
//! - **Field Placeholders**: `{FIELD}` tokens resolved against a bound record
//! - **Expanded Messages**: Mappings and sequences rendered one line per entry
//! - **Caller Context**: Call-site capture through `caller!` and `#[track_caller]`
//! - **Isolated Sinks**: A failing sink never reaches the calling code

pub mod core;
pub mod macros;
pub mod records;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AlertSink, CallerFrame, DebugError, DebugLogger, DebugLoggerBuilder, DebugSink,
        EnvVarEnvironment, EnvironmentInfo, EnvironmentPolicy, FieldValue, LogLevel, LogRequest,
        LoggerConfig, LoggerMetrics, LookupFailure, MessageFormatter, MessagePayload,
        MetadataSource, RecordLike, Result, StaticEnvironment, TableInfo, Templater,
    };
    pub use crate::records::MemoryRecord;
    pub use crate::sinks::{ChannelSink, ConsoleSink, MemoryAlertSink, MemorySink};
}

pub use crate::core::{
    AlertSink, CallerFrame, DebugError, DebugLogger, DebugLoggerBuilder, DebugSink,
    EnvVarEnvironment, EnvironmentInfo, EnvironmentPolicy, FieldValue, LogLevel, LogRequest,
    LoggerConfig, LoggerMetrics, LookupFailure, MessageFormatter, MessagePayload, MetadataSource,
    RecordLike, Result, StaticEnvironment, TableInfo, Templater,
};
pub use records::MemoryRecord;
pub use sinks::{ChannelSink, ConsoleSink, MemoryAlertSink, MemorySink};
