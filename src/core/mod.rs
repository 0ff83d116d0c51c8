//! Core logger types and traits

pub mod caller;
pub mod config;
pub mod environment;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod payload;
pub mod profile;
pub mod record;
pub mod request;
pub mod sink;
pub mod table_info;
pub mod templater;

pub use caller::CallerFrame;
pub use config::LoggerConfig;
pub use environment::{
    default_min_level, EnvVarEnvironment, EnvironmentInfo, EnvironmentPolicy, StaticEnvironment,
};
pub use error::{DebugError, Result};
pub use formatter::{MessageFormatter, MAX_EXPAND_DEPTH};
pub use log_level::{LevelSpec, LogLevel, LEVELS};
pub use logger::{DebugLogger, DebugLoggerBuilder, SharedRecord};
pub use metrics::LoggerMetrics;
pub use payload::MessagePayload;
pub use record::{FieldValue, LookupFailure, RecordLike};
pub use request::LogRequest;
pub use sink::{AlertSink, DebugSink};
pub use table_info::{ColumnInfo, IndexInfo, MetadataRow, MetadataSource, TableInfo};
pub use templater::{Resolution, Templater, DEFAULT_LINK_SEPARATOR, NO_LINKS};
