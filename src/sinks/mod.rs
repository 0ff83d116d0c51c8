//! Sink implementations

pub mod channel;
pub mod console;
pub mod memory;

pub use channel::ChannelSink;
pub use console::ConsoleSink;
pub use memory::{CapturedLine, MemoryAlertSink, MemorySink, Warning};

pub use crate::core::{AlertSink, DebugSink};
