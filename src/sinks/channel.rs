//! Channel sink: hands lines to a consumer on another thread

use crate::core::{DebugError, DebugSink, LogLevel, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Forwards each line over a crossbeam channel.
///
/// # Example
///
/// ```
/// use record_debug_logger::sinks::ChannelSink;
/// use record_debug_logger::core::{DebugSink, LogLevel};
///
/// let (mut sink, receiver) = ChannelSink::unbounded();
/// sink.write(LogLevel::Info, "hello").unwrap();
/// assert_eq!(receiver.recv().unwrap(), (LogLevel::Info, "hello".to_string()));
/// ```
pub struct ChannelSink {
    sender: Sender<(LogLevel, String)>,
}

impl ChannelSink {
    pub fn new(sender: Sender<(LogLevel, String)>) -> Self {
        Self { sender }
    }

    /// Create a sink together with the receiving end of an unbounded channel
    pub fn unbounded() -> (Self, Receiver<(LogLevel, String)>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }
}

impl DebugSink for ChannelSink {
    fn write(&mut self, level: LogLevel, line: &str) -> Result<()> {
        self.sender
            .send((level, line.to_string()))
            .map_err(|_| DebugError::sink("channel", "receiver disconnected"))
    }

    fn name(&self) -> &str {
        "channel"
    }
}
