//! Wall-clock profiling of closures through a logger
//!
//! When debug output is gated off the closure simply runs. Panics and
//! returned errors are logged and then handed back to the caller unchanged.

use super::log_level::LogLevel;
use super::logger::{panic_message, DebugLogger};
use super::payload::MessagePayload;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

impl DebugLogger {
    /// Run `f`, logging how long it took
    ///
    /// # Example
    ///
    /// ```
    /// use record_debug_logger::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = DebugLogger::builder().min_level("debug").sink(sink.clone()).build();
    ///
    /// let sum = logger.profile("sum", || (1..=10).sum::<u32>());
    /// assert_eq!(sum, 55);
    /// assert!(sink.lines()[0].ends_with("Starting profile run for: ProfilerFunction -> sum"));
    /// ```
    pub fn profile<F, R>(&self, name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled_for(LogLevel::Debug) {
            return f();
        }

        let label = format!("ProfilerFunction -> {}", name);
        self.message(format!("Starting profile run for: {}", label))
            .label("Starting profile")
            .hide_caller()
            .log();

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(f));
        let elapsed = start.elapsed();

        match outcome {
            Ok(value) => {
                self.log_profile_results(&label, elapsed);
                value
            }
            Err(payload) => {
                self.message(format!(
                    "Error during profiled execution: {}",
                    panic_message(payload.as_ref())
                ))
                .label("ProfilerError")
                .hide_caller()
                .log();
                panic::resume_unwind(payload)
            }
        }
    }

    /// Like [`profile`](Self::profile) for fallible closures: an `Err` is
    /// logged and returned as is
    pub fn profile_result<F, T, E>(&self, name: &str, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: Display,
    {
        let result = self.profile(name, f);
        if let Err(e) = &result {
            if self.enabled_for(LogLevel::Debug) {
                self.message(format!("Error during profiled execution: {}", e))
                    .label("ProfilerError")
                    .hide_caller()
                    .log();
            }
        }
        result
    }

    fn log_profile_results(&self, label: &str, elapsed: Duration) {
        let results = MessagePayload::mapping([
            ("elapsed", format!("{:?}", elapsed)),
            ("elapsed_micros", elapsed.as_micros().to_string()),
        ]);
        self.message(results)
            .label(format!("{} - Profile Results:", label))
            .expand()
            .hide_caller()
            .log();
    }
}
