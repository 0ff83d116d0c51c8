//! Call-site capture and logging macros.
//!
//! `caller!` builds a [`CallerFrame`](crate::core::CallerFrame) for the
//! enclosing function. The level macros format a message like `format!` and
//! log it with that frame attached.
//!
//! # Examples
//!
//! ```
//! use record_debug_logger::prelude::*;
//! use record_debug_logger::{caller, info};
//!
//! let sink = MemorySink::new();
//! let logger = DebugLogger::builder()
//!     .label("orders")
//!     .min_level("debug")
//!     .sink(sink.clone())
//!     .build();
//!
//! let qty = 3;
//! info!(logger, "Submitting {} items", qty);
//!
//! let frame = caller!(qty);
//! assert_eq!(frame.args[0], ("qty".to_string(), "3".to_string()));
//! assert_eq!(sink.lines().len(), 1);
//! ```

/// Path of the enclosing function as reported by `type_name`.
#[doc(hidden)]
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Capture the current call site, optionally with argument renderings.
///
/// # Examples
///
/// ```
/// use record_debug_logger::caller;
///
/// fn transfer(amount: u64, to: &str) -> record_debug_logger::core::CallerFrame {
///     caller!(amount, to)
/// }
///
/// let frame = transfer(10, "acct-9");
/// assert_eq!(frame.function.as_deref(), Some("transfer"));
/// assert_eq!(frame.args[1].1, "\"acct-9\"");
/// ```
#[macro_export]
macro_rules! caller {
    ($($arg:expr),* $(,)?) => {
        $crate::core::CallerFrame::from_path($crate::function_path!(), file!(), line!())
            $(.with_arg(stringify!($arg), format!("{:?}", &$arg)))*
    };
}

/// Log a message with automatic formatting and caller capture.
///
/// # Examples
///
/// ```
/// # use record_debug_logger::prelude::*;
/// # let logger = DebugLogger::builder().min_level("debug").build();
/// use record_debug_logger::log;
/// log!(logger, "info", "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger
            .message(format!($($arg)+))
            .level($level)
            .caller($crate::caller!())
            .log()
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use record_debug_logger::prelude::*;
/// # let logger = DebugLogger::builder().min_level("debug").build();
/// use record_debug_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
