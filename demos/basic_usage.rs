//! Basic logger usage example
//!
//! Demonstrates level gating, labels and forcing with the console sink.
//!
//! Run with: cargo run --example basic_usage

use record_debug_logger::prelude::*;

fn main() {
    println!("=== Record Debug Logger - Basic Usage Example ===\n");

    let mut logger = DebugLogger::builder()
        .label("basic-demo")
        .min_level("debug")
        .sink(ConsoleSink::new())
        .build();

    println!("1. Logging at different levels:");
    logger.message("This is a debug message").log();
    logger.message("This is an info message").level("info").log();
    logger.message("This is a warning message").level("warn").log();
    logger.message("This is an error message").level("error").log();

    println!("\n2. Raising the minimum level to ERROR:");
    logger.set_min_level("error");
    logger.message("Info message (hidden)").level("info").log();
    logger.message("Forced info message (visible)").level("info").force().log();
    logger.message("Error message (visible)").level("error").log();

    println!("\n3. Expanded payloads:");
    logger
        .message(MessagePayload::mapping([("retries", 3), ("timeout_ms", 250)]))
        .label("settings")
        .expand()
        .level("error")
        .hide_caller()
        .log();

    println!("\n=== Example completed successfully! ===");
}
