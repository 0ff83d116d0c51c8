//! Profiling example
//!
//! Times closures through the logger and shows how errors pass through.
//!
//! Run with: cargo run --example profiling

use record_debug_logger::prelude::*;

fn fibonacci(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

fn main() {
    println!("=== Record Debug Logger - Profiling Example ===\n");

    let logger = DebugLogger::builder()
        .label("profiler-demo")
        .min_level("debug")
        .sink(ConsoleSink::new())
        .build();

    let value = logger.profile("fibonacci(25)", || fibonacci(25));
    println!("\nfibonacci(25) = {}\n", value);

    let parsed: std::result::Result<u32, std::num::ParseIntError> =
        logger.profile_result("parse", || "12x".parse::<u32>());
    println!("\nparse returned: {:?}", parsed);
}
