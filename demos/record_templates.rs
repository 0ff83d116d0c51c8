//! Placeholder resolution example
//!
//! Binds an in-memory record and shows field placeholders, link fields,
//! lookup failures and record-scoped alerts.
//!
//! Run with: cargo run --example record_templates

use record_debug_logger::prelude::*;

fn main() {
    println!("=== Record Debug Logger - Record Templates Example ===\n");

    let record = MemoryRecord::new()
        .with_names("Quality", "Incident")
        .with_identity("INC-0042")
        .with_text("NUMBER", "42")
        .with_text("TITLE", "Pump failure")
        .with_links("OWNERS", ["Alice", "Bob"])
        .with_attachment("EVIDENCE");

    let alerts = MemoryAlertSink::new();
    let logger = DebugLogger::builder()
        .record(record.clone())
        .environment(StaticEnvironment::development())
        .sink(ConsoleSink::new())
        .alert_sink(alerts.clone())
        .build();

    println!("Instance label: {}\n", logger.label());

    logger
        .message("{TITLE} is owned by {OWNERS}; evidence stays {EVIDENCE}")
        .label("summary")
        .hide_caller()
        .log();

    logger.message("{NO_SUCH_FIELD} stays literal").hide_caller().log();

    logger
        .message("Owner sign-off missing for {TITLE}")
        .alert(Some(&record));

    for warning in alerts.warnings() {
        println!("warning on {:?}: {}", warning.record, warning.line);
    }

    println!("\nLookup failures: {}", logger.metrics().lookup_failures());
}
