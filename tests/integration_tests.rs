//! Integration tests for record_debug_logger
//!
//! These tests verify:
//! - Level gating and forcing through the façade
//! - Placeholder resolution against bound and per-call records
//! - Expanded formatting of mappings and sequences
//! - Alert routing to record-scoped warning sinks
//! - Caller capture
//! - Sink isolation and configuration loading

use record_debug_logger::core::{FieldValue, LookupFailure};
use record_debug_logger::prelude::*;
use record_debug_logger::{caller, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

fn incident() -> MemoryRecord {
    MemoryRecord::new()
        .with_names("Quality", "Incident")
        .with_identity("INC-0042")
        .with_text("NUMBER", "42")
        .with_text("TITLE", "Pump failure")
        .with_links("OWNERS", ["Alice", "Bob"])
        .with_links("CAPA_LINKS", Vec::<String>::new())
        .with_attachment("EVIDENCE")
}

fn logger_for(record: MemoryRecord, min_level: &str) -> (DebugLogger, MemorySink, MemoryAlertSink) {
    let sink = MemorySink::new();
    let alerts = MemoryAlertSink::new();
    let logger = DebugLogger::builder()
        .record(record)
        .min_level(min_level)
        .sink(sink.clone())
        .alert_sink(alerts.clone())
        .build();
    (logger, sink, alerts)
}

#[test]
fn test_default_label_from_record() {
    let (logger, sink, _) = logger_for(incident(), "debug");
    assert_eq!(logger.label(), "Quality - Incident #42");

    logger.message("opened").hide_caller().log();
    assert_eq!(sink.lines(), vec!["[DEBUG] Quality - Incident #42: opened"]);
}

#[test]
fn test_placeholders_in_message() {
    let (logger, sink, _) = logger_for(incident(), "debug");

    logger
        .message("{TITLE} owned by {OWNERS}; CAPA: {CAPA_LINKS}; files {EVIDENCE}")
        .label("summary")
        .hide_caller()
        .log();

    assert_eq!(
        sink.lines(),
        vec!["[DEBUG] Quality - Incident #42 :: summary: Pump failure owned by Alice, Bob; CAPA: No Links; files {EVIDENCE}"]
    );
}

#[test]
fn test_custom_link_separator() {
    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .label("{OWNERS}")
        .link_separator(" & ")
        .record(incident())
        .min_level("debug")
        .sink(sink.clone())
        .build();
    assert_eq!(logger.label(), "Alice & Bob");
}

#[test]
fn test_per_call_record_override() {
    let (logger, sink, _) = logger_for(incident(), "debug");
    let other = MemoryRecord::new().with_text("TITLE", "Valve leak");

    logger.message("{TITLE}").record(&other).hide_caller().log();
    logger.message("{TITLE}").hide_caller().log();

    let lines = sink.lines();
    assert!(lines[0].ends_with(": Valve leak"));
    assert!(lines[1].ends_with(": Pump failure"));
}

#[test]
fn test_inline_mapping_text_not_resolved() {
    let (logger, sink, _) = logger_for(incident(), "debug");
    logger.message("payload={'TITLE': 1}").hide_caller().log();
    assert!(sink.lines()[0].ends_with("payload={'TITLE': 1}"));
    assert_eq!(logger.metrics().lookup_failures(), 0);
}

#[test]
fn test_expanded_mapping_resolves_each_line() {
    let (logger, sink, _) = logger_for(incident(), "debug");
    let mut details = BTreeMap::new();
    details.insert("title", "{TITLE}");
    details.insert("number", "{NUMBER}");

    logger.message(details).label("fields").expand().hide_caller().log();

    assert_eq!(
        sink.lines(),
        vec![
            "--[DEBUG] Quality - Incident #42 :: fields--",
            "number: 42",
            "title: Pump failure",
        ]
    );
}

#[test]
fn test_min_level_error_drops_info() {
    let (logger, sink, _) = logger_for(incident(), "error");

    logger.message("routine").level("info").log();
    assert!(sink.is_empty());

    logger.message("routine").level("info").force().log();
    assert_eq!(sink.len(), 1);

    logger.message("broken").level("ERR").hide_caller().log();
    assert_eq!(sink.lines()[1], "[ERROR] Quality - Incident #42: broken");
}

#[test]
fn test_unknown_level_treated_as_debug() {
    let (logger, sink, _) = logger_for(incident(), "info");
    logger.message("typo").level("wraning").log();
    assert!(sink.is_empty());
}

#[test]
fn test_logger_level_none_and_force_flag() {
    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .min_level("off")
        .force(true)
        .sink(sink.clone())
        .build();
    logger.message("forced by config").level("debug").hide_caller().log();
    assert_eq!(sink.lines(), vec!["[DEBUG]: forced by config"]);
}

#[test]
fn test_alert_without_target_never_calls_sink() {
    let (logger, _, alerts) = logger_for(incident(), "debug");
    logger.message("warn everyone").level("error").force().alert(None);
    assert!(alerts.is_empty());
    assert_eq!(logger.metrics().alerts_emitted(), 0);
}

#[test]
fn test_alert_with_target() {
    let (logger, sink, alerts) = logger_for(incident(), "debug");
    let target = incident();

    logger
        .message(vec!["first", "second"])
        .label("checks")
        .expand()
        .alert(Some(&target));

    let warnings = alerts.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].line, "[DEBUG] Quality - Incident #42 :: checks - 0:first");
    assert_eq!(warnings[1].record.as_deref(), Some("INC-0042"));
    assert!(sink.is_empty(), "alerts do not go to debug sinks");
}

#[test]
fn test_alert_respects_gate() {
    let (logger, _, alerts) = logger_for(incident(), "error");
    let target = incident();
    logger.alert("minor", Some(&target));
    assert!(alerts.is_empty());
}

#[test]
fn test_caller_frame_in_header() {
    struct Inspector;
    impl Inspector {
        fn review(&self, logger: &DebugLogger, stage: &str) {
            logger.message("reviewing").caller(caller!(stage)).log();
        }
    }

    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .label("qa")
        .min_level("debug")
        .sink(sink.clone())
        .build();
    Inspector.review(&logger, "final");

    let line = &sink.lines()[0];
    assert!(
        line.starts_with("[DEBUG] qa | Inspector.review(stage=\"final\") @ "),
        "{}",
        line
    );
    assert!(line.ends_with(": reviewing"));
}

#[test]
fn test_warn_macro_captures_function() {
    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .label("qa")
        .min_level("debug")
        .sink(sink.clone())
        .build();

    warn!(logger, "{} retries left", 2);
    let line = &sink.lines()[0];
    assert!(line.starts_with("[WARNING] qa | test_warn_macro_captures_function() @ "));
    assert!(line.ends_with(": 2 retries left"));
}

#[test]
fn test_channel_sink_receives_lines() {
    let (channel, receiver) = ChannelSink::unbounded();
    let logger = DebugLogger::builder()
        .label("bridge")
        .min_level("info")
        .sink(channel)
        .build();

    logger.message("hello").level("warning").hide_caller().log();
    assert_eq!(
        receiver.try_recv().unwrap(),
        (LogLevel::Warning, "[WARNING] bridge: hello".to_string())
    );
}

#[test]
fn test_shared_record_visible_to_logger() {
    let record: Arc<MemoryRecord> = Arc::new(incident());
    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .shared_record(record.clone())
        .min_level("debug")
        .sink(sink.clone())
        .build();

    assert_eq!(
        logger.record().map(|r| r.field("NUMBER")),
        Some(Ok(FieldValue::Text("42".into())))
    );
    assert_eq!(record.field("UNKNOWN"), Err(LookupFailure::NotFound));
}

#[test]
fn test_config_from_json() {
    let config = LoggerConfig::from_json_str(
        r#"{
            "label": "{TITLE}",
            "min_level": "WARN",
            "link_separator": "; "
        }"#,
    )
    .unwrap();

    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .config(config)
        .record(incident())
        .sink(sink.clone())
        .build();

    assert_eq!(logger.label(), "Pump failure");
    assert_eq!(logger.min_level(), LogLevel::Warning);
    assert_eq!(logger.templater().link_separator(), "; ");
}

#[test]
fn test_production_environment_defaults_to_errors() {
    let sink = MemorySink::new();
    let logger = DebugLogger::builder()
        .label("prod")
        .environment(StaticEnvironment::production())
        .sink(sink.clone())
        .build();

    logger.message("noise").level("warning").log();
    logger.message("failure").level("error").hide_caller().log();
    assert_eq!(sink.lines(), vec!["[ERROR] prod: failure"]);
}

#[test]
fn test_privileged_caller_sees_debug_in_production() {
    let logger = DebugLogger::builder()
        .environment(StaticEnvironment::production().privileged(true))
        .build();
    assert_eq!(logger.min_level(), LogLevel::Debug);
}
