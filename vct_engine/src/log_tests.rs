//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, message: &str) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "vct::Texture2D".to_string(),
        message: message.to_string(),
        file: None,
        line: None,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5, "label width for {:?}", severity);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Debug, "Uploaded 4x4 texture"));
    assert!(line.contains("[DEBUG]"));
    assert!(line.contains("[vct::Texture2D]"));
    assert!(line.ends_with("Uploaded 4x4 texture"));
}

#[test]
fn test_format_entry_with_location() {
    let mut e = entry(LogSeverity::Error, "Upload failed");
    e.file = Some("texture.rs");
    e.line = Some(120);

    let line = DefaultLogger::format_entry(&e);
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("Upload failed (texture.rs:120)"));
}

#[test]
fn test_format_entry_ignores_partial_location() {
    let mut e = entry(LogSeverity::Warn, "partial");
    e.file = Some("texture.rs");

    let line = DefaultLogger::format_entry(&e);
    assert!(line.ends_with("partial"));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_default_severity() {
    assert_eq!(DefaultLogger::default().min_severity, LogSeverity::Debug);
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger::with_min_severity(LogSeverity::Trace);

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        let mut e = entry(severity, "message");
        logger.log(&e);
        e.file = Some("texture.rs");
        e.line = Some(42);
        logger.log(&e);
    }
}

#[test]
fn test_default_logger_filters_below_min_severity() {
    // Filtered entries return before touching the console
    let logger = DefaultLogger::with_min_severity(LogSeverity::Error);
    logger.log(&entry(LogSeverity::Trace, "dropped"));
    logger.log(&entry(LogSeverity::Warn, "dropped"));
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CountingLogger {
    logged_count: std::sync::Mutex<usize>,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        *self.logged_count.lock().unwrap() += 1;
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { logged_count: std::sync::Mutex::new(0) };
    let e = entry(LogSeverity::Info, "test");

    logger.log(&e);
    logger.log(&e);
    assert_eq!(*logger.logged_count.lock().unwrap(), 2);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<Box<dyn Logger>>();
}
