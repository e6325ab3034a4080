use std::fs;
use std::sync::Arc;

use sentinel::{
    DefaultFormatter, EmailHandler, FileHandler, Handler, LogContext, MemoryHandler, SentinelError,
};

use crate::common::RecordingTransport;

#[test]
fn test_file_handler_appends_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentinel.log");
    let handler = FileHandler::new(Arc::new(DefaultFormatter::new()), &path);

    handler.log("notice", "first", &LogContext::new()).unwrap();
    handler.log("critical", "second", &LogContext::new()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("] [notice] first"));
    assert!(lines[1].ends_with("] [critical] second"));
    assert_eq!(handler.destination(), path.as_path());
}

#[test]
fn test_file_handler_reports_unwritable_destination() {
    let handler = FileHandler::new(
        Arc::new(DefaultFormatter::new()),
        "/nonexistent-dir/sentinel.log",
    );

    let result = handler.log("notice", "lost", &LogContext::new());
    assert!(matches!(result, Err(SentinelError::Sink { .. })));
}

#[test]
fn test_email_handler_sends_formatted_body() {
    let transport = Arc::new(RecordingTransport::new());
    let handler = EmailHandler::new(
        Arc::new(DefaultFormatter::new()),
        "admin@example.com",
        transport.clone(),
    );

    handler.log("critical", "mail me", &LogContext::new()).unwrap();

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (recipient, body, headers) = &sent[0];
    assert_eq!(recipient, "admin@example.com");
    assert!(body.ends_with("] [critical] mail me\n"));
    assert!(headers.is_none());
    assert_eq!(handler.recipient(), "admin@example.com");
}

#[test]
fn test_email_handler_carries_extra_headers() {
    let transport = Arc::new(RecordingTransport::new());
    let handler = EmailHandler::new(
        Arc::new(DefaultFormatter::new()),
        "admin@example.com",
        transport.clone(),
    );
    handler.set_extra_headers("From: sentinel@example.com");

    handler.log("alert", "headers too", &LogContext::new()).unwrap();

    let sent = transport.sent.lock().unwrap();
    assert_eq!(
        sent[0].2.as_deref(),
        Some("From: sentinel@example.com")
    );
}

#[test]
fn test_memory_handler_capture_and_clear() {
    let handler = MemoryHandler::new();

    handler.log("notice", "one", &LogContext::new()).unwrap();
    handler.log("notice", "two", &LogContext::new()).unwrap();
    handler.log("warning", "three", &LogContext::new()).unwrap();

    assert_eq!(handler.records_for("notice"), vec!["one", "two"]);
    assert!(handler.has_records_for("warning"));
    assert!(!handler.has_records_for("critical"));
    assert_eq!(handler.total(), 3);

    handler.clear();
    assert_eq!(handler.total(), 0);
}
