use std::sync::{Arc, Mutex};

use sentinel::{LogContext, Logger, MemoryHandler, SentinelError, Severity};

use crate::common::{FailingHandler, TaggedHandler};

#[test]
fn test_logging_reaches_default_handler() {
    let handler = Arc::new(MemoryHandler::new());
    let logger = Logger::new(handler.clone());

    logger
        .log("LEVEL", "logging message", &LogContext::new())
        .unwrap();

    assert_eq!(handler.records_for("LEVEL"), vec!["logging message"]);
}

#[test]
fn test_add_handler_exact_level_only() {
    let default = Arc::new(MemoryHandler::new());
    let logger = Logger::new(default.clone());

    let debug = Arc::new(MemoryHandler::new());
    logger.add_handler("DEBUG", debug.clone());

    logger.log("LEVEL", "log message", &LogContext::new()).unwrap();
    logger.log("DEBUG", "debug message", &LogContext::new()).unwrap();

    assert_eq!(default.records_for("LEVEL"), vec!["log message"]);
    assert_eq!(default.records_for("DEBUG"), vec!["debug message"]);

    // No hierarchy: the DEBUG handler never sees other levels.
    assert!(!debug.has_records_for("LEVEL"));
    assert_eq!(debug.records_for("DEBUG"), vec!["debug message"]);
}

#[test]
fn test_set_default_handler_bypasses_previous() {
    let default = Arc::new(MemoryHandler::new());
    let logger = Logger::new(default.clone());

    let other = Arc::new(MemoryHandler::new());
    logger.set_default_handler(other.clone());
    logger
        .log("LEVEL", "logging message", &LogContext::new())
        .unwrap();

    assert_eq!(default.total(), 0);
    assert_eq!(other.records_for("LEVEL"), vec!["logging message"]);
}

#[test]
fn test_supplementary_handlers_run_in_registration_order() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::new(Arc::new(TaggedHandler {
        tag: "default",
        events: events.clone(),
    }));

    logger.add_handler(
        "critical",
        Arc::new(TaggedHandler {
            tag: "first",
            events: events.clone(),
        }),
    );
    logger.add_handler(
        "critical",
        Arc::new(TaggedHandler {
            tag: "second",
            events: events.clone(),
        }),
    );

    logger.log("critical", "boom", &LogContext::new()).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec!["default".to_string(), "first".to_string(), "second".to_string()]
    );
}

#[test]
fn test_handler_error_propagates() {
    let default = Arc::new(MemoryHandler::new());
    let logger = Logger::new(default.clone());
    logger.add_handler("critical", Arc::new(FailingHandler));

    // Other levels are untouched by the failing handler.
    logger.log("notice", "fine", &LogContext::new()).unwrap();

    let result = logger.log("critical", "boom", &LogContext::new());
    assert!(matches!(result, Err(SentinelError::Sink { .. })));

    // The default handler had already been invoked before the failure.
    assert_eq!(default.records_for("critical"), vec!["boom"]);
}

#[test]
fn test_failing_default_handler_propagates() {
    let logger = Logger::new(Arc::new(FailingHandler));
    let result = logger.log("LEVEL", "lost", &LogContext::new());
    assert!(matches!(result, Err(SentinelError::Sink { .. })));
}

#[test]
fn test_severity_convenience_methods() {
    let handler = Arc::new(MemoryHandler::new());
    let logger = Logger::new(handler.clone());

    logger.notice("n", &LogContext::new()).unwrap();
    logger.warning("w", &LogContext::new()).unwrap();
    logger.critical("c", &LogContext::new()).unwrap();

    assert_eq!(handler.records_for("notice"), vec!["n"]);
    assert_eq!(handler.records_for("warning"), vec!["w"]);
    assert_eq!(handler.records_for("critical"), vec!["c"]);
}

#[test]
fn test_severity_parsing() {
    assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
    assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
    assert!(matches!(
        "loud".parse::<Severity>(),
        Err(SentinelError::Configuration { .. })
    ));
    assert_eq!(Severity::Emergency.as_str(), "emergency");
}

#[test]
fn test_log_context_preserves_order() {
    let context = sentinel::log_context! {
        "FOO" => "foo",
        "BAR" => "bar",
    };

    assert_eq!(context.len(), 2);
    let keys: Vec<&str> = context.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["FOO", "BAR"]);
    assert_eq!(context.to_string(), "FOO=\"foo\" BAR=\"bar\"");
}
