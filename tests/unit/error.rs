use sentinel::runtime::RuntimeFault;
use sentinel::{sentinel_error, SentinelError};

#[test]
fn test_error_categories() {
    let fault = RuntimeFault::new("boom", 256, "app.rs", 10);
    assert_eq!(SentinelError::escalated(fault).category(), "escalation");
    assert_eq!(SentinelError::sink("disk full").category(), "sink");
    assert_eq!(SentinelError::mail_transport("no mta").category(), "mail");
    assert_eq!(SentinelError::hook_installation("refused").category(), "hook");
    assert_eq!(SentinelError::configuration("bad").category(), "configuration");
    assert_eq!(
        SentinelError::invalid_config_value("key", "0").category(),
        "configuration"
    );
    assert_eq!(SentinelError::internal("odd").category(), "general");
}

#[test]
fn test_error_severities() {
    let fault = RuntimeFault::new("boom", 256, "app.rs", 10);
    assert_eq!(
        SentinelError::escalated(fault).severity(),
        tracing::Level::ERROR
    );
    assert_eq!(
        SentinelError::hook_installation("refused").severity(),
        tracing::Level::ERROR
    );
    assert_eq!(
        SentinelError::sink("disk full").severity(),
        tracing::Level::WARN
    );
    assert_eq!(
        SentinelError::mail_transport("no mta").severity(),
        tracing::Level::WARN
    );
    assert_eq!(
        SentinelError::configuration("bad").severity(),
        tracing::Level::DEBUG
    );
    assert_eq!(
        SentinelError::internal("odd").severity(),
        tracing::Level::DEBUG
    );
}

#[test]
fn test_error_display() {
    assert_eq!(
        SentinelError::sink("disk full").to_string(),
        "Sink write failed: disk full"
    );
    assert_eq!(
        SentinelError::invalid_config_value("interceptor.reserved_kilobytes", "0").to_string(),
        "Invalid configuration value: interceptor.reserved_kilobytes = 0"
    );

    // The escalated variant is transparent over the fault display.
    let fault = RuntimeFault::new("Recoverable fatal error!", 4096, "app.rs", 3);
    assert_eq!(
        SentinelError::escalated(fault).to_string(),
        "Recoverable fatal error! in app.rs on line 3"
    );
}

#[test]
fn test_as_fault() {
    let fault = RuntimeFault::new("boom", 1, "app.rs", 1);
    let error = SentinelError::escalated(fault);
    assert_eq!(error.as_fault().unwrap().runtime_code, 1);
    assert!(SentinelError::sink("disk full").as_fault().is_none());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: SentinelError = io.into();
    assert!(matches!(error, SentinelError::Sink { .. }));
    assert_eq!(error.to_string(), "Sink write failed: denied");
}

#[test]
fn test_anyhow_conversion() {
    let error: SentinelError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, SentinelError::Internal { .. }));
    assert_eq!(error.to_string(), "Internal error: something odd");
}

#[test]
fn test_error_macro() {
    let error = sentinel_error!(sink, "disk full");
    assert!(matches!(error, SentinelError::Sink { .. }));

    let error = sentinel_error!(invalid_config_value, "key", "value");
    assert_eq!(error.category(), "configuration");
}
