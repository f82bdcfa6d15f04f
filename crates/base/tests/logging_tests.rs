use base::{StdoutLogger, init_stdout_logger, logging::format_timestamp};
use log::Log;

#[test]
fn test_stdout_logger_formats_location_and_level() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("producer.rs"))
        .line(Some(42))
        .args(format_args!("grab retries exhausted"))
        .build();

    let line = StdoutLogger::format_record(&record);

    assert!(line.contains("[WARN]"));
    assert!(line.contains("producer.rs:42"));
    assert!(line.ends_with("- grab retries exhausted"));
    assert!(line.contains("[thread:"));
}

#[test]
fn test_stdout_logger_missing_location() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .args(format_args!("no location"))
        .build();

    let line = StdoutLogger::format_record(&record);
    assert!(line.contains("unknown:0"));
}

#[test]
fn test_stdout_logger_log_and_flush_do_not_panic() {
    let logger = StdoutLogger;
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .file(Some("test.rs"))
        .line(Some(1))
        .args(format_args!("test message"))
        .build();
    logger.log(&record);
    logger.flush();
}

#[test]
fn test_init_stdout_logger_is_idempotent() {
    init_stdout_logger();
    init_stdout_logger();
    log::info!("logged after double init");
}

#[test]
fn test_format_timestamp_structure() {
    let ts = format_timestamp();
    // YYYY-MM-DDTHH:MM:SS
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");
}
