//! Logging configuration tests.

use std::sync::Once;

use fasthttp::{try_init_logging, LogConfig, LogFormat, LogLevel};

static INIT: Once = Once::new();

/// Install the global subscriber at most once across the test binary.
fn setup_logging(config: &LogConfig) {
    INIT.call_once(|| try_init_logging(config));
}

#[test]
fn log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.show_target);
    assert!(!config.show_thread_ids);
}

#[test]
fn log_config_development() {
    let config = LogConfig::development();
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn log_config_production() {
    let config = LogConfig::production();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.show_thread_ids);
}

#[test]
fn log_level_conversion() {
    use tracing::Level;

    assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
    assert_eq!(Level::from(LogLevel::Info), Level::INFO);
    assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
    assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
}

#[test]
fn init_is_idempotent_via_try() {
    setup_logging(&LogConfig::default());
    // A second call must not panic.
    try_init_logging(&LogConfig::production());
}
