use tln_domain::config::LoggingConfig;
use tln_logger::Logger;

#[test]
fn default_config_logs_to_console_without_guard() {
    let logger = Logger::from_config("integration-console-only", &LoggingConfig::default())
        .expect("default config is valid")
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
