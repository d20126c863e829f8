use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use tln_domain::config::LoggingConfig;
use tln_logger::Logger;

#[test]
fn json_file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config("integration-file-logging", &config)?.init()?;
    assert!(logger.guard().is_some());

    tracing::info!(market = "Central Market", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"market\":\"Central Market\""), "file output should be JSON");

    Ok(())
}
