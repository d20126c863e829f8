use serial_test::serial;
use std::io::Write;
use config::Map;
use tln_kernel::config::{load_config, load_config_with_env};
use tln_kernel::domain::config::ApiConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn reads_values_from_file() {
    let file = write_config(
        r#"
        [server]
        port = 9443

        [database]
        url = "mem://"
        namespace = "tests"
        "#,
    );

    let config: ApiConfig = load_config(Some(file.path())).expect("config loads");
    assert_eq!(config.server.port, 9443);
    assert_eq!(config.database.namespace, "tests");
    assert_eq!(config.database.database, "core");
    assert_eq!(config.server.shutdown_grace_seconds, 30);
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config: ApiConfig =
        load_config(Some(dir.path().join("absent"))).expect("defaults are enough");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.url, "mem://");
    assert!(config.logging.console);
}

#[test]
#[serial]
fn environment_overrides_file() {
    let file = write_config("[server]\nport = 9443\n\n[database]\nnamespace = \"tests\"\n");
    let env = Map::from([
        ("TLN__SERVER__PORT".to_owned(), "7070".to_owned()),
        ("TLN__DATABASE__URL".to_owned(), "rocksdb://data".to_owned()),
        ("OTHER__SERVER__PORT".to_owned(), "1".to_owned()),
    ]);

    let config: ApiConfig = load_config_with_env(Some(file.path()), Some(env)).expect("config loads");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.database.url, "rocksdb://data");
    assert_eq!(config.database.namespace, "tests");
}

#[test]
#[serial]
fn environment_alone_configures_without_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let env = Map::from([("TLN__SERVER__PORT".to_owned(), "9090".to_owned())]);

    let config: ApiConfig =
        load_config_with_env(Some(dir.path().join("absent")), Some(env)).expect("config loads");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.database.url, "mem://");
}

#[test]
#[serial]
fn malformed_value_is_reported() {
    let file = write_config("[server]\nport = \"not-a-port\"\n");
    let err = load_config::<ApiConfig>(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}
