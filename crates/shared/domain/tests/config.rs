use serde_json::json;
use tln_domain::config::{ApiConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use tln_domain::error::ErrorKind;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);
    assert_eq!(server.shutdown_grace_seconds, 30);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "talardnad");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_none());

    let logging = LoggingConfig::default();
    assert!(logging.console);
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 9090 },
        "database": { "url": "ws://db:8000", "namespace": "n", "database": "d", "credentials": null },
        "logging": { "level": "debug", "directory": "/tmp/logs", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.shutdown_grace_seconds, 30);
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn api_config_tolerates_missing_sections() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.database.url, "mem://");
    assert!(cfg.logging.console);
}

#[test]
fn error_kind_serializes_as_wire_code() {
    assert_eq!(serde_json::to_value(ErrorKind::NotFound).unwrap(), json!("NOT_FOUND"));
    assert_eq!(serde_json::to_value(ErrorKind::Conflict).unwrap(), json!("CONFLICT"));
    let parsed: ErrorKind = serde_json::from_value(json!("INTERNAL")).unwrap();
    assert_eq!(parsed, ErrorKind::Internal);
}
