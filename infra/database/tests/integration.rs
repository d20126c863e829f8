use tln_database::*;
use tln_domain::error::{Classify, ErrorKind};

const SCHEMA_V1: &[Migration] = &[Migration::new(
    "probe",
    "0001",
    "DEFINE TABLE IF NOT EXISTS probe SCHEMAFULL;
     DEFINE FIELD IF NOT EXISTS uid ON probe TYPE string;
     DEFINE INDEX IF NOT EXISTS probe_uid_unique ON probe FIELDS uid UNIQUE;",
)];

async fn connect(ns: &str) -> Database {
    Database::builder()
        .url("mem://")
        .session(ns, "test_db")
        .migrations(SCHEMA_V1)
        .init()
        .await
        .expect("connect to mem://")
}

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = connect("health_ns").await;

    db.ping().await.expect("health check");
    assert_eq!(db.namespace(), "health_ns");
    assert_eq!(db.database(), "test_db");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn migrations_are_recorded_once() {
    let db = connect("migrations_ns").await;

    let mut response = db
        .query("SELECT slice, version, checksum FROM migration")
        .await
        .expect("query migrations");
    let applied: Vec<AppliedMigration> = response.take(0).expect("decode migrations");

    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].slice, "probe");
    assert_eq!(applied[0].checksum, SCHEMA_V1[0].checksum());
}

#[tokio::test]
async fn unique_index_violation_is_classified_as_conflict() {
    let db = connect("unique_ns").await;

    let insert = "CREATE probe SET uid = $uid";
    db.query(insert).bind(("uid", "p-1")).await.expect("first insert").check().expect("first ok");

    let err = db
        .query(insert)
        .bind(("uid", "p-1"))
        .await
        .expect("second insert executes")
        .check()
        .map_err(surrealdb::Error::from)
        .map_err(|e| DatabaseError::from_write(e, "Creating probe"))
        .unwrap_err();

    assert!(matches!(err, DatabaseError::Conflict { .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn not_found_shorthand_is_classified() {
    let err = DatabaseError::not_found("probe p-404");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Record not found: probe p-404");
}
