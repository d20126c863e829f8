use tln_database::Database;
use tln_domain::error::{Classify, ErrorKind};
use tln_user::{MIGRATIONS, Password, SurrealUserRepository, User, UserRepository};

async fn connect(ns: &str) -> Database {
    Database::builder()
        .url("mem://")
        .session(ns, "users")
        .migrations(MIGRATIONS)
        .init()
        .await
        .expect("connect to mem://")
}

fn user(id: &str, username: &str, email: &str) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        first_name: Some("Somchai".to_owned()),
        last_name: None,
    }
}

#[tokio::test]
async fn stores_hashed_password_and_reads_user_back() {
    let db = connect("users_roundtrip_ns").await;
    let repo = SurrealUserRepository::new(db.clone());
    let somchai = user("U1", "somchai", "s@example.com");

    repo.create_user(&somchai, &Password::new("hunter22")).await.unwrap();
    assert_eq!(repo.get_user("U1").await.unwrap(), somchai);

    let matches: Option<bool> = db
        .query("SELECT VALUE crypto::argon2::compare(password, $plain) FROM vendor WHERE uid = 'U1'")
        .bind(("plain", "hunter22"))
        .await
        .unwrap()
        .take::<Vec<bool>>(0)
        .unwrap()
        .into_iter()
        .next();
    assert_eq!(matches, Some(true));
}

#[tokio::test]
async fn username_and_email_are_unique() {
    let repo = SurrealUserRepository::new(connect("users_unique_ns").await);
    repo.create_user(&user("U1", "somchai", "s@example.com"), &Password::new("pw")).await.unwrap();

    let err = repo
        .create_user(&user("U2", "somchai", "other@example.com"), &Password::new("pw"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = repo
        .create_user(&user("U3", "other", "s@example.com"), &Password::new("pw"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn delete_reports_missing_users() {
    let repo = SurrealUserRepository::new(connect("users_delete_ns").await);
    repo.create_user(&user("U1", "somchai", "s@example.com"), &Password::new("pw")).await.unwrap();

    repo.delete_user("U1").await.unwrap();
    assert!(repo.get_user("U1").await.unwrap_err().is_not_found());
    assert!(repo.delete_user("U1").await.unwrap_err().is_not_found());
}
