use crate::model::{Password, User};
use crate::repository::UserRepository;
use surrealdb::types::SurrealValue;
use tln_database::{Database, DatabaseError, DatabaseErrorExt};

/// [`UserRepository`] backed by the `vendor` table.
///
/// Passwords are hashed inside the query with `crypto::argon2::generate`.
#[derive(Debug, Clone)]
pub struct SurrealUserRepository {
    db: Database,
}

impl SurrealUserRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, SurrealValue)]
struct UserRecord {
    uid: String,
    username: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.uid,
            username: record.username,
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

impl UserRepository for SurrealUserRepository {
    async fn create_user(&self, user: &User, password: &Password) -> Result<(), DatabaseError> {
        const CONTEXT: &str = "Creating user";

        self.db
            .query(
                "CREATE vendor SET uid = $uid, username = $username, email = $email, \
                 password = crypto::argon2::generate($password), \
                 first_name = $first_name, last_name = $last_name",
            )
            .bind(("uid", user.id.clone()))
            .bind(("username", user.username.clone()))
            .bind(("email", user.email.clone()))
            .bind(("password", password.expose().to_owned()))
            .bind(("first_name", user.first_name.clone()))
            .bind(("last_name", user.last_name.clone()))
            .await
            .map_err(|e| DatabaseError::from_write(e, CONTEXT))?
            .check()
            .map_err(|e| DatabaseError::from_write(surrealdb::Error::from(e), CONTEXT))?;

        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let records = self
            .db
            .query(
                "SELECT uid, username, email, first_name, last_name FROM vendor \
                 WHERE uid = $id LIMIT 1",
            )
            .bind(("id", id.to_owned()))
            .await
            .context("Loading user")?
            .take::<Vec<UserRecord>>(0)
            .context("Parsing user")?;

        records
            .into_iter()
            .next()
            .map(User::from)
            .ok_or_else(|| DatabaseError::not_found(format!("user {id}")))
    }

    async fn delete_user(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db
            .query(
                "LET $found = (SELECT VALUE uid FROM vendor WHERE uid = $id); \
                 DELETE vendor WHERE uid = $id; \
                 RETURN $found;",
            )
            .bind(("id", id.to_owned()))
            .await
            .context("Deleting user")?
            .take::<Vec<String>>(2)
            .context("Parsing deleted user")?;

        if deleted.is_empty() {
            return Err(DatabaseError::not_found(format!("user {id}")));
        }
        Ok(())
    }
}
