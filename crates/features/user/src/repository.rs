use crate::model::{Password, User};
use std::future::Future;
use tln_database::DatabaseError;

/// Persistence port of the users slice.
pub trait UserRepository: Send + Sync + 'static {
    /// Stores the user. Hashing the password is the store's job.
    fn create_user(
        &self,
        user: &User,
        password: &Password,
    ) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    fn get_user(&self, id: &str) -> impl Future<Output = Result<User, DatabaseError>> + Send;

    /// Fails with [`DatabaseError::NotFound`] when nothing was deleted.
    fn delete_user(&self, id: &str) -> impl Future<Output = Result<(), DatabaseError>> + Send;
}
