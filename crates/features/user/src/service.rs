use crate::error::UserError;
use crate::model::{RegisterRequest, User};
use crate::repository::UserRepository;
use tln_kernel::prelude::{Caller, Classify, ErrorKind};
use tracing::{info, instrument, warn};

const USER_NOT_FOUND: &str = "User not found";
const USER_EXISTS: &str = "User already exists";
const NOT_OWNER: &str = "You are not authorized to delete this user";

/// Use cases of the users slice.
#[derive(Debug, Clone)]
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a user under a freshly generated id.
    ///
    /// # Errors
    /// * [`UserError::Validation`] if a required field is blank.
    /// * [`UserError::Conflict`] if the username or email is taken.
    /// * [`UserError::Internal`] for any other store failure.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> Result<User, UserError> {
        if let Some(field) = request.missing_field() {
            return Err(UserError::Validation {
                message: format!("{field} is required").into(),
                context: None,
            });
        }

        let (user, password) = User::from_request(request);

        self.repo.create_user(&user, &password).await.map_err(|e| match e.kind() {
            ErrorKind::Conflict => {
                UserError::Conflict { message: USER_EXISTS.into(), context: None }
            }
            _ => UserError::internal("Failed to create user", e),
        })?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// # Errors
    /// [`UserError::NotFound`] for an unknown id, [`UserError::Internal`] otherwise.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> Result<User, UserError> {
        self.repo.get_user(id).await.map_err(|e| {
            if e.is_not_found() {
                UserError::NotFound { message: USER_NOT_FOUND.into(), context: None }
            } else {
                UserError::internal("Failed to load user", e)
            }
        })
    }

    /// Deletes the caller's own account.
    ///
    /// # Errors
    /// * [`UserError::Forbidden`] if `id` is not the caller.
    /// * [`UserError::NotFound`] if the user does not exist.
    /// * [`UserError::Internal`] for any other store failure.
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn delete_user(&self, caller: &Caller, id: &str) -> Result<(), UserError> {
        if !caller.is(id) {
            warn!("Refused to delete another user's account");
            return Err(UserError::Forbidden { message: NOT_OWNER.into(), context: None });
        }

        self.repo.delete_user(id).await.map_err(|e| {
            if e.is_not_found() {
                UserError::NotFound { message: USER_NOT_FOUND.into(), context: None }
            } else {
                UserError::internal("Failed to delete user", e)
            }
        })?;

        info!("User deleted");
        Ok(())
    }
}
