//! Users feature slice: registration, lookup, and deletion of one's own account.

mod error;
mod handlers;
mod migrations;
mod model;
mod repository;
mod service;
mod surreal;

pub use error::{UserError, UserErrorExt};
pub use migrations::MIGRATIONS;
pub use model::{DeleteUserResponse, Password, RegisterRequest, User};
pub use repository::UserRepository;
pub use service::UserService;
pub use surreal::SurrealUserRepository;

use tln_database::Database;
use tln_kernel::domain::registry::InitializedSlice;
use tln_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Users feature state.
#[tln_derive::tln_slice]
pub struct Users {
    pub service: UserService<SurrealUserRepository>,
}

#[must_use]
pub fn init(db: &Database) -> InitializedSlice {
    let service = UserService::new(SurrealUserRepository::new(db.clone()));
    tracing::info!("Users slice initialized");

    InitializedSlice::new(Users::new(UsersInner { service }))
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::register))
        .routes(routes!(handlers::get_user, handlers::delete_user))
}
