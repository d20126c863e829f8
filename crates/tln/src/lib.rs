//! Facade crate for Talardnad features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Pass [`migrations`] to the database builder.
//! - Call [`init`] to build the feature slices and register them in `ApiState`.
//! - Nest [`router`] under `tln_domain::constants::API_PREFIX`.

pub use tln_domain as domain;
pub use tln_kernel as kernel;

use tln_database::{Database, Migration};
use tln_domain::registry::InitializedSlice;
use tln_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;

pub mod server {
    pub mod router {
        pub use tln_kernel::server::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "market")]
    pub use tln_market as market;
    #[cfg(feature = "user")]
    pub use tln_user as user;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "market")]
        "market",
        #[cfg(feature = "user")]
        "user",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Schema of every enabled slice, in application order.
#[must_use]
pub fn migrations() -> Vec<Migration> {
    let mut migrations = Vec::new();

    #[cfg(feature = "market")]
    migrations.extend_from_slice(features::market::MIGRATIONS);

    #[cfg(feature = "user")]
    migrations.extend_from_slice(features::user::MIGRATIONS);

    migrations
}

/// Initialize all enabled feature slices against the shared database.
#[must_use]
pub fn init(database: &Database) -> Vec<InitializedSlice> {
    let mut slices = Vec::new();

    #[cfg(feature = "market")]
    slices.push(features::market::init(database));

    #[cfg(feature = "user")]
    slices.push(features::user::init(database));

    #[cfg(not(any(feature = "market", feature = "user")))]
    let _ = database;

    slices
}

/// Routes of every enabled slice, relative to the API prefix.
#[must_use]
pub fn router() -> OpenApiRouter<ApiState> {
    let router = OpenApiRouter::new();

    #[cfg(feature = "market")]
    let router = router.merge(features::market::router());

    #[cfg(feature = "user")]
    let router = router.merge(features::user::router());

    router
}
