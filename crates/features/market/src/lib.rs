//! Markets feature slice.
//!
//! Providers own markets. A market is only ever created through
//! [`MarketService::create_market`], which checks that the provider exists and
//! that the name is free before writing, then reads the stored market back
//! together with its provider.

mod error;
mod handlers;
mod migrations;
mod model;
mod repository;
mod service;
mod surreal;

pub use error::{MarketError, MarketErrorExt};
pub use migrations::MIGRATIONS;
pub use model::{CreateMarketRequest, CreateProviderRequest, Market, MarketWithProvider, Provider};
pub use repository::MarketRepository;
pub use service::MarketService;
pub use surreal::SurrealMarketRepository;

use tln_database::Database;
use tln_kernel::domain::registry::InitializedSlice;
use tln_kernel::prelude::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Markets feature state.
#[tln_derive::tln_slice]
pub struct Marketplace {
    pub service: MarketService<SurrealMarketRepository>,
}

/// Wires the service to the database and wraps it as a registrable slice.
#[must_use]
pub fn init(db: &Database) -> InitializedSlice {
    let service = MarketService::new(SurrealMarketRepository::new(db.clone()));
    tracing::info!("Markets slice initialized");

    InitializedSlice::new(Marketplace::new(MarketplaceInner { service }))
}

/// Provider and market routes, relative to the API prefix.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::create_market))
        .routes(routes!(handlers::get_market))
        .routes(routes!(handlers::create_provider))
        .routes(routes!(handlers::get_provider))
}
