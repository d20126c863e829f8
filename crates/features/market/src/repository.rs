use crate::model::{Market, MarketWithProvider, Provider};
use std::future::Future;
use tln_database::DatabaseError;

/// Persistence port of the markets slice.
///
/// Lookups report a missing record as [`DatabaseError::NotFound`], and writes
/// rejected by a UNIQUE index as [`DatabaseError::Conflict`]. Callers branch on
/// that classification only.
pub trait MarketRepository: Send + Sync + 'static {
    fn get_provider(&self, id: &str) -> impl Future<Output = Result<Provider, DatabaseError>> + Send;

    fn create_provider(
        &self,
        provider: &Provider,
    ) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    fn get_market_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Market, DatabaseError>> + Send;

    fn create_market(&self, market: &Market) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    /// Enrichment read: the market with its provider resolved.
    fn get_market_with_provider(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<MarketWithProvider, DatabaseError>> + Send;
}
