use crate::error::MarketError;
use crate::model::{CreateMarketRequest, CreateProviderRequest, Market, MarketWithProvider, Provider};
use crate::repository::MarketRepository;
use tln_kernel::prelude::{Classify, ErrorKind};
use tracing::{info, instrument, warn};

const PROVIDER_NOT_FOUND: &str = "Provider not found";
const MARKET_NOT_FOUND: &str = "Market not found";
const MARKET_EXISTS: &str = "Market already exists";
const PROVIDER_EXISTS: &str = "Provider already exists";

/// Use cases of the markets slice.
#[derive(Debug, Clone)]
pub struct MarketService<R> {
    repo: R,
}

impl<R: MarketRepository> MarketService<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a market under an existing provider.
    ///
    /// Steps run in order and stop at the first failure:
    /// 1. the provider must exist,
    /// 2. no market may already use the name,
    /// 3. the market is mapped with a fresh id and written once,
    /// 4. the stored market is read back with its provider.
    ///
    /// # Errors
    /// * [`MarketError::NotFound`] if the provider does not exist.
    /// * [`MarketError::Conflict`] if the name is taken, including when a concurrent
    ///   request wins the race and the store's unique index rejects the write.
    /// * [`MarketError::Unconfirmed`] if the write committed but the read-back failed.
    /// * [`MarketError::Internal`] for any other store failure.
    #[instrument(skip_all, fields(provider_id = %request.provider_id, name = %request.name))]
    pub async fn create_market(
        &self,
        request: CreateMarketRequest,
    ) -> Result<MarketWithProvider, MarketError> {
        match self.repo.get_provider(&request.provider_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => return Err(MarketError::not_found(PROVIDER_NOT_FOUND)),
            Err(e) => return Err(MarketError::internal("Failed to check provider existence", e)),
        }

        match self.repo.get_market_by_name(&request.name).await {
            Ok(_) => return Err(MarketError::conflict(MARKET_EXISTS)),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(MarketError::internal("Failed to check market existence", e)),
        }

        let market = Market::from_request(request);

        if let Err(e) = self.repo.create_market(&market).await {
            return Err(match e.kind() {
                ErrorKind::Conflict => {
                    warn!(error = %e, "Market name taken by a concurrent request");
                    MarketError::conflict(MARKET_EXISTS)
                }
                _ => MarketError::internal("Failed to create market", e),
            });
        }

        match self.repo.get_market_with_provider(&market.id).await {
            Ok(created) => {
                info!(market_id = %created.id, "Market created");
                Ok(created)
            }
            Err(e) => {
                warn!(market_id = %market.id, error = %e, "Market written but not read back");
                Err(MarketError::Unconfirmed {
                    id: market.id,
                    message: format!("Failed to retrieve market details: {e}").into(),
                    context: None,
                })
            }
        }
    }

    /// Returns a market with its provider.
    ///
    /// # Errors
    /// [`MarketError::NotFound`] for an unknown id, [`MarketError::Internal`] otherwise.
    #[instrument(skip(self))]
    pub async fn get_market(&self, id: &str) -> Result<MarketWithProvider, MarketError> {
        self.repo.get_market_with_provider(id).await.map_err(|e| {
            if e.is_not_found() {
                MarketError::not_found(MARKET_NOT_FOUND)
            } else {
                MarketError::internal("Failed to load market", e)
            }
        })
    }

    /// Registers a provider under a freshly generated id.
    ///
    /// # Errors
    /// [`MarketError::Conflict`] if the email is already registered,
    /// [`MarketError::Internal`] otherwise.
    #[instrument(skip_all, fields(name = %request.name))]
    pub async fn create_provider(
        &self,
        request: CreateProviderRequest,
    ) -> Result<Provider, MarketError> {
        let provider = Provider::from_request(request);

        self.repo.create_provider(&provider).await.map_err(|e| match e.kind() {
            ErrorKind::Conflict => MarketError::conflict(PROVIDER_EXISTS),
            _ => MarketError::internal("Failed to create provider", e),
        })?;

        info!(provider_id = %provider.id, "Provider created");
        Ok(provider)
    }

    /// # Errors
    /// [`MarketError::NotFound`] for an unknown id, [`MarketError::Internal`] otherwise.
    #[instrument(skip(self))]
    pub async fn get_provider(&self, id: &str) -> Result<Provider, MarketError> {
        self.repo.get_provider(id).await.map_err(|e| {
            if e.is_not_found() {
                MarketError::not_found(PROVIDER_NOT_FOUND)
            } else {
                MarketError::internal("Failed to load provider", e)
            }
        })
    }
}
