use crate::model::{Market, MarketWithProvider, Provider};
use crate::repository::MarketRepository;
use surrealdb::types::SurrealValue;
use tln_database::{Database, DatabaseError, DatabaseErrorExt};

/// [`MarketRepository`] backed by `SurrealDB`.
///
/// Entities are addressed by their `uid` field, never by a record id built
/// from client input.
#[derive(Debug, Clone)]
pub struct SurrealMarketRepository {
    db: Database,
}

impl SurrealMarketRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, SurrealValue)]
struct ProviderRecord {
    uid: String,
    name: String,
    email: String,
    phone: String,
}

impl From<ProviderRecord> for Provider {
    fn from(record: ProviderRecord) -> Self {
        Self { id: record.uid, name: record.name, email: record.email, phone: record.phone }
    }
}

#[derive(Debug, SurrealValue)]
struct MarketRecord {
    uid: String,
    provider_id: String,
    name: String,
    address: String,
    description: String,
    image: String,
    open_time: String,
    close_time: String,
    latitude: f64,
    longitude: f64,
}

impl From<MarketRecord> for Market {
    fn from(record: MarketRecord) -> Self {
        Self {
            id: record.uid,
            provider_id: record.provider_id,
            name: record.name,
            address: record.address,
            description: record.description,
            image: record.image,
            open_time: record.open_time,
            close_time: record.close_time,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

#[derive(Debug, SurrealValue)]
struct EnrichedRecord {
    uid: String,
    provider_id: String,
    name: String,
    address: String,
    description: String,
    image: String,
    open_time: String,
    close_time: String,
    latitude: f64,
    longitude: f64,
    provider: Option<ProviderRecord>,
}

fn single<T>(records: Vec<T>, missing: impl FnOnce() -> String) -> Result<T, DatabaseError> {
    records.into_iter().next().ok_or_else(|| DatabaseError::not_found(missing()))
}

impl MarketRepository for SurrealMarketRepository {
    async fn get_provider(&self, id: &str) -> Result<Provider, DatabaseError> {
        let records = self
            .db
            .query("SELECT uid, name, email, phone FROM provider WHERE uid = $id LIMIT 1")
            .bind(("id", id.to_owned()))
            .await
            .context("Loading provider")?
            .take::<Vec<ProviderRecord>>(0)
            .context("Parsing provider")?;

        single(records, || format!("provider {id}")).map(Provider::from)
    }

    async fn create_provider(&self, provider: &Provider) -> Result<(), DatabaseError> {
        const CONTEXT: &str = "Creating provider";

        self.db
            .query("CREATE provider SET uid = $uid, name = $name, email = $email, phone = $phone")
            .bind(("uid", provider.id.clone()))
            .bind(("name", provider.name.clone()))
            .bind(("email", provider.email.clone()))
            .bind(("phone", provider.phone.clone()))
            .await
            .map_err(|e| DatabaseError::from_write(e, CONTEXT))?
            .check()
            .map_err(|e| DatabaseError::from_write(surrealdb::Error::from(e), CONTEXT))?;

        Ok(())
    }

    async fn get_market_by_name(&self, name: &str) -> Result<Market, DatabaseError> {
        let records = self
            .db
            .query(
                "SELECT uid, provider_id, name, address, description, image, open_time, close_time, \
                 latitude, longitude FROM market WHERE name = $name LIMIT 1",
            )
            .bind(("name", name.to_owned()))
            .await
            .context("Loading market by name")?
            .take::<Vec<MarketRecord>>(0)
            .context("Parsing market")?;

        single(records, || format!("market named '{name}'")).map(Market::from)
    }

    async fn create_market(&self, market: &Market) -> Result<(), DatabaseError> {
        const CONTEXT: &str = "Creating market";

        self.db
            .query(
                "CREATE market SET uid = $uid, provider_id = $provider_id, name = $name, \
                 address = $address, description = $description, image = $image, \
                 open_time = $open_time, close_time = $close_time, \
                 latitude = $latitude, longitude = $longitude",
            )
            .bind(("uid", market.id.clone()))
            .bind(("provider_id", market.provider_id.clone()))
            .bind(("name", market.name.clone()))
            .bind(("address", market.address.clone()))
            .bind(("description", market.description.clone()))
            .bind(("image", market.image.clone()))
            .bind(("open_time", market.open_time.clone()))
            .bind(("close_time", market.close_time.clone()))
            .bind(("latitude", market.latitude))
            .bind(("longitude", market.longitude))
            .await
            .map_err(|e| DatabaseError::from_write(e, CONTEXT))?
            .check()
            .map_err(|e| DatabaseError::from_write(surrealdb::Error::from(e), CONTEXT))?;

        Ok(())
    }

    async fn get_market_with_provider(&self, id: &str) -> Result<MarketWithProvider, DatabaseError> {
        let records = self
            .db
            .query(
                "SELECT uid, provider_id, name, address, description, image, open_time, close_time, \
                 latitude, longitude, \
                 (SELECT uid, name, email, phone FROM provider WHERE uid = $parent.provider_id LIMIT 1)[0] AS provider \
                 FROM market WHERE uid = $id LIMIT 1",
            )
            .bind(("id", id.to_owned()))
            .await
            .context("Loading market with provider")?
            .take::<Vec<EnrichedRecord>>(0)
            .context("Parsing market with provider")?;

        let record = single(records, || format!("market {id}"))?;
        let Some(provider) = record.provider else {
            return Err(DatabaseError::Internal {
                message: format!("Market {id} references missing provider {}", record.provider_id)
                    .into(),
                context: None,
            });
        };

        Ok(MarketWithProvider {
            id: record.uid,
            name: record.name,
            address: record.address,
            description: record.description,
            image: record.image,
            open_time: record.open_time,
            close_time: record.close_time,
            latitude: record.latitude,
            longitude: record.longitude,
            provider: provider.into(),
        })
    }
}
