use tln_derive::api_model;
use tln_kernel::safe_nanoid;

/// Owner of one or more markets.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[api_model]
#[derive(Clone)]
pub struct CreateProviderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Provider {
    /// Maps a create request to a new provider with a freshly generated id.
    #[must_use]
    pub fn from_request(request: CreateProviderRequest) -> Self {
        Self { id: safe_nanoid!(), name: request.name, email: request.email, phone: request.phone }
    }
}

/// A market place as it is stored.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct Market {
    pub id: String,
    pub provider_id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image: String,
    pub open_time: String,
    pub close_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[api_model]
#[derive(Clone)]
pub struct CreateMarketRequest {
    /// Id of an existing provider
    pub provider_id: String,
    /// Unique among all markets
    pub name: String,
    pub address: String,
    pub description: String,
    /// Image URL or storage key
    pub image: String,
    /// e.g. `08:00`
    pub open_time: String,
    pub close_time: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Market {
    /// Maps a create request to a new market.
    ///
    /// The id is generated here, never by the store. Every other field is copied verbatim.
    #[must_use]
    pub fn from_request(request: CreateMarketRequest) -> Self {
        Self {
            id: safe_nanoid!(),
            provider_id: request.provider_id,
            name: request.name,
            address: request.address,
            description: request.description,
            image: request.image,
            open_time: request.open_time,
            close_time: request.close_time,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Read-only projection of a market with its provider inlined.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct MarketWithProvider {
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image: String,
    pub open_time: String,
    pub close_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub provider: Provider,
}

impl MarketWithProvider {
    #[must_use]
    pub fn new(market: Market, provider: Provider) -> Self {
        Self {
            id: market.id,
            name: market.name,
            address: market.address,
            description: market.description,
            image: market.image,
            open_time: market.open_time,
            close_time: market.close_time,
            latitude: market.latitude,
            longitude: market.longitude,
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(provider_id: &str, name: &str) -> CreateMarketRequest {
        CreateMarketRequest {
            provider_id: provider_id.to_owned(),
            name: name.to_owned(),
            address: "1 Main St".to_owned(),
            description: "Fresh produce".to_owned(),
            image: "central.png".to_owned(),
            open_time: "08:00".to_owned(),
            close_time: "18:00".to_owned(),
            latitude: 13.75,
            longitude: 100.5,
        }
    }

    #[test]
    fn from_request_copies_fields_and_generates_id() {
        let market = Market::from_request(request("P1", "Central Market"));

        assert_eq!(market.id.len(), tln_kernel::ID_LENGTH);
        assert_eq!(market.provider_id, "P1");
        assert_eq!(market.name, "Central Market");
        assert_eq!(market.open_time, "08:00");
        assert!((market.latitude - 13.75).abs() < f64::EPSILON);
    }

    #[test]
    fn ids_are_fresh_per_mapping() {
        let a = Market::from_request(request("P1", "A"));
        let b = Market::from_request(request("P1", "A"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let json = r#"{"providerId":"P1","name":"X","address":"","description":"","image":"",
            "openTime":"","closeTime":"","latitude":0.0,"longitude":0.0,"id":"forced"}"#;
        assert!(serde_json::from_str::<CreateMarketRequest>(json).is_err());
    }
}
