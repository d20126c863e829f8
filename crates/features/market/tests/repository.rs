use tln_database::Database;
use tln_domain::error::{Classify, ErrorKind};
use tln_market::{
    CreateMarketRequest, CreateProviderRequest, MIGRATIONS, Market, MarketRepository, MarketService,
    Provider, SurrealMarketRepository,
};

async fn repository(ns: &str) -> SurrealMarketRepository {
    let db = Database::builder()
        .url("mem://")
        .session(ns, "markets")
        .migrations(MIGRATIONS)
        .init()
        .await
        .expect("connect to mem://");
    SurrealMarketRepository::new(db)
}

fn provider(id: &str, email: &str) -> Provider {
    Provider {
        id: id.to_owned(),
        name: "Siam Farms".to_owned(),
        email: email.to_owned(),
        phone: "+66 2 000 0000".to_owned(),
    }
}

fn market_request(provider_id: &str, name: &str) -> CreateMarketRequest {
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

#[tokio::test]
async fn missing_records_are_not_found() {
    let repo = repository("missing_ns").await;

    assert_eq!(repo.get_provider("P404").await.unwrap_err().kind(), ErrorKind::NotFound);
    assert!(repo.get_market_by_name("Nowhere").await.unwrap_err().is_not_found());
    assert!(repo.get_market_with_provider("M404").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn market_is_read_back_with_its_provider() {
    let repo = repository("enrich_ns").await;
    repo.create_provider(&provider("P1", "p1@example.com")).await.unwrap();

    let market = Market::from_request(market_request("P1", "Central Market"));
    repo.create_market(&market).await.unwrap();

    let by_name = repo.get_market_by_name("Central Market").await.unwrap();
    assert_eq!(by_name, market);

    let enriched = repo.get_market_with_provider(&market.id).await.unwrap();
    assert_eq!(enriched.id, market.id);
    assert_eq!(enriched.provider, provider("P1", "p1@example.com"));
    assert!((enriched.longitude - 100.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn duplicate_market_name_is_a_conflict() {
    let repo = repository("unique_name_ns").await;
    repo.create_provider(&provider("P1", "p1@example.com")).await.unwrap();

    repo.create_market(&Market::from_request(market_request("P1", "Central Market")))
        .await
        .unwrap();
    let err = repo
        .create_market(&Market::from_request(market_request("P1", "Central Market")))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn duplicate_provider_email_is_a_conflict() {
    let repo = repository("unique_email_ns").await;
    repo.create_provider(&provider("P1", "same@example.com")).await.unwrap();

    let err = repo.create_provider(&provider("P2", "same@example.com")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn workflow_end_to_end() {
    let service = MarketService::new(repository("workflow_ns").await);
    let provider = service
        .create_provider(CreateProviderRequest {
            name: "Siam Farms".to_owned(),
            email: "hello@siam.farm".to_owned(),
            phone: "+66 2 000 0000".to_owned(),
        })
        .await
        .unwrap();

    let created = service.create_market(market_request(&provider.id, "Central Market")).await.unwrap();
    assert_eq!(created.provider.id, provider.id);
    assert_eq!(service.get_market(&created.id).await.unwrap(), created);

    let err = service.create_market(market_request(&provider.id, "Central Market")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = service.create_market(market_request("P404", "X")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("Provider"));
}
