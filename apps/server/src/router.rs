use axum::Router;
use tln::domain::constants::API_PREFIX;
use tln::kernel::prelude::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "Talardnad API", description = "Markets, providers and user accounts"),
    tags(
        (name = "System", description = "Service health"),
        (name = "Providers", description = "Market owners"),
        (name = "Markets", description = "Market places"),
        (name = "Users", description = "User accounts"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(tln::server::router::system_router())
        .nest(API_PREFIX, tln::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(openapi_routes).merge(Scalar::with_url("/api", api_doc))
}
