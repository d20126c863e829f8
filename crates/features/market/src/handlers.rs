use crate::Marketplace;
use crate::model::{CreateMarketRequest, CreateProviderRequest, MarketWithProvider, Provider};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tln_derive::api_handler;
use tln_domain::constants::{MARKET, MARKET_TAG, PROVIDER, PROVIDER_TAG};
use tln_kernel::prelude::{ApiError, ApiJson, ApiState, ErrorBody, IdGuard};

#[api_handler(
    post,
    path = "/markets",
    request_body = CreateMarketRequest,
    responses(
        (status = CREATED, description = "Market created", body = MarketWithProvider),
        (status = NOT_FOUND, description = "Provider not found", body = ErrorBody),
        (status = BAD_REQUEST, description = "Market already exists", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed body", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store failure", body = ErrorBody),
    ),
    tag = MARKET_TAG,
)]
pub(crate) async fn create_market(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<CreateMarketRequest>,
) -> Result<(StatusCode, Json<MarketWithProvider>), ApiError> {
    let slice = state.try_get_slice::<Marketplace>()?;
    let market = slice.service.create_market(request).await?;
    Ok((StatusCode::CREATED, Json(market)))
}

#[api_handler(
    get,
    path = "/markets/{id}",
    params(("id" = String, Path, description = "Market id")),
    responses(
        (status = OK, description = "Market with its provider", body = MarketWithProvider),
        (status = NOT_FOUND, description = "Market not found", body = ErrorBody),
    ),
    tag = MARKET_TAG,
)]
pub(crate) async fn get_market(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MarketWithProvider>, ApiError> {
    let id = IdGuard::verify(id, MARKET)?;
    let slice = state.try_get_slice::<Marketplace>()?;
    Ok(Json(slice.service.get_market(&id).await?))
}

#[api_handler(
    post,
    path = "/providers",
    request_body = CreateProviderRequest,
    responses(
        (status = CREATED, description = "Provider created", body = Provider),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed body", body = ErrorBody),
        (status = BAD_REQUEST, description = "Provider already exists", body = ErrorBody),
    ),
    tag = PROVIDER_TAG,
)]
pub(crate) async fn create_provider(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<CreateProviderRequest>,
) -> Result<(StatusCode, Json<Provider>), ApiError> {
    let slice = state.try_get_slice::<Marketplace>()?;
    let provider = slice.service.create_provider(request).await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

#[api_handler(
    get,
    path = "/providers/{id}",
    params(("id" = String, Path, description = "Provider id")),
    responses(
        (status = OK, description = "Provider", body = Provider),
        (status = NOT_FOUND, description = "Provider not found", body = ErrorBody),
    ),
    tag = PROVIDER_TAG,
)]
pub(crate) async fn get_provider(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Provider>, ApiError> {
    let id = IdGuard::verify(id, PROVIDER)?;
    let slice = state.try_get_slice::<Marketplace>()?;
    Ok(Json(slice.service.get_provider(&id).await?))
}
