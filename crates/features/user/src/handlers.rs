use crate::Users;
use crate::model::{DeleteUserResponse, RegisterRequest, User};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tln_derive::api_handler;
use tln_domain::constants::{USER, USER_TAG};
use tln_kernel::prelude::{ApiError, ApiJson, ApiState, Caller, ErrorBody, IdGuard};

#[api_handler(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = CREATED, description = "User registered", body = User),
        (status = BAD_REQUEST, description = "User already exists", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed body or required field missing", body = ErrorBody),
    ),
    tag = USER_TAG,
)]
pub(crate) async fn register(
    State(state): State<ApiState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let slice = state.try_get_slice::<Users>()?;
    let user = slice.service.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[api_handler(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = OK, description = "User", body = User),
        (status = NOT_FOUND, description = "User not found", body = ErrorBody),
    ),
    tag = USER_TAG,
)]
pub(crate) async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = IdGuard::verify(id, USER)?;
    let slice = state.try_get_slice::<Users>()?;
    Ok(Json(slice.service.get_user(&id).await?))
}

#[api_handler(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = OK, description = "User deleted", body = DeleteUserResponse),
        (status = UNAUTHORIZED, description = "No caller identity", body = ErrorBody),
        (status = FORBIDDEN, description = "Not the caller's account", body = ErrorBody),
        (status = NOT_FOUND, description = "User not found", body = ErrorBody),
    ),
    tag = USER_TAG,
)]
pub(crate) async fn delete_user(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let id = IdGuard::verify(id, USER)?;
    let slice = state.try_get_slice::<Users>()?;
    slice.service.delete_user(&caller, &id).await?;

    Ok(Json(DeleteUserResponse { message: "User deleted successfully".to_owned(), user_id: id }))
}
