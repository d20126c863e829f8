use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::{Json, response::IntoResponse};
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tln_database::Database;
use tln_derive::{api_handler, api_model};
use tln_domain::constants::SYSTEM_TAG;
use tracing::warn;

#[api_model]
/// Health check response
pub struct HealthResponse {
    /// `up` when the database answers, `degraded` otherwise
    pub status: String,
    /// Version
    pub version: String,
    /// Database reachability
    pub database: String,
    /// Uptime in seconds
    pub uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the instant `uptime` is measured from. Call once at process start.
pub fn start_uptime_clock() {
    LazyLock::force(&START_TIME);
}

/// Time elapsed since [`start_uptime_clock`] (or since the first call to either).
#[must_use]
pub fn uptime() -> Duration {
    START_TIME.elapsed()
}

#[api_handler(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Service and database are up", body = HealthResponse),
        (status = SERVICE_UNAVAILABLE, description = "Database unreachable", body = HealthResponse),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(database): State<Database>) -> impl IntoResponse {
    let (status, code, database) = match database.ping().await {
        Ok(()) => ("up", StatusCode::OK, "up"),
        Err(e) => {
            warn!(error = %e, "Health probe failed");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let body = HealthResponse {
        status: status.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        database: database.to_owned(),
        uptime: uptime().as_secs(),
    };

    (
        code,
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
