//! Axum glue shared by the feature slices: state, error responses, caller
//! identity and the system routes.

mod caller;
mod error;
mod health;
mod json;
mod router;
mod state;

pub use caller::Caller;
pub use error::{ApiError, ErrorBody, status_for};
pub use health::{HealthResponse, start_uptime_clock, uptime};
pub use json::ApiJson;
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
