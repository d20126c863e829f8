//! Common imports for feature slices.

pub use crate::domain::error::{Classify, ErrorKind};
pub use crate::security::IdGuard;
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiJson, ApiState, Caller, ErrorBody};
