//! Names shared between the HTTP surface, the `OpenAPI` document and the database schema.

/// Base path every feature router is nested under.
pub const API_PREFIX: &str = "/api/v1";

pub const SYSTEM_TAG: &str = "System";
pub const MARKET_TAG: &str = "Markets";
pub const PROVIDER_TAG: &str = "Providers";
pub const USER_TAG: &str = "Users";

pub const MARKET: &str = "market";
pub const PROVIDER: &str = "provider";
pub const USER: &str = "user";
/// Table holding registered users.
pub const VENDOR: &str = "vendor";
