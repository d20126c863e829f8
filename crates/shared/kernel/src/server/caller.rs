use super::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tln_domain::error::ErrorKind;

/// Identity of the authenticated caller.
///
/// An authentication layer in front of the router inserts it into the request
/// extensions; handlers take it as an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    #[must_use]
    pub fn is(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| ApiError::new(ErrorKind::Unauthorized, "Authentication required"))
    }
}
