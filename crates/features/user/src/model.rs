use serde::{Deserialize, Serialize};
use std::fmt;
use tln_derive::api_model;
use tln_kernel::safe_nanoid;
use utoipa::ToSchema;

/// A registered user. The password never leaves the store.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Plain-text password as received on registration. Redacted in `Debug`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[api_model]
#[derive(Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Password,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl RegisterRequest {
    /// Name of the first required field that is blank, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("username", self.username.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.expose()),
        ]
        .into_iter()
        .find_map(|(name, value)| value.trim().is_empty().then_some(name))
    }
}

impl User {
    /// Splits a registration into the new user, under a freshly generated id, and its password.
    #[must_use]
    pub fn from_request(request: RegisterRequest) -> (Self, Password) {
        let user = Self {
            id: safe_nanoid!(),
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
        };
        (user, request.password)
    }
}

#[api_model]
pub struct DeleteUserResponse {
    pub message: String,
    pub user_id: String,
}
