//! Closed error classification shared by every layer.
//!
//! Control flow and transport status are decided on [`ErrorKind`], never on the
//! human-readable message of an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag carried by every error that crosses a layer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The referenced record does not exist.
    NotFound,
    /// The write would violate a uniqueness rule.
    Conflict,
    /// The input was rejected before reaching the store.
    Validation,
    /// No caller identity was supplied.
    Unauthorized,
    /// The caller may not act on the resource.
    Forbidden,
    /// Anything unexpected. Always carries the underlying message.
    Internal,
}

impl ErrorKind {
    /// Stable wire code, e.g. `NOT_FOUND`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Validation => "VALIDATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal => "INTERNAL",
        }
    }

    /// `true` for classifications caused by the caller rather than the server.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors that expose their classification.
///
/// Usually implemented through `#[tln_derive::tln_error(classified)]`.
pub trait Classify {
    fn kind(&self) -> ErrorKind;

    fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_screaming_snake_case() {
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorKind::Conflict.to_string(), "CONFLICT");
        assert_eq!(ErrorKind::Internal.code(), "INTERNAL");
    }

    #[test]
    fn only_internal_is_a_server_error() {
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(ErrorKind::Forbidden.is_client_error());
        assert!(!ErrorKind::Internal.is_client_error());
    }
}
