use std::borrow::Cow;
use tln_kernel::prelude::ApiError;

/// Outcome classification of the markets slice.
///
/// Messages render without a prefix so they can be returned to clients as-is.
#[tln_derive::tln_error(classified)]
pub enum MarketError {
    /// The market or its provider does not exist.
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A market with the same name (or a provider with the same email) exists.
    #[error("{message}{}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The market `id` was written, but reading it back failed.
    ///
    /// Classified as internal; the write is not rolled back.
    #[error("{message}{}", format_context(.context))]
    Unconfirmed { id: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl MarketError {
    pub(crate) fn not_found(message: &'static str) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub(crate) fn conflict(message: &'static str) -> Self {
        Self::Conflict { message: message.into(), context: None }
    }

    pub(crate) fn internal(prefix: &str, cause: impl std::fmt::Display) -> Self {
        Self::Internal { message: format!("{prefix}: {cause}").into(), context: None }
    }

    /// Id of a market that was committed but could not be read back.
    #[must_use]
    pub fn unconfirmed_id(&self) -> Option<&str> {
        match self {
            Self::Unconfirmed { id, .. } => Some(id),
            _ => None,
        }
    }
}

impl From<MarketError> for ApiError {
    fn from(err: MarketError) -> Self {
        Self::classified(&err)
    }
}
