use std::borrow::Cow;
use tln_kernel::prelude::ApiError;

/// Outcome classification of the users slice.
#[tln_derive::tln_error(classified)]
pub enum UserError {
    #[error("{message}{}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The caller may only act on their own account.
    #[error("{message}{}", format_context(.context))]
    Forbidden { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UserError {
    pub(crate) fn internal(prefix: &str, cause: impl std::fmt::Display) -> Self {
        Self::Internal { message: format!("{prefix}: {cause}").into(), context: None }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::classified(&err)
    }
}
