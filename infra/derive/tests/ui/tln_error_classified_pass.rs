use std::borrow::Cow;
use tln_derive::tln_error;
use tln_domain::error::{Classify, ErrorKind};

#[tln_error(classified)]
pub enum LookupError {
    #[error("{message}{}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Timeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = LookupError::Timeout { message: "slow".into(), context: None };
    assert_eq!(err.kind(), ErrorKind::Internal);
}
