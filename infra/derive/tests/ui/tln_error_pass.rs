use std::borrow::Cow;
use tln_derive::tln_error;

#[tln_error]
pub enum GatewayError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: GatewayError = "boom".into();
    assert!(matches!(err, GatewayError::Internal { .. }));
}
