use std::borrow::Cow;

/// Longest identifier accepted from a request path.
const MAX_ID_LENGTH: usize = 64;

#[tln_derive::tln_error(classified)]
pub enum IdError {
    #[error("Invalid {message}{}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Guards identifiers that arrive from clients before they reach a query.
#[derive(Debug)]
pub struct IdGuard;

impl IdGuard {
    /// Validates a client-supplied identifier for the given entity.
    ///
    /// Accepts 1..=64 ASCII alphanumerics, `-` and `_`. Everything else is rejected,
    /// which in particular blocks record-id spoofing such as `provider:abc` or
    /// `market:⟨...⟩` being passed where a bare identifier is expected.
    ///
    /// # Errors
    /// Returns [`IdError::Validation`] if the identifier is empty, too long, or
    /// contains a disallowed character.
    pub fn verify<I, E>(id: I, entity: E) -> Result<String, IdError>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let id = id.as_ref();
        let entity = entity.as_ref();

        if id.is_empty() || id.len() > MAX_ID_LENGTH {
            return Err(IdError::Validation {
                message: format!("{entity} id: expected 1 to {MAX_ID_LENGTH} characters").into(),
                context: None,
            });
        }

        if let Some(bad) = id.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(IdError::Validation {
                message: format!("{entity} id: unexpected character '{bad}'").into(),
                context: None,
            });
        }

        Ok(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tln_domain::error::{Classify, ErrorKind};

    #[test]
    fn accepts_plain_identifiers() {
        assert_eq!(IdGuard::verify("P1", "provider").unwrap(), "P1");
        assert_eq!(IdGuard::verify("a-b_C9", "market").unwrap(), "a-b_C9");
    }

    #[test]
    fn rejects_record_id_spoofing() {
        let err = IdGuard::verify("provider:P1", "market").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Invalid market id: unexpected character ':'");
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(IdGuard::verify("", "user").is_err());
        assert!(IdGuard::verify("x".repeat(MAX_ID_LENGTH + 1), "user").is_err());
        assert!(IdGuard::verify("x".repeat(MAX_ID_LENGTH), "user").is_ok());
    }
}
