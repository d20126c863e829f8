use std::borrow::Cow;

/// Marker `SurrealDB` puts in the message of a UNIQUE index violation.
const UNIQUE_VIOLATION_MARKER: &str = "already contains";

/// A specialized [`DatabaseError`] enum of this crate.
#[tln_derive::tln_error(classified)]
pub enum DatabaseError {
    /// Validation errors.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when connectivity or health checks fail.
    #[error("Database connection failed{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Occurs when authentication fails.
    #[error("Authentication failed{}: {message}", format_context(.context))]
    Auth { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The requested record does not exist.
    #[error("Record not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A UNIQUE index rejected the write.
    #[error("Unique constraint violated{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A wrapper for underlying `SurrealDB` engine errors.
    #[error("SurrealDB error{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Migration failures or invariant violations.
    #[error("Migration error{}: {message}", format_context(.context))]
    Migration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal database error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DatabaseError {
    /// Shorthand for a [`DatabaseError::NotFound`] naming the missing record.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    /// Classifies a failed write: UNIQUE index violations become [`DatabaseError::Conflict`],
    /// everything else stays an engine error.
    pub fn from_write(source: surrealdb::Error, context: impl Into<Cow<'static, str>>) -> Self {
        let message = source.to_string();
        if message.contains(UNIQUE_VIOLATION_MARKER) {
            Self::Conflict { message: message.into(), context: Some(context.into()) }
        } else {
            Self::Surreal { source, context: Some(context.into()) }
        }
    }
}
