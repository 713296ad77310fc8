//! Domain error taxonomy shared across crates.

/// Domain-level errors raised by the write pipeline and lookup helpers.
///
/// The HTTP layer maps these onto response codes; see `playa-api`'s
/// `AppError`. The taxonomy is deliberately small: every write failure is
/// local to a single operation and aborts it entirely.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced record does not exist. `entity` names the kind,
    /// `key` the missing identifier (a numeric id, a year label, or an
    /// event-type abbreviation).
    #[error("No such {entity}: {key}")]
    NotFound { entity: &'static str, key: String },

    /// The request payload is unusable (empty body, malformed field).
    #[error("{0}")]
    Validation(String),

    /// The actor is authenticated but lacks the API-allowed profile flag.
    /// Maps to 400, matching the published API contract.
    #[error("User not permitted to use the API")]
    ApiNotAllowed,

    /// The actor could not be authenticated at all. Maps to 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] with any displayable key.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
