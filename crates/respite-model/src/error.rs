use thiserror::Error;

use crate::domain::DurationError;

/// Failure to turn strategy text into a [`crate::StrategyConfig`].
///
/// Every variant names the offending field (or token) in its message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid duration for {field}: {value:?}: {reason}")]
    MalformedDuration {
        field: &'static str,
        value: String,
        #[source]
        reason: DurationError,
    },

    #[error("invalid number for {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    #[error("invalid integer for {field}: {value:?}")]
    MalformedInteger { field: &'static str, value: String },

    #[error("invalid boolean for {field}: {value:?}")]
    MalformedBoolean { field: &'static str, value: String },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("malformed token (expected key=value): {0:?}")]
    MalformedToken(String),
}

impl ModelError {
    /// Name of the field the error refers to, if it refers to a known field.
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::MissingField(field)
            | ModelError::MalformedDuration { field, .. }
            | ModelError::MalformedNumber { field, .. }
            | ModelError::MalformedInteger { field, .. }
            | ModelError::MalformedBoolean { field, .. } => Some(*field),
            ModelError::UnknownField(field) => Some(field.as_str()),
            ModelError::MalformedToken(_) => None,
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
