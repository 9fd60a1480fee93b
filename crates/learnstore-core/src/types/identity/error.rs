use crate::error::ErrorClass;
use thiserror::Error as ThisError;

///
/// IdentifierError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdentifierError {
    #[error("required argument '{argument}' is missing")]
    MissingArgument { argument: &'static str },

    #[error("item key must be positive, got {key}")]
    KeyOutOfRange { key: i64 },

    #[error("item type mismatch: expected '{expected}', found '{found}'")]
    ItemTypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("unique key not available for item of type '{item_type}'")]
    KeyUnavailable { item_type: String },
}

impl IdentifierError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::MissingArgument { .. } => ErrorClass::MissingArgument,
            Self::KeyOutOfRange { .. } | Self::ItemTypeMismatch { .. } => ErrorClass::OutOfRange,
            Self::KeyUnavailable { .. } => ErrorClass::InvalidOperation,
        }
    }
}
