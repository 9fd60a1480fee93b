use crate::types::IdentifierError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable classification.
/// Every module-level error converts into this type at crate boundaries.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without origin-specific detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a catalog-origin not-found error for one named schema object.
    pub fn catalog_not_found(kind: &'static str, name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            class: ErrorClass::NotFound,
            origin: ErrorOrigin::Catalog,
            message: format!("{kind} not found: '{name}'"),
            detail: Some(ErrorDetail::Catalog(CatalogLookupError::NotFound { kind, name })),
        }
    }

    /// Construct a catalog-origin invariant violation.
    pub fn catalog_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Catalog,
            message,
        )
    }

    /// Construct a config-origin unsupported error.
    pub fn config_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Config, message)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.class, ErrorClass::OutOfRange)
    }

    #[must_use]
    pub const fn is_missing_argument(&self) -> bool {
        matches!(self.class, ErrorClass::MissingArgument)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Identifier(IdentifierError),

    #[error("{0}")]
    Catalog(CatalogLookupError),
}

impl From<IdentifierError> for InternalError {
    fn from(err: IdentifierError) -> Self {
        Self {
            class: err.class(),
            origin: ErrorOrigin::Identifier,
            message: err.to_string(),
            detail: Some(ErrorDetail::Identifier(err)),
        }
    }
}

///
/// CatalogLookupError
///
/// Catalog-specific structured error detail.
/// Never returned directly; always wrapped in [`ErrorDetail::Catalog`].
///

#[derive(Debug, ThisError)]
pub enum CatalogLookupError {
    #[error("{kind} not found: '{name}'")]
    NotFound { kind: &'static str, name: String },
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    InvalidOperation,
    InvariantViolation,
    MissingArgument,
    NotFound,
    OutOfRange,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidOperation => "invalid_operation",
            Self::InvariantViolation => "invariant_violation",
            Self::MissingArgument => "missing_argument",
            Self::NotFound => "not_found",
            Self::OutOfRange => "out_of_range",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Catalog,
    Config,
    Identifier,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Catalog => "catalog",
            Self::Config => "config",
            Self::Identifier => "identifier",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_errors_keep_their_class_when_lifted() {
        let err: InternalError = IdentifierError::KeyOutOfRange { key: 0 }.into();

        assert_eq!(err.class, ErrorClass::OutOfRange);
        assert_eq!(err.origin, ErrorOrigin::Identifier);
        assert!(err.is_out_of_range());
        assert!(matches!(
            err.detail,
            Some(ErrorDetail::Identifier(IdentifierError::KeyOutOfRange { key: 0 }))
        ));
    }

    #[test]
    fn catalog_not_found_carries_kind_and_name() {
        let err = InternalError::catalog_not_found("view", "NoSuchView");

        assert!(err.is_not_found());
        assert_eq!(err.message, "view not found: 'NoSuchView'");
        assert_eq!(
            err.display_with_class(),
            "catalog:not_found: view not found: 'NoSuchView'"
        );
    }

    #[test]
    fn class_labels_are_snake_case() {
        assert_eq!(ErrorClass::InvalidOperation.to_string(), "invalid_operation");
        assert_eq!(ErrorClass::MissingArgument.to_string(), "missing_argument");
        assert_eq!(ErrorOrigin::Identifier.to_string(), "identifier");
    }
}
