use derive_more::Display;
use learnstore_core::{
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
    types::IdentifierError,
};
use learnstore_schema::CatalogError;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.origin, err.class) {
            (_, ErrorClass::MissingArgument) => ErrorKind::Identifier(IdentifierErrorKind::Missing),
            (_, ErrorClass::OutOfRange) => ErrorKind::Identifier(IdentifierErrorKind::OutOfRange),
            (_, ErrorClass::InvalidOperation) => ErrorKind::Identifier(IdentifierErrorKind::NoKey),
            (_, ErrorClass::NotFound) => ErrorKind::Catalog(CatalogErrorKind::NotFound),
            (CoreErrorOrigin::Catalog, ErrorClass::InvariantViolation) => {
                ErrorKind::Catalog(CatalogErrorKind::Invalid)
            }
            (CoreErrorOrigin::Config, ErrorClass::Unsupported) => {
                ErrorKind::Catalog(CatalogErrorKind::Config)
            }
            (_, ErrorClass::InvariantViolation | ErrorClass::Unsupported) => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<IdentifierError> for Error {
    fn from(err: IdentifierError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        InternalError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Identifier(IdentifierErrorKind),
    Catalog(CatalogErrorKind),

    /// The caller cannot remediate this.
    Internal,
}

///
/// IdentifierErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum IdentifierErrorKind {
    /// No identifier was supplied.
    Missing,

    /// Non-positive key, or an identifier of another item type.
    OutOfRange,

    /// Temporary or placeholder identifier asked for its key.
    NoKey,
}

///
/// CatalogErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CatalogErrorKind {
    NotFound,
    Invalid,
    Config,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Catalog,
    Config,
    Identifier,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Catalog => Self::Catalog,
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Identifier => Self::Identifier,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use learnstore_schema::{config::CatalogConfig, error::ErrorTree};

    #[test]
    fn identifier_errors_map_to_identifier_kinds() {
        let err: Error = IdentifierError::KeyOutOfRange { key: -1 }.into();
        assert_eq!(err.kind, ErrorKind::Identifier(IdentifierErrorKind::OutOfRange));
        assert_eq!(err.origin, ErrorOrigin::Identifier);

        let err: Error = IdentifierError::MissingArgument { argument: "id" }.into();
        assert_eq!(err.kind, ErrorKind::Identifier(IdentifierErrorKind::Missing));

        let err: Error = IdentifierError::KeyUnavailable {
            item_type: "LearnerAssignmentItem".to_string(),
        }
        .into();
        assert_eq!(err.kind, ErrorKind::Identifier(IdentifierErrorKind::NoKey));
    }

    #[test]
    fn catalog_errors_map_to_catalog_kinds() {
        let err: Error = CatalogError::NotFound {
            kind: "view",
            name: "Nope".to_string(),
        }
        .into();

        assert_eq!(err.kind, ErrorKind::Catalog(CatalogErrorKind::NotFound));
        assert_eq!(err.origin, ErrorOrigin::Catalog);
        assert_eq!(err.to_string(), "view not found: 'Nope'");
    }

    fn assert_paths_agree(
        make: impl Fn() -> CatalogError,
        kind: CatalogErrorKind,
        origin: ErrorOrigin,
    ) {
        let direct: Error = make().into();
        let lifted: Error = InternalError::from(make()).into();

        assert_eq!(direct, lifted);
        assert_eq!(direct.kind, ErrorKind::Catalog(kind));
        assert_eq!(direct.origin, origin);
    }

    #[test]
    fn catalog_errors_classify_the_same_on_every_path() {
        assert_paths_agree(
            || {
                let mut tree = ErrorTree::new();
                tree.add_for("view:Orphans", "'ParentId' references unknown item type");
                CatalogError::Validation(tree)
            },
            CatalogErrorKind::Invalid,
            ErrorOrigin::Catalog,
        );

        assert_paths_agree(
            || {
                CatalogConfig::from_toml_str("catalog = [")
                    .expect_err("malformed toml")
                    .into()
            },
            CatalogErrorKind::Config,
            ErrorOrigin::Config,
        );

        assert_paths_agree(
            || CatalogError::NotFound {
                kind: "right",
                name: "Nope".to_string(),
            },
            CatalogErrorKind::NotFound,
            ErrorOrigin::Catalog,
        );
    }

    #[test]
    fn errors_serialize_with_their_taxonomy() {
        let err: Error = IdentifierError::KeyOutOfRange { key: 0 }.into();
        let json = serde_json::to_value(&err).expect("error should serialize");

        assert_eq!(json["kind"], serde_json::json!({ "Identifier": "OutOfRange" }));
        assert_eq!(json["origin"], "Identifier");
    }
}
