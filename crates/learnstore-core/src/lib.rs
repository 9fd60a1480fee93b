//! Runtime core for LearnStore item handles and schema models.
//!
//! - `types`: generic and kind-typed item identifiers.
//! - `model`: static runtime models for item types, views, rights and enums.
//! - `traits`: the `ItemKind` seam between schema declarations and identifiers.
//! - `obs`: metrics sink boundary.
//! - `error`: classified runtime errors.

pub mod error;
pub mod model;
pub mod obs;
pub mod traits;
pub mod types;

///
/// CONSTANTS
///

/// Maximum length for schema identifiers (item types, properties, views, rights).
pub const MAX_IDENTIFIER_LEN: usize = 48;

/// Name of the implicit key property carried by every item type.
pub const ID_PROPERTY: &str = "Id";

/// Maximum length of a String value with no declared length.
pub const MAX_UNBOUNDED_STRING_LEN: i32 = (i32::MAX - 2) / 2;

/// Maximum length of a ByteArray value with no declared length.
pub const MAX_UNBOUNDED_BYTE_ARRAY_LEN: i32 = i32::MAX - 2;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ID_PROPERTY,
        error::{ErrorClass, ErrorOrigin, InternalError},
        model::{
            enumeration::{EnumModel, EnumValueModel},
            item::{ItemTypeModel, PropertyModel},
            right::RightModel,
            value::{ValueType, ValueTypeCode},
            view::{ColumnModel, ParameterModel, ViewModel},
        },
        traits::{ItemKind, PlaceholderId},
        types::{IdentifierError, ItemId, ItemIdentifier},
    };
}
