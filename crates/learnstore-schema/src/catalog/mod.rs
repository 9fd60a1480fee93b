//! Validated name → model registry.
//!
//! A catalogue is assembled by [`CatalogBuilder`] from the built-in tables
//! and any number of extension schemas, validated as a whole, then frozen.
//! Lookups are by exact, case-sensitive name.

mod fingerprint;


pub use fingerprint::CatalogFingerprint;

use crate::{
    config::{CatalogConfig, ConfigError},
    description::SchemaDescription,
    error::ErrorTree,
    schema, validate,
};
use learnstore_core::{
    ID_PROPERTY, MAX_IDENTIFIER_LEN,
    error::{ErrorClass, InternalError},
    model::{
        enumeration::EnumModel,
        item::{ItemTypeModel, PropertyModel},
        right::RightModel,
        view::{ColumnModel, ViewModel},
    },
    obs::sink::{self, CatalogNamespace, MetricsEvent},
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("{kind} not found: '{name}'")]
    NotFound { kind: &'static str, name: String },

    #[error("catalog validation failed:\n{0}")]
    Validation(ErrorTree),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CatalogError {
    fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::Validation(_) => ErrorClass::InvariantViolation,
            Self::Config(_) => ErrorClass::Unsupported,
        }
    }
}

impl From<CatalogError> for InternalError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { kind, name } => Self::catalog_not_found(kind, name),
            CatalogError::Validation(tree) => {
                Self::catalog_invariant(format!("catalog validation failed:\n{tree}"))
            }
            CatalogError::Config(err) => Self::config_unsupported(err.to_string()),
        }
    }
}

///
/// CatalogParts
/// Models gathered for one catalogue, in insertion order.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct CatalogParts {
    pub item_types: Vec<&'static ItemTypeModel>,
    pub views: Vec<&'static ViewModel>,
    pub rights: Vec<&'static RightModel>,
    pub enums: Vec<&'static EnumModel>,
}

impl CatalogParts {
    pub(crate) fn builtin() -> Self {
        Self {
            item_types: schema::ITEM_TYPES.to_vec(),
            views: schema::VIEWS.to_vec(),
            rights: schema::RIGHTS.to_vec(),
            enums: schema::ENUMS.to_vec(),
        }
    }

    fn extend(&mut self, other: Self) {
        self.item_types.extend(other.item_types);
        self.views.extend(other.views);
        self.rights.extend(other.rights);
        self.enums.extend(other.enums);
    }
}

///
/// CatalogBuilder
///
/// Extensions stay owned descriptions until `build` has validated them
/// together with the built-in tables.
///

#[derive(Debug)]
pub struct CatalogBuilder {
    include_builtin: bool,
    extensions: Vec<SchemaDescription>,
    max_identifier_len: usize,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self {
            include_builtin: false,
            extensions: Vec::new(),
            max_identifier_len: MAX_IDENTIFIER_LEN,
        }
    }
}

impl CatalogBuilder {
    /// Include every built-in item type, view, right and enum.
    #[must_use]
    pub const fn with_builtin(mut self) -> Self {
        self.include_builtin = true;
        self
    }

    /// Add an extension schema.
    ///
    /// Nothing is allocated beyond the description itself until the
    /// catalogue builds successfully.
    #[must_use]
    pub fn with_extension(mut self, description: SchemaDescription) -> Self {
        self.extensions.push(description);
        self
    }

    /// Override the identifier length limit used by validation.
    #[must_use]
    pub const fn max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len;
        self
    }

    /// Validate everything added so far and freeze it.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let Self {
            include_builtin,
            extensions,
            max_identifier_len,
        } = self;

        let builtin = include_builtin.then(CatalogParts::builtin);
        let builtin_description = builtin.as_ref().map(SchemaDescription::from_parts);
        let described: Vec<&SchemaDescription> =
            builtin_description.iter().chain(&extensions).collect();

        if let Err(errors) = validate::validate_schemas(&described, max_identifier_len) {
            sink::record(MetricsEvent::ValidationFailed {
                errors: errors.len() as u64,
            });

            return Err(CatalogError::Validation(errors));
        }

        let mut parts = builtin.unwrap_or_default();
        for extension in extensions {
            parts.extend(extension.materialize());
        }

        let catalog = Catalog {
            item_types: parts.item_types.iter().map(|m| (m.name, *m)).collect(),
            views: parts.views.iter().map(|m| (m.name, *m)).collect(),
            rights: parts.rights.iter().map(|m| (m.name, *m)).collect(),
            enums: parts.enums.iter().map(|m| (m.name, *m)).collect(),
        };

        sink::record(MetricsEvent::CatalogBuilt {
            item_types: catalog.item_types.len() as u64,
            views: catalog.views.len() as u64,
            rights: catalog.rights.len() as u64,
            enums: catalog.enums.len() as u64,
        });

        Ok(catalog)
    }
}

///
/// DefaultView
/// The implicit view sharing an item type's name.
///

#[derive(Clone, Copy, Debug)]
pub struct DefaultView {
    item_type: &'static ItemTypeModel,
}

impl DefaultView {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.item_type.name
    }

    #[must_use]
    pub const fn item_type(&self) -> &'static ItemTypeModel {
        self.item_type
    }

    /// `Id` first, then every property; all nullable.
    pub fn columns(self) -> impl Iterator<Item = ColumnModel> {
        self.item_type.default_view_columns()
    }
}

///
/// Catalog
///

#[derive(Debug)]
pub struct Catalog {
    item_types: BTreeMap<&'static str, &'static ItemTypeModel>,
    views: BTreeMap<&'static str, &'static ViewModel>,
    rights: BTreeMap<&'static str, &'static RightModel>,
    enums: BTreeMap<&'static str, &'static EnumModel>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalogue as described by a configuration file.
    ///
    /// Reloading the same configuration reuses the extension models of the
    /// previous successful load.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Self::builder().max_identifier_len(config.catalog.max_identifier_len);
        if config.catalog.include_builtin {
            builder = builder.with_builtin();
        }
        if let Some(extension) = &config.extension {
            builder = builder.with_extension(extension.clone());
        }

        builder.build()
    }

    // ------------------------------------------------------------------
    // Item types
    // ------------------------------------------------------------------

    #[must_use]
    pub fn try_item_type(&self, name: &str) -> Option<&'static ItemTypeModel> {
        record_lookup(CatalogNamespace::ItemType, self.item_types.get(name).copied())
    }

    pub fn item_type(&self, name: &str) -> Result<&'static ItemTypeModel, CatalogError> {
        self.try_item_type(name)
            .ok_or_else(|| CatalogError::not_found("item type", name))
    }

    /// One property of an item type, including the implicit `Id`.
    #[must_use]
    pub fn try_property(&self, item_type: &str, property: &str) -> Option<PropertyModel> {
        let found = self.item_types.get(item_type).and_then(|model| {
            if property == ID_PROPERTY {
                Some(PropertyModel::new(ID_PROPERTY, model.id_value_type()).with_default())
            } else {
                model.property(property).copied()
            }
        });

        record_lookup(CatalogNamespace::Property, found)
    }

    pub fn property(&self, item_type: &str, property: &str) -> Result<PropertyModel, CatalogError> {
        self.try_property(item_type, property)
            .ok_or_else(|| CatalogError::not_found("property", format!("{item_type}.{property}")))
    }

    /// Maximum value length of a String or ByteArray property.
    #[must_use]
    pub fn try_max_length(&self, item_type: &str, property: &str) -> Option<i32> {
        self.try_property(item_type, property)?.max_length()
    }

    pub fn max_length(&self, item_type: &str, property: &str) -> Result<i32, CatalogError> {
        let found = self.property(item_type, property)?;

        found
            .max_length()
            .ok_or_else(|| CatalogError::not_found("max length", format!("{item_type}.{property}")))
    }

    pub fn item_types(&self) -> impl Iterator<Item = &'static ItemTypeModel> + '_ {
        self.item_types.values().copied()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    #[must_use]
    pub fn try_view(&self, name: &str) -> Option<&'static ViewModel> {
        record_lookup(CatalogNamespace::View, self.views.get(name).copied())
    }

    pub fn view(&self, name: &str) -> Result<&'static ViewModel, CatalogError> {
        self.try_view(name)
            .ok_or_else(|| CatalogError::not_found("view", name))
    }

    #[must_use]
    pub fn try_default_view(&self, item_type: &str) -> Option<DefaultView> {
        record_lookup(
            CatalogNamespace::View,
            self.item_types
                .get(item_type)
                .map(|&item_type| DefaultView { item_type }),
        )
    }

    pub fn default_view(&self, item_type: &str) -> Result<DefaultView, CatalogError> {
        self.try_default_view(item_type)
            .ok_or_else(|| CatalogError::not_found("view", item_type))
    }

    pub fn views(&self) -> impl Iterator<Item = &'static ViewModel> + '_ {
        self.views.values().copied()
    }

    // ------------------------------------------------------------------
    // Rights
    // ------------------------------------------------------------------

    #[must_use]
    pub fn try_right(&self, name: &str) -> Option<&'static RightModel> {
        record_lookup(CatalogNamespace::Right, self.rights.get(name).copied())
    }

    pub fn right(&self, name: &str) -> Result<&'static RightModel, CatalogError> {
        self.try_right(name)
            .ok_or_else(|| CatalogError::not_found("right", name))
    }

    pub fn rights(&self) -> impl Iterator<Item = &'static RightModel> + '_ {
        self.rights.values().copied()
    }

    // ------------------------------------------------------------------
    // Enums
    // ------------------------------------------------------------------

    #[must_use]
    pub fn try_enum_type(&self, name: &str) -> Option<&'static EnumModel> {
        record_lookup(CatalogNamespace::Enum, self.enums.get(name).copied())
    }

    pub fn enum_type(&self, name: &str) -> Result<&'static EnumModel, CatalogError> {
        self.try_enum_type(name)
            .ok_or_else(|| CatalogError::not_found("enum", name))
    }

    pub fn enums(&self) -> impl Iterator<Item = &'static EnumModel> + '_ {
        self.enums.values().copied()
    }

    // ------------------------------------------------------------------
    // Fingerprint
    // ------------------------------------------------------------------

    #[must_use]
    pub fn fingerprint(&self) -> CatalogFingerprint {
        CatalogFingerprint::of(self)
    }
}

// record_lookup
fn record_lookup<T>(namespace: CatalogNamespace, found: Option<T>) -> Option<T> {
    sink::record(MetricsEvent::CatalogLookup {
        namespace,
        hit: found.is_some(),
    });

    found
}
