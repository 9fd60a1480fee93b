//! Schema catalogue for LearnStore.
//!
//! - `schema`: built-in constant tables (item types, views, rights, enums).
//! - `catalog`: validated name → model registry and its fingerprint.
//! - `validate`: naming, uniqueness and reference checks run on every build.
//! - `description`: owned extension schemas loaded at runtime.
//! - `config`: TOML catalogue configuration.

pub mod catalog;
pub mod config;
pub mod description;
pub mod error;
pub mod macros;
pub mod schema;
pub mod validate;

use std::sync::LazyLock;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, CatalogFingerprint, DefaultView};

///
/// CATALOG
/// the built-in catalogue, validated once per process
///

static CATALOG: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::builder().with_builtin().build());

/// Built-in catalogue, validating it on first use.
pub fn try_catalog() -> Result<&'static Catalog, &'static CatalogError> {
    CATALOG.as_ref()
}

/// Built-in catalogue.
///
/// # Panics
///
/// Panics if the built-in declarations fail validation, which the test
/// suite rules out.
#[must_use]
pub fn catalog() -> &'static Catalog {
    match try_catalog() {
        Ok(catalog) => catalog,
        Err(err) => panic!("built-in catalogue failed validation: {err}"),
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Catalog, CatalogError, catalog,
        config::CatalogConfig,
        description::SchemaDescription,
        err,
        error::ErrorTree,
        schema::{assignment::*, enums, right, tracking::*, view},
    };
}

///
/// Re-exports for declaration macros
///

#[doc(hidden)]
pub mod __reexports {
    pub use learnstore_core;
}
