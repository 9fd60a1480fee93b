//! TOML catalogue configuration.
//!
//! ```toml
//! [catalog]
//! include_builtin = true
//!
//! [[extension.item_types]]
//! name = "CourseItem"
//!
//! [[extension.item_types.properties]]
//! name = "Title"
//! type = { code = "String", length = 255 }
//! ```

use crate::description::SchemaDescription;
use learnstore_core::MAX_IDENTIFIER_LEN;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// CatalogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<SchemaDescription>,
}

impl CatalogConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }
}

///
/// CatalogSection
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSection {
    /// Start from the built-in tables.
    pub include_builtin: bool,

    /// Longest accepted schema identifier.
    pub max_identifier_len: usize,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            include_builtin: true,
            max_identifier_len: MAX_IDENTIFIER_LEN,
        }
    }
}

///
/// TESTS
///
