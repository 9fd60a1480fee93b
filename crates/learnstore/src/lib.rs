//! ## Crate layout
//! - `core`: generic and kind-typed item identifiers, static models, metrics.
//! - `schema`: built-in constant tables, the validated catalogue, extension
//!   schemas and TOML configuration.
//! - `error`: public error type with a stable kind + origin taxonomy.
//!
//! The `prelude` module covers everyday use: typed identifiers for every
//! built-in item type, the catalogue, and the constant modules.

pub use learnstore_core as core;
pub use learnstore_schema as schema;

pub mod error;

pub use error::Error;
pub use learnstore_schema::{catalog, try_catalog};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        core::{
            obs::{metrics_report, metrics_reset_all},
            prelude::*,
        },
        schema::prelude::*,
    };
}
