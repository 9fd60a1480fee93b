//! Runtime schema model definitions.
//!
//! Types in `model` are the static, declaration-generated description of the
//! store schema: item types and their properties, views, rights and enums.
//! They carry names and value types only; no storage or query behaviour.
//!
//! In general:
//! - schema declarations define *what exists*
//! - `model` is what the catalogue and identifiers read at runtime

pub mod enumeration;
pub mod item;
pub mod right;
pub mod value;
pub mod view;
