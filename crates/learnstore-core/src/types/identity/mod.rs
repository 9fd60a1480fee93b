//! Module: identity
//! Responsibility: item handles, generic (tag + key) and kind-typed.
//! Does not own: item existence, schema lookups, or store access.
//!
//! Invariants:
//! - A typed handle's tag is always its kind's `ITEM_TYPE_NAME`.
//! - Keys obtained through public constructors are positive.
//! - Negative keys are temporary and never leave the process.
//! - A zero key only exists on placeholder handles.

mod error;
mod id;
mod identifier;

#[cfg(test)]
mod tests;

pub use error::IdentifierError;
pub use id::ItemId;
pub use identifier::ItemIdentifier;
