mod identity;

pub use identity::{IdentifierError, ItemId, ItemIdentifier};
