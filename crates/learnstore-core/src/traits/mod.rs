use crate::model::item::ItemTypeModel;

///
/// ItemKind
///
/// Compile-time identity of one item type.
///
/// Implemented by zero-sized marker types generated from item type
/// declarations. `ITEM_TYPE_NAME` is the tag every `ItemId<Self>` carries.
///

pub trait ItemKind: 'static {
    const ITEM_TYPE_NAME: &'static str;
    const MODEL: &'static ItemTypeModel;
}

///
/// PlaceholderId
///
/// Opt-in marker for item kinds whose typed identifier may be created
/// without a key (an unbound handle filled in later by the store layer).
///

pub trait PlaceholderId: ItemKind {}
