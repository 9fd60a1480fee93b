use crate::{
    model::item::ItemTypeModel,
    obs::sink::{self, IssueKind, MetricsEvent},
    traits::{ItemKind, PlaceholderId},
    types::identity::{IdentifierError, ItemIdentifier},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// ItemId
///
/// Handle to one item of kind `K`.
///
/// ## Purpose
/// `ItemId<K>` is the typed counterpart of [`ItemIdentifier`]:
/// - its item type tag is `K::ITEM_TYPE_NAME`, fixed by the type
/// - handles of different kinds cannot be mixed at compile time
/// - the only runtime check sits at the generic -> typed boundary
///
/// ## Storage model
/// Only the key is stored. `ItemId<K>` serializes as the bare key.
///

#[repr(transparent)]
pub struct ItemId<K: ItemKind> {
    key: i64,
    _marker: PhantomData<fn() -> K>,
}

impl<K> ItemId<K>
where
    K: ItemKind,
{
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Construct a handle from a store-assigned key.
    pub fn new(key: i64) -> Result<Self, IdentifierError> {
        if key <= 0 {
            return Err(IdentifierError::KeyOutOfRange { key });
        }

        sink::record(MetricsEvent::IdentifierIssued {
            kind: IssueKind::Real,
            item_type: Some(K::ITEM_TYPE_NAME),
        });

        Ok(Self::from_raw(key))
    }

    /// Narrow a generic handle to this kind.
    ///
    /// The raw key is copied as-is, so temporary handles stay temporary.
    pub fn from_generic(id: &ItemIdentifier) -> Result<Self, IdentifierError> {
        if !id.is::<K>() {
            sink::record(MetricsEvent::NarrowRejected {
                expected: K::ITEM_TYPE_NAME,
            });

            return Err(IdentifierError::ItemTypeMismatch {
                expected: K::ITEM_TYPE_NAME,
                found: id.item_type_name().to_string(),
            });
        }

        sink::record(MetricsEvent::NarrowAccepted {
            item_type: K::ITEM_TYPE_NAME,
        });

        Ok(Self::from_raw(id.raw_key()))
    }

    /// Narrow a generic handle that may be absent.
    pub fn from_optional(id: Option<&ItemIdentifier>) -> Result<Self, IdentifierError> {
        let id = id.ok_or(IdentifierError::MissingArgument { argument: "id" })?;

        Self::from_generic(id)
    }

    const fn from_raw(key: i64) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn item_type_name(&self) -> &'static str {
        K::ITEM_TYPE_NAME
    }

    #[must_use]
    pub const fn model(&self) -> &'static ItemTypeModel {
        K::MODEL
    }

    /// The store-assigned key.
    ///
    /// Fails for temporary and placeholder handles.
    pub fn key(&self) -> Result<i64, IdentifierError> {
        if self.has_key() {
            Ok(self.key)
        } else {
            Err(IdentifierError::KeyUnavailable {
                item_type: K::ITEM_TYPE_NAME.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn has_key(&self) -> bool {
        self.key > 0
    }

    #[must_use]
    pub const fn raw_key(&self) -> i64 {
        self.key
    }

    // ------------------------------------------------------------------
    // Boundary conversion
    // ------------------------------------------------------------------

    /// Upcast to the generic handle. Never fails.
    #[must_use]
    pub const fn to_generic(&self) -> ItemIdentifier {
        ItemIdentifier::from_parts(K::ITEM_TYPE_NAME, self.key)
    }
}

impl<K> ItemId<K>
where
    K: PlaceholderId,
{
    /// Construct a handle with no key yet.
    #[must_use]
    pub fn placeholder() -> Self {
        sink::record(MetricsEvent::IdentifierIssued {
            kind: IssueKind::Placeholder,
            item_type: Some(K::ITEM_TYPE_NAME),
        });

        Self::from_raw(0)
    }
}

// ----------------------------------------------------------------------
// Generic boundary
// ----------------------------------------------------------------------

impl<K: ItemKind> From<ItemId<K>> for ItemIdentifier {
    fn from(id: ItemId<K>) -> Self {
        id.to_generic()
    }
}

impl<K: ItemKind> From<&ItemId<K>> for ItemIdentifier {
    fn from(id: &ItemId<K>) -> Self {
        id.to_generic()
    }
}

impl<K: ItemKind> TryFrom<&ItemIdentifier> for ItemId<K> {
    type Error = IdentifierError;

    fn try_from(id: &ItemIdentifier) -> Result<Self, Self::Error> {
        Self::from_generic(id)
    }
}

impl<K: ItemKind> TryFrom<ItemIdentifier> for ItemId<K> {
    type Error = IdentifierError;

    fn try_from(id: ItemIdentifier) -> Result<Self, Self::Error> {
        Self::from_generic(&id)
    }
}

impl<K: ItemKind> PartialEq<ItemIdentifier> for ItemId<K> {
    fn eq(&self, other: &ItemIdentifier) -> bool {
        other.is::<K>() && other.raw_key() == self.key
    }
}

impl<K: ItemKind> PartialEq<ItemId<K>> for ItemIdentifier {
    fn eq(&self, other: &ItemId<K>) -> bool {
        other == self
    }
}

// ----------------------------------------------------------------------
// Wire integration
// ----------------------------------------------------------------------

impl<K: ItemKind> Serialize for ItemId<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let key = self.key().map_err(serde::ser::Error::custom)?;

        key.serialize(serializer)
    }
}

impl<'de, K: ItemKind> Deserialize<'de> for ItemId<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = i64::deserialize(deserializer)?;

        Self::new(key).map_err(serde::de::Error::custom)
    }
}

// ----------------------------------------------------------------------
// Standard trait impls
// ----------------------------------------------------------------------

#[allow(clippy::expl_impl_clone_on_copy)]
impl<K: ItemKind> Clone for ItemId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ItemKind> Copy for ItemId<K> {}

impl<K: ItemKind> fmt::Debug for ItemId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemId")
            .field(&K::ITEM_TYPE_NAME)
            .field(&self.key)
            .finish()
    }
}

impl<K: PlaceholderId> Default for ItemId<K> {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl<K: ItemKind> fmt::Display for ItemId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_generic(), f)
    }
}

impl<K: ItemKind> Eq for ItemId<K> {}

impl<K: ItemKind> PartialEq for ItemId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: ItemKind> Hash for ItemId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: ItemKind> Ord for ItemId<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: ItemKind> PartialOrd for ItemId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
