use crate::{
    obs::sink::{self, IssueKind, MetricsEvent},
    traits::ItemKind,
    types::identity::{IdentifierError, ItemId},
};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use std::{
    borrow::Cow,
    fmt,
    sync::atomic::{AtomicI64, Ordering},
};

// ----------------------------------------------------------------------
// Temporary keys
// ----------------------------------------------------------------------

/// Last temporary key handed out; decrements from zero.
static LAST_TEMPORARY_KEY: AtomicI64 = AtomicI64::new(0);

fn next_temporary_key() -> i64 {
    LAST_TEMPORARY_KEY.fetch_sub(1, Ordering::Relaxed) - 1
}

///
/// ItemIdentifier
///
/// Generic handle to one item in the store: the item type name plus the
/// store-assigned key.
///
/// ## Keys
/// - `> 0`: assigned by the store
/// - `< 0`: temporary, issued in-process for an item not yet added
/// - `0`: only on placeholder handles upcast from `ItemId`
///
/// Equality is ordinal over both the type name and the raw key.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(try_from = "ItemIdentifierRepr")]
pub struct ItemIdentifier {
    item_type_name: Cow<'static, str>,
    key: i64,
}

impl ItemIdentifier {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Construct a handle to an existing item.
    pub fn new(
        item_type_name: impl Into<Cow<'static, str>>,
        key: i64,
    ) -> Result<Self, IdentifierError> {
        let item_type_name = item_type_name.into();
        if item_type_name.is_empty() {
            return Err(IdentifierError::MissingArgument {
                argument: "item_type_name",
            });
        }
        if key <= 0 {
            return Err(IdentifierError::KeyOutOfRange { key });
        }

        sink::record(MetricsEvent::IdentifierIssued {
            kind: IssueKind::Real,
            item_type: None,
        });

        Ok(Self {
            item_type_name,
            key,
        })
    }

    /// Construct a handle for an item that has not been added yet.
    ///
    /// Every call yields a distinct negative key for this process.
    pub fn temporary(item_type_name: impl Into<Cow<'static, str>>) -> Result<Self, IdentifierError> {
        let item_type_name = item_type_name.into();
        if item_type_name.is_empty() {
            return Err(IdentifierError::MissingArgument {
                argument: "item_type_name",
            });
        }

        sink::record(MetricsEvent::IdentifierIssued {
            kind: IssueKind::Temporary,
            item_type: None,
        });

        Ok(Self {
            item_type_name,
            key: next_temporary_key(),
        })
    }

    /// Assemble a handle from trusted parts; used by typed upcasts.
    pub(crate) const fn from_parts(item_type_name: &'static str, key: i64) -> Self {
        Self {
            item_type_name: Cow::Borrowed(item_type_name),
            key,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn item_type_name(&self) -> &str {
        &self.item_type_name
    }

    /// The store-assigned key.
    ///
    /// Fails for temporary and placeholder handles.
    pub fn key(&self) -> Result<i64, IdentifierError> {
        if self.has_key() {
            Ok(self.key)
        } else {
            Err(IdentifierError::KeyUnavailable {
                item_type: self.item_type_name.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn has_key(&self) -> bool {
        self.key > 0
    }

    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        self.key < 0
    }

    /// Raw key, including temporary and placeholder values.
    #[must_use]
    pub const fn raw_key(&self) -> i64 {
        self.key
    }

    // ------------------------------------------------------------------
    // Typed boundary
    // ------------------------------------------------------------------

    /// Whether this handle is tagged with `K`'s item type name.
    #[must_use]
    pub fn is<K: ItemKind>(&self) -> bool {
        self.item_type_name == K::ITEM_TYPE_NAME
    }

    /// Narrow to a typed handle; see [`ItemId::from_generic`].
    pub fn narrow<K: ItemKind>(&self) -> Result<ItemId<K>, IdentifierError> {
        ItemId::from_generic(self)
    }
}

impl fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemType:{}", self.item_type_name)?;
        if self.has_key() {
            write!(f, ", Key:{}", self.key)?;
        }

        Ok(())
    }
}

// ----------------------------------------------------------------------
// Serialization
// ----------------------------------------------------------------------

///
/// ItemIdentifierRepr
/// Wire shape of a generic handle; only store-assigned keys cross it.
///

#[derive(Deserialize)]
struct ItemIdentifierRepr {
    item_type: String,
    key: i64,
}

impl TryFrom<ItemIdentifierRepr> for ItemIdentifier {
    type Error = IdentifierError;

    fn try_from(repr: ItemIdentifierRepr) -> Result<Self, Self::Error> {
        Self::new(repr.item_type, repr.key)
    }
}

impl Serialize for ItemIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let key = self.key().map_err(serde::ser::Error::custom)?;

        let mut state = serializer.serialize_struct("ItemIdentifier", 2)?;
        state.serialize_field("item_type", self.item_type_name())?;
        state.serialize_field("key", &key)?;
        state.end()
    }
}
