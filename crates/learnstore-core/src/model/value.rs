use crate::{MAX_UNBOUNDED_BYTE_ARRAY_LEN, MAX_UNBOUNDED_STRING_LEN};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ValueTypeCode
///
/// Storage-level value category of a property, column or parameter.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum ValueTypeCode {
    Boolean,
    ByteArray,
    DateTime,
    Double,
    Enumeration,
    Guid,
    Int32,
    ItemIdentifier,
    Single,
    String,
    Xml,
}

impl ValueTypeCode {
    /// Whether values of this code carry a maximum length.
    #[must_use]
    pub const fn is_variable_length(self) -> bool {
        matches!(self, Self::ByteArray | Self::String)
    }
}

///
/// ValueType
///
/// Full value type of one schema member.
///
/// `referenced_item_type` is set only for `ItemIdentifier`, `enum_name` only
/// for `Enumeration`, and `length` only for `String` / `ByteArray`
/// (`None` meaning unbounded).
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ValueType {
    pub code: ValueTypeCode,
    pub nullable: bool,
    pub referenced_item_type: Option<&'static str>,
    pub enum_name: Option<&'static str>,
    pub length: Option<i32>,
}

impl ValueType {
    const fn simple(code: ValueTypeCode) -> Self {
        Self {
            code,
            nullable: false,
            referenced_item_type: None,
            enum_name: None,
            length: None,
        }
    }

    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn boolean() -> Self {
        Self::simple(ValueTypeCode::Boolean)
    }

    #[must_use]
    pub const fn date_time() -> Self {
        Self::simple(ValueTypeCode::DateTime)
    }

    #[must_use]
    pub const fn double() -> Self {
        Self::simple(ValueTypeCode::Double)
    }

    #[must_use]
    pub const fn guid() -> Self {
        Self::simple(ValueTypeCode::Guid)
    }

    #[must_use]
    pub const fn int32() -> Self {
        Self::simple(ValueTypeCode::Int32)
    }

    #[must_use]
    pub const fn single() -> Self {
        Self::simple(ValueTypeCode::Single)
    }

    #[must_use]
    pub const fn xml() -> Self {
        Self::simple(ValueTypeCode::Xml)
    }

    /// Unbounded string.
    #[must_use]
    pub const fn text() -> Self {
        Self::simple(ValueTypeCode::String)
    }

    /// String with a declared maximum length.
    #[must_use]
    pub const fn string(length: i32) -> Self {
        Self {
            length: Some(length),
            ..Self::simple(ValueTypeCode::String)
        }
    }

    /// Unbounded byte array.
    #[must_use]
    pub const fn bytes() -> Self {
        Self::simple(ValueTypeCode::ByteArray)
    }

    /// Byte array with a declared maximum length.
    #[must_use]
    pub const fn byte_array(length: i32) -> Self {
        Self {
            length: Some(length),
            ..Self::simple(ValueTypeCode::ByteArray)
        }
    }

    /// Reference to an item of the named item type.
    #[must_use]
    pub const fn item_id(item_type: &'static str) -> Self {
        Self {
            referenced_item_type: Some(item_type),
            ..Self::simple(ValueTypeCode::ItemIdentifier)
        }
    }

    /// Value of the named enum.
    #[must_use]
    pub const fn enumeration(enum_name: &'static str) -> Self {
        Self {
            enum_name: Some(enum_name),
            ..Self::simple(ValueTypeCode::Enumeration)
        }
    }

    /// Same type, accepting null.
    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Derived facts
    // ------------------------------------------------------------------

    /// Largest value length the store accepts for this type.
    ///
    /// Strings without a declared length are bounded by half the byte
    /// budget (two bytes per character).
    #[must_use]
    pub const fn max_length(&self) -> Option<i32> {
        match (self.code, self.length) {
            (ValueTypeCode::String | ValueTypeCode::ByteArray, Some(len)) => Some(len),
            (ValueTypeCode::String, None) => Some(MAX_UNBOUNDED_STRING_LEN),
            (ValueTypeCode::ByteArray, None) => Some(MAX_UNBOUNDED_BYTE_ARRAY_LEN),
            _ => None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_lengths_win_over_defaults() {
        assert_eq!(ValueType::string(255).max_length(), Some(255));
        assert_eq!(ValueType::byte_array(16).max_length(), Some(16));
    }

    #[test]
    fn unbounded_lengths_follow_storage_limits() {
        assert_eq!(ValueType::text().max_length(), Some(1_073_741_822));
        assert_eq!(ValueType::bytes().max_length(), Some(2_147_483_645));
    }

    #[test]
    fn fixed_width_types_have_no_max_length() {
        for ty in [
            ValueType::boolean(),
            ValueType::date_time(),
            ValueType::double(),
            ValueType::guid(),
            ValueType::int32(),
            ValueType::single(),
            ValueType::xml(),
            ValueType::item_id("UserItem"),
            ValueType::enumeration("Exit"),
        ] {
            assert_eq!(ty.max_length(), None, "{:?}", ty.code);
        }
    }

    #[test]
    fn nullable_keeps_everything_else() {
        let ty = ValueType::item_id("UserItem").nullable();

        assert!(ty.nullable);
        assert_eq!(ty.code, ValueTypeCode::ItemIdentifier);
        assert_eq!(ty.referenced_item_type, Some("UserItem"));
    }

    #[test]
    fn codes_display_as_their_names() {
        assert_eq!(ValueTypeCode::ItemIdentifier.to_string(), "ItemIdentifier");
        assert_eq!(ValueTypeCode::ByteArray.to_string(), "ByteArray");
    }
}
