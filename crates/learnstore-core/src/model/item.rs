use crate::{
    ID_PROPERTY,
    model::{value::ValueType, view::ColumnModel},
};

///
/// ItemTypeModel
/// Declaration-generated runtime model for one item type.
///

#[derive(Debug)]
pub struct ItemTypeModel {
    /// Stable item type name (the identifier tag).
    pub name: &'static str,
    /// Declared properties, excluding the implicit `Id`.
    pub properties: &'static [PropertyModel],
}

impl ItemTypeModel {
    #[must_use]
    pub const fn new(name: &'static str, properties: &'static [PropertyModel]) -> Self {
        Self { name, properties }
    }

    /// Value type of the implicit `Id` property.
    #[must_use]
    pub const fn id_value_type(&self) -> ValueType {
        ValueType::item_id(self.name)
    }

    /// Look up a declared property by name.
    ///
    /// `Id` is not a declared property; use [`Self::has_member`] to test
    /// for either.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether `name` is `Id` or a declared property.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        name == ID_PROPERTY || self.property(name).is_some()
    }

    /// Properties a caller must supply when adding an item.
    pub fn properties_without_default(&self) -> impl Iterator<Item = &'static PropertyModel> {
        self.properties.iter().filter(|p| !p.has_default)
    }

    /// Columns of the default view that shares this item type's name.
    ///
    /// `Id` comes first, then every property in declaration order. Every
    /// column is nullable because the view may be joined against.
    pub fn default_view_columns(&self) -> impl Iterator<Item = ColumnModel> + '_ {
        let id = ColumnModel::new(ID_PROPERTY, self.id_value_type().nullable());

        std::iter::once(id).chain(
            self.properties
                .iter()
                .map(|p| ColumnModel::new(p.name, p.value_type.nullable())),
        )
    }
}

///
/// PropertyModel
/// Runtime metadata for one declared item type property.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropertyModel {
    pub name: &'static str,
    pub value_type: ValueType,
    /// The store supplies a value when none is given on add.
    /// Nullable properties always default to null.
    pub has_default: bool,
}

impl PropertyModel {
    #[must_use]
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            value_type,
            has_default: value_type.nullable,
        }
    }

    #[must_use]
    pub const fn with_default(self) -> Self {
        Self {
            has_default: true,
            ..self
        }
    }

    #[must_use]
    pub const fn max_length(&self) -> Option<i32> {
        self.value_type.max_length()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value::ValueTypeCode;

    static NOTE_PROPERTIES: [PropertyModel; 3] = [
        PropertyModel::new("Title", ValueType::string(100)),
        PropertyModel::new("Body", ValueType::text().nullable()),
        PropertyModel::new("Pinned", ValueType::boolean()).with_default(),
    ];

    static NOTE: ItemTypeModel = ItemTypeModel::new("NoteItem", &NOTE_PROPERTIES);

    #[test]
    fn property_lookup_excludes_implicit_id() {
        assert!(NOTE.property("Title").is_some());
        assert!(NOTE.property(ID_PROPERTY).is_none());
        assert!(NOTE.has_member(ID_PROPERTY));
        assert!(!NOTE.has_member("Missing"));
    }

    #[test]
    fn default_view_starts_with_id_and_is_fully_nullable() {
        let columns: Vec<_> = NOTE.default_view_columns().collect();

        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].name, ID_PROPERTY);
        assert_eq!(columns[0].value_type.code, ValueTypeCode::ItemIdentifier);
        assert_eq!(columns[0].value_type.referenced_item_type, Some("NoteItem"));
        assert!(columns.iter().all(|c| c.value_type.nullable));
    }

    #[test]
    fn defaulted_properties_are_not_required() {
        let required: Vec<_> = NOTE.properties_without_default().map(|p| p.name).collect();

        assert_eq!(required, ["Title"]);
    }
}
