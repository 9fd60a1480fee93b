//! Owned schema descriptions loaded at runtime.
//!
//! A [`SchemaDescription`] is the serde form of extra item types, views,
//! rights and enums. Catalogue validation runs on descriptions; only a
//! description that passed validation is materialized. Materializing leaks
//! every string and slice so the resulting models have the same `'static`
//! shape as the built-in tables. Equal descriptions are materialized once
//! per process and share their models.

use crate::catalog::CatalogParts;
use learnstore_core::model::{
    enumeration::{EnumModel, EnumValueModel},
    item::{ItemTypeModel, PropertyModel},
    right::RightModel,
    value::{ValueType, ValueTypeCode},
    view::{ColumnModel, ParameterModel, ViewModel},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

///
/// MATERIALIZED
/// every description materialized so far, with its leaked models
///

static MATERIALIZED: Mutex<BTreeMap<SchemaDescription, CatalogParts>> =
    Mutex::new(BTreeMap::new());

///
/// SchemaDescription
///

#[derive(
    Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaDescription {
    pub item_types: Vec<ItemTypeDescription>,
    pub views: Vec<ViewDescription>,
    pub rights: Vec<RightDescription>,
    pub enums: Vec<EnumDescription>,
}

impl SchemaDescription {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_types.is_empty()
            && self.views.is_empty()
            && self.rights.is_empty()
            && self.enums.is_empty()
    }

    /// Describe already-declared models, e.g. the built-in tables.
    pub(crate) fn from_parts(parts: &CatalogParts) -> Self {
        Self {
            item_types: parts.item_types.iter().map(|m| (*m).into()).collect(),
            views: parts.views.iter().map(|m| (*m).into()).collect(),
            rights: parts.rights.iter().map(|m| (*m).into()).collect(),
            enums: parts.enums.iter().map(|m| (*m).into()).collect(),
        }
    }

    /// Models for this description, leaked on first use.
    ///
    /// Callers must validate first: whatever is materialized stays for the
    /// rest of the process.
    pub(crate) fn materialize(self) -> CatalogParts {
        let mut materialized = MATERIALIZED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(parts) = materialized.get(&self) {
            return parts.clone();
        }

        let parts = self.clone().leak_models();
        materialized.insert(self, parts.clone());

        parts
    }

    #[cfg(test)]
    pub(crate) fn is_materialized(&self) -> bool {
        MATERIALIZED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(self)
    }

    fn leak_models(self) -> CatalogParts {
        CatalogParts {
            item_types: self
                .item_types
                .into_iter()
                .map(ItemTypeDescription::materialize)
                .collect(),
            views: self
                .views
                .into_iter()
                .map(ViewDescription::materialize)
                .collect(),
            rights: self
                .rights
                .into_iter()
                .map(RightDescription::materialize)
                .collect(),
            enums: self
                .enums
                .into_iter()
                .map(EnumDescription::materialize)
                .collect(),
        }
    }
}

///
/// ItemTypeDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ItemTypeDescription {
    pub name: String,

    #[serde(default)]
    pub properties: Vec<PropertyDescription>,
}

impl ItemTypeDescription {
    fn materialize(self) -> &'static ItemTypeModel {
        let properties: Vec<_> = self
            .properties
            .into_iter()
            .map(PropertyDescription::materialize)
            .collect();

        leak(ItemTypeModel::new(leak_str(self.name), leak_slice(properties)))
    }
}

impl From<&ItemTypeModel> for ItemTypeDescription {
    fn from(model: &ItemTypeModel) -> Self {
        Self {
            name: model.name.to_string(),
            properties: model.properties.iter().map(Into::into).collect(),
        }
    }
}

///
/// PropertyDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescription {
    pub name: String,

    #[serde(rename = "type")]
    pub value_type: ValueTypeDescription,

    /// Non-nullable properties the store fills in when omitted.
    #[serde(default)]
    pub has_default: bool,
}

impl PropertyDescription {
    fn materialize(self) -> PropertyModel {
        let property = PropertyModel::new(leak_str(self.name), self.value_type.materialize());

        if self.has_default {
            property.with_default()
        } else {
            property
        }
    }
}

impl From<&PropertyModel> for PropertyDescription {
    fn from(model: &PropertyModel) -> Self {
        Self {
            name: model.name.to_string(),
            value_type: (&model.value_type).into(),
            has_default: model.has_default,
        }
    }
}

///
/// MemberDescription
/// A view column or a view/right parameter.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDescription {
    pub name: String,

    #[serde(rename = "type")]
    pub value_type: ValueTypeDescription,
}

impl MemberDescription {
    fn into_column(self) -> ColumnModel {
        ColumnModel::new(leak_str(self.name), self.value_type.materialize())
    }

    fn into_parameter(self) -> ParameterModel {
        ParameterModel::new(leak_str(self.name), self.value_type.materialize())
    }
}

impl From<&ColumnModel> for MemberDescription {
    fn from(model: &ColumnModel) -> Self {
        Self {
            name: model.name.to_string(),
            value_type: (&model.value_type).into(),
        }
    }
}

impl From<&ParameterModel> for MemberDescription {
    fn from(model: &ParameterModel) -> Self {
        Self {
            name: model.name.to_string(),
            value_type: (&model.value_type).into(),
        }
    }
}

///
/// ValueTypeDescription
///
/// References and lengths are taken as written; validation rejects
/// combinations that do not fit the code.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValueTypeDescription {
    pub code: ValueTypeCode,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
}

impl ValueTypeDescription {
    fn materialize(self) -> ValueType {
        ValueType {
            code: self.code,
            nullable: self.nullable,
            referenced_item_type: self.item_type.map(leak_str),
            enum_name: self.enum_name.map(leak_str),
            length: self.length,
        }
    }
}

impl From<&ValueType> for ValueTypeDescription {
    fn from(value_type: &ValueType) -> Self {
        Self {
            code: value_type.code,
            nullable: value_type.nullable,
            item_type: value_type.referenced_item_type.map(str::to_string),
            enum_name: value_type.enum_name.map(str::to_string),
            length: value_type.length,
        }
    }
}

///
/// ViewDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ViewDescription {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<MemberDescription>,

    #[serde(default)]
    pub parameters: Vec<MemberDescription>,
}

impl ViewDescription {
    fn materialize(self) -> &'static ViewModel {
        let columns: Vec<_> = self
            .columns
            .into_iter()
            .map(MemberDescription::into_column)
            .collect();
        let parameters: Vec<_> = self
            .parameters
            .into_iter()
            .map(MemberDescription::into_parameter)
            .collect();

        leak(ViewModel::new(
            leak_str(self.name),
            leak_slice(columns),
            leak_slice(parameters),
        ))
    }
}

impl From<&ViewModel> for ViewDescription {
    fn from(model: &ViewModel) -> Self {
        Self {
            name: model.name.to_string(),
            columns: model.columns.iter().map(MemberDescription::from).collect(),
            parameters: model.parameters.iter().map(MemberDescription::from).collect(),
        }
    }
}

///
/// RightDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RightDescription {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<MemberDescription>,
}

impl RightDescription {
    fn materialize(self) -> &'static RightModel {
        let parameters: Vec<_> = self
            .parameters
            .into_iter()
            .map(MemberDescription::into_parameter)
            .collect();

        leak(RightModel::new(leak_str(self.name), leak_slice(parameters)))
    }
}

impl From<&RightModel> for RightDescription {
    fn from(model: &RightModel) -> Self {
        Self {
            name: model.name.to_string(),
            parameters: model.parameters.iter().map(MemberDescription::from).collect(),
        }
    }
}

///
/// EnumDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDescription {
    pub name: String,
    pub values: Vec<EnumValueDescription>,
}

impl EnumDescription {
    fn materialize(self) -> &'static EnumModel {
        let values: Vec<_> = self
            .values
            .into_iter()
            .map(|v| EnumValueModel::new(leak_str(v.name), v.value))
            .collect();

        leak(EnumModel::new(leak_str(self.name), leak_slice(values)))
    }
}

impl From<&EnumModel> for EnumDescription {
    fn from(model: &EnumModel) -> Self {
        Self {
            name: model.name.to_string(),
            values: model
                .values
                .iter()
                .map(|v| EnumValueDescription {
                    name: v.name.to_string(),
                    value: v.value,
                })
                .collect(),
        }
    }
}

///
/// EnumValueDescription
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnumValueDescription {
    pub name: String,
    pub value: i32,
}

fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

fn leak_str(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

fn leak_slice<T>(values: Vec<T>) -> &'static [T] {
    Box::leak(values.into_boxed_slice())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn course_json() -> serde_json::Value {
        serde_json::json!({
            "item_types": [{
                "name": "CourseItem",
                "properties": [
                    { "name": "Title", "type": { "code": "String", "length": 255 } },
                    { "name": "Owner", "type": { "code": "ItemIdentifier", "item_type": "UserItem", "nullable": true } },
                    { "name": "Status", "type": { "code": "Enumeration", "enum": "CourseStatus" } },
                    { "name": "Archived", "type": { "code": "Boolean" }, "has_default": true }
                ]
            }],
            "enums": [{
                "name": "CourseStatus",
                "values": [{ "name": "Draft", "value": 0 }, { "name": "Live", "value": 1 }]
            }]
        })
    }

    #[test]
    fn description_deserializes_with_defaults() {
        let description: SchemaDescription =
            serde_json::from_value(course_json()).expect("description should parse");

        assert_eq!(description.item_types.len(), 1);
        assert!(description.views.is_empty());
        assert!(description.rights.is_empty());
        assert!(!description.is_empty());

        let owner = &description.item_types[0].properties[1];
        assert_eq!(owner.value_type.code, ValueTypeCode::ItemIdentifier);
        assert_eq!(owner.value_type.item_type.as_deref(), Some("UserItem"));
        assert!(owner.value_type.nullable);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = serde_json::json!({ "item_types": [], "tables": [] });

        assert!(serde_json::from_value::<SchemaDescription>(json).is_err());
    }

    #[test]
    fn materialized_models_keep_every_detail() {
        let description: SchemaDescription =
            serde_json::from_value(course_json()).expect("description should parse");
        let parts = description.materialize();

        let course = parts.item_types[0];
        assert_eq!(course.name, "CourseItem");
        assert_eq!(course.properties.len(), 4);

        let title = course.property("Title").expect("Title");
        assert_eq!(title.max_length(), Some(255));
        assert!(!title.has_default);

        let owner = course.property("Owner").expect("Owner");
        assert_eq!(owner.value_type.referenced_item_type, Some("UserItem"));
        assert!(owner.has_default);

        let status = course.property("Status").expect("Status");
        assert_eq!(status.value_type.enum_name, Some("CourseStatus"));

        assert!(course.property("Archived").expect("Archived").has_default);

        let required: Vec<_> = course.properties_without_default().map(|p| p.name).collect();
        assert_eq!(required, ["Title", "Status"]);

        assert_eq!(parts.enums[0].value_of("Live"), Some(1));
    }

    #[test]
    fn equal_descriptions_share_their_models() {
        let description: SchemaDescription =
            serde_json::from_value(course_json()).expect("description should parse");

        let first = description.clone().materialize();
        let second = description.clone().materialize();

        assert!(description.is_materialized());
        assert!(std::ptr::eq(first.item_types[0], second.item_types[0]));
        assert!(std::ptr::eq(first.enums[0], second.enums[0]));
    }

    #[test]
    fn builtin_models_describe_themselves_faithfully() {
        let parts = CatalogParts::builtin();
        let described = SchemaDescription::from_parts(&parts);

        assert_eq!(described.item_types.len(), parts.item_types.len());
        assert_eq!(described.views.len(), parts.views.len());

        let user = described
            .item_types
            .iter()
            .find(|m| m.name == "UserItem")
            .expect("UserItem");
        let key = user
            .properties
            .iter()
            .find(|p| p.name == "Key")
            .expect("Key");
        assert_eq!(key.value_type.code, ValueTypeCode::String);
        assert_eq!(key.value_type.length, Some(250));
    }
}
