use crate::{
    description::{SchemaDescription, ValueTypeDescription},
    err,
    error::ErrorTree,
};
use learnstore_core::model::value::ValueTypeCode;
use std::collections::BTreeSet;

///
/// KnownNames
/// Item type and enum names a value type may refer to.
///

pub(crate) struct KnownNames<'a> {
    item_types: BTreeSet<&'a str>,
    enums: BTreeSet<&'a str>,
}

impl<'a> KnownNames<'a> {
    pub(crate) fn collect(schemas: &[&'a SchemaDescription]) -> Self {
        Self {
            item_types: schemas
                .iter()
                .copied()
                .flat_map(|s| &s.item_types)
                .map(|m| m.name.as_str())
                .collect(),
            enums: schemas
                .iter()
                .copied()
                .flat_map(|s| &s.enums)
                .map(|m| m.name.as_str())
                .collect(),
        }
    }
}

// Check the references and length of one member's value type.
pub(crate) fn check_value_type(
    errs: &mut ErrorTree,
    member: &str,
    value_type: &ValueTypeDescription,
    known: &KnownNames<'_>,
) {
    match (value_type.code, value_type.item_type.as_deref()) {
        (ValueTypeCode::ItemIdentifier, Some(target)) => {
            if !known.item_types.contains(target) {
                err!(errs, "'{member}' references unknown item type '{target}'");
            }
        }
        (ValueTypeCode::ItemIdentifier, None) => {
            err!(errs, "'{member}' is an item identifier without an item type");
        }
        (code, Some(target)) => {
            err!(errs, "'{member}' is {code} but references item type '{target}'");
        }
        (_, None) => {}
    }

    match (value_type.code, value_type.enum_name.as_deref()) {
        (ValueTypeCode::Enumeration, Some(target)) => {
            if !known.enums.contains(target) {
                err!(errs, "'{member}' references unknown enum '{target}'");
            }
        }
        (ValueTypeCode::Enumeration, None) => {
            err!(errs, "'{member}' is an enumeration without an enum name");
        }
        (code, Some(target)) => {
            err!(errs, "'{member}' is {code} but references enum '{target}'");
        }
        (_, None) => {}
    }

    if let Some(len) = value_type.length {
        if !value_type.code.is_variable_length() {
            err!(errs, "'{member}' is {} and cannot declare a length", value_type.code);
        } else if len <= 0 {
            err!(errs, "'{member}' declares non-positive length {len}");
        }
    }
}
