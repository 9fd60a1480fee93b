//! Catalogue validation orchestration.
//!
//! Errors are routed by entity (`item:Name`, `view:Name`, `right:Name`,
//! `enum:Name`) and collected in one pass.

pub mod naming;
pub mod reference;

#[cfg(test)]
mod tests;

use crate::{
    description::{
        EnumDescription, ItemTypeDescription, RightDescription, SchemaDescription,
        ViewDescription,
    },
    err,
    error::ErrorTree,
};
use learnstore_core::ID_PROPERTY;
use reference::KnownNames;
use std::collections::BTreeSet;

/// Run full validation over every schema that will share one catalogue,
/// in a staged, deterministic order.
pub(crate) fn validate_schemas(
    schemas: &[&SchemaDescription],
    max_len: usize,
) -> Result<(), ErrorTree> {
    let known = KnownNames::collect(schemas);
    let mut errors = ErrorTree::new();

    // Phase 1: each entity on its own.
    for item in schemas.iter().flat_map(|s| &s.item_types) {
        errors.merge_for(
            format!("item:{}", item.name),
            validate_item_type(item, &known, max_len),
        );
    }
    for view in schemas.iter().flat_map(|s| &s.views) {
        errors.merge_for(
            format!("view:{}", view.name),
            validate_view(view, &known, max_len),
        );
    }
    for right in schemas.iter().flat_map(|s| &s.rights) {
        errors.merge_for(
            format!("right:{}", right.name),
            validate_right(right, &known, max_len),
        );
    }
    for enumeration in schemas.iter().flat_map(|s| &s.enums) {
        errors.merge_for(
            format!("enum:{}", enumeration.name),
            validate_enum(enumeration, max_len),
        );
    }

    // Phase 2: namespace-wide uniqueness.
    naming::validate_unique_names(schemas, &mut errors);

    errors.result()
}

// validate_item_type
fn validate_item_type(
    item: &ItemTypeDescription,
    known: &KnownNames<'_>,
    max_len: usize,
) -> ErrorTree {
    let mut errs = ErrorTree::new();
    naming::check_identifier(&mut errs, "item type", &item.name, max_len);

    let mut seen = BTreeSet::new();
    for property in &item.properties {
        naming::check_identifier(&mut errs, "property", &property.name, max_len);

        if property.name == ID_PROPERTY {
            err!(errs, "property name '{ID_PROPERTY}' is reserved for the item key");
        }
        if !seen.insert(property.name.as_str()) {
            err!(errs, "duplicate property '{}'", property.name);
        }

        reference::check_value_type(&mut errs, &property.name, &property.value_type, known);
    }

    errs
}

// validate_view
fn validate_view(view: &ViewDescription, known: &KnownNames<'_>, max_len: usize) -> ErrorTree {
    let mut errs = ErrorTree::new();
    naming::check_identifier(&mut errs, "view", &view.name, max_len);

    let mut columns = BTreeSet::new();
    for column in &view.columns {
        naming::check_identifier(&mut errs, "column", &column.name, max_len);
        if !columns.insert(column.name.as_str()) {
            err!(errs, "duplicate column '{}'", column.name);
        }
        reference::check_value_type(&mut errs, &column.name, &column.value_type, known);
    }

    let mut parameters = BTreeSet::new();
    for parameter in &view.parameters {
        naming::check_identifier(&mut errs, "parameter", &parameter.name, max_len);
        if !parameters.insert(parameter.name.as_str()) {
            err!(errs, "duplicate parameter '{}'", parameter.name);
        }
        reference::check_value_type(&mut errs, &parameter.name, &parameter.value_type, known);
    }

    errs
}

// validate_right
fn validate_right(right: &RightDescription, known: &KnownNames<'_>, max_len: usize) -> ErrorTree {
    let mut errs = ErrorTree::new();
    naming::check_identifier(&mut errs, "right", &right.name, max_len);

    let mut parameters = BTreeSet::new();
    for parameter in &right.parameters {
        naming::check_identifier(&mut errs, "parameter", &parameter.name, max_len);
        if !parameters.insert(parameter.name.as_str()) {
            err!(errs, "duplicate parameter '{}'", parameter.name);
        }
        reference::check_value_type(&mut errs, &parameter.name, &parameter.value_type, known);
    }

    errs
}

// validate_enum
fn validate_enum(enumeration: &EnumDescription, max_len: usize) -> ErrorTree {
    let mut errs = ErrorTree::new();
    naming::check_identifier(&mut errs, "enum", &enumeration.name, max_len);

    if enumeration.values.is_empty() {
        err!(errs, "enum declares no values");
    }

    let mut names = BTreeSet::new();
    let mut values = BTreeSet::new();
    for member in &enumeration.values {
        naming::check_identifier(&mut errs, "enum value", &member.name, max_len);
        if !names.insert(member.name.as_str()) {
            err!(errs, "duplicate enum value name '{}'", member.name);
        }
        if !values.insert(member.value) {
            err!(
                errs,
                "enum value '{}' reuses numeric value {}",
                member.name,
                member.value
            );
        }
    }

    errs
}
