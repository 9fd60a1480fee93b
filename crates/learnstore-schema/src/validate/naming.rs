use crate::{description::SchemaDescription, err, error::ErrorTree};
use std::collections::BTreeSet;

/// Check one schema identifier: 1..=`max_len` characters, a letter or `_`
/// first, then letters, digits or `_`.
pub fn validate_identifier(name: &str, max_len: usize) -> Result<(), String> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err("identifier is empty".to_string());
    };

    let len = name.chars().count();
    if len > max_len {
        return Err(format!(
            "identifier '{name}' is {len} characters, limit is {max_len}"
        ));
    }

    if !(first.is_alphabetic() || first == '_') {
        return Err(format!(
            "identifier '{name}' must start with a letter or '_'"
        ));
    }

    if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Err(format!("identifier '{name}' contains invalid character {bad:?}"));
    }

    Ok(())
}

// check_identifier
pub(crate) fn check_identifier(errs: &mut ErrorTree, what: &str, name: &str, max_len: usize) {
    if let Err(msg) = validate_identifier(name, max_len) {
        err!(errs, "invalid {what} name: {msg}");
    }
}

// Enforce unique names per namespace. Item types share the view namespace
// through their default views.
pub(crate) fn validate_unique_names(schemas: &[&SchemaDescription], errs: &mut ErrorTree) {
    let mut item_types = BTreeSet::new();
    for item in schemas.iter().flat_map(|s| &s.item_types) {
        if !item_types.insert(item.name.as_str()) {
            err!(errs, "duplicate item type '{}'", item.name);
        }
    }

    let mut views = BTreeSet::new();
    for view in schemas.iter().flat_map(|s| &s.views) {
        if item_types.contains(view.name.as_str()) {
            err!(
                errs,
                "view '{}' collides with the default view of item type '{}'",
                view.name,
                view.name
            );
        } else if !views.insert(view.name.as_str()) {
            err!(errs, "duplicate view '{}'", view.name);
        }
    }

    let mut rights = BTreeSet::new();
    for right in schemas.iter().flat_map(|s| &s.rights) {
        if !rights.insert(right.name.as_str()) {
            err!(errs, "duplicate right '{}'", right.name);
        }
    }

    let mut enums = BTreeSet::new();
    for enumeration in schemas.iter().flat_map(|s| &s.enums) {
        if !enums.insert(enumeration.name.as_str()) {
            err!(errs, "duplicate enum '{}'", enumeration.name);
        }
    }
}

///
/// TESTS
///
