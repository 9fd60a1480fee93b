use crate::catalog::Catalog;
use learnstore_core::model::value::ValueType;
use sha2::{Digest, Sha256};
use std::fmt;

const FINGERPRINT_DOMAIN: &[u8] = b"learnstore:catalog-fingerprint:v1";

///
/// CatalogFingerprint
///
/// SHA-256 digest of a canonical rendering of a catalogue.
/// Two catalogues with equal fingerprints declare the same names, types,
/// lengths, nullability and defaults.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CatalogFingerprint([u8; 32]);

impl CatalogFingerprint {
    pub(crate) fn of(catalog: &Catalog) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(FINGERPRINT_DOMAIN);

        for item in catalog.item_types() {
            write_section(&mut hasher, b"item", item.name);
            for property in item.properties {
                write_section(&mut hasher, b"property", property.name);
                write_value_type(&mut hasher, &property.value_type);
                hasher.update([u8::from(property.has_default)]);
            }
        }

        for view in catalog.views() {
            write_section(&mut hasher, b"view", view.name);
            for column in view.columns {
                write_section(&mut hasher, b"column", column.name);
                write_value_type(&mut hasher, &column.value_type);
            }
            for parameter in view.parameters {
                write_section(&mut hasher, b"parameter", parameter.name);
                write_value_type(&mut hasher, &parameter.value_type);
            }
        }

        for right in catalog.rights() {
            write_section(&mut hasher, b"right", right.name);
            for parameter in right.parameters {
                write_section(&mut hasher, b"parameter", parameter.name);
                write_value_type(&mut hasher, &parameter.value_type);
            }
        }

        for enumeration in catalog.enums() {
            write_section(&mut hasher, b"enum", enumeration.name);
            for value in enumeration.values {
                write_section(&mut hasher, b"value", value.name);
                hasher.update(value.value.to_be_bytes());
            }
        }

        Self(hasher.finalize().into())
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CatalogFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

// Length-prefixed so adjacent names never run together.
fn write_section(hasher: &mut Sha256, tag: &[u8], name: &str) {
    hasher.update(tag);
    hasher.update((name.len() as u64).to_be_bytes());
    hasher.update(name.as_bytes());
}

fn write_value_type(hasher: &mut Sha256, value_type: &ValueType) {
    let code = value_type.code.to_string();
    write_section(hasher, b"code", &code);
    hasher.update([u8::from(value_type.nullable)]);
    write_optional(hasher, b"ref", value_type.referenced_item_type);
    write_optional(hasher, b"enum", value_type.enum_name);

    match value_type.length {
        Some(len) => {
            hasher.update([1]);
            hasher.update(len.to_be_bytes());
        }
        None => hasher.update([0]),
    }
}

fn write_optional(hasher: &mut Sha256, tag: &[u8], value: Option<&str>) {
    match value {
        Some(value) => write_section(hasher, tag, value),
        None => hasher.update([0]),
    }
}
