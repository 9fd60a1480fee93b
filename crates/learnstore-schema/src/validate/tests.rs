use super::*;
use crate::catalog::CatalogParts;
use learnstore_core::{
    MAX_IDENTIFIER_LEN,
    model::{
        enumeration::{EnumModel, EnumValueModel},
        item::{ItemTypeModel, PropertyModel},
        value::ValueType,
        view::{ColumnModel, ViewModel},
    },
};

static NOTE_PROPERTIES: [PropertyModel; 2] = [
    PropertyModel::new("Title", ValueType::string(100)),
    PropertyModel::new("Owner", ValueType::item_id("PersonItem")),
];
static NOTE: ItemTypeModel = ItemTypeModel::new("NoteItem", &NOTE_PROPERTIES);

static PERSON_PROPERTIES: [PropertyModel; 1] =
    [PropertyModel::new("Mood", ValueType::enumeration("Mood"))];
static PERSON: ItemTypeModel = ItemTypeModel::new("PersonItem", &PERSON_PROPERTIES);

static MOOD_VALUES: [EnumValueModel; 2] =
    [EnumValueModel::new("Calm", 0), EnumValueModel::new("Busy", 1)];
static MOOD: EnumModel = EnumModel::new("Mood", &MOOD_VALUES);

static NOTE_LIST_COLUMNS: [ColumnModel; 1] =
    [ColumnModel::new("NoteId", ValueType::item_id("NoteItem"))];
static NOTE_LIST: ViewModel = ViewModel::new("NoteList", &NOTE_LIST_COLUMNS, &[]);

fn valid_parts() -> CatalogParts {
    CatalogParts {
        item_types: vec![&NOTE, &PERSON],
        views: vec![&NOTE_LIST],
        rights: vec![],
        enums: vec![&MOOD],
    }
}

fn validate_parts(parts: &CatalogParts, max_len: usize) -> Result<(), ErrorTree> {
    let described = SchemaDescription::from_parts(parts);

    validate_schemas(&[&described], max_len)
}

fn messages(parts: &CatalogParts) -> Vec<(String, String)> {
    validate_parts(parts, MAX_IDENTIFIER_LEN)
        .expect_err("validation should fail")
        .flatten()
}

fn has_message(errors: &[(String, String)], route: &str, needle: &str) -> bool {
    errors
        .iter()
        .any(|(r, m)| r == route && m.contains(needle))
}

#[test]
fn builtin_tables_validate() {
    if let Err(errors) = validate_parts(&CatalogParts::builtin(), MAX_IDENTIFIER_LEN) {
        panic!("built-in tables failed validation:\n{errors}");
    }
}

#[test]
fn small_consistent_schema_validates() {
    assert!(validate_parts(&valid_parts(), MAX_IDENTIFIER_LEN).is_ok());
}

#[test]
fn duplicate_item_type_is_reported() {
    let mut parts = valid_parts();
    parts.item_types.push(&NOTE);

    let errors = messages(&parts);
    assert!(has_message(&errors, "", "duplicate item type 'NoteItem'"));
}

#[test]
fn view_cannot_shadow_a_default_view() {
    static SHADOW: ViewModel = ViewModel::new("NoteItem", &NOTE_LIST_COLUMNS, &[]);

    let mut parts = valid_parts();
    parts.views.push(&SHADOW);

    let errors = messages(&parts);
    assert!(has_message(&errors, "", "collides with the default view"));
}

#[test]
fn dangling_references_are_reported() {
    let mut parts = valid_parts();
    parts.item_types.retain(|m| m.name != "PersonItem");
    parts.enums.clear();

    let errors = messages(&parts);
    assert!(has_message(
        &errors,
        "item:NoteItem",
        "references unknown item type 'PersonItem'"
    ));
    assert!(!has_message(&errors, "item:NoteItem", "unknown enum"));
}

#[test]
fn unknown_enum_is_reported() {
    let mut parts = valid_parts();
    parts.enums.clear();

    let errors = messages(&parts);
    assert!(has_message(
        &errors,
        "item:PersonItem",
        "references unknown enum 'Mood'"
    ));
}

#[test]
fn all_problems_are_collected_in_one_pass() {
    static BAD_PROPERTIES: [PropertyModel; 4] = [
        PropertyModel::new("Id", ValueType::int32()),
        PropertyModel::new("Count", ValueType {
            length: Some(4),
            ..ValueType::int32()
        }),
        PropertyModel::new("Name", ValueType::string(0)),
        PropertyModel::new("Name", ValueType::string(10)),
    ];
    static BAD: ItemTypeModel = ItemTypeModel::new("Bad Item", &BAD_PROPERTIES);

    let mut parts = valid_parts();
    parts.item_types.push(&BAD);

    let errors = messages(&parts);
    let route = "item:Bad Item";

    assert!(has_message(&errors, route, "invalid item type name"));
    assert!(has_message(&errors, route, "reserved for the item key"));
    assert!(has_message(&errors, route, "cannot declare a length"));
    assert!(has_message(&errors, route, "non-positive length 0"));
    assert!(has_message(&errors, route, "duplicate property 'Name'"));
    assert_eq!(errors.iter().filter(|(r, _)| r == route).count(), 5);
}

#[test]
fn enum_values_must_be_unique() {
    static CLASH_VALUES: [EnumValueModel; 3] = [
        EnumValueModel::new("A", 0),
        EnumValueModel::new("B", 0),
        EnumValueModel::new("A", 2),
    ];
    static CLASH: EnumModel = EnumModel::new("Clash", &CLASH_VALUES);

    let mut parts = valid_parts();
    parts.enums.push(&CLASH);

    let errors = messages(&parts);
    assert!(has_message(&errors, "enum:Clash", "reuses numeric value 0"));
    assert!(has_message(&errors, "enum:Clash", "duplicate enum value name 'A'"));
}

#[test]
fn duplicate_view_columns_are_reported() {
    static TWICE: [ColumnModel; 2] = [
        ColumnModel::new("NoteId", ValueType::item_id("NoteItem")),
        ColumnModel::new("NoteId", ValueType::item_id("NoteItem")),
    ];
    static TWICE_VIEW: ViewModel = ViewModel::new("TwiceView", &TWICE, &[]);

    let mut parts = valid_parts();
    parts.views.push(&TWICE_VIEW);

    let errors = messages(&parts);
    assert!(has_message(&errors, "view:TwiceView", "duplicate column 'NoteId'"));
}

#[test]
fn identifier_limit_is_configurable() {
    let errors = validate_parts(&valid_parts(), 4)
        .expect_err("short limit should reject long names")
        .flatten();

    assert!(has_message(&errors, "item:NoteItem", "limit is 4"));
}

#[test]
fn names_are_unique_across_schemas() {
    let builtin = SchemaDescription::from_parts(&valid_parts());
    let mut extension = SchemaDescription::from_parts(&CatalogParts {
        item_types: vec![&PERSON],
        ..CatalogParts::default()
    });
    extension.enums.clear();

    let errors = validate_schemas(&[&builtin, &extension], MAX_IDENTIFIER_LEN)
        .expect_err("PersonItem is declared twice")
        .flatten();

    assert!(has_message(&errors, "", "duplicate item type 'PersonItem'"));
    assert!(!has_message(&errors, "item:PersonItem", "unknown enum"));
}
