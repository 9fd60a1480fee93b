use super::*;
use crate::{
    error::{ErrorClass, InternalError},
    model::{
        item::{ItemTypeModel, PropertyModel},
        value::ValueType,
    },
    traits::{ItemKind, PlaceholderId},
};
use proptest::prelude::*;
use std::collections::HashSet;

// ----------------------------------------------------------------------
// Fixture kinds
// ----------------------------------------------------------------------

static COURSE_PROPERTIES: [PropertyModel; 1] =
    [PropertyModel::new("Title", ValueType::string(255))];
static COURSE_MODEL: ItemTypeModel = ItemTypeModel::new("CourseItem", &COURSE_PROPERTIES);

static ENROLMENT_PROPERTIES: [PropertyModel; 1] =
    [PropertyModel::new("CourseId", ValueType::item_id("CourseItem"))];
static ENROLMENT_MODEL: ItemTypeModel =
    ItemTypeModel::new("EnrolmentItem", &ENROLMENT_PROPERTIES);

struct Course;

impl ItemKind for Course {
    const ITEM_TYPE_NAME: &'static str = "CourseItem";
    const MODEL: &'static ItemTypeModel = &COURSE_MODEL;
}

struct Enrolment;

impl ItemKind for Enrolment {
    const ITEM_TYPE_NAME: &'static str = "EnrolmentItem";
    const MODEL: &'static ItemTypeModel = &ENROLMENT_MODEL;
}

impl PlaceholderId for Enrolment {}

// ----------------------------------------------------------------------
// Typed construction
// ----------------------------------------------------------------------

#[test]
fn new_tags_with_kind_name_and_keeps_key() {
    let id = ItemId::<Course>::new(42).unwrap();

    assert_eq!(id.item_type_name(), "CourseItem");
    assert_eq!(id.key().unwrap(), 42);
    assert_eq!(id.model().name, "CourseItem");
}

#[test]
fn new_rejects_non_positive_keys() {
    for key in [0, -1, i64::MIN] {
        let err = ItemId::<Course>::new(key).unwrap_err();

        assert_eq!(err, IdentifierError::KeyOutOfRange { key });
        assert_eq!(err.class(), ErrorClass::OutOfRange);
    }
}

// ----------------------------------------------------------------------
// Narrowing
// ----------------------------------------------------------------------

#[test]
fn narrowing_matching_tag_keeps_key() {
    let generic = ItemIdentifier::new("CourseItem", 7).unwrap();
    let id = ItemId::<Course>::from_generic(&generic).unwrap();

    assert_eq!(id.raw_key(), 7);
    assert_eq!(id, generic);
    assert_eq!(generic, id);
}

#[test]
fn narrowing_other_tag_is_out_of_range() {
    let generic = ItemIdentifier::new("CourseItem", 7).unwrap();
    let err = generic.narrow::<Enrolment>().unwrap_err();

    assert!(matches!(
        err,
        IdentifierError::ItemTypeMismatch {
            expected: "EnrolmentItem",
            ref found,
        } if found == "CourseItem"
    ));
    assert_eq!(err.class(), ErrorClass::OutOfRange);
}

#[test]
fn narrowing_is_case_sensitive() {
    let generic = ItemIdentifier::new("courseitem", 7).unwrap();

    assert!(ItemId::<Course>::try_from(&generic).is_err());
}

#[test]
fn narrowing_absent_id_is_missing_argument() {
    let err = ItemId::<Course>::from_optional(None).unwrap_err();

    assert_eq!(err, IdentifierError::MissingArgument { argument: "id" });
    assert_eq!(err.class(), ErrorClass::MissingArgument);

    let internal: InternalError = err.into();
    assert!(internal.is_missing_argument());
}

#[test]
fn narrowing_keeps_temporary_keys() {
    let temp = ItemIdentifier::temporary("CourseItem").unwrap();
    let id = ItemId::<Course>::try_from(temp.clone()).unwrap();

    assert_eq!(id.raw_key(), temp.raw_key());
    assert!(!id.has_key());
    assert!(matches!(
        id.key(),
        Err(IdentifierError::KeyUnavailable { .. })
    ));
}

#[test]
fn upcast_then_narrow_is_identity() {
    let id = ItemId::<Enrolment>::new(11).unwrap();
    let generic: ItemIdentifier = id.into();

    assert_eq!(generic.item_type_name(), "EnrolmentItem");
    assert_eq!(generic.narrow::<Enrolment>().unwrap(), id);
}

// ----------------------------------------------------------------------
// Placeholder
// ----------------------------------------------------------------------

#[test]
fn placeholder_has_tag_but_no_key() {
    let id = ItemId::<Enrolment>::default();

    assert_eq!(id.item_type_name(), "EnrolmentItem");
    assert!(!id.has_key());
    assert_eq!(
        id.key().unwrap_err().class(),
        ErrorClass::InvalidOperation
    );
    assert_eq!(id.to_string(), "ItemType:EnrolmentItem");
    assert_eq!(ItemId::<Enrolment>::placeholder(), id);
}

// ----------------------------------------------------------------------
// Generic identifiers
// ----------------------------------------------------------------------

#[test]
fn generic_requires_positive_key_and_name() {
    assert_eq!(
        ItemIdentifier::new("CourseItem", 0).unwrap_err(),
        IdentifierError::KeyOutOfRange { key: 0 }
    );
    assert_eq!(
        ItemIdentifier::new("", 3).unwrap_err(),
        IdentifierError::MissingArgument {
            argument: "item_type_name"
        }
    );
}

#[test]
fn temporary_keys_are_distinct_and_negative() {
    let keys: HashSet<i64> = (0..64)
        .map(|_| ItemIdentifier::temporary("CourseItem").unwrap().raw_key())
        .collect();

    assert_eq!(keys.len(), 64);
    assert!(keys.iter().all(|k| *k < 0));
}

#[test]
fn display_omits_unavailable_key() {
    let real = ItemIdentifier::new("CourseItem", 5).unwrap();
    let temp = ItemIdentifier::temporary("CourseItem").unwrap();

    assert_eq!(real.to_string(), "ItemType:CourseItem, Key:5");
    assert_eq!(temp.to_string(), "ItemType:CourseItem");
    assert_eq!(
        ItemId::<Course>::new(5).unwrap().to_string(),
        real.to_string()
    );
}

#[test]
fn equality_covers_both_tag_and_key() {
    let a = ItemIdentifier::new("CourseItem", 5).unwrap();

    assert_eq!(a, ItemIdentifier::new("CourseItem", 5).unwrap());
    assert_ne!(a, ItemIdentifier::new("CourseItem", 6).unwrap());
    assert_ne!(a, ItemIdentifier::new("EnrolmentItem", 5).unwrap());
}

// ----------------------------------------------------------------------
// Serialization
// ----------------------------------------------------------------------

#[test]
fn typed_id_serializes_as_bare_key() {
    let id = ItemId::<Course>::new(9).unwrap();

    assert_eq!(serde_json::to_string(&id).unwrap(), "9");
    assert_eq!(serde_json::from_str::<ItemId<Course>>("9").unwrap(), id);
    assert!(serde_json::from_str::<ItemId<Course>>("0").is_err());
}

#[test]
fn generic_id_serializes_with_tag() {
    let id = ItemIdentifier::new("CourseItem", 9).unwrap();
    let json = serde_json::to_value(&id).unwrap();

    assert_eq!(json, serde_json::json!({ "item_type": "CourseItem", "key": 9 }));
    assert_eq!(serde_json::from_value::<ItemIdentifier>(json).unwrap(), id);
}

#[test]
fn temporary_ids_do_not_serialize() {
    let temp = ItemIdentifier::temporary("CourseItem").unwrap();

    assert!(serde_json::to_string(&temp).is_err());
    assert!(serde_json::to_string(&ItemId::<Enrolment>::placeholder()).is_err());
    assert!(
        serde_json::from_str::<ItemIdentifier>(r#"{"item_type":"CourseItem","key":-4}"#).is_err()
    );
}

// ----------------------------------------------------------------------
// Properties
// ----------------------------------------------------------------------

proptest! {
    #[test]
    fn typed_construction_accepts_exactly_positive_keys(key in any::<i64>()) {
        let result = ItemId::<Course>::new(key);

        prop_assert_eq!(result.is_ok(), key > 0);
        if let Ok(id) = result {
            prop_assert_eq!(id.item_type_name(), Course::ITEM_TYPE_NAME);
            prop_assert_eq!(id.key(), Ok(key));
        }
    }

    #[test]
    fn narrowing_succeeds_only_for_own_tag(key in 1..i64::MAX, own in any::<bool>()) {
        let name = if own { "CourseItem" } else { "EnrolmentItem" };
        let generic = ItemIdentifier::new(name, key).unwrap();

        prop_assert_eq!(generic.narrow::<Course>().is_ok(), own);
    }
}
