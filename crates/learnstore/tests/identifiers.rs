use learnstore::{
    Error,
    error::{ErrorKind, IdentifierErrorKind},
    prelude::*,
};
use proptest::prelude::*;

// One test module per assignment-layer wrapper; every wrapper obeys the
// same construction and narrowing contract.
macro_rules! wrapper_contract {
    ($($test_mod:ident => $kind:ty, $alias:ty, $module:ident;)*) => {
        $(
            mod $test_mod {
                use super::*;

                #[test]
                fn raw_key_carries_fixed_tag() {
                    let id = <$alias>::new(7).expect("positive key");

                    assert_eq!(id.item_type_name(), $module::ITEM_TYPE_NAME);
                    assert_eq!(id.item_type_name(), <$kind as ItemKind>::ITEM_TYPE_NAME);
                    assert_eq!(id.key(), Ok(7));
                }

                #[test]
                fn matching_generic_narrows_and_keeps_key() {
                    let generic = ItemIdentifier::new($module::ITEM_TYPE_NAME, 31)
                        .expect("generic identifier");
                    let id = <$alias>::from_generic(&generic).expect("matching tag");

                    assert_eq!(id.key(), Ok(31));
                    assert_eq!(id, generic);
                    assert_eq!(ItemIdentifier::from(id), generic);
                }

                #[test]
                fn foreign_generic_is_out_of_range() {
                    let generic = ItemIdentifier::new("SomeOtherItem", 31)
                        .expect("generic identifier");
                    let err = <$alias>::from_generic(&generic).expect_err("foreign tag");

                    assert!(matches!(err, IdentifierError::ItemTypeMismatch { .. }));
                    assert!(InternalError::from(err).is_out_of_range());
                }

                #[test]
                fn absent_generic_is_missing_argument() {
                    let err = <$alias>::from_optional(None).expect_err("absent input");

                    assert_eq!(err, IdentifierError::MissingArgument { argument: "id" });
                    assert!(InternalError::from(err).is_missing_argument());
                }

                #[test]
                fn non_positive_keys_are_out_of_range() {
                    for key in [0, -1, i64::MIN] {
                        let err = <$alias>::new(key).expect_err("non-positive key");
                        let public: Error = err.into();

                        assert_eq!(
                            public.kind,
                            ErrorKind::Identifier(IdentifierErrorKind::OutOfRange)
                        );
                    }
                }

                #[test]
                fn item_type_name_constant_is_stable() {
                    let first = $module::ITEM_TYPE_NAME;
                    let second = $module::ITEM_TYPE_NAME;

                    assert!(!first.is_empty());
                    assert_eq!(first, second);
                    assert_eq!(first, $module::MODEL.name);
                    assert_eq!(
                        catalog().item_type(first).expect("catalogued").name,
                        first
                    );
                }
            }
        )*
    };
}

wrapper_contract! {
    assignment => AssignmentItem, AssignmentItemId, assignment_item;
    instructor_assignment => InstructorAssignmentItem, InstructorAssignmentItemId, instructor_assignment_item;
    learner_assignment => LearnerAssignmentItem, LearnerAssignmentItemId, learner_assignment_item;
    site_settings => SiteSettingsItem, SiteSettingsItemId, site_settings_item;
    user_web_list => UserWebListItem, UserWebListItemId, user_web_list_item;
}

#[test]
fn assignment_id_cannot_become_learner_assignment_id() {
    let assignment = AssignmentItemId::new(42).expect("positive key");
    assert_eq!(assignment.key(), Ok(42));
    assert_eq!(assignment.item_type_name(), "AssignmentItem");

    let generic: ItemIdentifier = assignment.into();
    let err = LearnerAssignmentItemId::try_from(&generic).expect_err("tag mismatch");

    assert_eq!(
        err,
        IdentifierError::ItemTypeMismatch {
            expected: "LearnerAssignmentItem",
            found: "AssignmentItem".to_string(),
        }
    );
}

#[test]
fn learner_assignment_placeholder_always_succeeds() {
    let placeholder = LearnerAssignmentItemId::placeholder();
    let defaulted = LearnerAssignmentItemId::default();

    assert_eq!(placeholder, defaulted);
    assert_eq!(placeholder.item_type_name(), "LearnerAssignmentItem");
    assert!(!placeholder.has_key());
    assert!(matches!(
        placeholder.key(),
        Err(IdentifierError::KeyUnavailable { .. })
    ));
}

#[test]
fn typed_ids_serialize_as_bare_keys() {
    let id = SiteSettingsItemId::new(9).expect("positive key");

    assert_eq!(serde_json::to_string(&id).expect("serialize"), "9");
    assert_eq!(
        serde_json::from_str::<SiteSettingsItemId>("9").expect("deserialize"),
        id
    );
    assert!(serde_json::from_str::<SiteSettingsItemId>("0").is_err());
}

proptest! {
    #[test]
    fn positive_keys_round_trip_through_generic(key in 1_i64..=i64::MAX) {
        let id = UserWebListItemId::new(key).expect("positive key");
        let back = UserWebListItemId::try_from(id.to_generic()).expect("same tag");

        prop_assert_eq!(back, id);
        prop_assert_eq!(back.raw_key(), key);
    }

    #[test]
    fn non_positive_keys_never_construct(key in i64::MIN..=0_i64) {
        prop_assert!(InstructorAssignmentItemId::new(key).is_err());
    }
}
