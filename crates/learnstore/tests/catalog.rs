use learnstore::{
    Error,
    error::{CatalogErrorKind, ErrorKind},
    prelude::*,
    schema::config::CatalogConfig,
};
use std::{env, fs};

#[test]
fn every_builtin_item_type_has_a_typed_handle() {
    assert_eq!(<UserItem as ItemKind>::MODEL.name, user_item::ITEM_TYPE_NAME);
    assert_eq!(
        <ActivityAttemptItem as ItemKind>::MODEL.name,
        activity_attempt_item::ITEM_TYPE_NAME
    );

    for model in catalog().item_types() {
        assert!(!model.name.is_empty());
        let generic = ItemIdentifier::new(model.name, 1).expect("positive key");
        assert_eq!(generic.item_type_name(), model.name);
    }
}

#[test]
fn view_right_and_enum_constants_match_their_models() {
    let catalog = catalog();

    for (name, model) in [
        (view::me::VIEW_NAME, view::me::MODEL.name),
        (view::sequencing_log::VIEW_NAME, view::sequencing_log::MODEL.name),
        (
            view::learner_assignment_list_for_instructors::VIEW_NAME,
            view::learner_assignment_list_for_instructors::MODEL.name,
        ),
    ] {
        assert_eq!(name, model);
        assert_eq!(catalog.view(name).expect("view").name, name);
    }

    assert_eq!(
        catalog
            .right(right::finalize_learner_assignment_right::RIGHT_NAME)
            .expect("right")
            .parameters[0]
            .name,
        right::finalize_learner_assignment_right::LEARNER_ASSIGNMENT_GUID_ID
    );

    let state = catalog
        .enum_type(enums::learner_assignment_state::ENUM_NAME)
        .expect("enum");
    assert_eq!(
        state.value_of("Completed"),
        Some(enums::learner_assignment_state::COMPLETED)
    );
}

#[test]
fn max_length_constants_agree_with_catalog() {
    let catalog = catalog();

    for (item_type, property, expected) in [
        ("AssignmentItem", assignment_item::TITLE, assignment_item::MAX_TITLE_LENGTH),
        ("UserItem", user_item::KEY, user_item::MAX_KEY_LENGTH),
        ("UserItem", user_item::NAME, user_item::MAX_NAME_LENGTH),
        (
            "UserWebListItem",
            user_web_list_item::OWNER_KEY,
            user_web_list_item::MAX_OWNER_KEY_LENGTH,
        ),
    ] {
        assert_eq!(catalog.max_length(item_type, property).ok(), Some(expected));
    }
}

#[test]
fn missing_lookups_surface_as_public_errors() {
    let err: Error = catalog()
        .item_type("NoSuchItem")
        .expect_err("unknown item type")
        .into();

    assert_eq!(err.kind, ErrorKind::Catalog(CatalogErrorKind::NotFound));
}

#[test]
fn config_file_extends_builtin_catalog() {
    let path = env::temp_dir().join(format!("learnstore-catalog-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
        [[extension.item_types]]
        name = "CourseItem"

        [[extension.item_types.properties]]
        name = "Title"
        type = { code = "String", length = 255 }

        [[extension.item_types.properties]]
        name = "Instructor"
        type = { code = "ItemIdentifier", item_type = "UserItem" }
        "#,
    )
    .expect("write config");

    let config = CatalogConfig::from_path(&path).expect("config should load");
    fs::remove_file(&path).ok();

    let catalog = Catalog::from_config(&config).expect("catalog should build");
    assert_eq!(catalog.try_max_length("CourseItem", "Title"), Some(255));
    assert!(catalog.try_item_type("AssignmentItem").is_some());
    assert_ne!(catalog.fingerprint(), learnstore::catalog().fingerprint());
}

#[test]
fn config_with_bad_reference_fails_validation() {
    let config = CatalogConfig::from_toml_str(
        r#"
        [catalog]
        include_builtin = false

        [[extension.views]]
        name = "Orphans"
        columns = [{ name = "ParentId", type = { code = "ItemIdentifier", item_type = "Nowhere" } }]
        "#,
    )
    .expect("config should parse");

    let err: Error = Catalog::from_config(&config)
        .expect_err("dangling reference")
        .into();
    assert_eq!(err.kind, ErrorKind::Catalog(CatalogErrorKind::Invalid));
    assert!(err.message.contains("view:Orphans"));
}
