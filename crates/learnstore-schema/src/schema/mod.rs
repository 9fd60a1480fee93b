//! Built-in schema tables.
//!
//! Every item type, view, right and enum the store ships with is declared
//! here once. The lists at the bottom feed [`crate::Catalog`]; adding a
//! declaration without listing it leaves it out of the catalogue.

pub mod assignment;
pub mod enums;
pub mod right;
pub mod tracking;
pub mod view;

pub use assignment::*;
pub use tracking::*;

use learnstore_core::model::{
    enumeration::EnumModel, item::ItemTypeModel, right::RightModel, view::ViewModel,
};

///
/// ITEM_TYPES
///

pub(crate) static ITEM_TYPES: &[&ItemTypeModel] = &[
    // tracking
    &package_item::MODEL,
    &activity_package_item::MODEL,
    &resource_item::MODEL,
    &activity_objective_item::MODEL,
    &global_objective_item::MODEL,
    &map_activity_objective_to_global_objective_item::MODEL,
    &learner_global_objective_item::MODEL,
    &package_global_objective_item::MODEL,
    &user_item::MODEL,
    &attempt_item::MODEL,
    &activity_attempt_item::MODEL,
    &attempt_objective_item::MODEL,
    &comment_from_learner_item::MODEL,
    &comment_from_lms_item::MODEL,
    &interaction_item::MODEL,
    &correct_response_item::MODEL,
    &evaluation_comment_item::MODEL,
    &interaction_objective_item::MODEL,
    &rubric_item::MODEL,
    &extension_data_item::MODEL,
    &sequencing_log_entry_item::MODEL,
    // assignment
    &assignment_item::MODEL,
    &instructor_assignment_item::MODEL,
    &learner_assignment_item::MODEL,
    &site_settings_item::MODEL,
    &user_web_list_item::MODEL,
];

///
/// VIEWS
///

pub(crate) static VIEWS: &[&ViewModel] = &[
    &view::activity_package_item_view::MODEL,
    &view::me::MODEL,
    &view::my_attempts_and_packages::MODEL,
    &view::user_web_list::MODEL,
    &view::assignment_list_for_instructors::MODEL,
    &view::assignment_properties_view::MODEL,
    &view::instructor_assignment_list::MODEL,
    &view::instructor_assignment_list_for_instructors::MODEL,
    &view::learner_assignment_list_for_instructors::MODEL,
    &view::learner_assignment_list_for_learners::MODEL,
    &view::learner_assignment_list_for_observers::MODEL,
    &view::learner_assignment_view::MODEL,
    &view::sequencing_log::MODEL,
    &view::seq_nav_activity_attempt_view::MODEL,
    &view::seq_nav_activity_package_view::MODEL,
    &view::seq_nav_activity_tree_view::MODEL,
    &view::seq_nav_attempt_comment_from_learner_view::MODEL,
    &view::seq_nav_attempt_correct_response_view::MODEL,
    &view::seq_nav_attempt_evaluation_comment_learner_view::MODEL,
    &view::seq_nav_attempt_extension_data_view::MODEL,
    &view::seq_nav_attempt_interaction_extension_data_view::MODEL,
    &view::seq_nav_attempt_interaction_objective_view::MODEL,
    &view::seq_nav_attempt_interaction_view::MODEL,
    &view::seq_nav_attempt_objective_extension_data_view::MODEL,
    &view::seq_nav_attempt_objective_view::MODEL,
    &view::seq_nav_attempt_rubric_view::MODEL,
    &view::seq_nav_attempt_view::MODEL,
    &view::seq_nav_current_activity_attempt_view::MODEL,
    &view::seq_nav_current_comment_from_lms_view::MODEL,
    &view::seq_nav_learner_global_objective_view::MODEL,
    &view::seq_nav_organization_global_objective_view::MODEL,
];

///
/// RIGHTS
///

pub(crate) static RIGHTS: &[&RightModel] = &[
    &right::add_package_reference_right::MODEL,
    &right::read_package_right::MODEL,
    &right::remove_package_reference_right::MODEL,
    &right::create_attempt_right::MODEL,
    &right::delete_attempt_right::MODEL,
    &right::execute_session_right::MODEL,
    &right::random_access_session_right::MODEL,
    &right::review_session_right::MODEL,
    &right::activate_learner_assignment_right::MODEL,
    &right::complete_learner_assignment_right::MODEL,
    &right::finalize_learner_assignment_right::MODEL,
    &right::finish_learner_assignment_right::MODEL,
    &right::start_attempt_on_learner_assignment_right::MODEL,
];

///
/// ENUMS
///

pub(crate) static ENUMS: &[&EnumModel] = &[
    &enums::attempt_status::MODEL,
    &enums::audio_captioning::MODEL,
    &enums::completion_status::MODEL,
    &enums::exit_mode::MODEL,
    &enums::interaction_result_state::MODEL,
    &enums::interaction_type::MODEL,
    &enums::learner_assignment_state::MODEL,
    &enums::lesson_status::MODEL,
    &enums::navigation_command::MODEL,
    &enums::package_format::MODEL,
    &enums::sequencing_event_type::MODEL,
    &enums::success_status::MODEL,
    &enums::time_limit_action::MODEL,
];
