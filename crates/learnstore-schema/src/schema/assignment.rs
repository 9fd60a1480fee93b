//! Item types of the assignment layer: assignments handed out on a site,
//! their instructors and learners, per-site settings and recent webs.

use crate::item_type;
use learnstore_core::traits::PlaceholderId;

item_type! {
    /// One assignment created by an instructor on a site.
    assignment_item, AssignmentItem, AssignmentItemId = "AssignmentItem" {
        SP_SITE_GUID = "SPSiteGuid": ValueType::guid();
        SP_WEB_GUID = "SPWebGuid": ValueType::guid();
        TITLE = "Title": ValueType::string(1000) => MAX_TITLE_LENGTH;
        START_DATE = "StartDate": ValueType::date_time();
        DUE_DATE = "DueDate": ValueType::date_time().nullable();
        POINTS_POSSIBLE = "PointsPossible": ValueType::single().nullable();
        DESCRIPTION = "Description": ValueType::text(), with_default => MAX_DESCRIPTION_LENGTH;
        AUTO_RETURN = "AutoReturn": ValueType::boolean(), with_default;
        SHOW_ANSWERS_TO_LEARNERS = "ShowAnswersToLearners": ValueType::boolean(), with_default;
        CREATED_BY = "CreatedBy": ValueType::item_id("UserItem");
        DATE_CREATED = "DateCreated": ValueType::date_time();
        NON_E_LEARNING_LOCATION = "NonELearningLocation": ValueType::text().nullable()
            => MAX_NON_E_LEARNING_LOCATION_LENGTH;
        ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        EMAIL_CHANGES = "EmailChanges": ValueType::boolean(), with_default;
    }
}

item_type! {
    /// Links an instructor to an assignment.
    instructor_assignment_item, InstructorAssignmentItem, InstructorAssignmentItemId = "InstructorAssignmentItem" {
        ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
        INSTRUCTOR_ID = "InstructorId": ValueType::item_id("UserItem");
    }
}

item_type! {
    /// One learner's copy of an assignment.
    learner_assignment_item, LearnerAssignmentItem, LearnerAssignmentItemId = "LearnerAssignmentItem" {
        ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
        LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
        IS_FINAL = "IsFinal": ValueType::boolean(), with_default;
        NON_E_LEARNING_STATUS = "NonELearningStatus": ValueType::enumeration("AttemptStatus").nullable();
        FINAL_POINTS = "FinalPoints": ValueType::single().nullable();
        INSTRUCTOR_COMMENTS = "InstructorComments": ValueType::text(), with_default
            => MAX_INSTRUCTOR_COMMENTS_LENGTH;
        GUID_ID = "GuidId": ValueType::guid(), with_default;
    }
}

// Learner assignments are created unbound by grading and listing code and
// receive their key later.
impl PlaceholderId for LearnerAssignmentItem {}

item_type! {
    /// Settings document for one site collection.
    site_settings_item, SiteSettingsItem, SiteSettingsItemId = "SiteSettingsItem" {
        SITE_GUID = "SiteGuid": ValueType::guid();
        SETTINGS_XML = "SettingsXml": ValueType::text() => MAX_SETTINGS_XML_LENGTH;
        SETTINGS_XML_LAST_MODIFIED = "SettingsXmlLastModified": ValueType::date_time();
    }
}

item_type! {
    /// A web recently visited by a user, for the "assign to" picker.
    user_web_list_item, UserWebListItem, UserWebListItemId = "UserWebListItem" {
        OWNER_KEY = "OwnerKey": ValueType::string(250) => MAX_OWNER_KEY_LENGTH;
        SP_SITE_GUID = "SPSiteGuid": ValueType::guid();
        SP_WEB_GUID = "SPWebGuid": ValueType::guid();
        LAST_ACCESS_TIME = "LastAccessTime": ValueType::date_time();
    }
}
