//! Security rights checked by the store before assignment and attempt operations.

use crate::right;

// ----------------------------------------------------------------------
// Packages
// ----------------------------------------------------------------------

right! {
    add_package_reference_right = "AddPackageReferenceRight" {}
}

right! {
    read_package_right = "ReadPackageRight" {}
}

right! {
    remove_package_reference_right = "RemovePackageReferenceRight" {
        PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
    }
}

// ----------------------------------------------------------------------
// Attempts and sessions
// ----------------------------------------------------------------------

right! {
    create_attempt_right = "CreateAttemptRight" {
        LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
        ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem");
    }
}

right! {
    delete_attempt_right = "DeleteAttemptRight" {
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
    }
}

right! {
    execute_session_right = "ExecuteSessionRight" {
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
    }
}

right! {
    random_access_session_right = "RandomAccessSessionRight" {
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
    }
}

right! {
    review_session_right = "ReviewSessionRight" {
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
    }
}

// ----------------------------------------------------------------------
// Learner assignment lifecycle
// ----------------------------------------------------------------------

right! {
    activate_learner_assignment_right = "ActivateLearnerAssignmentRight" {
        LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
    }
}

right! {
    complete_learner_assignment_right = "CompleteLearnerAssignmentRight" {
        LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
    }
}

right! {
    finalize_learner_assignment_right = "FinalizeLearnerAssignmentRight" {
        LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
    }
}

right! {
    finish_learner_assignment_right = "FinishLearnerAssignmentRight" {
        LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
    }
}

right! {
    start_attempt_on_learner_assignment_right = "StartAttemptOnLearnerAssignmentRight" {
        LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
    }
}
