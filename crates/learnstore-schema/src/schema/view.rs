//! Views exposed by the store, beyond the per-item-type default views.

use crate::view;

// ----------------------------------------------------------------------
// Packages and users
// ----------------------------------------------------------------------

view! {
    activity_package_item_view = "ActivityPackageItemView" {
        columns {
            ID = "Id": ValueType::item_id("ActivityPackageItem");
            ORIGINAL_PLACEMENT = "OriginalPlacement": ValueType::int32();
            PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
            PARENT_ACTIVITY_ID = "ParentActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

view! {
    /// The calling user.
    me = "Me" {
        columns {
            USER_ID = "UserId": ValueType::item_id("UserItem");
            USER_NAME = "UserName": ValueType::string(255);
        }
    }
}

view! {
    my_attempts_and_packages = "MyAttemptsAndPackages" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem").nullable();
            ATTEMPT_STATUS = "AttemptStatus": ValueType::enumeration("AttemptStatus").nullable();
            ORGANIZATION_ID = "OrganizationId": ValueType::item_id("ActivityPackageItem");
            ORGANIZATION_TITLE = "OrganizationTitle": ValueType::string(200);
            PACKAGE_FILE_NAME = "PackageFileName": ValueType::string(255).nullable();
            PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
            TOTAL_POINTS = "TotalPoints": ValueType::single().nullable();
            UPLOAD_DATE_TIME = "UploadDateTime": ValueType::date_time().nullable();
        }
    }
}

view! {
    user_web_list = "UserWebList" {
        columns {
            LAST_ACCESS_TIME = "LastAccessTime": ValueType::date_time();
            SP_SITE_GUID = "SPSiteGuid": ValueType::guid();
            SP_WEB_GUID = "SPWebGuid": ValueType::guid();
        }
    }
}

// ----------------------------------------------------------------------
// Assignments
// ----------------------------------------------------------------------

view! {
    assignment_list_for_instructors = "AssignmentListForInstructors" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

view! {
    /// Every property of one assignment, as seen by an instructor or learner.
    assignment_properties_view = "AssignmentPropertiesView" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ASSIGNMENT_CREATED_BY_ID = "AssignmentCreatedById": ValueType::item_id("UserItem");
            ASSIGNMENT_DATE_CREATED = "AssignmentDateCreated": ValueType::date_time();
            ASSIGNMENT_DESCRIPTION = "AssignmentDescription": ValueType::text();
            ASSIGNMENT_DUE_DATE = "AssignmentDueDate": ValueType::date_time().nullable();
            ASSIGNMENT_EMAIL_CHANGES = "AssignmentEmailChanges": ValueType::boolean();
            ASSIGNMENT_NON_E_LEARNING_LOCATION = "AssignmentNonELearningLocation": ValueType::text().nullable();
            ASSIGNMENT_POINTS_POSSIBLE = "AssignmentPointsPossible": ValueType::single().nullable();
            ASSIGNMENT_SP_SITE_GUID = "AssignmentSPSiteGuid": ValueType::guid();
            ASSIGNMENT_SP_WEB_GUID = "AssignmentSPWebGuid": ValueType::guid();
            ASSIGNMENT_SHOW_ANSWERS_TO_LEARNERS = "AssignmentShowAnswersToLearners": ValueType::boolean();
            ASSIGNMENT_START_DATE = "AssignmentStartDate": ValueType::date_time();
            ASSIGNMENT_TITLE = "AssignmentTitle": ValueType::string(1000);
            PACKAGE_FORMAT = "PackageFormat": ValueType::enumeration("PackageFormat").nullable();
            PACKAGE_LOCATION = "PackageLocation": ValueType::string(260).nullable();
        }
        parameters {
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            IS_INSTRUCTOR = "IsInstructor": ValueType::boolean();
        }
    }
}

view! {
    instructor_assignment_list = "InstructorAssignmentList" {
        columns {
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            INSTRUCTOR_ASSIGNMENT_ID = "InstructorAssignmentId": ValueType::item_id("InstructorAssignmentItem");
            INSTRUCTOR_ID = "InstructorId": ValueType::item_id("UserItem");
            INSTRUCTOR_KEY = "InstructorKey": ValueType::string(250);
            INSTRUCTOR_NAME = "InstructorName": ValueType::string(255);
        }
    }
}

view! {
    instructor_assignment_list_for_instructors = "InstructorAssignmentListForInstructors" {
        columns {
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            INSTRUCTOR_ID = "InstructorId": ValueType::item_id("UserItem");
            INSTRUCTOR_NAME = "InstructorName": ValueType::string(255);
        }
    }
}

view! {
    learner_assignment_list_for_instructors = "LearnerAssignmentListForInstructors" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ASSIGNMENT_CREATED_BY_ID = "AssignmentCreatedById": ValueType::item_id("UserItem");
            ASSIGNMENT_CREATED_BY_NAME = "AssignmentCreatedByName": ValueType::string(255);
            ASSIGNMENT_DESCRIPTION = "AssignmentDescription": ValueType::text();
            ASSIGNMENT_DUE_DATE = "AssignmentDueDate": ValueType::date_time().nullable();
            ASSIGNMENT_EMAIL_CHANGES = "AssignmentEmailChanges": ValueType::boolean();
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            ASSIGNMENT_NON_E_LEARNING_LOCATION = "AssignmentNonELearningLocation": ValueType::text().nullable();
            ASSIGNMENT_POINTS_POSSIBLE = "AssignmentPointsPossible": ValueType::single().nullable();
            ASSIGNMENT_SP_SITE_GUID = "AssignmentSPSiteGuid": ValueType::guid();
            ASSIGNMENT_SP_WEB_GUID = "AssignmentSPWebGuid": ValueType::guid();
            ASSIGNMENT_SHOW_ANSWERS_TO_LEARNERS = "AssignmentShowAnswersToLearners": ValueType::boolean();
            ASSIGNMENT_START_DATE = "AssignmentStartDate": ValueType::date_time();
            ASSIGNMENT_TITLE = "AssignmentTitle": ValueType::string(1000);
            ATTEMPT_COMPLETION_STATUS = "AttemptCompletionStatus": ValueType::enumeration("CompletionStatus").nullable();
            ATTEMPT_GRADED_POINTS = "AttemptGradedPoints": ValueType::single().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem").nullable();
            ATTEMPT_SUCCESS_STATUS = "AttemptSuccessStatus": ValueType::enumeration("SuccessStatus").nullable();
            FINAL_POINTS = "FinalPoints": ValueType::single().nullable();
            HAS_INSTRUCTORS = "HasInstructors": ValueType::boolean();
            INSTRUCTOR_COMMENTS = "InstructorComments": ValueType::text();
            LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
            LEARNER_ASSIGNMENT_ID = "LearnerAssignmentId": ValueType::item_id("LearnerAssignmentItem");
            LEARNER_ASSIGNMENT_STATE = "LearnerAssignmentState": ValueType::enumeration("LearnerAssignmentState");
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            LEARNER_KEY = "LearnerKey": ValueType::string(250);
            LEARNER_NAME = "LearnerName": ValueType::string(255);
            PACKAGE_LOCATION = "PackageLocation": ValueType::string(260).nullable();
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

view! {
    learner_assignment_list_for_learners = "LearnerAssignmentListForLearners" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ASSIGNMENT_CREATED_BY_ID = "AssignmentCreatedById": ValueType::item_id("UserItem");
            ASSIGNMENT_CREATED_BY_NAME = "AssignmentCreatedByName": ValueType::string(255);
            ASSIGNMENT_DESCRIPTION = "AssignmentDescription": ValueType::text();
            ASSIGNMENT_DUE_DATE = "AssignmentDueDate": ValueType::date_time().nullable();
            ASSIGNMENT_EMAIL_CHANGES = "AssignmentEmailChanges": ValueType::boolean();
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            ASSIGNMENT_NON_E_LEARNING_LOCATION = "AssignmentNonELearningLocation": ValueType::text().nullable();
            ASSIGNMENT_POINTS_POSSIBLE = "AssignmentPointsPossible": ValueType::single().nullable();
            ASSIGNMENT_SP_SITE_GUID = "AssignmentSPSiteGuid": ValueType::guid();
            ASSIGNMENT_SP_WEB_GUID = "AssignmentSPWebGuid": ValueType::guid();
            ASSIGNMENT_SHOW_ANSWERS_TO_LEARNERS = "AssignmentShowAnswersToLearners": ValueType::boolean();
            ASSIGNMENT_START_DATE = "AssignmentStartDate": ValueType::date_time();
            ASSIGNMENT_TITLE = "AssignmentTitle": ValueType::string(1000);
            ATTEMPT_COMPLETION_STATUS = "AttemptCompletionStatus": ValueType::enumeration("CompletionStatus").nullable();
            ATTEMPT_GRADED_POINTS = "AttemptGradedPoints": ValueType::single().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem").nullable();
            ATTEMPT_SUCCESS_STATUS = "AttemptSuccessStatus": ValueType::enumeration("SuccessStatus").nullable();
            FINAL_POINTS = "FinalPoints": ValueType::single().nullable();
            HAS_INSTRUCTORS = "HasInstructors": ValueType::boolean();
            INSTRUCTOR_COMMENTS = "InstructorComments": ValueType::text();
            LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
            LEARNER_ASSIGNMENT_ID = "LearnerAssignmentId": ValueType::item_id("LearnerAssignmentItem");
            LEARNER_ASSIGNMENT_STATE = "LearnerAssignmentState": ValueType::enumeration("LearnerAssignmentState");
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            LEARNER_KEY = "LearnerKey": ValueType::string(250);
            LEARNER_NAME = "LearnerName": ValueType::string(255);
            PACKAGE_LOCATION = "PackageLocation": ValueType::string(260).nullable();
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

view! {
    /// Learner list without learner keys; observers never see identities.
    learner_assignment_list_for_observers = "LearnerAssignmentListForObservers" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ASSIGNMENT_CREATED_BY_ID = "AssignmentCreatedById": ValueType::item_id("UserItem");
            ASSIGNMENT_CREATED_BY_NAME = "AssignmentCreatedByName": ValueType::string(255);
            ASSIGNMENT_DESCRIPTION = "AssignmentDescription": ValueType::text();
            ASSIGNMENT_DUE_DATE = "AssignmentDueDate": ValueType::date_time().nullable();
            ASSIGNMENT_EMAIL_CHANGES = "AssignmentEmailChanges": ValueType::boolean();
            ASSIGNMENT_ID = "AssignmentId": ValueType::item_id("AssignmentItem");
            ASSIGNMENT_NON_E_LEARNING_LOCATION = "AssignmentNonELearningLocation": ValueType::text().nullable();
            ASSIGNMENT_POINTS_POSSIBLE = "AssignmentPointsPossible": ValueType::single().nullable();
            ASSIGNMENT_SP_SITE_GUID = "AssignmentSPSiteGuid": ValueType::guid();
            ASSIGNMENT_SP_WEB_GUID = "AssignmentSPWebGuid": ValueType::guid();
            ASSIGNMENT_SHOW_ANSWERS_TO_LEARNERS = "AssignmentShowAnswersToLearners": ValueType::boolean();
            ASSIGNMENT_START_DATE = "AssignmentStartDate": ValueType::date_time();
            ASSIGNMENT_TITLE = "AssignmentTitle": ValueType::string(1000);
            ATTEMPT_COMPLETION_STATUS = "AttemptCompletionStatus": ValueType::enumeration("CompletionStatus").nullable();
            ATTEMPT_GRADED_POINTS = "AttemptGradedPoints": ValueType::single().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem").nullable();
            ATTEMPT_SUCCESS_STATUS = "AttemptSuccessStatus": ValueType::enumeration("SuccessStatus").nullable();
            FINAL_POINTS = "FinalPoints": ValueType::single().nullable();
            HAS_INSTRUCTORS = "HasInstructors": ValueType::boolean();
            INSTRUCTOR_COMMENTS = "InstructorComments": ValueType::text();
            LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
            LEARNER_ASSIGNMENT_ID = "LearnerAssignmentId": ValueType::item_id("LearnerAssignmentItem");
            LEARNER_ASSIGNMENT_STATE = "LearnerAssignmentState": ValueType::enumeration("LearnerAssignmentState");
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            LEARNER_NAME = "LearnerName": ValueType::string(255);
            PACKAGE_LOCATION = "PackageLocation": ValueType::string(260).nullable();
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

view! {
    learner_assignment_view = "LearnerAssignmentView" {
        columns {
            ASSIGNMENT_AUTO_RETURN = "AssignmentAutoReturn": ValueType::boolean();
            ATTEMPT_GRADED_POINTS = "AttemptGradedPoints": ValueType::single().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem").nullable();
            LEARNER_ASSIGNMENT_GUID_ID = "LearnerAssignmentGuidId": ValueType::guid();
            LEARNER_ASSIGNMENT_ID = "LearnerAssignmentId": ValueType::item_id("LearnerAssignmentItem");
            LEARNER_ASSIGNMENT_STATE = "LearnerAssignmentState": ValueType::enumeration("LearnerAssignmentState");
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        }
    }
}

// ----------------------------------------------------------------------
// Sequencing and navigation
// ----------------------------------------------------------------------

view! {
    sequencing_log = "SequencingLog" {
        columns {
            EVENT_TYPE = "EventType": ValueType::enumeration("SequencingEventType");
            ID = "Id": ValueType::item_id("SequencingLogEntryItem");
            MESSAGE = "Message": ValueType::text().nullable();
            NAVIGATION_COMMAND = "NavigationCommand": ValueType::enumeration("NavigationCommand").nullable();
            TIMESTAMP = "Timestamp": ValueType::date_time();
        }
        parameters {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
        }
    }
}

view! {
    seq_nav_activity_attempt_view = "SeqNavActivityAttemptView" {
        columns {
            ACTIVITY_PACKAGE_ID = "ActivityPackageId": ValueType::item_id("ActivityPackageItem");
            ATTEMPT_COUNT = "AttemptCount": ValueType::int32().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus");
            DATA_MODEL_CACHE = "DataModelCache": ValueType::xml().nullable();
            EVALUATION_POINTS = "EvaluationPoints": ValueType::single().nullable();
            EXIT = "Exit": ValueType::enumeration("ExitMode").nullable();
            ID = "Id": ValueType::item_id("ActivityAttemptItem");
            LESSON_STATUS = "LessonStatus": ValueType::enumeration("LessonStatus").nullable();
            LOCATION = "Location": ValueType::string(1000).nullable();
            MAX_SCORE = "MaxScore": ValueType::single().nullable();
            MIN_SCORE = "MinScore": ValueType::single().nullable();
            OBJECTIVES_GLOBAL_TO_SYSTEM = "ObjectivesGlobalToSystem": ValueType::boolean();
            PARENT_ID = "ParentId": ValueType::item_id("ActivityPackageItem").nullable();
            PROGRESS_MEASURE = "ProgressMeasure": ValueType::single().nullable();
            RANDOM_PLACEMENT = "RandomPlacement": ValueType::int32().nullable();
            RAW_SCORE = "RawScore": ValueType::single().nullable();
            SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
            SEQUENCING_DATA_CACHE = "SequencingDataCache": ValueType::xml().nullable();
            SESSION_TIME = "SessionTime": ValueType::double().nullable();
            STATIC_DATA_MODEL_CACHE = "StaticDataModelCache": ValueType::xml().nullable();
            SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus");
            SUSPEND_DATA = "SuspendData": ValueType::string(64000).nullable();
            TOTAL_TIME = "TotalTime": ValueType::double().nullable();
        }
    }
}

view! {
    seq_nav_activity_package_view = "SeqNavActivityPackageView" {
        columns {
            ID = "Id": ValueType::item_id("ActivityPackageItem");
            PACKAGE_FORMAT = "PackageFormat": ValueType::enumeration("PackageFormat");
            PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
            PACKAGE_PATH = "PackagePath": ValueType::string(260);
        }
    }
}

view! {
    seq_nav_activity_tree_view = "SeqNavActivityTreeView" {
        columns {
            DATA_MODEL_CACHE = "DataModelCache": ValueType::xml().nullable();
            ID = "Id": ValueType::item_id("ActivityPackageItem");
            OBJECTIVES_GLOBAL_TO_SYSTEM = "ObjectivesGlobalToSystem": ValueType::boolean();
            PARENT_ACTIVITY_ID = "ParentActivityId": ValueType::item_id("ActivityPackageItem").nullable();
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem");
        }
    }
}

view! {
    seq_nav_attempt_comment_from_learner_view = "SeqNavAttemptCommentFromLearnerView" {
        columns {
            ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            COMMENT = "Comment": ValueType::string(4096).nullable();
            COMMENT_FROM_LEARNER_ID = "CommentFromLearnerId": ValueType::item_id("CommentFromLearnerItem");
            LOCATION = "Location": ValueType::string(250).nullable();
            ORDINAL = "Ordinal": ValueType::int32();
            TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
        }
    }
}

view! {
    seq_nav_attempt_correct_response_view = "SeqNavAttemptCorrectResponseView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            CORRECT_RESPONSE_ID = "CorrectResponseId": ValueType::item_id("CorrectResponseItem");
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            RESPONSE_PATTERN = "ResponsePattern": ValueType::string(4096).nullable();
        }
    }
}

view! {
    seq_nav_attempt_evaluation_comment_learner_view = "SeqNavAttemptEvaluationCommentLearnerView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            COMMENT = "Comment": ValueType::string(4096).nullable();
            EVALUATION_COMMENT_ID = "EvaluationCommentId": ValueType::item_id("EvaluationCommentItem");
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            LOCATION = "Location": ValueType::string(250).nullable();
            ORDINAL = "Ordinal": ValueType::int32();
            TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
        }
    }
}

view! {
    seq_nav_attempt_extension_data_view = "SeqNavAttemptExtensionDataView" {
        columns {
            ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
            ATTACHMENT_GUID = "AttachmentGuid": ValueType::guid().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            BOOL_VALUE = "BoolValue": ValueType::boolean().nullable();
            DATE_TIME_VALUE = "DateTimeValue": ValueType::date_time().nullable();
            DOUBLE_VALUE = "DoubleValue": ValueType::double().nullable();
            EXTENSION_DATA_ID = "ExtensionDataId": ValueType::item_id("ExtensionDataItem");
            INT_VALUE = "IntValue": ValueType::int32().nullable();
            NAME = "Name": ValueType::string(4096);
            STRING_VALUE = "StringValue": ValueType::text().nullable();
        }
    }
}

view! {
    seq_nav_attempt_interaction_extension_data_view = "SeqNavAttemptInteractionExtensionDataView" {
        columns {
            ATTACHMENT_GUID = "AttachmentGuid": ValueType::guid().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            BOOL_VALUE = "BoolValue": ValueType::boolean().nullable();
            DATE_TIME_VALUE = "DateTimeValue": ValueType::date_time().nullable();
            DOUBLE_VALUE = "DoubleValue": ValueType::double().nullable();
            EXTENSION_DATA_ID = "ExtensionDataId": ValueType::item_id("ExtensionDataItem");
            INT_VALUE = "IntValue": ValueType::int32().nullable();
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            NAME = "Name": ValueType::string(4096);
            STRING_VALUE = "StringValue": ValueType::text().nullable();
        }
    }
}

view! {
    seq_nav_attempt_interaction_objective_view = "SeqNavAttemptInteractionObjectiveView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            ATTEMPT_OBJECTIVE_ID = "AttemptObjectiveId": ValueType::item_id("AttemptObjectiveItem");
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            INTERACTION_OBJECTIVE_ID = "InteractionObjectiveId": ValueType::item_id("InteractionObjectiveItem");
        }
    }
}

view! {
    seq_nav_attempt_interaction_view = "SeqNavAttemptInteractionView" {
        columns {
            ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            DESCRIPTION = "Description": ValueType::string(250).nullable();
            EVALUATION_POINTS = "EvaluationPoints": ValueType::single().nullable();
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            INTERACTION_ID_FROM_CMI = "InteractionIdFromCmi": ValueType::string(4096);
            INTERACTION_TYPE = "InteractionType": ValueType::enumeration("InteractionType").nullable();
            LATENCY = "Latency": ValueType::double().nullable();
            LEARNER_RESPONSE_BOOL = "LearnerResponseBool": ValueType::boolean().nullable();
            LEARNER_RESPONSE_NUMERIC = "LearnerResponseNumeric": ValueType::double().nullable();
            LEARNER_RESPONSE_STRING = "LearnerResponseString": ValueType::string(4096).nullable();
            MAX_SCORE = "MaxScore": ValueType::single().nullable();
            MIN_SCORE = "MinScore": ValueType::single().nullable();
            RAW_SCORE = "RawScore": ValueType::single().nullable();
            RESULT_NUMERIC = "ResultNumeric": ValueType::single().nullable();
            RESULT_STATE = "ResultState": ValueType::enumeration("InteractionResultState").nullable();
            SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
            TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
            WEIGHTING = "Weighting": ValueType::single().nullable();
        }
    }
}

view! {
    seq_nav_attempt_objective_extension_data_view = "SeqNavAttemptObjectiveExtensionDataView" {
        columns {
            ATTACHMENT_GUID = "AttachmentGuid": ValueType::guid().nullable();
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            ATTEMPT_OBJECTIVE_ID = "AttemptObjectiveId": ValueType::item_id("AttemptObjectiveItem");
            BOOL_VALUE = "BoolValue": ValueType::boolean().nullable();
            DATE_TIME_VALUE = "DateTimeValue": ValueType::date_time().nullable();
            DOUBLE_VALUE = "DoubleValue": ValueType::double().nullable();
            EXTENSION_DATA_ID = "ExtensionDataId": ValueType::item_id("ExtensionDataItem");
            INT_VALUE = "IntValue": ValueType::int32().nullable();
            NAME = "Name": ValueType::string(4096);
            STRING_VALUE = "StringValue": ValueType::text().nullable();
        }
    }
}

view! {
    seq_nav_attempt_objective_view = "SeqNavAttemptObjectiveView" {
        columns {
            ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            ATTEMPT_OBJECTIVE_ID = "AttemptObjectiveId": ValueType::item_id("AttemptObjectiveItem");
            COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus");
            DESCRIPTION = "Description": ValueType::string(250).nullable();
            IS_PRIMARY_OBJECTIVE = "IsPrimaryObjective": ValueType::boolean();
            KEY = "Key": ValueType::string(4096).nullable();
            LESSON_STATUS = "LessonStatus": ValueType::enumeration("LessonStatus").nullable();
            MAX_SCORE = "MaxScore": ValueType::single().nullable();
            MIN_SCORE = "MinScore": ValueType::single().nullable();
            PROGRESS_MEASURE = "ProgressMeasure": ValueType::single().nullable();
            RAW_SCORE = "RawScore": ValueType::single().nullable();
            SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
            SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus");
        }
    }
}

view! {
    seq_nav_attempt_rubric_view = "SeqNavAttemptRubricView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
            IS_SATISFIED = "IsSatisfied": ValueType::boolean().nullable();
            ORDINAL = "Ordinal": ValueType::int32();
            POINTS = "Points": ValueType::single().nullable();
            RUBRIC_ITEM_ID = "RubricItemId": ValueType::item_id("RubricItem");
        }
    }
}

view! {
    /// One attempt joined with its learner's preferences and its package.
    seq_nav_attempt_view = "SeqNavAttemptView" {
        columns {
            ATTEMPT_STATUS = "AttemptStatus": ValueType::enumeration("AttemptStatus").nullable();
            COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus");
            CURRENT_ACTIVITY_ID = "CurrentActivityId": ValueType::item_id("ActivityPackageItem").nullable();
            FINISHED_TIMESTAMP = "FinishedTimestamp": ValueType::date_time().nullable();
            ID = "Id": ValueType::item_id("AttemptItem");
            LEARNER_AUDIO_CAPTIONING = "LearnerAudioCaptioning": ValueType::enumeration("AudioCaptioning");
            LEARNER_AUDIO_LEVEL = "LearnerAudioLevel": ValueType::single();
            LEARNER_DELIVERY_SPEED = "LearnerDeliverySpeed": ValueType::single();
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            LEARNER_LANGUAGE = "LearnerLanguage": ValueType::string(255);
            LEARNER_NAME = "LearnerName": ValueType::string(255);
            LOG_DETAIL_SEQUENCING = "LogDetailSequencing": ValueType::boolean();
            LOG_FINAL_SEQUENCING = "LogFinalSequencing": ValueType::boolean();
            LOG_ROLLUP = "LogRollup": ValueType::boolean();
            PACKAGE_FORMAT = "PackageFormat": ValueType::enumeration("PackageFormat").nullable();
            PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem").nullable();
            PACKAGE_PATH = "PackagePath": ValueType::string(260).nullable();
            ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
            STARTED_TIMESTAMP = "StartedTimestamp": ValueType::date_time().nullable();
            SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus");
            SUSPENDED_ACTIVITY_ID = "SuspendedActivityId": ValueType::item_id("ActivityPackageItem").nullable();
            TOTAL_POINTS = "TotalPoints": ValueType::single().nullable();
        }
    }
}

view! {
    seq_nav_current_activity_attempt_view = "SeqNavCurrentActivityAttemptView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            CREDIT = "Credit": ValueType::boolean();
            DATA_MODEL_CACHE = "DataModelCache": ValueType::xml().nullable();
            ID = "Id": ValueType::item_id("ActivityAttemptItem");
            OBJECTIVES_GLOBAL_TO_SYSTEM = "ObjectivesGlobalToSystem": ValueType::boolean();
            RANDOM_PLACEMENT = "RandomPlacement": ValueType::int32().nullable();
            SEQUENCING_DATA_CACHE = "SequencingDataCache": ValueType::xml().nullable();
            STATIC_DATA_MODEL_CACHE = "StaticDataModelCache": ValueType::xml().nullable();
        }
    }
}

view! {
    seq_nav_current_comment_from_lms_view = "SeqNavCurrentCommentFromLmsView" {
        columns {
            ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
            COMMENT = "Comment": ValueType::string(4096).nullable();
            LOCATION = "Location": ValueType::string(250).nullable();
            TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
        }
    }
}

view! {
    seq_nav_learner_global_objective_view = "SeqNavLearnerGlobalObjectiveView" {
        columns {
            KEY = "Key": ValueType::string(4096);
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
            SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus");
        }
    }
}

view! {
    seq_nav_organization_global_objective_view = "SeqNavOrganizationGlobalObjectiveView" {
        columns {
            KEY = "Key": ValueType::string(4096);
            LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
            ORGANIZATION_ID = "OrganizationId": ValueType::item_id("ActivityPackageItem");
            SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
            SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus");
        }
    }
}
