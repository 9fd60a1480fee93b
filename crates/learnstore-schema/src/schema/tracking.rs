//! Item types of the SCORM/AICC tracking store: packages, activities,
//! attempts, objectives, interactions and their satellites.
//!
//! Maximum lengths follow the SCORM 2004 smallest permitted maximums,
//! rounded up where the store keeps longer identifiers.

use crate::item_type;

// ----------------------------------------------------------------------
// Packages and activities
// ----------------------------------------------------------------------

item_type! {
    /// One uploaded content package.
    package_item, PackageItem, PackageItemId = "PackageItem" {
        FILE_NAME = "FileName": ValueType::string(255).nullable() => MAX_FILE_NAME_LENGTH;
        LOCATION = "Location": ValueType::string(260) => MAX_LOCATION_LENGTH;
        MANIFEST = "Manifest": ValueType::xml();
        OWNER = "Owner": ValueType::item_id("UserItem").nullable();
        PACKAGE_FORMAT = "PackageFormat": ValueType::enumeration("PackageFormat");
        UPLOAD_DATE_TIME = "UploadDateTime": ValueType::date_time().nullable();
        WARNINGS = "Warnings": ValueType::xml().nullable();
    }
}

item_type! {
    /// One activity (organization, aggregation or leaf) of a package.
    activity_package_item, ActivityPackageItem, ActivityPackageItemId = "ActivityPackageItem" {
        ACTIVITY_ID_FROM_MANIFEST = "ActivityIdFromManifest": ValueType::string(4096)
            => MAX_ACTIVITY_ID_FROM_MANIFEST_LENGTH;
        COMPLETION_THRESHOLD = "CompletionThreshold": ValueType::single().nullable();
        DATA_MODEL_CACHE = "DataModelCache": ValueType::xml().nullable();
        HIDE_ABANDON = "HideAbandon": ValueType::boolean(), with_default;
        HIDE_CONTINUE = "HideContinue": ValueType::boolean(), with_default;
        HIDE_EXIT = "HideExit": ValueType::boolean(), with_default;
        HIDE_PREVIOUS = "HidePrevious": ValueType::boolean(), with_default;
        IS_VISIBLE_IN_CONTENTS = "IsVisibleInContents": ValueType::boolean(), with_default;
        LAUNCH_DATA = "LaunchData": ValueType::text().nullable() => MAX_LAUNCH_DATA_LENGTH;
        MASTERY_SCORE = "MasteryScore": ValueType::single().nullable();
        MAX_ATTEMPTS = "MaxAttempts": ValueType::int32().nullable();
        MAX_TIME_ALLOWED = "MaxTimeAllowed": ValueType::double().nullable();
        OBJECTIVES_GLOBAL_TO_SYSTEM = "ObjectivesGlobalToSystem": ValueType::boolean(), with_default;
        ORIGINAL_PLACEMENT = "OriginalPlacement": ValueType::int32();
        PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
        PARENT_ACTIVITY_ID = "ParentActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        PRIMARY_OBJECTIVE_ID = "PrimaryObjectiveId": ValueType::item_id("ActivityObjectiveItem").nullable();
        PRIMARY_RESOURCE_FROM_MANIFEST = "PrimaryResourceFromManifest": ValueType::string(2000).nullable()
            => MAX_PRIMARY_RESOURCE_FROM_MANIFEST_LENGTH;
        RESOURCE_ID = "ResourceId": ValueType::item_id("ResourceItem").nullable();
        RESOURCE_PARAMETERS = "ResourceParameters": ValueType::string(1000).nullable()
            => MAX_RESOURCE_PARAMETERS_LENGTH;
        SCALED_PASSING_SCORE = "ScaledPassingScore": ValueType::single().nullable();
        TIME_LIMIT_ACTION = "TimeLimitAction": ValueType::enumeration("TimeLimitAction").nullable();
        TITLE = "Title": ValueType::string(200) => MAX_TITLE_LENGTH;
    }
}

item_type! {
    resource_item, ResourceItem, ResourceItemId = "ResourceItem" {
        PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem");
        RESOURCE_XML = "ResourceXml": ValueType::xml();
    }
}

// ----------------------------------------------------------------------
// Objectives
// ----------------------------------------------------------------------

item_type! {
    activity_objective_item, ActivityObjectiveItem, ActivityObjectiveItemId = "ActivityObjectiveItem" {
        ACTIVITY_PACKAGE_ID = "ActivityPackageId": ValueType::item_id("ActivityPackageItem");
        IS_PRIMARY_OBJECTIVE = "IsPrimaryObjective": ValueType::boolean(), with_default;
        KEY = "Key": ValueType::string(4096).nullable() => MAX_KEY_LENGTH;
        MIN_NORMALIZED_MEASURE = "MinNormalizedMeasure": ValueType::single().nullable();
        SATISFIED_BY_MEASURE = "SatisfiedByMeasure": ValueType::boolean(), with_default;
    }
}

item_type! {
    global_objective_item, GlobalObjectiveItem, GlobalObjectiveItemId = "GlobalObjectiveItem" {
        KEY = "Key": ValueType::string(4096) => MAX_KEY_LENGTH;
        ORGANIZATION_ID = "OrganizationId": ValueType::item_id("ActivityPackageItem").nullable();
    }
}

item_type! {
    map_activity_objective_to_global_objective_item,
    MapActivityObjectiveToGlobalObjectiveItem,
    MapActivityObjectiveToGlobalObjectiveItemId = "MapActivityObjectiveToGlobalObjectiveItem" {
        ACTIVITY_OBJECTIVE_ID = "ActivityObjectiveId": ValueType::item_id("ActivityObjectiveItem");
        GLOBAL_OBJECTIVE_ID = "GlobalObjectiveId": ValueType::item_id("GlobalObjectiveItem");
        READ_NORMALIZED_MEASURE = "ReadNormalizedMeasure": ValueType::boolean(), with_default;
        READ_SATISFIED_STATUS = "ReadSatisfiedStatus": ValueType::boolean(), with_default;
        WRITE_NORMALIZED_MEASURE = "WriteNormalizedMeasure": ValueType::boolean(), with_default;
        WRITE_SATISFIED_STATUS = "WriteSatisfiedStatus": ValueType::boolean(), with_default;
    }
}

item_type! {
    learner_global_objective_item, LearnerGlobalObjectiveItem, LearnerGlobalObjectiveItemId = "LearnerGlobalObjectiveItem" {
        GLOBAL_OBJECTIVE_ID = "GlobalObjectiveId": ValueType::item_id("GlobalObjectiveItem");
        LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
        SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
        SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus"), with_default;
    }
}

item_type! {
    package_global_objective_item, PackageGlobalObjectiveItem, PackageGlobalObjectiveItemId = "PackageGlobalObjectiveItem" {
        GLOBAL_OBJECTIVE_ID = "GlobalObjectiveId": ValueType::item_id("GlobalObjectiveItem");
        LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
        SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
        SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus"), with_default;
    }
}

// ----------------------------------------------------------------------
// Users
// ----------------------------------------------------------------------

item_type! {
    /// One learner or instructor, keyed by an external identity string.
    user_item, UserItem, UserItemId = "UserItem" {
        KEY = "Key": ValueType::string(250) => MAX_KEY_LENGTH;
        NAME = "Name": ValueType::string(255) => MAX_NAME_LENGTH;
        AUDIO_CAPTIONING = "AudioCaptioning": ValueType::enumeration("AudioCaptioning"), with_default;
        AUDIO_LEVEL = "AudioLevel": ValueType::single(), with_default;
        DELIVERY_SPEED = "DeliverySpeed": ValueType::single(), with_default;
        LANGUAGE = "Language": ValueType::string(255), with_default => MAX_LANGUAGE_LENGTH;
    }
}

// ----------------------------------------------------------------------
// Attempts
// ----------------------------------------------------------------------

item_type! {
    /// One learner's attempt on a package organization.
    attempt_item, AttemptItem, AttemptItemId = "AttemptItem" {
        ATTEMPT_STATUS = "AttemptStatus": ValueType::enumeration("AttemptStatus").nullable();
        COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus"), with_default;
        CURRENT_ACTIVITY_ID = "CurrentActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        FINISHED_TIMESTAMP = "FinishedTimestamp": ValueType::date_time().nullable();
        LEARNER_ASSIGNMENT_ID = "LearnerAssignmentId": ValueType::item_id("LearnerAssignmentItem").nullable();
        LEARNER_ID = "LearnerId": ValueType::item_id("UserItem");
        LOG_DETAIL_SEQUENCING = "LogDetailSequencing": ValueType::boolean(), with_default;
        LOG_FINAL_SEQUENCING = "LogFinalSequencing": ValueType::boolean(), with_default;
        LOG_ROLLUP = "LogRollup": ValueType::boolean(), with_default;
        PACKAGE_ID = "PackageId": ValueType::item_id("PackageItem").nullable();
        ROOT_ACTIVITY_ID = "RootActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        STARTED_TIMESTAMP = "StartedTimestamp": ValueType::date_time().nullable();
        SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus"), with_default;
        SUSPENDED_ACTIVITY_ID = "SuspendedActivityId": ValueType::item_id("ActivityPackageItem").nullable();
        TOTAL_POINTS = "TotalPoints": ValueType::single().nullable();
    }
}

item_type! {
    activity_attempt_item, ActivityAttemptItem, ActivityAttemptItemId = "ActivityAttemptItem" {
        ACTIVITY_PACKAGE_ID = "ActivityPackageId": ValueType::item_id("ActivityPackageItem");
        ATTEMPT_COUNT = "AttemptCount": ValueType::int32().nullable();
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
        COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus"), with_default;
        DATA_MODEL_CACHE = "DataModelCache": ValueType::xml().nullable();
        EVALUATION_POINTS = "EvaluationPoints": ValueType::single().nullable();
        EXIT = "Exit": ValueType::enumeration("ExitMode").nullable();
        LESSON_STATUS = "LessonStatus": ValueType::enumeration("LessonStatus").nullable();
        LOCATION = "Location": ValueType::string(1000).nullable() => MAX_LOCATION_LENGTH;
        MAX_SCORE = "MaxScore": ValueType::single().nullable();
        MIN_SCORE = "MinScore": ValueType::single().nullable();
        PROGRESS_MEASURE = "ProgressMeasure": ValueType::single().nullable();
        RANDOM_PLACEMENT = "RandomPlacement": ValueType::int32().nullable();
        RAW_SCORE = "RawScore": ValueType::single().nullable();
        SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
        SEQUENCING_DATA_CACHE = "SequencingDataCache": ValueType::xml().nullable();
        SESSION_TIME = "SessionTime": ValueType::double().nullable();
        SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus"), with_default;
        SUSPEND_DATA = "SuspendData": ValueType::string(64000).nullable() => MAX_SUSPEND_DATA_LENGTH;
        TOTAL_TIME = "TotalTime": ValueType::double().nullable();
    }
}

item_type! {
    attempt_objective_item, AttemptObjectiveItem, AttemptObjectiveItemId = "AttemptObjectiveItem" {
        ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
        COMPLETION_STATUS = "CompletionStatus": ValueType::enumeration("CompletionStatus"), with_default;
        DESCRIPTION = "Description": ValueType::string(250).nullable() => MAX_DESCRIPTION_LENGTH;
        IS_PRIMARY_OBJECTIVE = "IsPrimaryObjective": ValueType::boolean(), with_default;
        KEY = "Key": ValueType::string(4096).nullable() => MAX_KEY_LENGTH;
        LESSON_STATUS = "LessonStatus": ValueType::enumeration("LessonStatus").nullable();
        MAX_SCORE = "MaxScore": ValueType::single().nullable();
        MIN_SCORE = "MinScore": ValueType::single().nullable();
        PROGRESS_MEASURE = "ProgressMeasure": ValueType::single().nullable();
        RAW_SCORE = "RawScore": ValueType::single().nullable();
        SCALED_SCORE = "ScaledScore": ValueType::single().nullable();
        SUCCESS_STATUS = "SuccessStatus": ValueType::enumeration("SuccessStatus"), with_default;
    }
}

// ----------------------------------------------------------------------
// Comments
// ----------------------------------------------------------------------

item_type! {
    comment_from_learner_item, CommentFromLearnerItem, CommentFromLearnerItemId = "CommentFromLearnerItem" {
        ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
        COMMENT = "Comment": ValueType::string(4096).nullable() => MAX_COMMENT_LENGTH;
        LOCATION = "Location": ValueType::string(250).nullable() => MAX_LOCATION_LENGTH;
        ORDINAL = "Ordinal": ValueType::int32();
        TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
    }
}

item_type! {
    comment_from_lms_item, CommentFromLmsItem, CommentFromLmsItemId = "CommentFromLmsItem" {
        ACTIVITY_PACKAGE_ID = "ActivityPackageId": ValueType::item_id("ActivityPackageItem");
        COMMENT = "Comment": ValueType::string(4096).nullable() => MAX_COMMENT_LENGTH;
        LOCATION = "Location": ValueType::string(250).nullable() => MAX_LOCATION_LENGTH;
        TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
    }
}

// ----------------------------------------------------------------------
// Interactions
// ----------------------------------------------------------------------

item_type! {
    interaction_item, InteractionItem, InteractionItemId = "InteractionItem" {
        ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem");
        DESCRIPTION = "Description": ValueType::string(250).nullable() => MAX_DESCRIPTION_LENGTH;
        EVALUATION_POINTS = "EvaluationPoints": ValueType::single().nullable();
        INTERACTION_ID_FROM_CMI = "InteractionIdFromCmi": ValueType::string(4096)
            => MAX_INTERACTION_ID_FROM_CMI_LENGTH;
        INTERACTION_TYPE = "InteractionType": ValueType::enumeration("InteractionType").nullable();
        LATENCY = "Latency": ValueType::double().nullable();
        LEARNER_RESPONSE_BOOL = "LearnerResponseBool": ValueType::boolean().nullable();
        LEARNER_RESPONSE_NUMERIC = "LearnerResponseNumeric": ValueType::double().nullable();
        LEARNER_RESPONSE_STRING = "LearnerResponseString": ValueType::string(4096).nullable()
            => MAX_LEARNER_RESPONSE_STRING_LENGTH;
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

item_type! {
    correct_response_item, CorrectResponseItem, CorrectResponseItemId = "CorrectResponseItem" {
        INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
        RESPONSE_PATTERN = "ResponsePattern": ValueType::string(4096).nullable()
            => MAX_RESPONSE_PATTERN_LENGTH;
    }
}

item_type! {
    evaluation_comment_item, EvaluationCommentItem, EvaluationCommentItemId = "EvaluationCommentItem" {
        COMMENT = "Comment": ValueType::string(4096).nullable() => MAX_COMMENT_LENGTH;
        INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
        LOCATION = "Location": ValueType::string(250).nullable() => MAX_LOCATION_LENGTH;
        ORDINAL = "Ordinal": ValueType::int32();
        TIMESTAMP = "Timestamp": ValueType::date_time().nullable();
    }
}

item_type! {
    interaction_objective_item, InteractionObjectiveItem, InteractionObjectiveItemId = "InteractionObjectiveItem" {
        ATTEMPT_OBJECTIVE_ID = "AttemptObjectiveId": ValueType::item_id("AttemptObjectiveItem");
        INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
    }
}

item_type! {
    rubric_item, RubricItem, RubricItemId = "RubricItem" {
        INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem");
        IS_SATISFIED = "IsSatisfied": ValueType::boolean().nullable();
        ORDINAL = "Ordinal": ValueType::int32();
        POINTS = "Points": ValueType::single().nullable();
    }
}

item_type! {
    /// Free-form name/value data attached to an attempt, objective or interaction.
    extension_data_item, ExtensionDataItem, ExtensionDataItemId = "ExtensionDataItem" {
        ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem").nullable();
        ATTACHMENT_GUID = "AttachmentGuid": ValueType::guid().nullable();
        ATTACHMENT_VALUE = "AttachmentValue": ValueType::bytes().nullable() => MAX_ATTACHMENT_VALUE_LENGTH;
        ATTEMPT_OBJECTIVE_ID = "AttemptObjectiveId": ValueType::item_id("AttemptObjectiveItem").nullable();
        BOOL_VALUE = "BoolValue": ValueType::boolean().nullable();
        DATE_TIME_VALUE = "DateTimeValue": ValueType::date_time().nullable();
        DOUBLE_VALUE = "DoubleValue": ValueType::double().nullable();
        INT_VALUE = "IntValue": ValueType::int32().nullable();
        INTERACTION_ID = "InteractionId": ValueType::item_id("InteractionItem").nullable();
        NAME = "Name": ValueType::string(4096) => MAX_NAME_LENGTH;
        STRING_VALUE = "StringValue": ValueType::text().nullable() => MAX_STRING_VALUE_LENGTH;
    }
}

// ----------------------------------------------------------------------
// Sequencing log
// ----------------------------------------------------------------------

item_type! {
    sequencing_log_entry_item, SequencingLogEntryItem, SequencingLogEntryItemId = "SequencingLogEntryItem" {
        ACTIVITY_ATTEMPT_ID = "ActivityAttemptId": ValueType::item_id("ActivityAttemptItem").nullable();
        ATTEMPT_ID = "AttemptId": ValueType::item_id("AttemptItem");
        EVENT_TYPE = "EventType": ValueType::enumeration("SequencingEventType");
        MESSAGE = "Message": ValueType::text().nullable() => MAX_MESSAGE_LENGTH;
        NAVIGATION_COMMAND = "NavigationCommand": ValueType::enumeration("NavigationCommand").nullable();
        TIMESTAMP = "Timestamp": ValueType::date_time();
    }
}
