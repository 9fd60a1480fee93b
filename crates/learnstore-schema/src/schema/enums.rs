//! Enumerations stored in `Enumeration` columns.

use crate::enumeration;

enumeration! {
    attempt_status = "AttemptStatus" {
        ACTIVE = "Active" => 0;
        COMPLETED = "Completed" => 1;
        ABANDONED = "Abandoned" => 2;
        SUSPENDED = "Suspended" => 3;
    }
}

enumeration! {
    /// SCORM `cmi.learner_preference.audio_captioning`.
    audio_captioning = "AudioCaptioning" {
        OFF = "Off" => -1;
        NO_CHANGE = "NoChange" => 0;
        ON = "On" => 1;
    }
}

enumeration! {
    completion_status = "CompletionStatus" {
        UNKNOWN = "Unknown" => 0;
        COMPLETED = "Completed" => 1;
        INCOMPLETE = "Incomplete" => 2;
        NOT_ATTEMPTED = "NotAttempted" => 3;
    }
}

enumeration! {
    exit_mode = "ExitMode" {
        UNDETERMINED = "Undetermined" => 0;
        LOGOUT = "Logout" => 1;
        NORMAL = "Normal" => 2;
        TIME_OUT = "TimeOut" => 3;
        SUSPENDED = "Suspended" => 4;
    }
}

enumeration! {
    interaction_result_state = "InteractionResultState" {
        CORRECT = "Correct" => 0;
        INCORRECT = "Incorrect" => 1;
        UNANTICIPATED = "Unanticipated" => 2;
        NEUTRAL = "Neutral" => 3;
        NUMERIC = "Numeric" => 4;
    }
}

enumeration! {
    interaction_type = "InteractionType" {
        OTHER = "Other" => 0;
        FILL_IN = "FillIn" => 1;
        LIKERT = "Likert" => 2;
        LONG_FILL_IN = "LongFillIn" => 3;
        MATCHING = "Matching" => 4;
        MULTIPLE_CHOICE = "MultipleChoice" => 5;
        NUMERIC = "Numeric" => 6;
        PERFORMANCE = "Performance" => 7;
        SEQUENCING = "Sequencing" => 8;
        TRUE_FALSE = "TrueFalse" => 9;
        ESSAY = "Essay" => 10;
        ATTACHMENT = "Attachment" => 11;
    }
}

enumeration! {
    /// Grading state of one learner's copy of an assignment.
    learner_assignment_state = "LearnerAssignmentState" {
        NOT_STARTED = "NotStarted" => 0;
        ACTIVE = "Active" => 1;
        COMPLETED = "Completed" => 2;
        FINAL = "Final" => 3;
    }
}

enumeration! {
    /// SCORM 1.2 `cmi.core.lesson_status`.
    lesson_status = "LessonStatus" {
        NOT_ATTEMPTED = "NotAttempted" => 0;
        BROWSED = "Browsed" => 1;
        COMPLETED = "Completed" => 2;
        FAILED = "Failed" => 3;
        INCOMPLETE = "Incomplete" => 4;
        PASSED = "Passed" => 5;
    }
}

enumeration! {
    navigation_command = "NavigationCommand" {
        NONE = "None" => 0;
        ABANDON = "Abandon" => 1;
        ABANDON_ALL = "AbandonAll" => 2;
        CHOOSE = "Choose" => 3;
        CONTINUE = "Continue" => 4;
        EXIT_ALL = "ExitAll" => 5;
        PREVIOUS = "Previous" => 6;
        RESUME_ALL = "ResumeAll" => 7;
        START = "Start" => 8;
        SUSPEND_ALL = "SuspendAll" => 9;
        UNQUALIFIED_EXIT = "UnqualifiedExit" => 10;
    }
}

enumeration! {
    package_format = "PackageFormat" {
        LRM = "Lrm" => 0;
        V1P2 = "V1p2" => 1;
        V1P3 = "V1p3" => 2;
    }
}

enumeration! {
    sequencing_event_type = "SequencingEventType" {
        FINAL_OUTPUT = "FinalOutput" => 0;
        DETAILED_OUTPUT = "DetailedOutput" => 1;
        ROLLUP = "Rollup" => 2;
    }
}

enumeration! {
    success_status = "SuccessStatus" {
        UNKNOWN = "Unknown" => 0;
        FAILED = "Failed" => 1;
        PASSED = "Passed" => 2;
    }
}

enumeration! {
    time_limit_action = "TimeLimitAction" {
        EXIT_MESSAGE = "ExitMessage" => 0;
        EXIT_NO_MESSAGE = "ExitNoMessage" => 1;
        CONTINUE_MESSAGE = "ContinueMessage" => 2;
        CONTINUE_NO_MESSAGE = "ContinueNoMessage" => 3;
    }
}
