//! Stable message keys emitted by the rule engine.
//!
//! Keys are PascalCase identifiers. Turning a key into text is the job of a
//! [`MessageCatalog`](crate::application::ports::MessageCatalog).

use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier of a localizable validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey(&'static str);

impl MessageKey {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Find the registered key spelled `key`.
    pub fn lookup(key: &str) -> Option<Self> {
        ALL.iter().copied().find(|k| k.0 == key)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for MessageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

macro_rules! message_keys {
    ($($name:ident => $key:literal,)+) => {
        $(pub const $name: MessageKey = MessageKey::new($key);)+

        /// Every key, in declaration order.
        pub const ALL: &[MessageKey] = &[$($name),+];
    };
}

message_keys! {
    // Shared
    NAME_REQUIRED => "NameRequired",
    NAME_LENGTH_250 => "NameLength250",
    NAME_LENGTH_500 => "NameLength500",
    DESCRIPTION_LENGTH_5000 => "DescriptionLength5000",
    IDENTITY_REQUIRED => "IdentityRequired",
    START_DATE_REQUIRED => "StartDateRequired",
    END_DATE_AFTER_START_DATE => "EndDateMustBeGreaterThanStartDate",
    DURATION_GREATER_THAN_ZERO => "DurationGreaterThanZero",
    EMAIL_REQUIRED => "EmailRequired",
    INVALID_EMAIL => "InvalidEmail",

    // Course
    INVALID_LANGUAGE => "InvalidLanguage",
    LEVEL_REQUIRED => "LevelRequired",
    STATUS_REQUIRED => "StatusRequired",
    INVALID_STATUS => "InvalidStatus",
    INVALID_CURRENT_STATUS => "InvalidCurrentStatus",
    REJECTION_MESSAGE_REQUIRED => "MessageRequired",
    INVALID_STATUS_TRANSITION => "InvalidStatusTransition",

    // Lesson
    LESSON_TYPE_REQUIRED => "LessonTypeRequired",
    INVALID_LESSON_TYPE => "InvalidLessonType",
    DOCUMENT_REQUIRED => "DocumentRequired",
    VIDEO_REQUIRED => "VideoRequired",
    QUESTION_SET_REQUIRED => "QuestionSetRequired",
    MEETING_REQUIRED => "MeetingRequired",

    // Question set
    MARKING_GREATER_THAN_ZERO => "MarkingGreaterThanZero",
    PASSING_WEIGHTAGE_RANGE => "PassingWeightageRange",
    ALLOWED_RETAKE_NOT_NEGATIVE => "AllowedRetakeNotNegative",
    START_TIME_EMPTY_ERROR => "StartTimeEmptyError",
    END_TIME_EMPTY_ERROR => "EndTimeEmptyError",
    END_TIME_AFTER_START_TIME => "EndTimeMustBeGreaterThanStartTime",

    // Meeting
    ZOOM_LICENSE_REQUIRED => "ZoomLicenseRequired",

    // Questions and options
    QUESTION_NAME_REQUIRED => "QuestionNameRequired",
    QUESTION_NAME_LENGTH_500 => "QuestionNameLength500",
    QUESTION_TYPE_REQUIRED => "QuestionTypeRequired",
    INVALID_QUESTION_TYPE => "InvalidQuestionType",
    OPTION_MORE_THAN_ONE => "OptionMoreThanOne",
    SINGLE_CHOICE_ONE_CORRECT => "SingleChoiceOneCorrect",
    MULTIPLE_CHOICE_ONE_CORRECT => "MultipleChoiceAtLeastOneCorrect",
    OPTION_REQUIRED => "OptionRequired",
    OPTION_LENGTH_5000 => "OptionLength5000",

    // Assessment
    TITLE_REQUIRED => "TitleRequired",
    TITLE_LENGTH_500 => "TitleLength500",
    RETAKES_NOT_NEGATIVE => "RetakesNotNegative",
    WEIGHTAGE_RANGE => "WeightageRange",
    ELIGIBILITY_TYPE_REQUIRED => "EligibilityTypeRequired",
    INVALID_ELIGIBILITY_TYPE => "InvalidEligibilityType",
    ROLE_REQUIRED => "RoleRequired",
    INVALID_ROLE => "InvalidRole",
    SKILL_REQUIRED => "SkillRequired",
    GROUP_REQUIRED => "GroupRequired",
    TRAINING_REQUIRED => "TrainingRequired",
    ASSESSMENT_REQUIRED => "AssessmentRequired",
    PERCENTAGE_RANGE => "PercentageRange",
    SKILL_RULE_REQUIRED => "SkillRuleRequired",
    INVALID_SKILL_RULE => "InvalidSkillRule",

    // Feedback
    FEEDBACK_TYPE_REQUIRED => "FeedbackTypeRequired",
    INVALID_FEEDBACK_TYPE => "InvalidFeedbackType",

    // User
    FIRST_NAME_REQUIRED => "FirstNameRequired",
    FIRST_NAME_LENGTH_100 => "FirstNameLength100",
    LAST_NAME_REQUIRED => "LastNameRequired",
    LAST_NAME_LENGTH_100 => "LastNameLength100",
    BIO_LENGTH_5000 => "BioLength5000",
    MOBILE_LENGTH_50 => "MobileNumberLength50",

    // Password
    CURRENT_PASSWORD_REQUIRED => "CurrentPasswordRequired",
    NEW_PASSWORD_REQUIRED => "NewPasswordRequired",
    PASSWORD_COMPLEXITY => "PasswordComplexity",
    CONFIRM_PASSWORD_REQUIRED => "ConfirmPasswordRequired",
    CONFIRM_PASSWORD_MISMATCH => "ConfirmPasswordMismatch",
    NEW_PASSWORD_SAME_AS_CURRENT => "NewPasswordSameAsCurrent",

    // Physical lesson review
    LESSON_IDENTITY_REQUIRED => "LessonIdentityRequired",
    USER_ID_REQUIRED => "UserIdRequired",
    REVIEW_MESSAGE_REQUIRED => "ReviewMessageRequired",

    // Zoom license
    LICENSE_EMAIL_REQUIRED => "LicenseEmailRequired",
    HOST_ID_REQUIRED => "HostIdRequired",
    CAPACITY_GREATER_THAN_ZERO => "CapacityGreaterThanZero",

    // SMTP
    MAIL_SERVER_REQUIRED => "MailServerRequired",
    MAIL_PORT_REQUIRED => "MailPortRequired",
    INVALID_MAIL_PORT => "InvalidMailPort",
    SENDER_NAME_REQUIRED => "SenderNameRequired",
    SENDER_EMAIL_REQUIRED => "SenderEmailRequired",
    USER_NAME_REQUIRED => "UserNameRequired",
    PASSWORD_REQUIRED => "PasswordRequired",

    // Certificate
    INSTITUTE_REQUIRED => "InstituteRequired",
}
