//! Message tables that ship with Coursegate.
//!
//! English covers every key in [`keys::ALL`]; the unit tests hold it to
//! that. Other locales may be partial, and the service falls back to
//! English for whatever they leave out.

use coursegate_core::domain::{MessageKey, keys};

/// Locale whose table is complete.
pub const BASE_LOCALE: &str = "en";

/// Every built-in `(locale, table)` pair.
pub fn all_tables() -> [(&'static str, &'static [(MessageKey, &'static str)]); 2] {
    [(BASE_LOCALE, ENGLISH), ("ne", NEPALI)]
}

pub const ENGLISH: &[(MessageKey, &str)] = &[
    (keys::NAME_REQUIRED, "Name is required."),
    (keys::NAME_LENGTH_250, "Name must not exceed 250 characters."),
    (keys::NAME_LENGTH_500, "Name must not exceed 500 characters."),
    (keys::DESCRIPTION_LENGTH_5000, "Description must not exceed 5000 characters."),
    (keys::IDENTITY_REQUIRED, "Identity is required."),
    (keys::START_DATE_REQUIRED, "Start date is required."),
    (keys::END_DATE_AFTER_START_DATE, "End date must be greater than start date."),
    (keys::DURATION_GREATER_THAN_ZERO, "Duration must be greater than zero."),
    (keys::EMAIL_REQUIRED, "Email is required."),
    (keys::INVALID_EMAIL, "Email address is not valid."),
    (keys::INVALID_LANGUAGE, "Language is not valid."),
    (keys::LEVEL_REQUIRED, "Level is required."),
    (keys::STATUS_REQUIRED, "Status is required."),
    (keys::INVALID_STATUS, "Status is not valid."),
    (keys::INVALID_CURRENT_STATUS, "Current status is not valid."),
    (keys::REJECTION_MESSAGE_REQUIRED, "A message is required when rejecting."),
    (keys::INVALID_STATUS_TRANSITION, "The course cannot move to this status from its current status."),
    (keys::LESSON_TYPE_REQUIRED, "Lesson type is required."),
    (keys::INVALID_LESSON_TYPE, "Lesson type is not valid."),
    (keys::DOCUMENT_REQUIRED, "Document is required."),
    (keys::VIDEO_REQUIRED, "Video is required."),
    (keys::QUESTION_SET_REQUIRED, "Question set is required."),
    (keys::MEETING_REQUIRED, "Meeting is required."),
    (keys::MARKING_GREATER_THAN_ZERO, "Question marking must be greater than zero."),
    (keys::PASSING_WEIGHTAGE_RANGE, "Passing weightage must be between 0 and 100."),
    (keys::ALLOWED_RETAKE_NOT_NEGATIVE, "Allowed retakes must not be negative."),
    (keys::START_TIME_EMPTY_ERROR, "Start time is required when end time is set."),
    (keys::END_TIME_EMPTY_ERROR, "End time is required when start time is set."),
    (keys::END_TIME_AFTER_START_TIME, "End time must be greater than start time."),
    (keys::ZOOM_LICENSE_REQUIRED, "Zoom license is required."),
    (keys::QUESTION_NAME_REQUIRED, "Question name is required."),
    (keys::QUESTION_NAME_LENGTH_500, "Question name must not exceed 500 characters."),
    (keys::QUESTION_TYPE_REQUIRED, "Question type is required."),
    (keys::INVALID_QUESTION_TYPE, "Question type is not valid."),
    (keys::OPTION_MORE_THAN_ONE, "At least two options are required."),
    (keys::SINGLE_CHOICE_ONE_CORRECT, "A single choice question must have exactly one correct option."),
    (keys::MULTIPLE_CHOICE_ONE_CORRECT, "A multiple choice question must have at least one correct option."),
    (keys::OPTION_REQUIRED, "Option is required."),
    (keys::OPTION_LENGTH_5000, "Option must not exceed 5000 characters."),
    (keys::TITLE_REQUIRED, "Title is required."),
    (keys::TITLE_LENGTH_500, "Title must not exceed 500 characters."),
    (keys::RETAKES_NOT_NEGATIVE, "Retakes must not be negative."),
    (keys::WEIGHTAGE_RANGE, "Weightage must be greater than 0 and at most 100."),
    (keys::ELIGIBILITY_TYPE_REQUIRED, "Eligibility type is required."),
    (keys::INVALID_ELIGIBILITY_TYPE, "Eligibility type is not valid."),
    (keys::ROLE_REQUIRED, "Role is required."),
    (keys::INVALID_ROLE, "Role is not valid."),
    (keys::SKILL_REQUIRED, "Skill is required."),
    (keys::GROUP_REQUIRED, "Group is required."),
    (keys::TRAINING_REQUIRED, "Training is required."),
    (keys::ASSESSMENT_REQUIRED, "Assessment is required."),
    (keys::PERCENTAGE_RANGE, "Percentage must be between 0 and 100."),
    (keys::SKILL_RULE_REQUIRED, "Skill rule is required."),
    (keys::INVALID_SKILL_RULE, "Skill rule is not valid."),
    (keys::FEEDBACK_TYPE_REQUIRED, "Feedback type is required."),
    (keys::INVALID_FEEDBACK_TYPE, "Feedback type is not valid."),
    (keys::FIRST_NAME_REQUIRED, "First name is required."),
    (keys::FIRST_NAME_LENGTH_100, "First name must not exceed 100 characters."),
    (keys::LAST_NAME_REQUIRED, "Last name is required."),
    (keys::LAST_NAME_LENGTH_100, "Last name must not exceed 100 characters."),
    (keys::BIO_LENGTH_5000, "Bio must not exceed 5000 characters."),
    (keys::MOBILE_LENGTH_50, "Mobile number must not exceed 50 characters."),
    (keys::CURRENT_PASSWORD_REQUIRED, "Current password is required."),
    (keys::NEW_PASSWORD_REQUIRED, "New password is required."),
    (
        keys::PASSWORD_COMPLEXITY,
        "Password must be at least 8 characters and contain upper and lower case letters, a digit and a special character.",
    ),
    (keys::CONFIRM_PASSWORD_REQUIRED, "Confirm password is required."),
    (keys::CONFIRM_PASSWORD_MISMATCH, "Confirm password does not match the new password."),
    (keys::NEW_PASSWORD_SAME_AS_CURRENT, "New password must be different from the current password."),
    (keys::LESSON_IDENTITY_REQUIRED, "Lesson identity is required."),
    (keys::USER_ID_REQUIRED, "User is required."),
    (keys::REVIEW_MESSAGE_REQUIRED, "A message is required when the lesson is not passed."),
    (keys::LICENSE_EMAIL_REQUIRED, "License email is required."),
    (keys::HOST_ID_REQUIRED, "Host id is required."),
    (keys::CAPACITY_GREATER_THAN_ZERO, "Capacity must be greater than zero."),
    (keys::MAIL_SERVER_REQUIRED, "Mail server is required."),
    (keys::MAIL_PORT_REQUIRED, "Mail port is required."),
    (keys::INVALID_MAIL_PORT, "Mail port must be a number between 1 and 65535."),
    (keys::SENDER_NAME_REQUIRED, "Sender name is required."),
    (keys::SENDER_EMAIL_REQUIRED, "Sender email is required."),
    (keys::USER_NAME_REQUIRED, "User name is required."),
    (keys::PASSWORD_REQUIRED, "Password is required."),
    (keys::INSTITUTE_REQUIRED, "Institute is required."),
];

pub const NEPALI: &[(MessageKey, &str)] = &[
    (keys::NAME_REQUIRED, "नाम आवश्यक छ।"),
    (keys::NAME_LENGTH_250, "नाम २५० अक्षरभन्दा बढी हुनु हुँदैन।"),
    (keys::NAME_LENGTH_500, "नाम ५०० अक्षरभन्दा बढी हुनु हुँदैन।"),
    (keys::DESCRIPTION_LENGTH_5000, "विवरण ५००० अक्षरभन्दा बढी हुनु हुँदैन।"),
    (keys::IDENTITY_REQUIRED, "पहिचान आवश्यक छ।"),
    (keys::START_DATE_REQUIRED, "सुरु मिति आवश्यक छ।"),
    (keys::END_DATE_AFTER_START_DATE, "अन्त्य मिति सुरु मितिभन्दा पछिको हुनुपर्छ।"),
    (keys::DURATION_GREATER_THAN_ZERO, "अवधि शून्यभन्दा बढी हुनुपर्छ।"),
    (keys::EMAIL_REQUIRED, "इमेल आवश्यक छ।"),
    (keys::INVALID_EMAIL, "इमेल ठेगाना मान्य छैन।"),
    (keys::LESSON_TYPE_REQUIRED, "पाठको प्रकार आवश्यक छ।"),
    (keys::INVALID_LESSON_TYPE, "पाठको प्रकार मान्य छैन।"),
    (keys::DOCUMENT_REQUIRED, "कागजात आवश्यक छ।"),
    (keys::VIDEO_REQUIRED, "भिडियो आवश्यक छ।"),
    (keys::OPTION_MORE_THAN_ONE, "कम्तीमा दुई विकल्प आवश्यक छन्।"),
    (keys::OPTION_REQUIRED, "विकल्प आवश्यक छ।"),
    (keys::FIRST_NAME_REQUIRED, "पहिलो नाम आवश्यक छ।"),
    (keys::LAST_NAME_REQUIRED, "थर आवश्यक छ।"),
    (keys::NEW_PASSWORD_REQUIRED, "नयाँ पासवर्ड आवश्यक छ।"),
    (keys::CONFIRM_PASSWORD_MISMATCH, "पुष्टि पासवर्ड नयाँ पासवर्डसँग मेल खाँदैन।"),
];
