// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Coursegate.
//!
//! This module holds the rule engine and the request catalogue. Message
//! lookup, payload decoding and dispatch live in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: validation is synchronous
//! - **No I/O**: rules are pure functions of the request
//! - **Keys, not text**: rules emit [`MessageKey`]s; localization is a port
//! - **Validators are values**: built once, shared by reference
//!
pub mod error;
pub mod keys;
pub mod requests;
pub mod rules;
pub mod value_objects;

pub use error::{DomainError, ErrorCategory};
pub use keys::MessageKey;
pub use requests::Request;
pub use rules::{FieldError, ValidationResult, Validator};
pub use value_objects::{
    Choice, CourseLanguage, CourseStatus, Discriminant, EligibilityType, FeedbackType, LessonType,
    QuestionType, RequestKind, SkillRule, UserRole,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::*;

    fn from_json<R: Request>(json: &str) -> ValidationResult {
        let request: R = serde_json::from_str(json).unwrap();
        R::validator().validate(&request, None).unwrap()
    }

    #[test]
    fn missing_required_field_reports_its_own_key_once() {
        let result = from_json::<QuestionPoolRequest>("{}");
        assert_eq!(result.errors(), [FieldError::new("name", keys::NAME_REQUIRED)]);

        let result = from_json::<CourseStatusRequest>(r#"{"status": "draft"}"#);
        assert_eq!(result.errors(), [FieldError::new("identity", keys::IDENTITY_REQUIRED)]);
    }

    #[test]
    fn exam_lesson_from_json() {
        let result = from_json::<LessonRequest>(
            r#"{
                "type": 3,
                "name": null,
                "questionSet": { "questionMarking": 1, "duration": 30 }
            }"#,
        );
        assert!(result.is_valid(), "{result:?}");
    }

    #[test]
    fn single_choice_question_from_json() {
        let result = from_json::<QuestionRequest>(
            r#"{
                "name": "Which keyword moves a value into a closure?",
                "type": "singleChoice",
                "answers": [
                    { "option": "move", "isCorrect": true },
                    { "option": "ref", "isCorrect": false }
                ]
            }"#,
        );
        assert!(result.is_valid(), "{result:?}");
    }

    #[test]
    fn independent_fields_all_report() {
        let result = from_json::<CertificateRequest>("{}");
        let fields: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["name", "startDate", "institute"]);
    }

    #[test]
    fn every_validator_is_well_formed() {
        assert!(CourseRequest::validator().check_definition().is_ok());
        assert!(CourseStatusRequest::validator().check_definition().is_ok());
        assert!(LessonRequest::validator().check_definition().is_ok());
        assert!(QuestionSetRequest::validator().check_definition().is_ok());
        assert!(MeetingRequest::validator().check_definition().is_ok());
        assert!(QuestionRequest::validator().check_definition().is_ok());
        assert!(QuestionPoolRequest::validator().check_definition().is_ok());
        assert!(AssessmentRequest::validator().check_definition().is_ok());
        assert!(AssessmentQuestionRequest::validator().check_definition().is_ok());
        assert!(FeedbackRequest::validator().check_definition().is_ok());
        assert!(UserRequest::validator().check_definition().is_ok());
        assert!(ChangePasswordRequest::validator().check_definition().is_ok());
        assert!(PhysicalLessonReviewRequest::validator().check_definition().is_ok());
        assert!(GroupRequest::validator().check_definition().is_ok());
        assert!(ZoomLicenseRequest::validator().check_definition().is_ok());
        assert!(SmtpSettingRequest::validator().check_definition().is_ok());
        assert!(CertificateRequest::validator().check_definition().is_ok());
    }
}
