//! Request payloads and their validators.
//!
//! Every field a client may omit is an `Option` (or a defaulted list), so a
//! missing value reaches the validator and is reported against its field
//! instead of failing deserialization.

use serde::de::DeserializeOwned;

use crate::domain::{rules::Validator, value_objects::RequestKind};

pub mod assessment;
pub mod certificate;
pub mod course;
pub mod feedback;
pub mod group;
pub mod lesson;
pub mod question;
pub mod review;
pub mod settings;
pub mod user;

pub use assessment::{
    AssessmentQuestionOption, AssessmentQuestionRequest, AssessmentRequest, EligibilityCriterion,
    SkillCriterion,
};
pub use certificate::CertificateRequest;
pub use course::{CourseRequest, CourseStatusRequest};
pub use feedback::{FeedbackOption, FeedbackRequest};
pub use group::GroupRequest;
pub use lesson::{LessonRequest, MeetingRequest, QuestionSetRequest};
pub use question::{AnswerOption, QuestionPoolRequest, QuestionRequest};
pub use review::PhysicalLessonReviewRequest;
pub use settings::{SmtpSettingRequest, ZoomLicenseRequest};
pub use user::{ChangePasswordRequest, UserRequest};

/// A payload type with a registered validator.
pub trait Request: DeserializeOwned + Send + Sync + 'static {
    const KIND: RequestKind;

    /// Build the validator for this request type.
    fn validator() -> Validator<Self>;
}

/// Wire names of the question types that can be stored.
pub(crate) const CHOICE_TYPES: &[&str] = &["singleChoice", "multipleChoice"];

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    /// A fixed instant, `days` after 2026-01-01.
    pub fn day(days: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap() + chrono::Duration::days(days)
    }
}
