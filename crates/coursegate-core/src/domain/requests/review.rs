//! Trainer review of a trainee's physical-lesson attendance.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Activation, Field, Validator},
    value_objects::RequestKind,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLessonReviewRequest {
    pub lesson_identity: Option<String>,
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub is_passed: bool,
    /// Explains a failed attendance to the trainee.
    pub message: Option<String>,
}

impl Request for PhysicalLessonReviewRequest {
    const KIND: RequestKind = RequestKind::PhysicalLessonReview;

    fn validator() -> Validator<Self> {
        Validator::new("physical-lesson-review")
            .rule(
                Field::of("lessonIdentity", |r: &Self| &r.lesson_identity)
                    .required(keys::LESSON_IDENTITY_REQUIRED),
            )
            .rule(Field::of("userId", |r: &Self| &r.user_id).required(keys::USER_ID_REQUIRED))
            .rule(
                Field::of("message", |r: &Self| &r.message)
                    .required(keys::REVIEW_MESSAGE_REQUIRED)
                    .when(Activation::when(|r: &Self| !r.is_passed)),
            )
    }
}
