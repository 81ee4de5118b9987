//! Feedback questions attached to a feedback lesson.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Activation, Collection, Field, Quantity, Validator},
    value_objects::{Choice, FeedbackType, RequestKind},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub lesson_id: Option<Uuid>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice<FeedbackType>>,
    #[serde(default)]
    pub options: Vec<FeedbackOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackOption {
    pub option: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

fn feedback_type(f: &FeedbackRequest) -> Option<FeedbackType> {
    f.kind.as_ref().and_then(Choice::known)
}

const CHOICE_FEEDBACK: &[FeedbackType] = &[FeedbackType::SingleChoice, FeedbackType::MultipleChoice];

impl Request for FeedbackRequest {
    const KIND: RequestKind = RequestKind::Feedback;

    fn validator() -> Validator<Self> {
        let option = Validator::new("feedback-option")
            .rule(Field::of("option", |o: &FeedbackOption| &o.option).required(keys::OPTION_REQUIRED));

        Validator::new("feedback")
            .rule(
                Field::of("name", |f: &Self| &f.name)
                    .required(keys::NAME_REQUIRED)
                    .max_length(500, keys::NAME_LENGTH_500),
            )
            .rule(
                Field::of("type", |f: &Self| &f.kind)
                    .required(keys::FEEDBACK_TYPE_REQUIRED)
                    .in_enum(keys::INVALID_FEEDBACK_TYPE),
            )
            .rule(
                Collection::of("options", |f: &Self| f.options.as_slice())
                    .min_count(2, keys::OPTION_MORE_THAN_ONE)
                    .matching(
                        |o: &FeedbackOption| o.is_correct,
                        Quantity::Exactly(1),
                        keys::SINGLE_CHOICE_ONE_CORRECT,
                        Some(Activation::is(feedback_type, FeedbackType::SingleChoice)),
                    )
                    .matching(
                        |o: &FeedbackOption| o.is_correct,
                        Quantity::AtLeast(1),
                        keys::MULTIPLE_CHOICE_ONE_CORRECT,
                        Some(Activation::is(feedback_type, FeedbackType::MultipleChoice)),
                    )
                    .each(option)
                    .when(Activation::is_any(feedback_type, CHOICE_FEEDBACK)),
            )
    }
}
