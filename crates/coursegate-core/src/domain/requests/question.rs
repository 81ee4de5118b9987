//! Question-pool questions.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::{CHOICE_TYPES, Request},
    rules::{Activation, Collection, Field, Quantity, Validator},
    value_objects::{Choice, QuestionType, RequestKind},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hints: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice<QuestionType>>,
    #[serde(default)]
    pub tags: Vec<Uuid>,
    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// Rich text.
    pub option: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

/// A named pool that questions are filed under.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPoolRequest {
    pub name: Option<String>,
}

/// Option-list rules shared by pool questions and assessment questions:
/// at least two options, then the correct-answer count for the type.
pub(crate) fn choice_options<T, C>(
    path: &'static str,
    select: impl Fn(&T) -> &[C] + Send + Sync + 'static,
    question_type: fn(&T) -> Option<QuestionType>,
    is_correct: fn(&C) -> bool,
) -> Collection<T, C>
where
    T: 'static,
    C: 'static,
{
    Collection::of(path, select)
        .min_count(2, keys::OPTION_MORE_THAN_ONE)
        .matching(
            is_correct,
            Quantity::Exactly(1),
            keys::SINGLE_CHOICE_ONE_CORRECT,
            Some(Activation::is(question_type, QuestionType::SingleChoice)),
        )
        .matching(
            is_correct,
            Quantity::AtLeast(1),
            keys::MULTIPLE_CHOICE_ONE_CORRECT,
            Some(Activation::is(question_type, QuestionType::MultipleChoice)),
        )
}

fn question_type(q: &QuestionRequest) -> Option<QuestionType> {
    q.kind.as_ref().and_then(Choice::known)
}

impl Request for QuestionRequest {
    const KIND: RequestKind = RequestKind::Question;

    fn validator() -> Validator<Self> {
        let answer = Validator::new("answer").rule(
            Field::of("option", |a: &AnswerOption| &a.option)
                .required(keys::OPTION_REQUIRED)
                .max_visible_length(5000, keys::OPTION_LENGTH_5000),
        );

        Validator::new("question")
            .rule(
                Field::of("name", |q: &Self| &q.name)
                    .required(keys::NAME_REQUIRED)
                    .max_length(500, keys::NAME_LENGTH_500),
            )
            .rule(
                Field::of("type", |q: &Self| &q.kind)
                    .required(keys::QUESTION_TYPE_REQUIRED)
                    .in_enum(keys::INVALID_QUESTION_TYPE)
                    .one_of(CHOICE_TYPES, keys::INVALID_QUESTION_TYPE),
            )
            .rule(
                choice_options(
                    "answers",
                    |q: &Self| q.answers.as_slice(),
                    question_type,
                    |a: &AnswerOption| a.is_correct,
                )
                .each(answer),
            )
    }
}

impl Request for QuestionPoolRequest {
    const KIND: RequestKind = RequestKind::QuestionPool;

    fn validator() -> Validator<Self> {
        Validator::new("question-pool").rule(
            Field::of("name", |p: &Self| &p.name)
                .required(keys::NAME_REQUIRED)
                .max_length(250, keys::NAME_LENGTH_250),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::{FieldError, ValidationResult};

    fn answer(option: &str, is_correct: bool) -> AnswerOption {
        AnswerOption {
            option: Some(option.into()),
            is_correct,
        }
    }

    fn question(kind: QuestionType, answers: Vec<AnswerOption>) -> QuestionRequest {
        QuestionRequest {
            name: Some("Which trait enables `?` on a custom error?".into()),
            kind: Some(Choice::Known(kind)),
            answers,
            ..Default::default()
        }
    }

    fn check(request: &QuestionRequest) -> ValidationResult {
        QuestionRequest::validator().validate(request, None).unwrap()
    }

    #[test]
    fn single_choice_needs_exactly_one_correct() {
        let ok = question(
            QuestionType::SingleChoice,
            vec![answer("From", true), answer("Into", false)],
        );
        assert!(check(&ok).is_valid());

        let none = question(
            QuestionType::SingleChoice,
            vec![answer("From", false), answer("Into", false)],
        );
        assert_eq!(
            check(&none).errors(),
            [FieldError::new("answers", keys::SINGLE_CHOICE_ONE_CORRECT)]
        );

        let two = question(
            QuestionType::SingleChoice,
            vec![answer("From", true), answer("Into", true), answer("AsRef", false)],
        );
        assert_eq!(
            check(&two).errors(),
            [FieldError::new("answers", keys::SINGLE_CHOICE_ONE_CORRECT)]
        );
    }

    #[test]
    fn multiple_choice_needs_at_least_one_correct() {
        let many = question(
            QuestionType::MultipleChoice,
            vec![answer("From", true), answer("Into", true)],
        );
        assert!(check(&many).is_valid());

        let none = question(
            QuestionType::MultipleChoice,
            vec![answer("From", false), answer("Into", false)],
        );
        assert!(check(&none).has_error("answers", keys::MULTIPLE_CHOICE_ONE_CORRECT));
    }

    #[test]
    fn fewer_than_two_answers_is_one_list_error() {
        let request = question(QuestionType::SingleChoice, vec![answer("", true)]);
        assert_eq!(
            check(&request).errors(),
            [FieldError::new("answers", keys::OPTION_MORE_THAN_ONE)]
        );
    }

    #[test]
    fn answer_errors_carry_index() {
        let request = question(
            QuestionType::SingleChoice,
            vec![answer("From", true), answer("<p> </p>", false)],
        );
        // Required looks at the raw text.
        assert!(check(&request).is_valid());

        let request = question(
            QuestionType::SingleChoice,
            vec![answer("From", true), answer("   ", false)],
        );
        assert_eq!(
            check(&request).errors(),
            [FieldError::new("answers.1.option", keys::OPTION_REQUIRED)]
        );
    }

    #[test]
    fn subjective_type_is_rejected() {
        let request = question(
            QuestionType::Subjective,
            vec![answer("a", false), answer("b", false)],
        );
        assert_eq!(
            check(&request).errors(),
            [FieldError::new("type", keys::INVALID_QUESTION_TYPE)]
        );
    }

    #[test]
    fn answer_length_counts_visible_text() {
        let long = format!("<b>{}</b>", "x".repeat(5000));
        let request = question(
            QuestionType::SingleChoice,
            vec![answer(&long, true), answer("b", false)],
        );
        assert!(check(&request).is_valid());

        let request = question(
            QuestionType::SingleChoice,
            vec![answer(&"x".repeat(5001), true), answer("b", false)],
        );
        assert!(check(&request).has_error("answers.0.option", keys::OPTION_LENGTH_5000));
    }

    #[test]
    fn pool_name_rules() {
        let validator = QuestionPoolRequest::validator();
        let missing = QuestionPoolRequest { name: None };
        assert!(validator
            .validate(&missing, None)
            .unwrap()
            .has_error("name", keys::NAME_REQUIRED));

        let ok = QuestionPoolRequest {
            name: Some("Week 1".into()),
        };
        assert!(validator.validate(&ok, None).unwrap().is_valid());
    }
}
