//! Standalone assessments, their eligibility rules and their questions.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::{CHOICE_TYPES, Request, question::choice_options},
    rules::{Activation, Bound, Collection, Constraint, Field, Validator},
    value_objects::{Choice, EligibilityType, QuestionType, RequestKind, SkillRule, UserRole},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub retakes: Option<i32>,
    /// Minutes.
    pub duration: Option<i32>,
    /// Share of the final score, in percent.
    pub weightage: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eligibility_criteria: Vec<EligibilityCriterion>,
    #[serde(default)]
    pub skills_criteria: Vec<SkillCriterion>,
}

/// Who may sit the assessment. The referenced id depends on the type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCriterion {
    pub eligibility_type: Option<Choice<EligibilityType>>,
    pub role: Option<Choice<UserRole>>,
    pub skill_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub training_id: Option<Uuid>,
    pub assessment_id: Option<Uuid>,
}

/// Skill awarded (or required) at a score threshold.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCriterion {
    pub skill_id: Option<Uuid>,
    pub percentage: Option<f64>,
    pub skill_rule: Option<Choice<SkillRule>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestionRequest {
    pub question_name: Option<String>,
    pub description: Option<String>,
    pub hints: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice<QuestionType>>,
    #[serde(default)]
    pub assessment_question_options: Vec<AssessmentQuestionOption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestionOption {
    /// Rich text.
    pub option: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
    pub order: Option<i32>,
}

fn eligibility_type(c: &EligibilityCriterion) -> Option<EligibilityType> {
    c.eligibility_type.as_ref().and_then(Choice::known)
}

fn eligibility_validator() -> Validator<EligibilityCriterion> {
    let keyed_on = |t: EligibilityType| Activation::is(eligibility_type, t);

    Validator::new("eligibility-criterion")
        .rule(
            Field::of("eligibilityType", |c: &EligibilityCriterion| &c.eligibility_type)
                .required(keys::ELIGIBILITY_TYPE_REQUIRED)
                .in_enum(keys::INVALID_ELIGIBILITY_TYPE),
        )
        .rule(
            Field::of("role", |c: &EligibilityCriterion| &c.role)
                .required_when(keys::ROLE_REQUIRED, keyed_on(EligibilityType::Role))
                .in_enum(keys::INVALID_ROLE),
        )
        .rule(
            Field::of("skillId", |c: &EligibilityCriterion| &c.skill_id)
                .required_when(keys::SKILL_REQUIRED, keyed_on(EligibilityType::Skills)),
        )
        .rule(
            Field::of("groupId", |c: &EligibilityCriterion| &c.group_id)
                .required_when(keys::GROUP_REQUIRED, keyed_on(EligibilityType::Group)),
        )
        .rule(
            Field::of("trainingId", |c: &EligibilityCriterion| &c.training_id)
                .required_when(keys::TRAINING_REQUIRED, keyed_on(EligibilityType::Training)),
        )
        .rule(
            Field::of("assessmentId", |c: &EligibilityCriterion| &c.assessment_id)
                .required_when(keys::ASSESSMENT_REQUIRED, keyed_on(EligibilityType::Assessment)),
        )
}

fn skill_validator() -> Validator<SkillCriterion> {
    Validator::new("skill-criterion")
        .rule(Field::of("skillId", |s: &SkillCriterion| &s.skill_id).required(keys::SKILL_REQUIRED))
        .rule(
            Field::of("percentage", |s: &SkillCriterion| &s.percentage)
                .between(0.0, 100.0, keys::PERCENTAGE_RANGE),
        )
        .rule(
            Field::of("skillRule", |s: &SkillCriterion| &s.skill_rule)
                .required(keys::SKILL_RULE_REQUIRED)
                .in_enum(keys::INVALID_SKILL_RULE),
        )
}

impl Request for AssessmentRequest {
    const KIND: RequestKind = RequestKind::Assessment;

    fn validator() -> Validator<Self> {
        Validator::new("assessment")
            .rule(
                Field::of("title", |a: &Self| &a.title)
                    .required(keys::TITLE_REQUIRED)
                    .max_length(500, keys::TITLE_LENGTH_500),
            )
            .rule(
                Field::of("description", |a: &Self| &a.description)
                    .max_length(5000, keys::DESCRIPTION_LENGTH_5000),
            )
            .rule(Field::of("retakes", |a: &Self| &a.retakes).at_least(0.0, keys::RETAKES_NOT_NEGATIVE))
            .rule(
                Field::of("duration", |a: &Self| &a.duration)
                    .greater_than(0.0, keys::DURATION_GREATER_THAN_ZERO),
            )
            .rule(Field::of("weightage", |a: &Self| &a.weightage).check(
                Constraint::Range {
                    min: Bound::Exclusive(0.0),
                    max: Bound::Inclusive(100.0),
                },
                keys::WEIGHTAGE_RANGE,
            ))
            .rule(
                Field::of("endDate", |a: &Self| &a.end_date)
                    .after(|a: &Self| &a.start_date, keys::END_DATE_AFTER_START_DATE),
            )
            .rule(
                Collection::of("eligibilityCriteria", |a: &Self| a.eligibility_criteria.as_slice())
                    .each(eligibility_validator()),
            )
            .rule(
                Collection::of("skillsCriteria", |a: &Self| a.skills_criteria.as_slice())
                    .each(skill_validator()),
            )
    }
}

fn question_type(q: &AssessmentQuestionRequest) -> Option<QuestionType> {
    q.kind.as_ref().and_then(Choice::known)
}

impl Request for AssessmentQuestionRequest {
    const KIND: RequestKind = RequestKind::AssessmentQuestion;

    fn validator() -> Validator<Self> {
        let option = Validator::new("assessment-question-option").rule(
            Field::of("option", |o: &AssessmentQuestionOption| &o.option)
                .required(keys::OPTION_REQUIRED)
                .max_visible_length(5000, keys::OPTION_LENGTH_5000),
        );

        Validator::new("assessment-question")
            .rule(
                Field::of("questionName", |q: &Self| &q.question_name)
                    .required(keys::QUESTION_NAME_REQUIRED)
                    .max_length(500, keys::QUESTION_NAME_LENGTH_500),
            )
            .rule(
                Field::of("type", |q: &Self| &q.kind)
                    .required(keys::QUESTION_TYPE_REQUIRED)
                    .in_enum(keys::INVALID_QUESTION_TYPE)
                    .one_of(CHOICE_TYPES, keys::INVALID_QUESTION_TYPE),
            )
            .rule(
                choice_options(
                    "assessmentQuestionOptions",
                    |q: &Self| q.assessment_question_options.as_slice(),
                    question_type,
                    |o: &AssessmentQuestionOption| o.is_correct,
                )
                .each(option),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        requests::fixtures::day,
        rules::{FieldError, ValidationResult},
    };

    fn assessment() -> AssessmentRequest {
        AssessmentRequest {
            title: Some("Borrow checker basics".into()),
            retakes: Some(2),
            duration: Some(30),
            weightage: Some(20.0),
            start_date: Some(day(0)),
            end_date: Some(day(7)),
            ..Default::default()
        }
    }

    fn check(request: &AssessmentRequest) -> ValidationResult {
        AssessmentRequest::validator().validate(request, None).unwrap()
    }

    #[test]
    fn valid_assessment_passes() {
        assert!(check(&assessment()).is_valid());
    }

    #[test]
    fn weightage_bounds() {
        for (weightage, ok) in [(0.0, false), (0.5, true), (100.0, true), (100.5, false)] {
            let request = AssessmentRequest {
                weightage: Some(weightage),
                ..assessment()
            };
            assert_eq!(check(&request).is_valid(), ok, "weightage {weightage}");
        }
    }

    #[test]
    fn duration_and_retakes() {
        let request = AssessmentRequest {
            duration: Some(0),
            retakes: Some(-1),
            ..assessment()
        };
        assert_eq!(
            check(&request).errors(),
            [
                FieldError::new("retakes", keys::RETAKES_NOT_NEGATIVE),
                FieldError::new("duration", keys::DURATION_GREATER_THAN_ZERO),
            ]
        );
    }

    #[test]
    fn eligibility_id_follows_type() {
        let request = AssessmentRequest {
            eligibility_criteria: vec![
                EligibilityCriterion {
                    eligibility_type: Some(Choice::Known(EligibilityType::Group)),
                    group_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
                EligibilityCriterion {
                    eligibility_type: Some(Choice::Known(EligibilityType::Skills)),
                    ..Default::default()
                },
                EligibilityCriterion {
                    eligibility_type: Some(Choice::Unknown("12".into())),
                    ..Default::default()
                },
            ],
            ..assessment()
        };
        assert_eq!(
            check(&request).errors(),
            [
                FieldError::new("eligibilityCriteria.1.skillId", keys::SKILL_REQUIRED),
                FieldError::new(
                    "eligibilityCriteria.2.eligibilityType",
                    keys::INVALID_ELIGIBILITY_TYPE
                ),
            ]
        );
    }

    #[test]
    fn skill_criteria_rules() {
        let request = AssessmentRequest {
            skills_criteria: vec![SkillCriterion {
                skill_id: Some(Uuid::new_v4()),
                percentage: Some(120.0),
                skill_rule: Some(Choice::Known(SkillRule::IsGreaterThan)),
            }],
            ..assessment()
        };
        assert_eq!(
            check(&request).errors(),
            [FieldError::new("skillsCriteria.0.percentage", keys::PERCENTAGE_RANGE)]
        );
    }

    fn option(text: &str, is_correct: bool) -> AssessmentQuestionOption {
        AssessmentQuestionOption {
            option: Some(text.into()),
            is_correct,
            order: None,
        }
    }

    fn question(kind: QuestionType, options: Vec<AssessmentQuestionOption>) -> AssessmentQuestionRequest {
        AssessmentQuestionRequest {
            question_name: Some("Pick the owning type".into()),
            kind: Some(Choice::Known(kind)),
            assessment_question_options: options,
            ..Default::default()
        }
    }

    fn check_question(request: &AssessmentQuestionRequest) -> ValidationResult {
        AssessmentQuestionRequest::validator()
            .validate(request, None)
            .unwrap()
    }

    #[test]
    fn assessment_question_correct_counts() {
        let single = question(
            QuestionType::SingleChoice,
            vec![option("String", true), option("&str", false)],
        );
        assert!(check_question(&single).is_valid());

        let single_two = question(
            QuestionType::SingleChoice,
            vec![option("String", true), option("Vec<u8>", true)],
        );
        assert!(check_question(&single_two)
            .has_error("assessmentQuestionOptions", keys::SINGLE_CHOICE_ONE_CORRECT));

        let multiple_none = question(
            QuestionType::MultipleChoice,
            vec![option("String", false), option("&str", false)],
        );
        assert!(check_question(&multiple_none)
            .has_error("assessmentQuestionOptions", keys::MULTIPLE_CHOICE_ONE_CORRECT));
    }

    #[test]
    fn assessment_question_name_required() {
        let request = AssessmentQuestionRequest {
            question_name: None,
            ..question(
                QuestionType::SingleChoice,
                vec![option("a", true), option("b", false)],
            )
        };
        assert_eq!(
            check_question(&request).errors(),
            [FieldError::new("questionName", keys::QUESTION_NAME_REQUIRED)]
        );
    }

    #[test]
    fn single_option_is_list_error() {
        let request = question(QuestionType::MultipleChoice, vec![option("", true)]);
        assert_eq!(
            check_question(&request).errors(),
            [FieldError::new("assessmentQuestionOptions", keys::OPTION_MORE_THAN_ONE)]
        );
    }

    #[test]
    fn option_limit_counts_visible_text() {
        let marked_up = format!("<p><strong>{}</strong></p>", "x".repeat(5000));
        let request = question(
            QuestionType::SingleChoice,
            vec![option(&marked_up, true), option("b", false)],
        );
        assert!(check_question(&request).is_valid());

        let request = question(
            QuestionType::SingleChoice,
            vec![option(&"x".repeat(5001), true), option("b", false)],
        );
        assert_eq!(
            check_question(&request).errors(),
            [FieldError::new("assessmentQuestionOptions.0.option", keys::OPTION_LENGTH_5000)]
        );
    }
}
