//! Course creation and status changes.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Activation, DomainCheck, Field, Validator},
    value_objects::{Choice, CourseLanguage, CourseStatus, RequestKind},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    /// Rich text; its limit applies to the visible characters.
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub language: Option<Choice<CourseLanguage>>,
    pub level_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub duration: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_unlimited_end_date: bool,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

impl Request for CourseRequest {
    const KIND: RequestKind = RequestKind::Course;

    fn validator() -> Validator<Self> {
        Validator::new("course")
            .rule(
                Field::of("name", |c: &Self| &c.name)
                    .required(keys::NAME_REQUIRED)
                    .max_visible_length(250, keys::NAME_LENGTH_250),
            )
            .rule(Field::of("language", |c: &Self| &c.language).in_enum(keys::INVALID_LANGUAGE))
            .rule(Field::of("levelId", |c: &Self| &c.level_id).required(keys::LEVEL_REQUIRED))
            .rule(
                Field::of("description", |c: &Self| &c.description)
                    .max_length(5000, keys::DESCRIPTION_LENGTH_5000),
            )
            .rule(
                DomainCheck::new("endDate", keys::END_DATE_AFTER_START_DATE, |c: &Self| {
                    match (c.start_date, c.end_date) {
                        (Some(start), Some(end)) => end > start,
                        _ => true,
                    }
                })
                .when(Activation::when(|c: &Self| !c.is_unlimited_end_date)),
            )
    }
}

/// Moves a course along its lifecycle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatusRequest {
    pub identity: Option<String>,
    pub status: Option<Choice<CourseStatus>>,
    /// Required when rejecting.
    pub message: Option<String>,
    /// The status the caller believes the course is in. When supplied, the
    /// requested transition is checked against the lifecycle.
    pub current_status: Option<Choice<CourseStatus>>,
}

fn target_status(r: &CourseStatusRequest) -> Option<CourseStatus> {
    r.status.as_ref().and_then(Choice::known)
}

fn current_status(r: &CourseStatusRequest) -> Option<CourseStatus> {
    r.current_status.as_ref().and_then(Choice::known)
}

impl Request for CourseStatusRequest {
    const KIND: RequestKind = RequestKind::CourseStatus;

    fn validator() -> Validator<Self> {
        Validator::new("course-status")
            .rule(Field::of("identity", |r: &Self| &r.identity).required(keys::IDENTITY_REQUIRED))
            .rule(
                Field::of("status", |r: &Self| &r.status)
                    .required(keys::STATUS_REQUIRED)
                    .in_enum(keys::INVALID_STATUS),
            )
            .rule(
                Field::of("message", |r: &Self| &r.message).required_when(
                    keys::REJECTION_MESSAGE_REQUIRED,
                    Activation::is(target_status, CourseStatus::Rejected),
                ),
            )
            .rule(
                Field::of("currentStatus", |r: &Self| &r.current_status)
                    .in_enum(keys::INVALID_CURRENT_STATUS),
            )
            .rule(DomainCheck::new(
                "status",
                keys::INVALID_STATUS_TRANSITION,
                |r: &Self| match (current_status(r), target_status(r)) {
                    (Some(from), Some(to)) => from.can_transition_to(to),
                    _ => true,
                },
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::fixtures::day;

    fn course() -> CourseRequest {
        CourseRequest {
            name: Some("Rust for Trainers".into()),
            language: Some(Choice::Known(CourseLanguage::English)),
            level_id: Some(Uuid::new_v4()),
            start_date: Some(day(0)),
            end_date: Some(day(30)),
            ..Default::default()
        }
    }

    fn check(request: &CourseRequest) -> crate::domain::rules::ValidationResult {
        CourseRequest::validator().validate(request, None).unwrap()
    }

    #[test]
    fn valid_course_passes() {
        assert!(check(&course()).is_valid());
    }

    #[test]
    fn missing_name_reports_once() {
        let mut request = course();
        request.name = None;
        let result = check(&request);
        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error("name", keys::NAME_REQUIRED));
    }

    #[test]
    fn name_limit_counts_visible_text() {
        let mut request = course();
        request.name = Some(format!("<p><strong>{}</strong></p>", "a".repeat(250)));
        assert!(check(&request).is_valid());

        request.name = Some(format!("<p>{}</p>", "a".repeat(251)));
        assert!(check(&request).has_error("name", keys::NAME_LENGTH_250));
    }

    #[test]
    fn end_date_must_follow_start() {
        let mut request = course();
        request.end_date = Some(day(-1));
        assert!(check(&request).has_error("endDate", keys::END_DATE_AFTER_START_DATE));

        request.is_unlimited_end_date = true;
        assert!(check(&request).is_valid());
    }

    #[test]
    fn unknown_language_is_reported() {
        let mut request = course();
        request.language = Some(Choice::Unknown("7".into()));
        assert!(check(&request).has_error("language", keys::INVALID_LANGUAGE));
    }

    fn status(status: Option<Choice<CourseStatus>>, message: Option<&str>) -> CourseStatusRequest {
        CourseStatusRequest {
            identity: Some("rust-for-trainers".into()),
            status,
            message: message.map(String::from),
            current_status: None,
        }
    }

    fn check_status(request: &CourseStatusRequest) -> crate::domain::rules::ValidationResult {
        CourseStatusRequest::validator().validate(request, None).unwrap()
    }

    #[test]
    fn rejection_requires_message() {
        let rejected = Some(Choice::Known(CourseStatus::Rejected));
        assert!(check_status(&status(rejected.clone(), None))
            .has_error("message", keys::REJECTION_MESSAGE_REQUIRED));
        assert!(check_status(&status(rejected.clone(), Some("  ")))
            .has_error("message", keys::REJECTION_MESSAGE_REQUIRED));
        assert!(check_status(&status(rejected, Some("Missing syllabus"))).is_valid());
    }

    #[test]
    fn other_statuses_do_not_need_message() {
        for s in [
            CourseStatus::Draft,
            CourseStatus::Review,
            CourseStatus::Published,
            CourseStatus::Completed,
        ] {
            assert!(check_status(&status(Some(Choice::Known(s)), None)).is_valid(), "{s}");
        }
    }

    #[test]
    fn unknown_status_does_not_trigger_message_rule() {
        let result = check_status(&status(Some(Choice::Unknown("9".into())), None));
        assert_eq!(
            result.errors(),
            [crate::domain::rules::FieldError::new("status", keys::INVALID_STATUS)]
        );
    }

    #[test]
    fn transition_checked_when_current_status_given() {
        let mut request = status(Some(Choice::Known(CourseStatus::Published)), None);
        request.current_status = Some(Choice::Known(CourseStatus::Draft));
        assert!(check_status(&request).has_error("status", keys::INVALID_STATUS_TRANSITION));

        request.current_status = Some(Choice::Known(CourseStatus::Review));
        assert!(check_status(&request).is_valid());
    }
}
