//! Lessons and their type-specific sub-objects.
//!
//! The lesson type decides which fields are mandatory: exams carry a
//! question set instead of a name, live classes carry a meeting, video and
//! document lessons carry their media URL.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Activation, Field, Nested, Validator},
    value_objects::{Choice, LessonType, RequestKind},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRequest {
    #[serde(rename = "type")]
    pub kind: Option<Choice<LessonType>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub document_url: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub external_url: Option<String>,
    #[serde(default)]
    pub is_mandatory: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub question_set: Option<QuestionSetRequest>,
    pub meeting: Option<MeetingRequest>,
}

/// Exam settings attached to an exam lesson.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub question_marking: Option<f64>,
    pub negative_marking: Option<f64>,
    pub passing_weightage: Option<f64>,
    pub allowed_retake: Option<i32>,
    /// Minutes.
    pub duration: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Zoom meeting attached to a live-class lesson.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub start_date: Option<DateTime<Utc>>,
    /// Minutes.
    pub duration: Option<i32>,
    pub zoom_license_id: Option<Uuid>,
}

fn lesson_type(r: &LessonRequest) -> Option<LessonType> {
    r.kind.as_ref().and_then(Choice::known)
}

const VIDEO_LESSONS: &[LessonType] = &[LessonType::Video, LessonType::RecordedVideo];
const SCHEDULED_LESSONS: &[LessonType] = &[LessonType::Assignment, LessonType::Exam, LessonType::Physical];

impl Request for LessonRequest {
    const KIND: RequestKind = RequestKind::Lesson;

    fn validator() -> Validator<Self> {
        Validator::new("lesson")
            .rule(
                Field::of("type", |l: &Self| &l.kind)
                    .required(keys::LESSON_TYPE_REQUIRED)
                    .in_enum(keys::INVALID_LESSON_TYPE),
            )
            .rule(
                Field::of("name", |l: &Self| &l.name)
                    .required_when(
                        keys::NAME_REQUIRED,
                        Activation::discriminant(lesson_type, |t| t != LessonType::Exam),
                    )
                    .max_length(250, keys::NAME_LENGTH_250),
            )
            .rule(
                Field::of("documentUrl", |l: &Self| &l.document_url)
                    .required(keys::DOCUMENT_REQUIRED)
                    .when(Activation::is(lesson_type, LessonType::Document)),
            )
            .rule(
                Field::of("videoUrl", |l: &Self| &l.video_url)
                    .required(keys::VIDEO_REQUIRED)
                    .when(Activation::is_any(lesson_type, VIDEO_LESSONS)),
            )
            .rule(
                Nested::of(
                    "questionSet",
                    |l: &Self| l.question_set.as_ref(),
                    QuestionSetRequest::validator(),
                )
                .required_when(
                    keys::QUESTION_SET_REQUIRED,
                    Activation::is(lesson_type, LessonType::Exam),
                ),
            )
            .rule(
                Nested::of("meeting", |l: &Self| l.meeting.as_ref(), MeetingRequest::validator())
                    .required(keys::MEETING_REQUIRED)
                    .when(Activation::is(lesson_type, LessonType::LiveClass)),
            )
            .rule(
                Field::of("endDate", |l: &Self| &l.end_date).after_when(
                    |l: &Self| &l.start_date,
                    keys::END_DATE_AFTER_START_DATE,
                    Activation::is_any(lesson_type, SCHEDULED_LESSONS),
                ),
            )
    }
}

impl Request for QuestionSetRequest {
    const KIND: RequestKind = RequestKind::QuestionSet;

    fn validator() -> Validator<Self> {
        let has_start = Activation::present(|q: &Self| q.start_time.as_ref());
        let has_end = Activation::present(|q: &Self| q.end_time.as_ref());

        Validator::new("question-set")
            .rule(Field::of("name", |q: &Self| &q.name).max_length(250, keys::NAME_LENGTH_250))
            .rule(
                Field::of("questionMarking", |q: &Self| &q.question_marking)
                    .greater_than(0.0, keys::MARKING_GREATER_THAN_ZERO),
            )
            .rule(
                Field::of("passingWeightage", |q: &Self| &q.passing_weightage)
                    .between(0.0, 100.0, keys::PASSING_WEIGHTAGE_RANGE),
            )
            .rule(
                Field::of("allowedRetake", |q: &Self| &q.allowed_retake)
                    .at_least(0.0, keys::ALLOWED_RETAKE_NOT_NEGATIVE),
            )
            .rule(
                Field::of("duration", |q: &Self| &q.duration)
                    .greater_than(0.0, keys::DURATION_GREATER_THAN_ZERO),
            )
            .rule(
                Field::of("startTime", |q: &Self| &q.start_time)
                    .required_when(keys::START_TIME_EMPTY_ERROR, has_end),
            )
            .rule(
                Field::of("endTime", |q: &Self| &q.end_time)
                    .required_when(keys::END_TIME_EMPTY_ERROR, has_start)
                    .after(|q: &Self| &q.start_time, keys::END_TIME_AFTER_START_TIME),
            )
    }
}

impl Request for MeetingRequest {
    const KIND: RequestKind = RequestKind::Meeting;

    fn validator() -> Validator<Self> {
        Validator::new("meeting")
            .rule(Field::of("startDate", |m: &Self| &m.start_date).required(keys::START_DATE_REQUIRED))
            .rule(
                Field::of("duration", |m: &Self| &m.duration)
                    .greater_than(0.0, keys::DURATION_GREATER_THAN_ZERO),
            )
            .rule(
                Field::of("zoomLicenseId", |m: &Self| &m.zoom_license_id)
                    .required(keys::ZOOM_LICENSE_REQUIRED),
            )
    }
}
