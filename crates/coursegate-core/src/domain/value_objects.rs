//! Domain value objects: discriminant enums, `Choice`, `RequestKind`.
//!
//! # Design
//!
//! Discriminants are closed enums. On the wire they arrive either as the
//! integer code or as the camelCase name. A value outside the enum does not
//! fail deserialization: it is kept as [`Choice::Unknown`] so the validator
//! can report it against the field instead of rejecting the whole payload.
//!
//! # Adding New Variants
//!
//! 1. Add the variant with its code and wire name to the `discriminant!` block
//! 2. Add a message key if a rule needs to reference it
//! 3. Done

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::error::DomainError;

/// A closed enum that drives conditional rules.
pub trait Discriminant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Human-readable name of the enum, used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn code(self) -> i64;

    /// camelCase wire name.
    fn name(self) -> &'static str;

    fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Accepts a wire name or a decimal code.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::from_name(raw),
        }
    }
}

macro_rules! discriminant {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident = $code:literal => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl Discriminant for $name {
            const KIND: &'static str = $label;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| DomainError::UnknownDiscriminant {
                    kind: $label,
                    value: s.to_owned(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

// ── Lessons ──────────────────────────────────────────────────────────────────

discriminant! {
    /// What a lesson delivers; selects which lesson fields are mandatory.
    LessonType ("lesson type") {
        Video = 1 => "video",
        Document = 2 => "document",
        Exam = 3 => "exam",
        Assignment = 4 => "assignment",
        LiveClass = 5 => "liveClass",
        RecordedVideo = 6 => "recordedVideo",
        Feedback = 7 => "feedback",
        Physical = 8 => "physical",
        ExternalUrl = 9 => "externalUrl",
    }
}

// ── Questions ────────────────────────────────────────────────────────────────

discriminant! {
    /// Question-pool and assessment question types.
    ///
    /// Only the choice types can be stored; `Subjective` exists on the wire
    /// and is rejected by the question validators.
    QuestionType ("question type") {
        SingleChoice = 1 => "singleChoice",
        MultipleChoice = 2 => "multipleChoice",
        Subjective = 3 => "subjective",
    }
}

discriminant! {
    FeedbackType ("feedback type") {
        SingleChoice = 1 => "singleChoice",
        MultipleChoice = 2 => "multipleChoice",
        Subjective = 3 => "subjective",
        Rating = 4 => "rating",
    }
}

// ── Courses ──────────────────────────────────────────────────────────────────

discriminant! {
    /// Lifecycle of a course.
    ///
    /// `Draft → Review → Published → Completed`, with `Review → Rejected → Draft`
    /// as the side branch.
    CourseStatus ("course status") {
        Draft = 1 => "draft",
        Review = 2 => "review",
        Published = 3 => "published",
        Rejected = 4 => "rejected",
        Completed = 5 => "completed",
    }
}

impl CourseStatus {
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Review)
                | (Self::Review, Self::Published)
                | (Self::Review, Self::Rejected)
                | (Self::Published, Self::Completed)
                | (Self::Rejected, Self::Draft)
        )
    }
}

discriminant! {
    CourseLanguage ("course language") {
        English = 1 => "english",
        Nepali = 2 => "nepali",
    }
}

// ── Users & eligibility ──────────────────────────────────────────────────────

discriminant! {
    UserRole ("user role") {
        SuperAdmin = 1 => "superAdmin",
        Admin = 2 => "admin",
        Trainer = 3 => "trainer",
        Trainee = 4 => "trainee",
    }
}

discriminant! {
    /// What an assessment eligibility criterion is keyed on.
    EligibilityType ("eligibility type") {
        Role = 1 => "role",
        Skills = 2 => "skills",
        Assessment = 3 => "assessment",
        Group = 4 => "group",
        Training = 5 => "training",
    }
}

discriminant! {
    SkillRule ("skill rule") {
        IsGreaterThan = 1 => "isGreaterThan",
        IsLessThan = 2 => "isLessThan",
        IsEqual = 3 => "isEqual",
    }
}

// ── Choice ───────────────────────────────────────────────────────────────────

/// A discriminant as received: either a known variant or the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<E> {
    Known(E),
    Unknown(String),
}

impl<E: Discriminant> Choice<E> {
    /// The variant, if the value was recognised.
    pub fn known(&self) -> Option<E> {
        match self {
            Self::Known(e) => Some(*e),
            Self::Unknown(_) => None,
        }
    }

    pub fn is(&self, value: E) -> bool {
        self.known() == Some(value)
    }
}

impl<E> From<E> for Choice<E> {
    fn from(value: E) -> Self {
        Self::Known(value)
    }
}

impl<E: Discriminant> Serialize for Choice<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(e) => serializer.serialize_str(e.name()),
            Self::Unknown(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de, E: Discriminant> Deserialize<'de> for Choice<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChoiceVisitor(PhantomData))
    }
}

struct ChoiceVisitor<E>(PhantomData<E>);

impl<E: Discriminant> Visitor<'_> for ChoiceVisitor<E> {
    type Value = Choice<E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} code or name", E::KIND)
    }

    fn visit_i64<DeErr: de::Error>(self, v: i64) -> Result<Self::Value, DeErr> {
        Ok(E::from_code(v).map_or_else(|| Choice::Unknown(v.to_string()), Choice::Known))
    }

    fn visit_u64<DeErr: de::Error>(self, v: u64) -> Result<Self::Value, DeErr> {
        match i64::try_from(v) {
            Ok(code) => self.visit_i64(code),
            Err(_) => Ok(Choice::Unknown(v.to_string())),
        }
    }

    fn visit_str<DeErr: de::Error>(self, v: &str) -> Result<Self::Value, DeErr> {
        Ok(E::parse(v).map_or_else(|| Choice::Unknown(v.to_owned()), Choice::Known))
    }
}

// ── RequestKind ──────────────────────────────────────────────────────────────

/// Every request type the registry can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestKind {
    Course,
    CourseStatus,
    Lesson,
    QuestionSet,
    Meeting,
    Question,
    QuestionPool,
    Assessment,
    AssessmentQuestion,
    Feedback,
    User,
    ChangePassword,
    PhysicalLessonReview,
    Group,
    ZoomLicense,
    SmtpSetting,
    Certificate,
}

impl RequestKind {
    pub const ALL: &'static [Self] = &[
        Self::Course,
        Self::CourseStatus,
        Self::Lesson,
        Self::QuestionSet,
        Self::Meeting,
        Self::Question,
        Self::QuestionPool,
        Self::Assessment,
        Self::AssessmentQuestion,
        Self::Feedback,
        Self::User,
        Self::ChangePassword,
        Self::PhysicalLessonReview,
        Self::Group,
        Self::ZoomLicense,
        Self::SmtpSetting,
        Self::Certificate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::CourseStatus => "course-status",
            Self::Lesson => "lesson",
            Self::QuestionSet => "question-set",
            Self::Meeting => "meeting",
            Self::Question => "question",
            Self::QuestionPool => "question-pool",
            Self::Assessment => "assessment",
            Self::AssessmentQuestion => "assessment-question",
            Self::Feedback => "feedback",
            Self::User => "user",
            Self::ChangePassword => "change-password",
            Self::PhysicalLessonReview => "physical-lesson-review",
            Self::Group => "group",
            Self::ZoomLicense => "zoom-license",
            Self::SmtpSetting => "smtp-setting",
            Self::Certificate => "certificate",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownRequestKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        kind: Choice<LessonType>,
    }

    fn decode(json: &str) -> Choice<LessonType> {
        serde_json::from_str::<Probe>(json).unwrap().kind
    }

    #[test]
    fn choice_accepts_code_or_name() {
        assert_eq!(decode(r#"{"kind": 3}"#), Choice::Known(LessonType::Exam));
        assert_eq!(decode(r#"{"kind": "exam"}"#), Choice::Known(LessonType::Exam));
        assert_eq!(decode(r#"{"kind": "LiveClass"}"#), Choice::Known(LessonType::LiveClass));
        assert_eq!(decode(r#"{"kind": "5"}"#), Choice::Known(LessonType::LiveClass));
    }

    #[test]
    fn choice_keeps_unknown_values() {
        assert_eq!(decode(r#"{"kind": 42}"#), Choice::Unknown("42".into()));
        assert_eq!(decode(r#"{"kind": "hologram"}"#), Choice::Unknown("hologram".into()));
        assert_eq!(decode(r#"{"kind": 42}"#).known(), None);
    }

    #[test]
    fn choice_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Probe>(r#"{"kind": [1]}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"kind": true}"#).is_err());
    }

    #[test]
    fn codes_and_names_round_trip() {
        for t in LessonType::ALL {
            assert_eq!(LessonType::from_code(t.code()), Some(*t));
            assert_eq!(t.name().parse::<LessonType>().unwrap(), *t);
        }
        assert!("nope".parse::<CourseStatus>().is_err());
    }

    #[test]
    fn course_status_transitions() {
        use CourseStatus::*;
        assert!(Draft.can_transition_to(Review));
        assert!(Review.can_transition_to(Published));
        assert!(Review.can_transition_to(Rejected));
        assert!(Published.can_transition_to(Completed));
        assert!(Rejected.can_transition_to(Draft));

        assert!(!Draft.can_transition_to(Published));
        assert!(!Completed.can_transition_to(Draft));
        assert!(!Published.can_transition_to(Review));
        assert!(!Draft.can_transition_to(Draft));
    }

    #[test]
    fn request_kind_parses_leniently() {
        assert_eq!("course-status".parse::<RequestKind>().unwrap(), RequestKind::CourseStatus);
        assert_eq!("SMTP_SETTING".parse::<RequestKind>().unwrap(), RequestKind::SmtpSetting);
        assert!(matches!(
            "lessons".parse::<RequestKind>(),
            Err(DomainError::UnknownRequestKind(_))
        ));
    }

    #[test]
    fn request_kind_list_is_complete() {
        for kind in RequestKind::ALL {
            assert_eq!(kind.as_str().parse::<RequestKind>().unwrap(), *kind);
        }
        assert_eq!(RequestKind::ALL.len(), 17);
    }
}
