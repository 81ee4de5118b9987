//! Request kind → validator dispatch.
//!
//! The registry is built once at startup and is immutable afterwards.
//! `build()` refuses to produce a registry with a missing kind, a duplicate
//! registration or a malformed validator, so those defects surface before
//! any request is served.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{
        Request, RequestKind, ValidationResult, Validator,
        requests::{
            AssessmentQuestionRequest, AssessmentRequest, CertificateRequest, ChangePasswordRequest,
            CourseRequest, CourseStatusRequest, FeedbackRequest, GroupRequest, LessonRequest,
            MeetingRequest, PhysicalLessonReviewRequest, QuestionPoolRequest, QuestionRequest,
            QuestionSetRequest, SmtpSettingRequest, UserRequest, ZoomLicenseRequest,
        },
    },
    error::CoreResult,
};

/// Type-erased validator for one request kind.
pub trait RequestValidator: Send + Sync {
    fn kind(&self) -> RequestKind;

    fn rule_sets(&self) -> Vec<&'static str>;

    fn check_definition(&self) -> CoreResult<()>;

    /// Decode `payload` as this kind's request and validate it.
    fn validate_value(&self, payload: &Value, rule_set: Option<&str>) -> CoreResult<ValidationResult>;

    fn as_any(&self) -> &dyn Any;
}

struct Typed<R: Request> {
    validator: Validator<R>,
}

impl<R: Request> RequestValidator for Typed<R> {
    fn kind(&self) -> RequestKind {
        R::KIND
    }

    fn rule_sets(&self) -> Vec<&'static str> {
        self.validator.rule_set_names()
    }

    fn check_definition(&self) -> CoreResult<()> {
        self.validator
            .check_definition()
            .map_err(|source| ApplicationError::MalformedDefinition { kind: R::KIND, source }.into())
    }

    fn validate_value(&self, payload: &Value, rule_set: Option<&str>) -> CoreResult<ValidationResult> {
        let request = decode::<R>(payload)?;
        Ok(self.validator.validate(&request, rule_set)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn decode<R: Request>(payload: &Value) -> Result<R, ApplicationError> {
    match payload {
        Value::Null => Err(ApplicationError::NullPayload { kind: R::KIND }),
        Value::Object(_) => R::deserialize(payload).map_err(|e| ApplicationError::MalformedPayload {
            kind: R::KIND,
            reason: e.to_string(),
        }),
        _ => Err(ApplicationError::MalformedPayload {
            kind: R::KIND,
            reason: "expected a JSON object".into(),
        }),
    }
}

/// One row of [`ValidatorRegistry::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: RequestKind,
    pub rule_sets: Vec<&'static str>,
}

/// Immutable map from request kind to validator.
pub struct ValidatorRegistry {
    validators: HashMap<RequestKind, Arc<dyn RequestValidator>>,
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("kinds", &self.validators.len())
            .finish()
    }
}

impl ValidatorRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with every built-in request type.
    pub fn standard() -> CoreResult<Self> {
        Self::builder()
            .register::<CourseRequest>()
            .register::<CourseStatusRequest>()
            .register::<LessonRequest>()
            .register::<QuestionSetRequest>()
            .register::<MeetingRequest>()
            .register::<QuestionRequest>()
            .register::<QuestionPoolRequest>()
            .register::<AssessmentRequest>()
            .register::<AssessmentQuestionRequest>()
            .register::<FeedbackRequest>()
            .register::<UserRequest>()
            .register::<ChangePasswordRequest>()
            .register::<PhysicalLessonReviewRequest>()
            .register::<GroupRequest>()
            .register::<ZoomLicenseRequest>()
            .register::<SmtpSettingRequest>()
            .register::<CertificateRequest>()
            .build()
    }

    /// Validate a JSON payload as a `kind` request.
    ///
    /// A null payload, or one whose shape doesn't match the request type, is
    /// an error. Rule violations are not: they come back as
    /// [`ValidationResult::Invalid`].
    #[instrument(skip(self, payload), fields(kind = %kind))]
    pub fn validate_json(
        &self,
        kind: RequestKind,
        payload: &Value,
        rule_set: Option<&str>,
    ) -> CoreResult<ValidationResult> {
        let result = self.get(kind)?.validate_value(payload, rule_set)?;
        debug!(errors = result.errors().len(), "validation finished");
        Ok(result)
    }

    /// Validate an already-typed request.
    pub fn validate<R: Request>(&self, request: &R, rule_set: Option<&str>) -> CoreResult<ValidationResult> {
        let typed = self
            .get(R::KIND)?
            .as_any()
            .downcast_ref::<Typed<R>>()
            .ok_or(ApplicationError::TypeMismatch { kind: R::KIND })?;
        Ok(typed.validator.validate(request, rule_set)?)
    }

    /// Every kind with its named rule sets, in `RequestKind::ALL` order.
    pub fn describe(&self) -> Vec<KindInfo> {
        RequestKind::ALL
            .iter()
            .filter_map(|kind| self.validators.get(kind))
            .map(|v| KindInfo {
                kind: v.kind(),
                rule_sets: v.rule_sets(),
            })
            .collect()
    }

    fn get(&self, kind: RequestKind) -> Result<&Arc<dyn RequestValidator>, ApplicationError> {
        self.validators
            .get(&kind)
            .ok_or(ApplicationError::UnregisteredKind { kind })
    }
}

/// Collects validators and checks them once in [`build`](Self::build).
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<Arc<dyn RequestValidator>>,
}

impl RegistryBuilder {
    /// Register `R` with its standard validator.
    pub fn register<R: Request>(self) -> Self {
        self.register_validator(R::validator())
    }

    /// Register `R` with a custom validator.
    pub fn register_validator<R: Request>(mut self, validator: Validator<R>) -> Self {
        self.entries.push(Arc::new(Typed { validator }));
        self
    }

    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn build(self) -> CoreResult<ValidatorRegistry> {
        let mut validators = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            let kind = entry.kind();
            entry.check_definition()?;
            if validators.insert(kind, entry).is_some() {
                return Err(ApplicationError::DuplicateRegistration { kind }.into());
            }
        }

        if let Some(&kind) = RequestKind::ALL.iter().find(|k| !validators.contains_key(*k)) {
            return Err(ApplicationError::UnregisteredKind { kind }.into());
        }

        debug!(kinds = validators.len(), "validator registry built");
        Ok(ValidatorRegistry { validators })
    }
}
