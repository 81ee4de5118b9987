//! Optional child objects with their own validator.

use std::sync::Arc;

use crate::domain::{
    keys::MessageKey,
    rules::{Activation, FieldError, Rule, Scope, Validator},
};

type ChildSelector<T, C> = Arc<dyn for<'a> Fn(&'a T) -> Option<&'a C> + Send + Sync>;

/// Validates an optional sub-object (e.g. a lesson's meeting).
///
/// When the activation holds, a missing child is reported with the
/// `required` key (if set and its own activation holds), and a present child
/// runs its validator's default rules with every path prefixed by this
/// rule's path.
pub struct Nested<T, C> {
    path: &'static str,
    select: ChildSelector<T, C>,
    validator: Arc<Validator<C>>,
    required: Option<(MessageKey, Option<Activation<T>>)>,
    when: Option<Activation<T>>,
}

impl<T: 'static, C: 'static> Nested<T, C> {
    pub fn of<F>(path: &'static str, select: F, validator: Validator<C>) -> Self
    where
        F: Fn(&T) -> Option<&C> + Send + Sync + 'static,
    {
        Self {
            path,
            select: Arc::new(select),
            validator: Arc::new(validator),
            required: None,
            when: None,
        }
    }

    /// Report `key` at this path when the child is absent.
    pub fn required(mut self, key: MessageKey) -> Self {
        self.required = Some((key, None));
        self
    }

    /// Like [`required`](Self::required), but only when `activation` holds.
    /// A present child is still validated either way.
    pub fn required_when(mut self, key: MessageKey, activation: Activation<T>) -> Self {
        self.required = Some((key, Some(activation)));
        self
    }

    pub fn when(mut self, activation: Activation<T>) -> Self {
        self.when = Some(activation);
        self
    }
}

impl<T: 'static, C: 'static> Rule<T> for Nested<T, C> {
    fn evaluate(&self, request: &T, scope: &Scope, errors: &mut Vec<FieldError>) {
        if self.when.as_ref().is_some_and(|w| !w.holds(request)) {
            return;
        }

        match (self.select)(request) {
            Some(child) => {
                self.validator
                    .evaluate_default(child, &scope.child(self.path), errors);
            }
            None => {
                let missing = self
                    .required
                    .as_ref()
                    .filter(|(_, when)| when.as_ref().is_none_or(|w| w.holds(request)));
                if let Some((key, _)) = missing {
                    errors.push(FieldError::new(scope.path(self.path), *key));
                }
            }
        }
    }

    fn path(&self) -> &'static str {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{keys, rules::Field};

    struct Meeting {
        start: Option<String>,
    }

    struct Lesson {
        live: bool,
        meeting: Option<Meeting>,
    }

    fn meeting_validator() -> Validator<Meeting> {
        Validator::new("meeting")
            .rule(Field::of("startDate", |m: &Meeting| &m.start).required(keys::START_DATE_REQUIRED))
    }

    fn rule() -> Nested<Lesson, Meeting> {
        Nested::of("meeting", |l: &Lesson| l.meeting.as_ref(), meeting_validator())
            .required(keys::MEETING_REQUIRED)
            .when(Activation::when(|l: &Lesson| l.live))
    }

    fn run(lesson: &Lesson) -> Vec<FieldError> {
        let mut errors = Vec::new();
        rule().evaluate(lesson, &Scope::root(), &mut errors);
        errors
    }

    #[test]
    fn missing_child_reports_required() {
        let errors = run(&Lesson {
            live: true,
            meeting: None,
        });
        assert_eq!(errors, vec![FieldError::new("meeting", keys::MEETING_REQUIRED)]);
    }

    #[test]
    fn child_errors_are_prefixed() {
        let errors = run(&Lesson {
            live: true,
            meeting: Some(Meeting { start: None }),
        });
        assert_eq!(
            errors,
            vec![FieldError::new("meeting.startDate", keys::START_DATE_REQUIRED)]
        );
    }

    #[test]
    fn conditional_requirement_still_validates_present_child() {
        let rule = Nested::of("meeting", |l: &Lesson| l.meeting.as_ref(), meeting_validator())
            .required_when(keys::MEETING_REQUIRED, Activation::when(|l: &Lesson| l.live));
        let mut errors = Vec::new();

        let absent = Lesson {
            live: false,
            meeting: None,
        };
        rule.evaluate(&absent, &Scope::root(), &mut errors);
        assert!(errors.is_empty());

        let present = Lesson {
            live: false,
            meeting: Some(Meeting { start: None }),
        };
        rule.evaluate(&present, &Scope::root(), &mut errors);
        assert_eq!(errors[0].field, "meeting.startDate");
    }

    #[test]
    fn inactive_rule_skips_child() {
        let errors = run(&Lesson {
            live: false,
            meeting: Some(Meeting { start: None }),
        });
        assert!(errors.is_empty());
    }
}
