//! User accounts and passwords.

use serde::Deserialize;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Field, RuleSet, Validator},
    value_objects::{Choice, RequestKind, UserRole},
};

/// Creates (`add`) or edits (`update`) a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Set on update.
    pub identity: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub role: Option<Choice<UserRole>>,
    pub profession: Option<String>,
    pub address: Option<String>,
    /// Rich text.
    pub bio: Option<String>,
}

impl Request for UserRequest {
    const KIND: RequestKind = RequestKind::User;

    fn validator() -> Validator<Self> {
        Validator::new("user")
            .rule(
                Field::of("firstName", |u: &Self| &u.first_name)
                    .required(keys::FIRST_NAME_REQUIRED)
                    .max_length(100, keys::FIRST_NAME_LENGTH_100),
            )
            .rule(
                Field::of("lastName", |u: &Self| &u.last_name)
                    .required(keys::LAST_NAME_REQUIRED)
                    .max_length(100, keys::LAST_NAME_LENGTH_100),
            )
            .rule(Field::of("email", |u: &Self| &u.email).email(keys::INVALID_EMAIL))
            .rule(
                Field::of("mobileNumber", |u: &Self| &u.mobile_number)
                    .max_length(50, keys::MOBILE_LENGTH_50),
            )
            .rule(Field::of("role", |u: &Self| &u.role).in_enum(keys::INVALID_ROLE))
            .rule(Field::of("bio", |u: &Self| &u.bio).max_visible_length(5000, keys::BIO_LENGTH_5000))
            .rule_set(
                RuleSet::named("add")
                    .rule(Field::of("email", |u: &Self| &u.email).required(keys::EMAIL_REQUIRED))
                    .rule(Field::of("role", |u: &Self| &u.role).required(keys::ROLE_REQUIRED)),
            )
            .rule_set(
                RuleSet::named("update")
                    .rule(Field::of("identity", |u: &Self| &u.identity).required(keys::IDENTITY_REQUIRED)),
            )
    }
}

/// Sets a new password.
///
/// The default rules cover an administrator reset. The `self-service` rule
/// set adds the checks against the current password.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

impl Request for ChangePasswordRequest {
    const KIND: RequestKind = RequestKind::ChangePassword;

    fn validator() -> Validator<Self> {
        Validator::new("change-password")
            .rule(
                Field::of("newPassword", |p: &Self| &p.new_password)
                    .required(keys::NEW_PASSWORD_REQUIRED)
                    .password(keys::PASSWORD_COMPLEXITY),
            )
            .rule(
                Field::of("confirmPassword", |p: &Self| &p.confirm_password)
                    .required(keys::CONFIRM_PASSWORD_REQUIRED)
                    .equal_to(|p: &Self| &p.new_password, keys::CONFIRM_PASSWORD_MISMATCH),
            )
            .rule_set(
                RuleSet::named("self-service")
                    .rule(
                        Field::of("currentPassword", |p: &Self| &p.current_password)
                            .required(keys::CURRENT_PASSWORD_REQUIRED),
                    )
                    .rule(
                        Field::of("newPassword", |p: &Self| &p.new_password).not_equal_to(
                            |p: &Self| &p.current_password,
                            keys::NEW_PASSWORD_SAME_AS_CURRENT,
                        ),
                    ),
            )
    }
}
