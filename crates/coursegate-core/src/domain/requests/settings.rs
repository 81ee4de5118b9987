//! Integration settings: Zoom licenses and the outgoing mail server.

use serde::{Deserialize, Deserializer};

use crate::domain::{
    keys,
    requests::Request,
    rules::{Field, FieldValue, Validator},
    value_objects::RequestKind,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomLicenseRequest {
    pub license_email: Option<String>,
    pub host_id: Option<String>,
    /// Maximum participants.
    pub capacity: Option<i32>,
    #[serde(default)]
    pub is_active: bool,
}

impl Request for ZoomLicenseRequest {
    const KIND: RequestKind = RequestKind::ZoomLicense;

    fn validator() -> Validator<Self> {
        Validator::new("zoom-license")
            .rule(
                Field::of("licenseEmail", |z: &Self| &z.license_email)
                    .required(keys::LICENSE_EMAIL_REQUIRED)
                    .email(keys::INVALID_EMAIL),
            )
            .rule(Field::of("hostId", |z: &Self| &z.host_id).required(keys::HOST_ID_REQUIRED))
            .rule(
                Field::of("capacity", |z: &Self| &z.capacity)
                    .required(keys::CAPACITY_GREATER_THAN_ZERO)
                    .greater_than(0.0, keys::CAPACITY_GREATER_THAN_ZERO),
            )
    }
}

/// Outgoing mail server.
///
/// `mailPort` is kept as text, as the settings screen submits it, and is
/// accepted as a JSON number too. It is checked as a port number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpSettingRequest {
    pub mail_server: Option<String>,
    #[serde(default, deserialize_with = "port_text")]
    pub mail_port: Option<String>,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub reply_to: Option<String>,
    #[serde(default)]
    pub use_ssl: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortInput {
    Text(String),
    Number(i64),
}

fn port_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<PortInput>::deserialize(deserializer)?.map(|port| match port {
        PortInput::Text(text) => text,
        PortInput::Number(n) => n.to_string(),
    }))
}

fn is_port(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => text.trim().parse::<u16>().is_ok_and(|port| port > 0),
        _ => false,
    }
}

impl Request for SmtpSettingRequest {
    const KIND: RequestKind = RequestKind::SmtpSetting;

    fn validator() -> Validator<Self> {
        Validator::new("smtp-setting")
            .rule(Field::of("mailServer", |s: &Self| &s.mail_server).required(keys::MAIL_SERVER_REQUIRED))
            .rule(
                Field::of("mailPort", |s: &Self| &s.mail_port)
                    .required(keys::MAIL_PORT_REQUIRED)
                    .must(|_, value| is_port(value), keys::INVALID_MAIL_PORT),
            )
            .rule(Field::of("senderName", |s: &Self| &s.sender_name).required(keys::SENDER_NAME_REQUIRED))
            .rule(
                Field::of("senderEmail", |s: &Self| &s.sender_email)
                    .required(keys::SENDER_EMAIL_REQUIRED)
                    .email(keys::INVALID_EMAIL),
            )
            .rule(Field::of("userName", |s: &Self| &s.user_name).required(keys::USER_NAME_REQUIRED))
            .rule(Field::of("password", |s: &Self| &s.password).required(keys::PASSWORD_REQUIRED))
            .rule(Field::of("replyTo", |s: &Self| &s.reply_to).email(keys::INVALID_EMAIL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::FieldError;

    fn smtp(port: &str) -> SmtpSettingRequest {
        SmtpSettingRequest {
            mail_server: Some("smtp.example.com".into()),
            mail_port: Some(port.into()),
            sender_name: Some("Coursegate".into()),
            sender_email: Some("noreply@example.com".into()),
            user_name: Some("mailer".into()),
            password: Some("secret".into()),
            ..Default::default()
        }
    }

    #[test]
    fn port_must_be_in_range() {
        let validator = SmtpSettingRequest::validator();
        for (port, ok) in [("587", true), (" 25 ", true), ("65535", true), ("0", false), ("65536", false), ("smtp", false)] {
            let result = validator.validate(&smtp(port), None).unwrap();
            assert_eq!(result.is_valid(), ok, "port {port:?}");
            if !ok {
                assert_eq!(result.errors(), [FieldError::new("mailPort", keys::INVALID_MAIL_PORT)]);
            }
        }
    }

    #[test]
    fn port_accepts_json_number_or_string() {
        let from_number: SmtpSettingRequest = serde_json::from_str(r#"{"mailPort": 465}"#).unwrap();
        assert_eq!(from_number.mail_port.as_deref(), Some("465"));

        let from_text: SmtpSettingRequest = serde_json::from_str(r#"{"mailPort": "465"}"#).unwrap();
        assert_eq!(from_text.mail_port.as_deref(), Some("465"));

        let absent: SmtpSettingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.mail_port, None);
    }

    #[test]
    fn reply_to_is_optional_but_checked() {
        let validator = SmtpSettingRequest::validator();
        let request = SmtpSettingRequest {
            reply_to: Some("helpdesk".into()),
            ..smtp("587")
        };
        assert!(validator
            .validate(&request, None)
            .unwrap()
            .has_error("replyTo", keys::INVALID_EMAIL));
    }

    #[test]
    fn zoom_license_rules() {
        let validator = ZoomLicenseRequest::validator();
        let request = ZoomLicenseRequest {
            license_email: Some("zoom@example.com".into()),
            host_id: Some("h-123".into()),
            capacity: Some(0),
            is_active: true,
        };
        assert_eq!(
            validator.validate(&request, None).unwrap().errors(),
            [FieldError::new("capacity", keys::CAPACITY_GREATER_THAN_ZERO)]
        );

        let request = ZoomLicenseRequest {
            capacity: Some(100),
            ..request
        };
        assert!(validator.validate(&request, None).unwrap().is_valid());
    }
}
