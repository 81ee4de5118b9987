//! External certificates a user records on their profile.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Field, Validator},
    value_objects::RequestKind,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub institute: Option<String>,
    pub duration: Option<String>,
}

impl Request for CertificateRequest {
    const KIND: RequestKind = RequestKind::Certificate;

    fn validator() -> Validator<Self> {
        Validator::new("certificate")
            .rule(
                Field::of("name", |c: &Self| &c.name)
                    .required(keys::NAME_REQUIRED)
                    .max_length(250, keys::NAME_LENGTH_250),
            )
            .rule(Field::of("startDate", |c: &Self| &c.start_date).required(keys::START_DATE_REQUIRED))
            .rule(
                Field::of("endDate", |c: &Self| &c.end_date)
                    .after(|c: &Self| &c.start_date, keys::END_DATE_AFTER_START_DATE),
            )
            .rule(Field::of("institute", |c: &Self| &c.institute).required(keys::INSTITUTE_REQUIRED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{requests::fixtures::day, rules::FieldError};

    fn certificate() -> CertificateRequest {
        CertificateRequest {
            name: Some("Certified Rust Developer".into()),
            start_date: Some(day(0)),
            institute: Some("Rust Foundation".into()),
            ..Default::default()
        }
    }

    #[test]
    fn open_ended_certificate_passes() {
        let result = CertificateRequest::validator()
            .validate(&certificate(), None)
            .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn end_date_must_follow_start() {
        let request = CertificateRequest {
            end_date: Some(day(0)),
            ..certificate()
        };
        assert_eq!(
            CertificateRequest::validator()
                .validate(&request, None)
                .unwrap()
                .errors(),
            [FieldError::new("endDate", keys::END_DATE_AFTER_START_DATE)]
        );
    }
}
