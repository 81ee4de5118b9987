//! Trainee groups.

use serde::Deserialize;

use crate::domain::{
    keys,
    requests::Request,
    rules::{Field, Validator},
    value_objects::RequestKind,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    pub name: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Request for GroupRequest {
    const KIND: RequestKind = RequestKind::Group;

    fn validator() -> Validator<Self> {
        Validator::new("group").rule(
            Field::of("name", |g: &Self| &g.name)
                .required(keys::NAME_REQUIRED)
                .max_length(250, keys::NAME_LENGTH_250),
        )
    }
}
