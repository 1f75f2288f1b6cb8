//! Shared validation helpers for the habit HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{Error, HabitDraft, HabitId, HabitName};
use crate::inbound::http::error::PageError;

/// Validation error codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidId,
    EmptyName,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyName => "empty_name",
            Self::MalformedBody => "malformed_body",
        }
    }
}

pub(crate) fn invalid_id_error(value: &str) -> Error {
    Error::invalid_request("id must be a positive integer").with_details(json!({
        "field": "id",
        "value": value,
        "code": ValidationCode::InvalidId.as_str(),
    }))
}

pub(crate) fn empty_name_error() -> Error {
    Error::invalid_request("name must not be empty").with_details(json!({
        "field": "name",
        "code": ValidationCode::EmptyName.as_str(),
    }))
}

pub(crate) fn malformed_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("malformed request body: {reason}")).with_details(json!({
        "code": ValidationCode::MalformedBody.as_str(),
    }))
}

/// Parse a path segment into a [`HabitId`].
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, Error> {
    raw.parse::<HabitId>().map_err(|_| invalid_id_error(raw))
}

/// Validate submitted fields into a [`HabitDraft`].
pub(crate) fn parse_habit_draft(
    name: String,
    description: Option<String>,
) -> Result<HabitDraft, Error> {
    let name = HabitName::new(name).map_err(|_| empty_name_error())?;
    Ok(HabitDraft::new(name, description))
}

/// JSON extractor config answering undecodable bodies with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| actix_web::Error::from(malformed_body_error(err)))
}

/// Form extractor config answering undecodable bodies with plain text.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        actix_web::Error::from(PageError::from(malformed_body_error(err)))
    })
}
