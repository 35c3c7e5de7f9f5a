use super::Result;
use crate::data::{ContactPayloadWeb, FromWeb};
use crate::error::Error;
use contacts_api::data::{
    contact::ContactPayload,
    validation::{ValidationMode, validate_contact},
};
use contacts_api::service;
use rocket::serde::json::{self, Json};

/// The body of a contact write request, as handed over by the JSON data guard
pub type ContactBody<'r> = std::result::Result<Json<ContactPayloadWeb>, json::Error<'r>>;

/// Turns the request body into a payload and runs the contact rules on it. An empty body is an
/// empty payload, anything that isn't a contact object is rejected as malformed.
pub fn validated_payload(body: ContactBody<'_>, mode: ValidationMode) -> Result<ContactPayload> {
    let payload = match body {
        Ok(Json(payload)) => ContactPayload::from_web(payload),
        Err(json::Error::Parse(raw, _)) if raw.trim().is_empty() => ContactPayload::default(),
        Err(e) => return Err(Error::MalformedBody(e.to_string())),
    };
    validate_contact(&payload, mode).map_err(service::Error::from)?;
    Ok(payload)
}
