use crate::{
    Error, Result,
    constants::{FIELD_EMAIL, FIELD_NAME, FIELD_PHONE_NUMBER, SCHEMA_NAME},
    util::{self, trim_optional},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// The unique identifier of a contact. It's assigned once by the store, when the contact is
/// inserted, and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn generate() -> Self {
        Self(util::get_uuid_v4())
    }

    /// Parses an identifier coming from the outside, e.g. a path segment
    pub fn parse(id: &str) -> Result<Self> {
        Uuid::try_parse(id.trim())
            .map(Self)
            .map_err(|_| Error::InvalidId(id.to_owned()))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ContactId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An incoming write request. Every field is optional, since a create request can be incomplete
/// and an update request usually only carries the fields to change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// `None` if the address wasn't supplied, `Some(None)` if it was explicitly cleared
    pub address: Option<Option<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A contact document that satisfies the storage schema, but has no id yet.
///
/// The only way to get one is through [`NewContact::from_payload`] or [`Contact::merge`], which
/// apply the schema rules:
/// * `name`, `email` and `phoneNumber` are trimmed and required to be non-empty
/// * `email` is lowercased
/// * `address` is trimmed, if present
/// * `createdAt` defaults to the given point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewContact {
    pub fn from_payload(payload: ContactPayload, now: DateTime<Utc>) -> Result<Self> {
        let name = trim_optional(payload.name).unwrap_or_default();
        let email = trim_optional(payload.email)
            .unwrap_or_default()
            .to_lowercase();
        let phone_number = trim_optional(payload.phone_number).unwrap_or_default();

        let missing: Vec<&str> = [
            (FIELD_NAME, &name),
            (FIELD_EMAIL, &email),
            (FIELD_PHONE_NUMBER, &phone_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(Error::Schema(schema_violation_message(&missing)));
        }

        Ok(Self {
            name,
            email,
            phone_number,
            address: trim_optional(payload.address.flatten()),
            created_at: payload.created_at.unwrap_or(now),
        })
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

impl Contact {
    /// Applies the supplied fields of the payload on top of this contact and runs the schema
    /// against the resulting document.
    pub fn merge(&self, payload: ContactPayload) -> Result<NewContact> {
        let merged = ContactPayload {
            name: payload.name.or_else(|| Some(self.name.clone())),
            email: payload.email.or_else(|| Some(self.email.clone())),
            phone_number: payload
                .phone_number
                .or_else(|| Some(self.phone_number.clone())),
            address: Some(payload.address.unwrap_or_else(|| self.address.clone())),
            created_at: payload.created_at.or(Some(self.created_at)),
        };
        NewContact::from_payload(merged, self.created_at)
    }
}

fn schema_violation_message(missing: &[&str]) -> String {
    let violations: Vec<String> = missing
        .iter()
        .map(|field| format!("{field}: Path `{field}` is required."))
        .collect();
    format!("{SCHEMA_NAME} validation failed: {}", violations.join(", "))
}
