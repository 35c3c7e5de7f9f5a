use crate::constants::{MSG_ROUTE_NOT_FOUND, MSG_VALIDATION_FAILED, MSG_WELCOME};
use chrono::{DateTime, Utc};
use contacts_api::data::{
    contact::{Contact, ContactPayload},
    validation::{FieldError, ValidationErrors},
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

/// A contact as returned by the API
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactWeb {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

/// Body of create and update requests, fields that are not set are left untouched on update
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayloadWeb {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// `null` clears the stored address, leaving the field out keeps it
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Marks a field that is present in the body as `Some`, even if its value is `null`
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl FromWeb<ContactPayloadWeb> for ContactPayload {
    fn from_web(value: ContactPayloadWeb) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorWeb {
    pub field: String,
    pub message: String,
}

impl IntoWeb<FieldErrorWeb> for &FieldError {
    fn into_web(self) -> FieldErrorWeb {
        FieldErrorWeb {
            field: self.field.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<FieldErrorWeb>,
}

impl IntoWeb<ValidationErrorResponse> for ValidationErrors {
    fn into_web(self) -> ValidationErrorResponse {
        ValidationErrorResponse {
            message: MSG_VALIDATION_FAILED.to_owned(),
            errors: self.iter().map(|e| e.into_web()).collect(),
        }
    }
}

/// Returned for failures that aren't tied to a specific contact
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundResponse {
    pub success: bool,
    pub message: String,
    pub suggested_endpoint: String,
}

impl RouteNotFoundResponse {
    pub fn new(suggested_endpoint: String) -> Self {
        Self {
            success: false,
            message: MSG_ROUTE_NOT_FOUND.to_owned(),
            suggested_endpoint,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointsWeb {
    pub get_all_contacts: String,
    pub create_contact: String,
    pub get_contact: String,
    pub update_contact: String,
    pub delete_contact: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: EndpointsWeb,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: MSG_WELCOME.to_owned(),
            endpoints: EndpointsWeb {
                get_all_contacts: "GET /contacts".to_owned(),
                create_contact: "POST /contacts".to_owned(),
                get_contact: "GET /contacts/:id".to_owned(),
                update_contact: "PUT /contacts/:id".to_owned(),
                delete_contact: "DELETE /contacts/:id".to_owned(),
            },
        }
    }
}
