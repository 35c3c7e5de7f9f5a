use super::Result;
use super::middleware::{ContactBody, validated_payload};
use crate::constants::MSG_CONTACT_DELETED;
use crate::data::{
    ContactPayloadWeb, ContactWeb, IntoWeb, MessageResponse, ValidationErrorResponse,
};
use contacts_api::data::validation::ValidationMode;
use contacts_api::service::ServiceContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

#[utoipa::path(
    get,
    tag = "Contacts",
    path = "/contacts",
    description = "Lists all contacts, or the ones whose name or email contains the search term",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive search term")
    ),
    responses(
        (status = 200, description = "The matching contacts", body = Vec<ContactWeb>),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
#[get("/?<search>")]
pub async fn list_contacts(
    state: &State<ServiceContext>,
    search: Option<String>,
) -> Result<Json<Vec<ContactWeb>>> {
    let contacts = state.contact_service.search_contacts(search).await?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

#[utoipa::path(
    post,
    tag = "Contacts",
    path = "/contacts",
    description = "Creates a new contact",
    request_body = ContactPayloadWeb,
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "Invalid fields", body = ValidationErrorResponse)
    )
)]
#[post("/", data = "<body>")]
pub async fn create_contact(
    state: &State<ServiceContext>,
    body: ContactBody<'_>,
) -> Result<(Status, Json<ContactWeb>)> {
    let payload = validated_payload(body, ValidationMode::Create)?;
    let contact = state.contact_service.create_contact(payload).await?;
    Ok((Status::Created, Json(contact.into_web())))
}

#[utoipa::path(
    get,
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Returns the contact with the given id",
    params(
        ("id" = String, Path, description = "The id of the contact")
    ),
    responses(
        (status = 200, description = "The contact", body = ContactWeb),
        (status = 400, description = "Invalid contact id", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse)
    )
)]
#[get("/<id>")]
pub async fn get_contact(state: &State<ServiceContext>, id: &str) -> Result<Json<ContactWeb>> {
    let contact = state.contact_service.get_contact(id).await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    put,
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Updates the supplied fields of the contact with the given id",
    params(
        ("id" = String, Path, description = "The id of the contact")
    ),
    request_body = ContactPayloadWeb,
    responses(
        (status = 200, description = "The updated contact", body = ContactWeb),
        (status = 400, description = "Invalid contact id or fields", body = ValidationErrorResponse),
        (status = 404, description = "Contact not found", body = MessageResponse)
    )
)]
#[put("/<id>", data = "<body>")]
pub async fn update_contact(
    state: &State<ServiceContext>,
    id: &str,
    body: ContactBody<'_>,
) -> Result<Json<ContactWeb>> {
    let payload = validated_payload(body, ValidationMode::Update)?;
    let contact = state.contact_service.update_contact(id, payload).await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    delete,
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Deletes the contact with the given id",
    params(
        ("id" = String, Path, description = "The id of the contact")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 400, description = "Invalid contact id", body = MessageResponse),
        (status = 404, description = "Contact not found", body = MessageResponse)
    )
)]
#[delete("/<id>")]
pub async fn delete_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<MessageResponse>> {
    state.contact_service.delete_contact(id).await?;
    Ok(Json(MessageResponse::new(MSG_CONTACT_DELETED)))
}
